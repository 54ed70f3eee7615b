//! PackBits encoder.

/// Longest repeat run the encoder emits.
pub const MAX_RUN: usize = 127;

/// Longest literal run the encoder emits.
pub const MAX_LITERAL: usize = 128;

/// Upper bound on the encoded length of `len` input bytes.
#[inline]
pub fn max_encoded_len(len: usize) -> usize {
    len + len.div_ceil(MAX_LITERAL)
}

/// Compress `data` in a single forward scan.
///
/// At each position: if the next bytes form a run of at least two equal
/// bytes, emit `257 - r` and the byte (run capped at [`MAX_RUN`]);
/// otherwise emit a literal that extends until [`MAX_LITERAL`] bytes, the
/// end of input, or the position just before an adjacent equal pair.
///
/// # Example
///
/// ```
/// use eink_dither::packbits::encode;
///
/// assert_eq!(encode(&[0x00; 32]), vec![0xE1, 0x00]);
/// assert_eq!(encode(&[1, 2, 3]), vec![0x02, 1, 2, 3]);
/// assert_eq!(encode(&[1, 2, 2, 2]), vec![0x00, 1, 0xFE, 2]);
/// ```
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(max_encoded_len(data.len()));
    let mut i = 0;

    while i < data.len() {
        let run = run_length(data, i);
        if run > 1 {
            out.push((257 - run) as u8);
            out.push(data[i]);
            i += run;
        } else {
            let len = literal_length(data, i);
            out.push((len - 1) as u8);
            out.extend_from_slice(&data[i..i + len]);
            i += len;
        }
    }

    out
}

/// Length of the run of bytes equal to `data[start]`, capped at [`MAX_RUN`].
fn run_length(data: &[u8], start: usize) -> usize {
    let mut end = start + 1;
    while end < data.len() && end - start < MAX_RUN && data[end] == data[end - 1] {
        end += 1;
    }
    end - start
}

/// Length of the literal starting at `start`.
///
/// Stops before any position where the next two bytes are equal, so that
/// pair can start a run. This is not the shortest possible packing but it
/// is the one existing assets were produced with.
fn literal_length(data: &[u8], start: usize) -> usize {
    let mut end = start + 1;
    while end < data.len() && end - start < MAX_LITERAL {
        if end + 1 < data.len() && data[end] == data[end + 1] {
            break;
        }
        end += 1;
    }
    end - start
}
