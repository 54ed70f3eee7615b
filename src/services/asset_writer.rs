use crate::error::ConvertError;
use crate::models::Artifact;
use std::fs;
use std::path::{Path, PathBuf};

/// Base name of the emitted C++ symbols (`logo_img`, `logo_w`, ...)
pub const DEFAULT_VAR_NAME: &str = "logo";

const BYTES_PER_LINE: usize = 16;

/// Paths written for one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenAssets {
    pub source: PathBuf,
    pub header: PathBuf,
}

/// Writes `<output_name>.cpp` and `<output_name>.h` for each artifact
pub struct AssetWriter {
    src_dir: PathBuf,
    inc_dir: PathBuf,
    var_name: String,
}

impl AssetWriter {
    pub fn new(src_dir: impl Into<PathBuf>, inc_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
            inc_dir: inc_dir.into(),
            var_name: DEFAULT_VAR_NAME.to_string(),
        }
    }

    pub fn var_name(mut self, name: impl Into<String>) -> Self {
        self.var_name = name.into();
        self
    }

    /// Create the output directories if they don't exist yet
    pub fn prepare(&self) -> Result<(), ConvertError> {
        for dir in [&self.src_dir, &self.inc_dir] {
            fs::create_dir_all(dir).map_err(|source| ConvertError::OutputWrite {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn write(&self, artifact: &Artifact) -> Result<WrittenAssets, ConvertError> {
        self.prepare()?;

        let output = &artifact.profile.output_name;
        let source = self.src_dir.join(format!("{output}.cpp"));
        let header = self.inc_dir.join(format!("{output}.h"));

        write_file(&source, &render_source(artifact, &self.var_name))?;
        write_file(
            &header,
            &render_header(&artifact.profile.device_flag, &self.var_name),
        )?;

        tracing::info!(
            profile = %artifact.profile.name,
            source = %source.display(),
            header = %header.display(),
            "Wrote firmware assets"
        );

        Ok(WrittenAssets { source, header })
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), ConvertError> {
    fs::write(path, content).map_err(|source| ConvertError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// C++ translation unit holding the compressed bitmap and its dimensions
pub fn render_source(artifact: &Artifact, var_name: &str) -> String {
    let profile = &artifact.profile;
    format!(
        "#include <Arduino.h>\n\
         #include \"images/{output}.h\"\n\
         \n\
         #ifdef {flag}\n\
         const int {var_name}_w = {width};\n\
         const int {var_name}_h = {height};\n\
         const int {var_name}_len = {len};\n\
         const unsigned char PROGMEM {var_name}_img[] = {{\n\
         {data}\n\
         }};\n\
         #endif\n",
        output = profile.output_name,
        flag = profile.device_flag,
        width = artifact.width,
        height = artifact.height,
        len = artifact.compressed_len(),
        data = hex_lines(&artifact.compressed),
    )
}

/// Header declaring the symbols of [`render_source`]
pub fn render_header(device_flag: &str, var_name: &str) -> String {
    let guard = format!("{}_H", var_name.to_uppercase());
    format!(
        "#ifndef {guard}\n\
         #define {guard}\n\
         \n\
         #include <Arduino.h>\n\
         #ifdef {device_flag}\n\
         extern const unsigned char {var_name}_img[];\n\
         extern const int {var_name}_w;\n\
         extern const int {var_name}_h;\n\
         extern const int {var_name}_len;\n\
         #endif\n\
         \n\
         #endif\n"
    )
}

fn hex_lines(bytes: &[u8]) -> String {
    bytes
        .chunks(BYTES_PER_LINE)
        .map(|chunk| {
            let hex: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X}")).collect();
            format!("    {}", hex.join(", "))
        })
        .collect::<Vec<_>>()
        .join(",\n")
}
