pub mod asset_writer;
pub mod converter;

pub use asset_writer::{render_header, render_source, AssetWriter, WrittenAssets, DEFAULT_VAR_NAME};
pub use converter::{ConversionReport, Converter, ProfileFailure};
