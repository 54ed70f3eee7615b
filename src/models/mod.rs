pub mod artifact;
pub mod config;
pub mod profile;

pub use artifact::Artifact;
pub use config::{ConvertConfig, FailurePolicy, ProfileFile, DEFAULT_SCALE};
pub use profile::HardwareProfile;
