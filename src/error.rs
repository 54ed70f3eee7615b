use eink_dither::{DitherError, Stage};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid scale {0}: must be greater than 0 and at most 1")]
    InvalidScale(f64),

    #[error("Profile {profile}: {stage} stage failed: {source}")]
    Stage {
        profile: String,
        stage: Stage,
        #[source]
        source: DitherError,
    },

    #[error("Profile {profile}: resample stage failed: {reason}")]
    Resample { profile: String, reason: String },

    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl ConvertError {
    /// Attribute a pipeline error to the profile being converted.
    pub fn stage(profile: &str, source: DitherError) -> Self {
        ConvertError::Stage {
            profile: profile.to_string(),
            stage: source.stage(),
            source,
        }
    }

    /// Attribute a resampling error to the profile being converted.
    pub fn resample(profile: &str, source: ConvertError) -> Self {
        let reason = match source {
            ConvertError::InvalidImage(reason) => reason,
            other => other.to_string(),
        };
        ConvertError::Resample {
            profile: profile.to_string(),
            reason,
        }
    }
}
