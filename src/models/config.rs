use crate::error::ConvertError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use super::HardwareProfile;

/// Default fraction of the display the logo may cover
pub const DEFAULT_SCALE: f64 = 0.666;

/// What to do when one profile's pipeline fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Fail the whole batch; no artifacts are returned
    #[default]
    AbortAll,

    /// Log the failure, omit that profile, keep the others
    SkipFailed,
}

/// Settings for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Multiplier applied to the fit-to-display ratio, in (0, 1]
    pub scale: f64,

    pub failure_policy: FailurePolicy,

    /// Run profiles on the rayon thread pool
    pub parallel: bool,

    /// Decode every compressed stream and compare before accepting it
    pub verify: bool,

    /// Target displays, in output order
    pub profiles: Vec<HardwareProfile>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            failure_policy: FailurePolicy::AbortAll,
            parallel: true,
            verify: true,
            profiles: HardwareProfile::builtin(),
        }
    }
}

impl ConvertConfig {
    /// Build a config from a profile file, keeping defaults for anything it omits
    pub fn from_profile_file(file: ProfileFile) -> Self {
        let defaults = Self::default();
        Self {
            scale: file.scale.unwrap_or(defaults.scale),
            failure_policy: file.failure_policy.unwrap_or(defaults.failure_policy),
            profiles: file.profiles,
            ..defaults
        }
    }

    /// Check the settings before any image work starts
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > 1.0 {
            return Err(ConvertError::InvalidScale(self.scale));
        }

        if self.profiles.is_empty() {
            return Err(ConvertError::Config("no hardware profiles configured".to_string()));
        }

        let mut outputs = HashSet::new();
        for profile in &self.profiles {
            if profile.max_width == 0 || profile.max_height == 0 {
                return Err(ConvertError::Config(format!(
                    "profile {} has zero bounds {}x{}",
                    profile.name, profile.max_width, profile.max_height
                )));
            }
            if profile.output_name.is_empty() || profile.device_flag.is_empty() {
                return Err(ConvertError::Config(format!(
                    "profile {} needs both output_name and device_flag",
                    profile.name
                )));
            }
            if !outputs.insert(profile.output_name.as_str()) {
                return Err(ConvertError::Config(format!(
                    "output name {} is used by more than one profile",
                    profile.output_name
                )));
            }
        }

        Ok(())
    }
}

/// Profile table loaded from YAML
///
/// ```yaml
/// scale: 0.5              # optional
/// failure_policy: abort-all  # optional: abort-all | skip-failed
/// profiles:
///   - name: INKPLATE10
///     max_width: 1200
///     max_height: 825
///     device_flag: ARDUINO_INKPLATE10V2
///     output_name: logo
/// ```
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileFile {
    #[serde(default)]
    pub scale: Option<f64>,

    #[serde(default)]
    pub failure_policy: Option<FailurePolicy>,

    pub profiles: Vec<HardwareProfile>,
}

impl ProfileFile {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConvertError> {
        let file: Self =
            serde_yaml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))?;
        tracing::debug!(profiles = file.profiles.len(), "Parsed profile file");
        Ok(file)
    }

    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::Config(format!("{}: {e}", path.display())))?;
        let file = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            profiles = file.profiles.len(),
            "Loaded profile file"
        );
        Ok(file)
    }
}
