use crate::error::ConvertError;
use crate::models::{Artifact, ConvertConfig, FailurePolicy, HardwareProfile};
use crate::rendering::{decode_source, flatten, resample};
use eink_dither::MonoEncoder;
use image::DynamicImage;
use rayon::prelude::*;

/// A profile that failed under [`FailurePolicy::SkipFailed`]
#[derive(Debug)]
pub struct ProfileFailure {
    pub profile: String,
    pub error: ConvertError,
}

/// Outcome of converting one source image for every configured profile
#[derive(Debug)]
pub struct ConversionReport {
    pub source_width: u32,
    pub source_height: u32,

    /// One artifact per successful profile, in profile order
    pub artifacts: Vec<Artifact>,

    /// Always empty under [`FailurePolicy::AbortAll`]
    pub failures: Vec<ProfileFailure>,
}

/// Runs resample -> flatten -> dither -> pack -> PackBits once per profile
pub struct Converter {
    config: ConvertConfig,
    encoder: MonoEncoder,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Result<Self, ConvertError> {
        config.validate()?;
        let encoder = MonoEncoder::new().verify(config.verify);
        Ok(Self { config, encoder })
    }

    /// Decode encoded image bytes and convert them
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<ConversionReport, ConvertError> {
        let source = decode_source(bytes)?;
        self.convert(&source)
    }

    /// Convert a decoded image for every configured profile.
    ///
    /// Each profile works on its own resampled copy of `source`, so profiles
    /// may run in parallel without sharing any mutable state.
    pub fn convert(&self, source: &DynamicImage) -> Result<ConversionReport, ConvertError> {
        if source.width() == 0 || source.height() == 0 {
            return Err(ConvertError::InvalidImage(format!(
                "zero dimension {}x{}",
                source.width(),
                source.height()
            )));
        }

        let profiles = &self.config.profiles;
        tracing::info!(
            width = source.width(),
            height = source.height(),
            profiles = profiles.len(),
            scale = self.config.scale,
            parallel = self.config.parallel,
            "Converting source image"
        );

        let results: Vec<Result<Artifact, ConvertError>> = if self.config.parallel {
            profiles
                .par_iter()
                .map(|profile| self.convert_profile(source, profile))
                .collect()
        } else {
            let mut results = Vec::with_capacity(profiles.len());
            for profile in profiles {
                let result = self.convert_profile(source, profile);
                let failed = result.is_err();
                results.push(result);
                if failed && self.config.failure_policy == FailurePolicy::AbortAll {
                    break;
                }
            }
            results
        };

        let (artifacts, failures) = gather(profiles, results, self.config.failure_policy)?;

        Ok(ConversionReport {
            source_width: source.width(),
            source_height: source.height(),
            artifacts,
            failures,
        })
    }

    /// Run the full pipeline for a single profile
    pub fn convert_profile(
        &self,
        source: &DynamicImage,
        profile: &HardwareProfile,
    ) -> Result<Artifact, ConvertError> {
        let span = tracing::info_span!("profile", name = %profile.name);
        let _enter = span.enter();

        let resized = resample(source, profile, self.config.scale)
            .map_err(|e| ConvertError::resample(&profile.name, e))?;
        tracing::debug!(
            width = resized.width(),
            height = resized.height(),
            "Resampled"
        );

        let gray = flatten(resized).map_err(|e| ConvertError::stage(&profile.name, e))?;
        let encoded = self
            .encoder
            .encode(gray)
            .map_err(|e| ConvertError::stage(&profile.name, e))?;

        let artifact = Artifact::new(profile.clone(), encoded);
        tracing::info!(
            width = artifact.width,
            height = artifact.height,
            raw = artifact.raw_len,
            compressed = artifact.compressed_len(),
            "Converted profile"
        );

        Ok(artifact)
    }
}

/// Pair per-profile results with their profiles and apply the failure policy.
///
/// `results` may be shorter than `profiles` when a sequential run stopped early.
fn gather(
    profiles: &[HardwareProfile],
    results: Vec<Result<Artifact, ConvertError>>,
    policy: FailurePolicy,
) -> Result<(Vec<Artifact>, Vec<ProfileFailure>), ConvertError> {
    let mut artifacts = Vec::with_capacity(results.len());
    let mut failures = Vec::new();

    for (profile, result) in profiles.iter().zip(results) {
        match result {
            Ok(artifact) => artifacts.push(artifact),
            Err(error) => match policy {
                FailurePolicy::AbortAll => {
                    tracing::error!(profile = %profile.name, %error, "Profile failed, aborting batch");
                    return Err(error);
                }
                FailurePolicy::SkipFailed => {
                    tracing::warn!(profile = %profile.name, %error, "Profile failed, skipping");
                    failures.push(ProfileFailure {
                        profile: profile.name.clone(),
                        error,
                    });
                }
            },
        }
    }

    Ok((artifacts, failures))
}
