//! Loading profile tables from YAML files.

mod common;

use common::fixtures::{self, WHITE};
use inklogo::models::{ConvertConfig, FailurePolicy, ProfileFile};
use inklogo::services::Converter;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn yaml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_profile_file_drives_conversion() {
    let file = yaml_file(
        r#"
scale: 1.0
failure_policy: skip-failed
profiles:
  - name: BADGE
    max_width: 32
    max_height: 16
    device_flag: ARDUINO_BADGE
    output_name: logo_badge
"#,
    );

    let config = ConvertConfig::from_profile_file(ProfileFile::load(file.path()).unwrap());
    assert_eq!(config.failure_policy, FailurePolicy::SkipFailed);

    let report = Converter::new(config)
        .unwrap()
        .convert(&fixtures::solid(64, 64, WHITE))
        .unwrap();

    let artifact = &report.artifacts[0];
    assert_eq!(artifact.profile.output_name, "logo_badge");
    assert_eq!((artifact.width, artifact.height), (16, 16));
    common::assert_fits_profile(artifact);
}

#[test]
fn test_empty_profile_list_is_a_config_error() {
    let file = yaml_file("profiles: []\n");
    let config = ConvertConfig::from_profile_file(ProfileFile::load(file.path()).unwrap());

    let err = Converter::new(config).err().unwrap();
    assert_eq!(err.to_string(), "Config error: no hardware profiles configured");
}

#[test]
fn test_out_of_range_scale_in_file_is_rejected() {
    let file = yaml_file(
        r#"
scale: 1.5
profiles:
  - name: BADGE
    max_width: 32
    max_height: 16
    device_flag: ARDUINO_BADGE
    output_name: logo_badge
"#,
    );
    let config = ConvertConfig::from_profile_file(ProfileFile::load(file.path()).unwrap());
    assert!(Converter::new(config).is_err());
}
