//! Config files feeding the validators.

use std::io::Write;
use tempfile::NamedTempFile;
use validauth::{is_password, validate_otp_detailed, ConfigError, ValidauthConfig};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_both_sections_from_disk() {
    let file = write_config(
        r#"{
            "otp": { "maxAttempts": 5 },
            "password": { "minLength": 12, "requireSymbols": false }
        }"#,
    );
    let config = ValidauthConfig::load(file.path()).unwrap();

    assert_eq!(config.otp.max_attempts, 5);
    assert_eq!(config.password.min_length, 12);
    assert!(!config.password.require_symbols);
    assert!(config.password.forbid_common_passwords);
}

#[test]
fn loaded_options_drive_validation() {
    let file = write_config(r#"{"password": {"minLength": 12}}"#);
    let config = ValidauthConfig::load(file.path()).unwrap();

    assert!(!is_password("MyP@ssw0rd", &config.password));
    assert!(is_password("MyP@ssw0rd123", &config.password));
}

#[test]
fn zero_max_attempts_fails_at_validation_not_load() {
    let file = write_config(r#"{"otp": {"maxAttempts": 0}}"#);
    let config = ValidauthConfig::load(file.path()).unwrap();

    let report = validate_otp_detailed("1", "1", &config.otp);
    assert!(!report.valid);
    assert_eq!(
        report.errors,
        Some(vec!["Max attempts must be greater than 0.".to_string()])
    );
}

#[test]
fn malformed_json_names_the_file() {
    let file = write_config("{ otp: ");
    let err = ValidauthConfig::load(file.path()).unwrap_err();
    let path = file.path().display().to_string();
    match &err {
        ConfigError::Parse { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert!(err.to_string().contains(&path));
}

#[test]
fn misspelled_option_is_rejected() {
    let file = write_config(r#"{"password": {"minLenght": 12}}"#);
    assert!(matches!(
        ValidauthConfig::load(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}
