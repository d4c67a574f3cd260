//! OTP validator scenarios taken from the documented usage examples.

mod common;

use common::assert_errors_iff_invalid;
use validauth::{
    validate_otp, validate_otp_detailed, validate_otp_with, OtpOptions, OtpOutcome, OtpViolation,
};

fn tracked(attempts: i64, max_attempts: i64) -> OtpOptions {
    OtpOptions {
        attempts: Some(attempts),
        max_attempts,
        details: true,
    }
}

#[test]
fn basic_validation() {
    let defaults = OtpOptions::default();
    assert!(validate_otp("1234", "1234", &defaults));
    assert!(!validate_otp("1234", "5678", &defaults));
    assert!(validate_otp("1234", "1234", &tracked(3, 5)));
}

#[test]
fn attempt_tracking() {
    assert!(validate_otp("1234", "1234", &tracked(1, 3)));
    assert!(!validate_otp("1234", "5678", &tracked(2, 3)));
    assert!(!validate_otp("1234", "1234", &tracked(4, 3)));
}

#[test]
fn default_max_attempts_is_three() {
    let options = OtpOptions::default().with_attempts(1);
    let report = validate_otp_detailed("1234", "1234", &options);
    assert!(report.valid);
    assert_eq!(report.max_attempts, 3);
    assert_eq!(report.remaining_attempts, 2);
}

#[test]
fn invalid_max_attempts() {
    let report = validate_otp_detailed("1234", "1234", &tracked(1, 0));
    assert!(!report.valid);
    assert!(report.has_violation(OtpViolation::InvalidMaxAttempts));
    assert_eq!(
        report.errors.as_ref().map(|e| e[0].as_str()),
        Some("Max attempts must be greater than 0.")
    );
}

#[test]
fn detailed_mismatch_matches_documented_object() {
    let report = validate_otp_detailed(
        "1234",
        "5678",
        &OtpOptions {
            details: true,
            ..OtpOptions::default()
        },
    );
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "valid": false,
            "errors": ["Invalid OTP."],
            "otp": "1234",
            "correctOTP": "5678",
            "attempts": null,
            "remainingAttempts": 3,
            "maxAttempts": 3
        })
    );
}

#[test]
fn detailed_success_matches_documented_object() {
    let report = validate_otp_detailed("123456", "123456", &tracked(2, 5));
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "valid": true,
            "errors": null,
            "otp": "123456",
            "correctOTP": "123456",
            "attempts": 2,
            "remainingAttempts": 3,
            "maxAttempts": 5
        })
    );
}

#[test]
fn wrong_code_after_lockout_reports_both() {
    let report = validate_otp_detailed("wrong", "correct", &tracked(4, 3));
    assert_eq!(
        report.errors,
        Some(vec![
            "Invalid OTP.".to_string(),
            "Max attempts exceeded.".to_string()
        ])
    );
    assert_eq!(report.remaining_attempts, -1);
    assert!(report.is_locked_out());
}

#[test]
fn case_sensitive_and_empty_strings() {
    let defaults = OtpOptions::default();
    assert!(!validate_otp("ABCD", "abcd", &defaults));
    assert!(validate_otp("", "", &defaults));
    assert!(!validate_otp("", "1234", &defaults));
}

#[test]
fn whitespace_is_significant() {
    assert!(!validate_otp("1234 ", "1234", &OtpOptions::default()));
}

#[test]
fn login_flow_counts_down_until_lockout() {
    let correct = "482917";
    let mut attempts = 0;
    let mut remaining = Vec::new();

    for guess in ["000000", "111111", "222222", "482917"] {
        attempts += 1;
        let report = validate_otp_detailed(guess, correct, &tracked(attempts, 3));
        assert_errors_iff_invalid(report.valid, &report.errors);
        remaining.push(report.remaining_attempts);
        if attempts == 4 {
            // Right code, but too late.
            assert!(!report.valid);
            assert!(report.is_locked_out());
            assert!(!report.has_violation(OtpViolation::Mismatch));
        }
    }

    assert_eq!(remaining, vec![2, 1, 0, -1]);
}

#[test]
fn password_reset_preset_allows_five() {
    let options = OtpOptions::password_reset().with_attempts(5);
    assert!(validate_otp("9999", "9999", &options));
    assert!(!validate_otp("9999", "9999", &options.with_attempts(6)));
}

#[test]
fn outcome_json_is_bare_boolean_without_details() {
    let outcome = validate_otp_with("1234", "1234", &OtpOptions::default());
    assert_eq!(outcome, OtpOutcome::Flag(true));
    assert_eq!(serde_json::to_string(&outcome).unwrap(), "true");
}

#[test]
fn repeated_calls_are_identical() {
    let options = tracked(2, 3);
    let first = validate_otp_detailed("1234", "4321", &options);
    let second = validate_otp_detailed("1234", "4321", &options);
    assert_eq!(first, second);
}
