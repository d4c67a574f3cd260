// Copyright 2025-present Adiksuu
// SPDX-License-Identifier: Apache-2.0

//! One-time password comparison with an attempt policy.
//!
//! The validator never stores anything. Callers keep the attempt counter
//! wherever they keep the code (session, database, cache) and pass the
//! current value in on each try.
//!
//! Checks run in a fixed order and all of them run:
//!
//! 1. `max_attempts <= 0` → "Max attempts must be greater than 0."
//! 2. `otp != correct_otp` (exact, case-sensitive) → "Invalid OTP."
//! 3. `attempts > max_attempts` → "Max attempts exceeded."

use crate::contracts::{check_error_order, check_errors_iff_invalid, check_remaining_attempts};
use crate::types::{into_errors, OtpOptions, OtpOutcome, OtpReport, OtpViolation};

/// Collect the violated rules, in check order.
pub fn otp_violations(otp: &str, correct_otp: &str, options: &OtpOptions) -> Vec<OtpViolation> {
    let mut violations = Vec::new();

    if options.max_attempts <= 0 {
        violations.push(OtpViolation::InvalidMaxAttempts);
    }

    if otp != correct_otp {
        violations.push(OtpViolation::Mismatch);
    }

    if options
        .attempts
        .is_some_and(|attempts| attempts > options.max_attempts)
    {
        violations.push(OtpViolation::AttemptsExceeded);
    }

    violations
}

/// Check `otp` against `correct_otp`, returning only whether it passed.
///
/// ```
/// use validauth::{validate_otp, OtpOptions};
///
/// assert!(validate_otp("1234", "1234", &OtpOptions::default()));
/// assert!(!validate_otp("ABCD", "abcd", &OtpOptions::default()));
/// ```
pub fn validate_otp(otp: &str, correct_otp: &str, options: &OtpOptions) -> bool {
    otp_violations(otp, correct_otp, options).is_empty()
}

/// Check `otp` against `correct_otp` and return the full report.
///
/// `remaining_attempts` is `max_attempts - attempts`, treating an unset
/// counter as zero, and goes negative once the counter passes the maximum.
pub fn validate_otp_detailed(otp: &str, correct_otp: &str, options: &OtpOptions) -> OtpReport {
    let violations = otp_violations(otp, correct_otp, options);

    let ranks: Vec<usize> = violations
        .iter()
        .filter_map(|v| OtpViolation::CHECK_ORDER.iter().position(|o| o == v))
        .collect();
    check_error_order(&ranks);

    tracing::debug!(
        violations = violations.len(),
        attempts = ?options.attempts,
        max_attempts = options.max_attempts,
        "otp checked"
    );

    let valid = violations.is_empty();
    let errors = into_errors(violations.iter().map(ToString::to_string).collect());

    let report = OtpReport {
        valid,
        errors,
        otp: otp.to_string(),
        correct_otp: correct_otp.to_string(),
        attempts: options.attempts,
        remaining_attempts: options
            .max_attempts
            .saturating_sub(options.attempts.unwrap_or(0)),
        max_attempts: options.max_attempts,
    };

    check_errors_iff_invalid(report.valid, &report.errors);
    check_remaining_attempts(&report);
    report
}

/// Check `otp`, returning the shape `options.details` selects.
pub fn validate_otp_with(otp: &str, correct_otp: &str, options: &OtpOptions) -> OtpOutcome {
    if options.details {
        OtpOutcome::Detailed(validate_otp_detailed(otp, correct_otp, options))
    } else {
        OtpOutcome::Flag(validate_otp(otp, correct_otp, options))
    }
}
