// Copyright 2025-present Adiksuu
// SPDX-License-Identifier: Apache-2.0

//! Options, reports, and violations shared by both validators.
//!
//! Field names serialize exactly as the JavaScript API spells them, so a report
//! printed with `serde_json` is the same object `validateOTP` / `isPassword`
//! hand back to JS callers.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Reports**: `errors.is_none() == valid`. A failed report always carries at
//!   least one message, one per violated rule, in check order.
//!
//! - **OtpReport**: `remaining_attempts == max_attempts - attempts.unwrap_or(0)`.
//!   Negative once the caller's counter passes the maximum; saturates at the
//!   `i64` bounds instead of overflowing.
//!
//! Both are asserted in debug builds by `contracts`.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// OTP
// =============================================================================

/// Default number of OTP attempts before lockout.
pub const DEFAULT_MAX_ATTEMPTS: i64 = 3;

/// Options for [`validate_otp`](crate::validate_otp).
///
/// Deserializes from the JS options object; every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct OtpOptions {
    /// Attempts made so far, including this one. `None` skips the lockout check.
    pub attempts: Option<i64>,
    /// Attempts allowed before lockout (default: 3). Must be greater than 0.
    pub max_attempts: i64,
    /// Return the full report instead of a bare boolean (default: false).
    pub details: bool,
}

impl Default for OtpOptions {
    fn default() -> Self {
        Self {
            attempts: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            details: false,
        }
    }
}

impl OtpOptions {
    /// Keys accepted in the JS options object.
    pub const FIELDS: [&'static str; 3] = ["attempts", "maxAttempts", "details"];

    /// Standard 2FA login: three attempts.
    pub fn standard_2fa() -> Self {
        Self::default()
    }

    /// Password-reset codes get a little more slack: five attempts.
    pub fn password_reset() -> Self {
        Self {
            max_attempts: 5,
            ..Self::default()
        }
    }

    /// Same options with the attempt counter set.
    pub fn with_attempts(self, attempts: i64) -> Self {
        Self {
            attempts: Some(attempts),
            ..self
        }
    }
}

/// A rule the OTP check can fail. `Display` yields the documented message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OtpViolation {
    /// `max_attempts <= 0`.
    InvalidMaxAttempts,
    /// Submitted code differs from the expected one.
    Mismatch,
    /// `attempts > max_attempts`.
    AttemptsExceeded,
}

impl OtpViolation {
    /// All violations in the order they are checked.
    pub const CHECK_ORDER: [OtpViolation; 3] = [
        OtpViolation::InvalidMaxAttempts,
        OtpViolation::Mismatch,
        OtpViolation::AttemptsExceeded,
    ];

    pub fn message(self) -> &'static str {
        match self {
            OtpViolation::InvalidMaxAttempts => "Max attempts must be greater than 0.",
            OtpViolation::Mismatch => "Invalid OTP.",
            OtpViolation::AttemptsExceeded => "Max attempts exceeded.",
        }
    }
}

impl fmt::Display for OtpViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Detailed result of an OTP check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpReport {
    pub valid: bool,
    pub errors: Option<Vec<String>>,
    pub otp: String,
    #[serde(rename = "correctOTP")]
    pub correct_otp: String,
    pub attempts: Option<i64>,
    pub remaining_attempts: i64,
    pub max_attempts: i64,
}

impl OtpReport {
    /// Whether `violation` was reported.
    pub fn has_violation(&self, violation: OtpViolation) -> bool {
        has_message(&self.errors, violation.message())
    }

    /// Caller should lock the account or issue a new code.
    pub fn is_locked_out(&self) -> bool {
        self.has_violation(OtpViolation::AttemptsExceeded)
    }
}

/// What `validate_otp_with` returns: the shape `details` asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OtpOutcome {
    Flag(bool),
    Detailed(OtpReport),
}

impl OtpOutcome {
    pub fn is_valid(&self) -> bool {
        match self {
            OtpOutcome::Flag(valid) => *valid,
            OtpOutcome::Detailed(report) => report.valid,
        }
    }
}

// =============================================================================
// PASSWORD
// =============================================================================

/// Default minimum password length, in characters.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Default maximum password length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 128;

/// Options for [`is_password`](crate::is_password).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PasswordOptions {
    /// Minimum length in characters (default: 8).
    pub min_length: usize,
    /// Maximum length in characters (default: 128).
    pub max_length: usize,
    /// Require at least one `A-Z` (default: true).
    pub require_uppercase: bool,
    /// Require at least one `a-z` (default: true).
    pub require_lowercase: bool,
    /// Require at least one `0-9` (default: true).
    pub require_numbers: bool,
    /// Require at least one character from [`SYMBOLS`](crate::SYMBOLS) (default: true).
    pub require_symbols: bool,
    /// Reject exact matches in the common-password list (default: true).
    pub forbid_common_passwords: bool,
    /// Return the full report instead of a bare boolean (default: false).
    pub details: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_symbols: true,
            forbid_common_passwords: true,
            details: false,
        }
    }
}

impl PasswordOptions {
    /// Keys accepted in the JS options object.
    pub const FIELDS: [&'static str; 8] = [
        "minLength",
        "maxLength",
        "requireUppercase",
        "requireLowercase",
        "requireNumbers",
        "requireSymbols",
        "forbidCommonPasswords",
        "details",
    ];

    /// Settings suggested for most applications: ten characters, every class.
    pub fn recommended() -> Self {
        Self {
            min_length: 10,
            ..Self::default()
        }
    }

    /// Banking / healthcare: twelve characters, every class.
    pub fn high_security() -> Self {
        Self {
            min_length: 12,
            ..Self::default()
        }
    }
}

/// A rule the password check can fail. `Display` yields the documented message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordViolation {
    Empty,
    TooShort { min_length: usize },
    TooLong { max_length: usize },
    MissingUppercase,
    MissingLowercase,
    MissingNumber,
    MissingSymbol,
    CommonPassword,
}

impl PasswordViolation {
    /// Position of this rule in the fixed check order.
    pub fn rank(&self) -> usize {
        match self {
            PasswordViolation::Empty => 0,
            PasswordViolation::TooShort { .. } => 1,
            PasswordViolation::TooLong { .. } => 2,
            PasswordViolation::MissingUppercase => 3,
            PasswordViolation::MissingLowercase => 4,
            PasswordViolation::MissingNumber => 5,
            PasswordViolation::MissingSymbol => 6,
            PasswordViolation::CommonPassword => 7,
        }
    }
}

impl fmt::Display for PasswordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordViolation::Empty => f.write_str("Password must be a non-empty string"),
            PasswordViolation::TooShort { min_length } => {
                write!(f, "Password must be at least {} characters long", min_length)
            }
            PasswordViolation::TooLong { max_length } => {
                write!(f, "Password must be at most {} characters long", max_length)
            }
            PasswordViolation::MissingUppercase => {
                f.write_str("Password must contain at least one uppercase letter")
            }
            PasswordViolation::MissingLowercase => {
                f.write_str("Password must contain at least one lowercase letter")
            }
            PasswordViolation::MissingNumber => {
                f.write_str("Password must contain at least one number")
            }
            PasswordViolation::MissingSymbol => {
                f.write_str("Password must contain at least one symbol")
            }
            PasswordViolation::CommonPassword => {
                f.write_str("Password cannot be a common password")
            }
        }
    }
}

/// Detailed result of a password check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReport {
    pub valid: bool,
    pub errors: Option<Vec<String>>,
    pub password: String,
}

impl PasswordReport {
    /// Whether `violation` was reported.
    pub fn has_violation(&self, violation: &PasswordViolation) -> bool {
        has_message(&self.errors, &violation.to_string())
    }
}

/// What `is_password_with` returns: the shape `details` asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PasswordOutcome {
    Flag(bool),
    Detailed(PasswordReport),
}

impl PasswordOutcome {
    pub fn is_valid(&self) -> bool {
        match self {
            PasswordOutcome::Flag(valid) => *valid,
            PasswordOutcome::Detailed(report) => report.valid,
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Collapse an accumulated message list into the report's `errors` field.
pub(crate) fn into_errors(messages: Vec<String>) -> Option<Vec<String>> {
    if messages.is_empty() {
        None
    } else {
        Some(messages)
    }
}

fn has_message(errors: &Option<Vec<String>>, message: &str) -> bool {
    errors
        .as_ref()
        .is_some_and(|list| list.iter().any(|m| m == message))
}
