//! Pure-function validation for authentication inputs.
//!
//! Two independent validators, each stateless and free of I/O:
//!
//! - [`validate_otp`]: compare a submitted one-time code with the expected one,
//!   folding in an attempt-count lockout policy.
//! - [`is_password`]: check a password against composition rules and a
//!   common-password denylist.
//!
//! Each comes in three flavours: a `bool` version, a `_detailed` version that
//! returns a report with every violated rule, and a `_with` version that
//! honours the `details` option the way the JavaScript API does.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────────┐
//! │  types.rs   │────▶│   otp.rs     │     │ common_passwords.rs│
//! │ (options,   │     │ (validate_*) │     │ (denylist set)     │
//! │  reports)   │     └──────────────┘     └────────────────────┘
//! │             │     ┌──────────────┐               │
//! │             │────▶│ password.rs  │◀──────────────┘
//! └─────────────┘     │ (is_password)│
//!        │            └──────────────┘
//!        ▼                   │
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                      │
//! │  (errors ⇔ invalid, remaining attempts, rule order)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use validauth::{is_password_detailed, validate_otp_detailed, OtpOptions, PasswordOptions};
//!
//! let report = validate_otp_detailed("1234", "1234", &OtpOptions::default().with_attempts(4));
//! assert!(!report.valid);
//! assert_eq!(report.remaining_attempts, -1);
//!
//! let report = is_password_detailed("short", &PasswordOptions::default());
//! assert!(report.errors.unwrap().contains(&"Password must be at least 8 characters long".to_string()));
//! ```

// Module declarations
mod common_passwords;
pub mod config;
pub mod contracts;
mod otp;
mod password;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use common_passwords::{common_password_count, common_passwords, is_common_password};
pub use config::{ConfigError, ValidauthConfig};
pub use otp::{otp_violations, validate_otp, validate_otp_detailed, validate_otp_with};
pub use password::{is_password, is_password_detailed, is_password_with, password_violations, SYMBOLS};
pub use types::{
    OtpOptions, OtpOutcome, OtpReport, OtpViolation, PasswordOptions, PasswordOutcome,
    PasswordReport, PasswordViolation, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_LENGTH,
    DEFAULT_MIN_LENGTH,
};
