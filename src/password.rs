// Copyright 2025-present Adiksuu
// SPDX-License-Identifier: Apache-2.0

//! Password composition rules and the common-password check.
//!
//! Every rule runs, and every violation is reported in this order:
//!
//! | # | Rule                         | Enabled by                 |
//! |---|------------------------------|----------------------------|
//! | 1 | non-empty                    | always                     |
//! | 2 | length >= `min_length`       | always                     |
//! | 3 | length <= `max_length`       | always                     |
//! | 4 | one of `A-Z`                 | `require_uppercase`        |
//! | 5 | one of `a-z`                 | `require_lowercase`        |
//! | 6 | one of `0-9`                 | `require_numbers`          |
//! | 7 | one of [`SYMBOLS`]           | `require_symbols`          |
//! | 8 | not in the denylist          | `forbid_common_passwords`  |
//!
//! Length counts characters (Unicode scalar values), not bytes. The character
//! classes are ASCII-only: `É` is not an uppercase letter here.

use crate::common_passwords::is_common_password;
use crate::contracts::{check_error_order, check_errors_iff_invalid};
use crate::types::{into_errors, PasswordOptions, PasswordOutcome, PasswordReport, PasswordViolation};

/// Characters accepted by the symbol rule.
pub const SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

#[inline]
fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Collect the violated rules, in check order.
pub fn password_violations(password: &str, options: &PasswordOptions) -> Vec<PasswordViolation> {
    let mut violations = Vec::new();
    let length = password.chars().count();

    if password.is_empty() {
        violations.push(PasswordViolation::Empty);
    }

    if length < options.min_length {
        violations.push(PasswordViolation::TooShort {
            min_length: options.min_length,
        });
    }

    if length > options.max_length {
        violations.push(PasswordViolation::TooLong {
            max_length: options.max_length,
        });
    }

    if options.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(PasswordViolation::MissingUppercase);
    }

    if options.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push(PasswordViolation::MissingLowercase);
    }

    if options.require_numbers && !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PasswordViolation::MissingNumber);
    }

    if options.require_symbols && !password.chars().any(is_symbol) {
        violations.push(PasswordViolation::MissingSymbol);
    }

    if options.forbid_common_passwords && is_common_password(password) {
        violations.push(PasswordViolation::CommonPassword);
    }

    violations
}

/// Check `password`, returning only whether every enabled rule passed.
///
/// ```
/// use validauth::{is_password, PasswordOptions};
///
/// assert!(is_password("MyP@ssw0rd123", &PasswordOptions::default()));
/// assert!(!is_password("password123", &PasswordOptions::default()));
/// ```
pub fn is_password(password: &str, options: &PasswordOptions) -> bool {
    password_violations(password, options).is_empty()
}

/// Check `password` and return the full report.
pub fn is_password_detailed(password: &str, options: &PasswordOptions) -> PasswordReport {
    let violations = password_violations(password, options);

    let ranks: Vec<usize> = violations.iter().map(PasswordViolation::rank).collect();
    check_error_order(&ranks);

    tracing::debug!(
        violations = violations.len(),
        length = password.chars().count(),
        common = violations.contains(&PasswordViolation::CommonPassword),
        "password checked"
    );

    let valid = violations.is_empty();
    let report = PasswordReport {
        valid,
        errors: into_errors(violations.iter().map(ToString::to_string).collect()),
        password: password.to_string(),
    };

    check_errors_iff_invalid(report.valid, &report.errors);
    report
}

/// Check `password`, returning the shape `options.details` selects.
pub fn is_password_with(password: &str, options: &PasswordOptions) -> PasswordOutcome {
    if options.details {
        PasswordOutcome::Detailed(is_password_detailed(password, options))
    } else {
        PasswordOutcome::Flag(is_password(password, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> PasswordOptions {
        PasswordOptions::default()
    }

    fn only_length(min_length: usize, max_length: usize) -> PasswordOptions {
        PasswordOptions {
            min_length,
            max_length,
            require_uppercase: false,
            require_lowercase: false,
            require_numbers: false,
            require_symbols: false,
            forbid_common_passwords: false,
            details: false,
        }
    }

    #[test]
    fn strong_password_passes_defaults() {
        assert!(is_password("MyP@ssw0rd123", &defaults()));
        assert!(is_password("LongPass1!", &defaults()));
        assert!(is_password("MyUn1qu3P@ssw0rd!", &defaults()));
    }

    #[test]
    fn common_password_fails() {
        let report = is_password_detailed("password123", &defaults());
        assert!(!report.valid);
        assert!(report.has_violation(&PasswordViolation::CommonPassword));
    }

    #[test]
    fn short_password_reports_length_once() {
        let report = is_password_detailed("short", &defaults());
        assert!(!report.valid);
        let errors = report.errors.unwrap();
        let length_messages = errors
            .iter()
            .filter(|m| *m == "Password must be at least 8 characters long")
            .count();
        assert_eq!(length_messages, 1);
    }

    #[test]
    fn all_violations_reported_in_order() {
        let violations = password_violations("short", &defaults());
        assert_eq!(
            violations,
            vec![
                PasswordViolation::TooShort { min_length: 8 },
                PasswordViolation::MissingUppercase,
                PasswordViolation::MissingNumber,
                PasswordViolation::MissingSymbol,
            ]
        );
    }

    #[test]
    fn empty_password_reports_empty_and_length() {
        let violations = password_violations("", &only_length(8, 128));
        assert_eq!(
            violations,
            vec![
                PasswordViolation::Empty,
                PasswordViolation::TooShort { min_length: 8 }
            ]
        );
    }

    #[test]
    fn empty_password_fails_even_with_zero_min_length() {
        assert!(!is_password("", &only_length(0, 128)));
    }

    #[test]
    fn max_length_is_inclusive() {
        assert!(is_password(&"a".repeat(20), &only_length(1, 20)));
        assert!(!is_password(&"a".repeat(21), &only_length(1, 20)));
        assert!(!is_password(&"a".repeat(130), &defaults()));
    }

    #[test]
    fn min_length_is_inclusive() {
        assert!(is_password("Pass1!", &PasswordOptions {
            min_length: 6,
            ..defaults()
        }));
        assert!(!is_password("Short1!", &defaults()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Eight characters, sixteen bytes.
        let password = "éééééééé";
        assert!(is_password(password, &only_length(8, 8)));
    }

    #[test]
    fn non_ascii_letters_do_not_satisfy_case_rules() {
        let violations = password_violations("ÉÉÉÉÉÉÉÉ1!", &defaults());
        assert!(violations.contains(&PasswordViolation::MissingUppercase));
        assert!(violations.contains(&PasswordViolation::MissingLowercase));
    }

    #[test]
    fn every_listed_symbol_satisfies_symbol_rule() {
        for symbol in SYMBOLS.chars() {
            let password = format!("Abcdefg1{}", symbol);
            assert!(is_password(&password, &defaults()), "symbol {:?} rejected", symbol);
        }
    }

    #[test]
    fn unlisted_punctuation_does_not_count_as_symbol() {
        for c in ['~', '`', ' ', '§'] {
            let password = format!("Abcdefg1{}", c);
            assert!(!is_password(&password, &defaults()), "{:?} accepted as symbol", c);
        }
    }

    #[test]
    fn relaxing_class_requirements() {
        let no_upper = PasswordOptions {
            require_uppercase: false,
            ..defaults()
        };
        assert!(!is_password("password123!", &defaults()));
        assert!(is_password("password123!", &no_upper));

        let no_lower = PasswordOptions {
            require_lowercase: false,
            ..defaults()
        };
        assert!(is_password("PASSWORD123!", &no_lower));

        let no_numbers = PasswordOptions {
            require_numbers: false,
            ..defaults()
        };
        assert!(is_password("Password!", &no_numbers));

        let letters_only = PasswordOptions {
            require_numbers: false,
            require_symbols: false,
            ..defaults()
        };
        assert!(is_password("OnlyLetters", &letters_only));
    }

    #[test]
    fn allowing_common_passwords() {
        let lenient = PasswordOptions {
            forbid_common_passwords: false,
            require_uppercase: false,
            require_symbols: false,
            ..defaults()
        };
        assert!(is_password("password123", &lenient));
    }

    #[test]
    fn denylist_match_is_case_sensitive() {
        let letters_only = only_length(1, 128);
        let forbid = PasswordOptions {
            forbid_common_passwords: true,
            ..letters_only
        };
        assert!(!is_password("qwerty", &forbid));
        assert!(is_password("QWERTY", &forbid));
    }

    #[test]
    fn strict_preset_flags_short_password() {
        let report = is_password_detailed("Weak1!", &PasswordOptions {
            max_length: 64,
            ..PasswordOptions::high_security()
        });
        assert_eq!(
            report.errors,
            Some(vec!["Password must be at least 12 characters long".to_string()])
        );
        assert_eq!(report.password, "Weak1!");
    }

    #[test]
    fn inverted_length_bounds_report_both() {
        let violations = password_violations("abcdef", &only_length(10, 4));
        assert_eq!(
            violations,
            vec![
                PasswordViolation::TooShort { min_length: 10 },
                PasswordViolation::TooLong { max_length: 4 }
            ]
        );
    }

    #[test]
    fn details_flag_selects_shape() {
        assert_eq!(
            is_password_with("MyP@ssw0rd123", &defaults()),
            PasswordOutcome::Flag(true)
        );
        let detailed = is_password_with("MyP@ssw0rd123", &PasswordOptions {
            details: true,
            ..defaults()
        });
        assert_eq!(
            detailed,
            PasswordOutcome::Detailed(PasswordReport {
                valid: true,
                errors: None,
                password: "MyP@ssw0rd123".to_string(),
            })
        );
    }
}
