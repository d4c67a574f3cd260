//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use validauth::{PasswordOptions, SYMBOLS};

// ============================================================================
// OPTIONS
// ============================================================================

/// Password options with every rule switched off except length.
pub fn length_only(min_length: usize, max_length: usize) -> PasswordOptions {
    PasswordOptions {
        min_length,
        max_length,
        require_uppercase: false,
        require_lowercase: false,
        require_numbers: false,
        require_symbols: false,
        forbid_common_passwords: false,
        details: true,
    }
}

/// Default password options asking for the detailed report.
pub fn detailed() -> PasswordOptions {
    PasswordOptions {
        details: true,
        ..PasswordOptions::default()
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert the result invariant shared by both report types.
pub fn assert_errors_iff_invalid(valid: bool, errors: &Option<Vec<String>>) {
    match errors {
        None => assert!(valid, "invalid report without errors"),
        Some(list) => {
            assert!(!valid, "valid report with errors {:?}", list);
            assert!(!list.is_empty(), "invalid report with empty error list");
        }
    }
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Any single accepted symbol.
pub fn symbol_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(SYMBOLS.chars().collect::<Vec<_>>())
}

/// Mostly-ASCII password candidates, biased towards the interesting classes.
pub fn password_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[A-Za-z0-9!@#$%^&*()_+=;:,.?/~ -]{0,24}").unwrap(),
        prop::string::string_regex("[a-z0-9]{0,12}").unwrap(),
        ".{0,16}",
    ]
}

/// Password options with arbitrary flags and a sane length window.
pub fn password_options_strategy() -> impl Strategy<Value = PasswordOptions> {
    (
        0usize..16,
        0usize..32,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(min, extra, upper, lower, numbers, symbols, common)| PasswordOptions {
            min_length: min,
            max_length: min + extra,
            require_uppercase: upper,
            require_lowercase: lower,
            require_numbers: numbers,
            require_symbols: symbols,
            forbid_common_passwords: common,
            details: true,
        })
}
