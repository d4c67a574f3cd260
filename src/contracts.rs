//! Runtime contracts for validation reports.
//!
//! Debug-mode assertions that every report the validators build satisfies the
//! result invariants documented in `types`. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail **at the point the report is built**, not where it is consumed
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                        |
//! |-----------------------------|-------------------------------------------------|
//! | `check_errors_iff_invalid`  | `errors.is_none() == valid`, lists non-empty    |
//! | `check_remaining_attempts`  | `remaining = max - attempts.unwrap_or(0)`       |
//! | `check_error_order`         | messages follow check order, no duplicates      |

use crate::types::OtpReport;

/// `errors` is absent exactly when the report is valid.
///
/// # Panics (debug builds only)
/// Panics if a valid report carries errors, or an invalid one carries none.
#[inline]
pub fn check_errors_iff_invalid(valid: bool, errors: &Option<Vec<String>>) {
    debug_assert_eq!(
        errors.is_none(),
        valid,
        "Contract violation: valid={} but errors={:?}",
        valid,
        errors
    );
    if let Some(list) = errors {
        debug_assert!(
            !list.is_empty(),
            "Contract violation: errors present but empty"
        );
    }
}

/// `remaining_attempts` is derived, never stored independently.
///
/// # Panics (debug builds only)
/// Panics if the arithmetic does not line up.
#[inline]
pub fn check_remaining_attempts(report: &OtpReport) {
    debug_assert_eq!(
        report.remaining_attempts,
        report.max_attempts.saturating_sub(report.attempts.unwrap_or(0)),
        "Contract violation: remaining_attempts {} != {} - {:?}",
        report.remaining_attempts,
        report.max_attempts,
        report.attempts
    );
}

/// Every message maps to a position in `ranks` that strictly increases.
///
/// `ranks[i]` is the check-order position of `errors[i]`.
///
/// # Panics (debug builds only)
/// Panics on an out-of-order or repeated rule.
#[inline]
pub fn check_error_order(ranks: &[usize]) {
    debug_assert!(
        ranks.windows(2).all(|pair| pair[0] < pair[1]),
        "Contract violation: rules reported out of check order: {:?}",
        ranks
    );
}
