#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use validauth::{is_password, is_password_detailed, PasswordOptions};

#[derive(Arbitrary, Debug)]
struct Input {
    password: String,
    min_length: u8,
    max_length: u8,
    require_uppercase: bool,
    require_lowercase: bool,
    require_numbers: bool,
    require_symbols: bool,
    forbid_common_passwords: bool,
}

/// Fuzz target for the password rules.
///
/// Tests that arbitrary passwords and option combinations:
/// - Never panic
/// - Produce `errors == None` exactly when valid
/// - Agree between the bool and detailed entry points
fuzz_target!(|input: Input| {
    let options = PasswordOptions {
        min_length: input.min_length as usize,
        max_length: input.max_length as usize,
        require_uppercase: input.require_uppercase,
        require_lowercase: input.require_lowercase,
        require_numbers: input.require_numbers,
        require_symbols: input.require_symbols,
        forbid_common_passwords: input.forbid_common_passwords,
        details: true,
    };

    let report = is_password_detailed(&input.password, &options);

    // INVARIANT: errors is None exactly when valid
    assert_eq!(report.errors.is_none(), report.valid);
    if let Some(errors) = &report.errors {
        assert!(!errors.is_empty());
    }

    // INVARIANT: both entry points agree
    assert_eq!(report.valid, is_password(&input.password, &options));

    // INVARIANT: the password is echoed back untouched
    assert_eq!(report.password, input.password);
});
