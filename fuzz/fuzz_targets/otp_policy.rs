#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use validauth::{validate_otp, validate_otp_detailed, OtpOptions};

#[derive(Arbitrary, Debug)]
struct Input {
    otp: String,
    correct_otp: String,
    attempts: Option<i64>,
    max_attempts: i64,
}

/// Fuzz target for OTP comparison and the attempt policy.
///
/// Extreme counters must not overflow; remaining attempts saturates instead.
fuzz_target!(|input: Input| {
    let options = OtpOptions {
        attempts: input.attempts,
        max_attempts: input.max_attempts,
        details: true,
    };

    let report = validate_otp_detailed(&input.otp, &input.correct_otp, &options);

    // INVARIANT: errors is None exactly when valid
    assert_eq!(report.errors.is_none(), report.valid);

    // INVARIANT: both entry points agree
    assert_eq!(
        report.valid,
        validate_otp(&input.otp, &input.correct_otp, &options)
    );

    // INVARIANT: equal codes are never reported as a mismatch
    if input.otp == input.correct_otp {
        let mismatch = report
            .errors
            .iter()
            .flatten()
            .any(|message| message == "Invalid OTP.");
        assert!(!mismatch);
    }
});
