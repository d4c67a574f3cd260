#![no_main]

use libfuzzer_sys::fuzz_target;
use validauth::ValidauthConfig;

/// Fuzz target for config parsing.
///
/// Arbitrary text either parses or returns an error; it never panics, and
/// whatever parses can be fed straight to the validators.
fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(config) = ValidauthConfig::from_json(raw) {
            let _ = validauth::is_password("Fuzz1ng!", &config.password);
            let _ = validauth::validate_otp("1", "1", &config.otp);
        }
    }
});
