// Copyright 2025-present Adiksuu
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the validauth command-line interface.
//!
//! Three subcommands: `otp` to compare a one-time code, `password` to check a
//! password against the composition rules, and `denylist` to query the
//! bundled common-password list. Option values come from the built-in
//! defaults, then `--config`, then the flags themselves.

pub mod display;

use clap::{Parser, Subcommand};
use validauth::{OtpOptions, PasswordOptions};

#[derive(Parser)]
#[command(
    name = "validauth",
    about = "Validate one-time passwords and password strength",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a submitted one-time code against the expected one
    Otp {
        /// Code the user submitted
        otp: String,

        /// Code that was issued
        correct_otp: String,

        /// Attempts made so far, including this one
        #[arg(long, allow_negative_numbers = true)]
        attempts: Option<i64>,

        /// Attempts allowed before lockout (default: 3)
        #[arg(long, allow_negative_numbers = true)]
        max_attempts: Option<i64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check a password against the composition rules
    Password {
        /// Password to check; omit or pass `-` to read one line from stdin
        password: Option<String>,

        /// Minimum length in characters (default: 8)
        #[arg(long)]
        min_length: Option<usize>,

        /// Maximum length in characters (default: 128)
        #[arg(long)]
        max_length: Option<usize>,

        /// Do not require an uppercase letter
        #[arg(long)]
        no_uppercase: bool,

        /// Do not require a lowercase letter
        #[arg(long)]
        no_lowercase: bool,

        /// Do not require a digit
        #[arg(long)]
        no_numbers: bool,

        /// Do not require a symbol
        #[arg(long)]
        no_symbols: bool,

        /// Accept passwords from the common-password list
        #[arg(long)]
        allow_common: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Query the bundled common-password list
    Denylist {
        #[command(subcommand)]
        action: DenylistAction,
    },
}

#[derive(Subcommand)]
pub enum DenylistAction {
    /// Print the number of entries
    Stats,

    /// Exit 1 if the password is listed (exact, case-sensitive match)
    Check {
        /// Password to look up
        password: String,
    },
}

/// Flags shared by both validators.
#[derive(clap::Args)]
pub struct OutputArgs {
    /// Show every violated rule instead of a pass/fail line
    #[arg(long)]
    pub details: bool,

    /// Print the JSON value the JavaScript API would return
    #[arg(long)]
    pub json: bool,

    /// JSON file with `otp` and `password` option sections
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,
}

/// Layer OTP flags over the configured options.
pub fn apply_otp_flags(
    mut options: OtpOptions,
    attempts: Option<i64>,
    max_attempts: Option<i64>,
    details: bool,
) -> OtpOptions {
    if attempts.is_some() {
        options.attempts = attempts;
    }
    if let Some(max) = max_attempts {
        options.max_attempts = max;
    }
    options.details |= details;
    options
}

/// Password flags that override the configured options.
pub struct PasswordFlags {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    pub allow_common: bool,
    pub details: bool,
}

/// Layer password flags over the configured options.
///
/// `--no-*` flags only ever relax a rule; leaving one off keeps whatever the
/// config file says.
pub fn apply_password_flags(mut options: PasswordOptions, flags: &PasswordFlags) -> PasswordOptions {
    if let Some(min) = flags.min_length {
        options.min_length = min;
    }
    if let Some(max) = flags.max_length {
        options.max_length = max;
    }
    if flags.no_uppercase {
        options.require_uppercase = false;
    }
    if flags.no_lowercase {
        options.require_lowercase = false;
    }
    if flags.no_numbers {
        options.require_numbers = false;
    }
    if flags.no_symbols {
        options.require_symbols = false;
    }
    if flags.allow_common {
        options.forbid_common_passwords = false;
    }
    options.details |= flags.details;
    options
}
