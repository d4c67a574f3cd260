// Copyright 2025-present Adiksuu
// SPDX-License-Identifier: Apache-2.0

//! Validator options from a JSON file.
//!
//! The file uses the same keys as the JavaScript options objects, grouped by
//! validator. Both sections are optional:
//!
//! ```json
//! {
//!   "otp": { "maxAttempts": 5 },
//!   "password": { "minLength": 12, "forbidCommonPasswords": true }
//! }
//! ```
//!
//! Loading only checks syntax and key names. Odd values such as a zero
//! `maxAttempts` load fine and surface later as validation failures.

use crate::types::{OtpOptions, PasswordOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: String, message: String },
    /// The contents are not a valid config document.
    Parse { path: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "cannot read config '{}': {}", path, message)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "invalid config '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Options for both validators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidauthConfig {
    pub otp: OtpOptions,
    pub password: PasswordOptions,
}

impl ValidauthConfig {
    /// Parse a config document held in memory.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Self::parse(raw, "<inline>")
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: shown.clone(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&raw, &shown)?;
        tracing::debug!(path = %shown, "loaded config");
        Ok(config)
    }

    fn parse(raw: &str, path: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
