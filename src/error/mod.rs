// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!             EnvError
//!                |
//!      +---------+---------+
//!      v                   v
//! InvalidName           Config
//! name + valid names    Box<ConfigError>
//!
//! ConfigError: Load, InvalidOverride, InvalidValue
//! ```
//!
//! A lookup miss in [`crate::registry::EnvironmentRegistry::name_of`] is
//! `Ok(None)`, never an error.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Top-level error type for environment lookups.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A non-empty name that is not in the environment table.
    #[error("'{name}' is not a valid environment name. Must be one of {}.", .valid.join(", "))]
    InvalidName {
        name: String,
        valid: Vec<&'static str>,
    },

    /// Settings store error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

impl EnvError {
    /// Create an [`EnvError::InvalidName`] listing every known environment.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            valid: crate::environment::Environment::names().collect(),
        }
    }
}

impl From<ConfigError> for EnvError {
    fn from(err: ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}

// --- Config Errors ---

/// Settings store and option errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `config` crate failed to read or merge a source.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// A `KEY=VALUE` override could not be applied.
    #[error("invalid override '{option}': {message}")]
    InvalidOverride { option: String, message: String },

    /// Invalid option value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

#[cfg(test)]
mod tests;
