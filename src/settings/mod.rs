// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Flat key-value settings store.
//!
//! Backs the development-only fake environment lookups. Keys follow the
//! `fake_<key>_environment` convention:
//!
//! ```toml
//! fake_payments_environment = "production"
//! fake_search_environment = "beta"
//! ```
//!
//! # Source Priority
//!
//! ```text
//! Priority (low → high)
//! 1. TOML files, in the order added
//! 2. TOML strings
//! 3. <PREFIX>_* env vars
//! 4. explicit overrides (--set)
//! ```

pub mod loader;


use std::path::Path;

use crate::error::EnvResult;

use loader::SettingsLoader;

/// Returns the settings key consulted for a fake environment.
#[must_use]
pub fn fake_setting_key(key: &str) -> String {
    format!("fake_{key}_environment")
}

/// Loaded settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    inner: config::Config,
}

impl SettingsStore {
    pub(crate) const fn new(inner: config::Config) -> Self {
        Self { inner }
    }

    /// Create a new settings builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use csenv::settings::SettingsStore;
    ///
    /// let settings = SettingsStore::builder()
    ///     .add_toml_file_optional("cs_config.toml")
    ///     .with_env_prefix("CSENV_SETTING")
    ///     .build()?;
    /// # Ok::<(), csenv::error::EnvError>(())
    /// ```
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EnvResult<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML.
    pub fn parse(content: &str) -> EnvResult<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Returns the value stored under `key` as a string.
    ///
    /// Scalars of other types are stringified; missing keys and tables
    /// yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get_string(key).ok()
    }

}
