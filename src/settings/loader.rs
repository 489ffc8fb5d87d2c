// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! SettingsLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set() / .set_option("k=v")
//!        |
//!        v
//!    build() --> SettingsStore
//! ```

use std::path::{Path, PathBuf};

use super::SettingsStore;
use crate::error::{ConfigError, EnvResult};

/// Builder for loading settings from multiple sources.
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a required TOML settings file.
    ///
    /// The file is read by `build()`, which fails if it is missing or invalid.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<KEY>` process variables as lowercase flat keys.
    ///
    /// With prefix `CSENV_SETTING`, `CSENV_SETTING_FAKE_PAYMENTS_ENVIRONMENT=beta`
    /// becomes `fake_payments_environment = "beta"`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a settings override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid settings path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> EnvResult<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| ConfigError::InvalidOverride {
                option: key.to_string(),
                message: e.to_string(),
            })?;
        Ok(self)
    }

    /// Sets an override from a `KEY=VALUE` option string.
    ///
    /// # Errors
    ///
    /// Returns an error if `option` has no `=` or an empty key.
    pub fn set_option(self, option: &str) -> EnvResult<Self> {
        match option.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                self.set(key.trim(), value.trim().to_string())
            }
            _ => Err(ConfigError::InvalidOverride {
                option: option.to_string(),
                message: "expected KEY=VALUE".to_string(),
            }
            .into()),
        }
    }

    /// Builds the store from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required settings files are missing.
    /// - Settings files have invalid TOML syntax.
    pub fn build(self) -> EnvResult<SettingsStore> {
        let builder = match &self.env_prefix {
            Some(prefix) => self
                .builder
                .add_source(config::Environment::with_prefix(prefix).prefix_separator("_")),
            None => self.builder,
        };
        let cfg = builder.build().map_err(ConfigError::Load)?;
        Ok(SettingsStore::new(cfg))
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
