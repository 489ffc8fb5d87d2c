// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! GlobalOptions --> load_registry()
//!               --> build_settings() --> SettingsStore
//!               --> build_registry() --> EnvironmentRegistry
//!                                           |
//!              current / is / name / list <-+
//! ```

pub mod query;

#[cfg(test)]
mod tests;

use anyhow::Context;

use crate::cli::global::{DEFAULT_SETTINGS_FILE, GlobalOptions, SETTINGS_ENV_PREFIX};
use crate::environment::Environment;
use crate::error::Result;
use crate::registry::EnvironmentRegistry;
use crate::settings::SettingsStore;
use crate::settings::loader::SettingsLoader;

/// Builds the settings loader described by the global options.
///
/// # Errors
///
/// Returns an error if a `--set` option is not `KEY=VALUE`.
pub fn build_settings_loader(global: &GlobalOptions) -> Result<SettingsLoader> {
    let mut loader = SettingsLoader::new();
    if !global.no_default_settings {
        loader = loader.add_toml_file_optional(DEFAULT_SETTINGS_FILE);
    }
    for path in &global.settings {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(SETTINGS_ENV_PREFIX);
    for option in &global.options {
        loader = loader.set_option(option)?;
    }
    Ok(loader)
}

/// Loads the settings store described by the global options.
///
/// # Errors
///
/// Returns an error if a settings file is missing or invalid.
pub fn build_settings(global: &GlobalOptions) -> Result<SettingsStore> {
    let loader = build_settings_loader(global)?;
    tracing::debug!(files = ?loader.format_loaded_files(), "loading settings");
    Ok(loader.build()?)
}

/// Builds a registry over the process environment and the given settings.
///
/// `--environment` is applied with [`EnvironmentRegistry::set`], so the
/// process sources are never read in that case.
///
/// # Errors
///
/// Returns an error if `--environment` is not a known name.
pub fn build_registry(global: &GlobalOptions, settings: SettingsStore) -> Result<EnvironmentRegistry> {
    let registry = EnvironmentRegistry::from_process().with_settings(settings);
    if let Some(name) = &global.environment {
        let env = Environment::lookup_name(name).context("invalid --environment")?;
        registry.set(env);
    }
    Ok(registry)
}

/// Loads settings and builds the registry in one step.
///
/// Failures are returned, not printed; the caller reports them once.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded or `--environment`
/// is not a known name.
pub fn load_registry(global: &GlobalOptions) -> Result<EnvironmentRegistry> {
    let settings = build_settings(global)?;
    build_registry(global, settings)
}
