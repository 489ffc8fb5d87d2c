// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --settings FILE      ← settings files (can repeat)
//! --set KEY=VAL        ← settings override (can repeat)
//! --environment NAME   ← skip source lookup, set directly
//! --log-level N        ← console verbosity (0-5)
//! --file-log-level N   ← log file verbosity (0-5), defaults to --log-level
//! --log-file FILE      ← also log to a file
//!
//! Settings precedence: --set > CSENV_SETTING_* env vars > --settings > cs_config.toml
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::logging::{LogConfig, LogLevel};

/// Settings file loaded from the working directory when present.
pub const DEFAULT_SETTINGS_FILE: &str = "cs_config.toml";

/// Prefix of process variables merged into the settings store.
///
/// Kept apart from [`LOG_ENV_VAR`](crate::logging::LOG_ENV_VAR) so the log
/// filter never turns into a settings key.
pub const SETTINGS_ENV_PREFIX: &str = "CSENV_SETTING";

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "settings", value_name = "FILE", action = clap::ArgAction::Append)]
    pub settings: Vec<PathBuf>,

    /// Sets a settings value, such as 'fake_payments_environment=beta'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Uses this environment instead of reading `cs_environment`/`CS_ENVIRONMENT`.
    #[arg(short = 'e', long = "environment", value_name = "NAME")]
    pub environment: Option<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Disables loading of `cs_config.toml` from the working directory.
    #[arg(long = "no-default-settings")]
    pub no_default_settings: bool,
}

impl GlobalOptions {
    /// Builds the logging configuration from the log options.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or_default();

        // file_log_level falls back to log_level if not specified
        let file_level = self
            .file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(console_level);

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(self.log_file.as_ref().map(|p| p.display().to_string()))
            .build()
    }
}
