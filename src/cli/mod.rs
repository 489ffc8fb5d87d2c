// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! csenv [global options] <command>
//! current [--fake KEY]
//! is <NAME|MASK>...
//! name [CODE]
//! list
//! version
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Deployment environment registry.
#[derive(Debug, Parser)]
#[command(
    name = "csenv",
    author,
    version,
    about = "Inspect the deployment environment",
    long_about = "Resolves the deployment environment the same way a service does at startup:\n\
                  `cs_environment`, then `CS_ENVIRONMENT`, then development.\n\n\
                  Fake environments are read from settings files as\n\
                  `fake_<key>_environment` and only apply in development.",
    after_help = "EXIT STATUS:\n\n\
                  `csenv is` exits with 0 when the current environment matches\n\
                  any of the given names and 1 when it does not."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Prints the current environment name.
    Current(CurrentArgs),

    /// Checks the current environment against one or more names.
    Is(IsArgs),

    /// Prints the name of a numeric environment code.
    Name(NameArgs),

    /// Lists all environments and their codes.
    List,
}

/// Arguments for `current`.
#[derive(Debug, Clone, Default, Args)]
pub struct CurrentArgs {
    /// Resolve the fake environment for this key (development only).
    #[arg(short = 'f', long = "fake", value_name = "KEY")]
    pub fake: Option<String>,
}

/// Arguments for `is`.
#[derive(Debug, Clone, Default, Args)]
pub struct IsArgs {
    /// Environment names or `|`-separated masks, e.g. `alpha beta` or `alpha|beta`.
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,

    /// Resolve the fake environment for this key before comparing.
    #[arg(short = 'f', long = "fake", value_name = "KEY")]
    pub fake: Option<String>,
}

/// Arguments for `name`.
#[derive(Debug, Clone, Default, Args)]
pub struct NameArgs {
    /// Numeric code; defaults to the current environment.
    #[arg(value_name = "CODE")]
    pub code: Option<u16>,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
