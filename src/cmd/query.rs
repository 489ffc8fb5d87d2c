// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `current`, `is`, `name` and `list` handlers.
//!
//! Each handler returns the lines it would print so callers and tests can
//! inspect output without capturing stdout.

use anyhow::anyhow;

use crate::cli::{CurrentArgs, IsArgs, NameArgs};
use crate::environment::Environment;
use crate::error::Result;
use crate::registry::EnvironmentRegistry;

/// Renders the current (or faked) environment name.
///
/// # Errors
///
/// Returns an error if the environment cannot be initialized.
pub fn run_current_command(args: &CurrentArgs, registry: &EnvironmentRegistry) -> Result<String> {
    let env = registry.current(args.fake.as_deref())?;
    Ok(env.to_string())
}

/// Tests the current (or faked) environment against the OR of all names.
///
/// # Errors
///
/// Returns an error if a name is unknown or initialization fails.
pub fn run_is_command(args: &IsArgs, registry: &EnvironmentRegistry) -> Result<bool> {
    let mask = args
        .names
        .iter()
        .try_fold(Environment::empty(), |mask, name| {
            Ok::<_, anyhow::Error>(mask | name.parse::<Environment>()?)
        })?;
    let env = registry.current(args.fake.as_deref())?;
    let matched = registry.is(mask, Some(env))?;
    tracing::debug!(%mask, environment = %env, matched, "environment check");
    Ok(matched)
}

/// Renders the name of a code, or of the current environment.
///
/// # Errors
///
/// Returns an error if no name maps to the code.
pub fn run_name_command(args: &NameArgs, registry: &EnvironmentRegistry) -> Result<String> {
    let env = args.code.map(Environment::from_bits_retain);
    registry
        .name_of(env)?
        .map(str::to_string)
        .ok_or_else(|| {
            let target = args.code.map_or_else(
                || "the current environment".to_string(),
                |code| format!("code {code:#06x}"),
            );
            anyhow!("no environment name for {target}")
        })
}

/// Renders the name table with codes, marking the current environment.
///
/// # Errors
///
/// Returns an error if the environment cannot be initialized.
pub fn run_list_command(registry: &EnvironmentRegistry) -> Result<Vec<String>> {
    let current = registry.current(None)?;
    let width = Environment::names().map(str::len).max().unwrap_or(0);
    Ok(Environment::table()
        .iter()
        .map(|(name, env)| {
            let marker = if *env == current { " *" } else { "" };
            format!("{name:<width$} {:#06x} ({}){marker}", env.bits(), env.bits())
        })
        .collect())
}
