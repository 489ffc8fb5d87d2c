// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::global::SETTINGS_ENV_PREFIX;
use crate::cli::{Cli, Command};
use crate::logging::{LOG_ENV_VAR, LogLevel};
use clap::Parser;

#[test]
fn test_parse_version_alias() {
    let cli = Cli::try_parse_from(["csenv", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "csenv",
        "-l",
        "4",
        "-c",
        "a.toml",
        "--settings",
        "b.toml",
        "--set",
        "fake_payments_environment=beta",
        "-e",
        "test",
        "current",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.settings.len(), 2);
    assert_eq!(cli.global.options, ["fake_payments_environment=beta"]);
    assert_eq!(cli.global.environment.as_deref(), Some("test"));
    assert!(matches!(cli.command, Some(Command::Current(ref args)) if args.fake.is_none()));
}

#[test]
fn test_parse_is_requires_names() {
    assert!(Cli::try_parse_from(["csenv", "is"]).is_err());

    let cli = Cli::try_parse_from(["csenv", "is", "alpha|beta", "production", "--fake", "x"])
        .unwrap();
    match cli.command {
        Some(Command::Is(args)) => {
            assert_eq!(args.names, ["alpha|beta", "production"]);
            assert_eq!(args.fake.as_deref(), Some("x"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["csenv", "-l", "6", "list"]).is_err());
}

#[test]
fn test_parse_name_code() {
    let cli = Cli::try_parse_from(["csenv", "name", "2048"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Name(ref args)) if args.code == Some(2048)));
}

#[test]
fn test_file_log_level_falls_back_to_log_level() {
    let cli = Cli::try_parse_from(["csenv", "-l", "3", "--log-file", "csenv.log", "list"]).unwrap();
    let config = cli.global.log_config();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::INFO);
    assert_eq!(config.log_file(), Some("csenv.log"));

    let cli = Cli::try_parse_from(["csenv", "--file-log-level", "5", "list"]).unwrap();
    let config = cli.global.log_config();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);

    assert!(Cli::try_parse_from(["csenv", "--file-log-level", "6", "list"]).is_err());
}

#[test]
fn test_log_variable_is_not_a_settings_variable() {
    let settings_prefix = format!("{SETTINGS_ENV_PREFIX}_");
    assert!(!LOG_ENV_VAR.starts_with(&settings_prefix));
}
