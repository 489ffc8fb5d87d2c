// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::query::{run_current_command, run_is_command, run_list_command, run_name_command};
use super::{build_registry, build_settings_loader, load_registry};
use crate::cli::global::GlobalOptions;
use crate::cli::{CurrentArgs, IsArgs, NameArgs};
use crate::environment::Environment;
use crate::registry::EnvironmentRegistry;
use crate::settings::{SettingsStore, fake_setting_key};

fn development_with_fakes() -> EnvironmentRegistry {
    let settings = SettingsStore::parse(
        r#"
fake_payments_environment = "production"
fake_search_environment = "test"
"#,
    )
    .unwrap();
    let registry = EnvironmentRegistry::new().with_settings(settings);
    registry.set(Environment::DEVELOPMENT);
    registry
}

#[test]
fn test_settings_loader_applies_overrides() {
    let global = GlobalOptions {
        options: vec!["fake_payments_environment=alpha".to_string()],
        no_default_settings: true,
        ..GlobalOptions::default()
    };
    let settings = build_settings_loader(&global).unwrap().build().unwrap();
    assert_eq!(settings.get(&fake_setting_key("payments")).as_deref(), Some("alpha"));
}

#[test]
fn test_settings_loader_rejects_malformed_override() {
    let global = GlobalOptions {
        options: vec!["=alpha".to_string()],
        no_default_settings: true,
        ..GlobalOptions::default()
    };
    assert!(build_settings_loader(&global).is_err());
}

#[test]
fn test_load_registry_reports_settings_failure_once() {
    let dir = tempfile::tempdir().unwrap();
    let global = GlobalOptions {
        settings: vec![dir.path().join("absent.toml")],
        no_default_settings: true,
        ..GlobalOptions::default()
    };
    let message = format!("{:#}", load_registry(&global).unwrap_err());
    assert_eq!(message.matches("failed to load settings").count(), 1);
}

#[test]
fn test_build_registry_with_explicit_environment() {
    let global = GlobalOptions {
        environment: Some("Beta".to_string()),
        ..GlobalOptions::default()
    };
    let registry = build_registry(&global, SettingsStore::default()).unwrap();
    assert!(registry.is_initialized());
    assert_eq!(registry.current(None).unwrap(), Environment::BETA);

    let global = GlobalOptions {
        environment: Some("staging".to_string()),
        ..GlobalOptions::default()
    };
    assert!(build_registry(&global, SettingsStore::default()).is_err());
}

#[test]
fn test_current_command() {
    let registry = development_with_fakes();
    let plain = run_current_command(&CurrentArgs::default(), &registry).unwrap();
    let faked = run_current_command(
        &CurrentArgs {
            fake: Some("payments".to_string()),
        },
        &registry,
    )
    .unwrap();
    let fallback = run_current_command(
        &CurrentArgs {
            fake: Some("search".to_string()),
        },
        &registry,
    )
    .unwrap();

    insta::assert_snapshot!(
        format!("{plain} {faked} {fallback}"),
        @"development production development"
    );
}

#[test]
fn test_is_command() {
    let registry = development_with_fakes();
    let check = |names: &[&str], fake: Option<&str>| {
        run_is_command(
            &IsArgs {
                names: names.iter().map(|n| (*n).to_string()).collect(),
                fake: fake.map(str::to_string),
            },
            &registry,
        )
    };

    assert!(check(&["development"], None).unwrap());
    assert!(check(&["alpha|beta", "development"], None).unwrap());
    assert!(!check(&["production"], None).unwrap());
    assert!(check(&["production"], Some("payments")).unwrap());
    assert!(check(&["staging"], None).is_err());
}

#[test]
fn test_name_command() {
    let registry = development_with_fakes();

    assert_eq!(
        run_name_command(&NameArgs { code: Some(0x0800) }, &registry).unwrap(),
        "beta"
    );
    assert_eq!(
        run_name_command(&NameArgs { code: None }, &registry).unwrap(),
        "development"
    );
    assert_eq!(
        run_name_command(&NameArgs { code: Some(0) }, &registry).unwrap(),
        "development"
    );

    let err = run_name_command(&NameArgs { code: Some(0x0088) }, &registry).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"no environment name for code 0x0088");
}

#[test]
fn test_list_command() {
    let registry = EnvironmentRegistry::new();
    registry.set(Environment::ALPHA);

    insta::assert_snapshot!(run_list_command(&registry).unwrap().join("\n"), @r"
    development 0x0008 (8)
    test        0x0010 (16)
    alpha       0x0080 (128) *
    beta        0x0800 (2048)
    production  0x8000 (32768)
    ");
}
