// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, EnvError};

#[test]
fn test_invalid_name_lists_valid_names() {
    let err = EnvError::invalid_name("staging");
    insta::assert_snapshot!(
        err.to_string(),
        @"'staging' is not a valid environment name. Must be one of development, test, alpha, beta, production."
    );
}

#[test]
fn test_config_error_is_boxed_into_env_error() {
    let err: EnvError = ConfigError::InvalidOverride {
        option: "fake_payments_environment".to_string(),
        message: "expected KEY=VALUE".to_string(),
    }
    .into();

    assert!(matches!(err, EnvError::Config(_)));
    insta::assert_snapshot!(
        err.to_string(),
        @"config error: invalid override 'fake_payments_environment': expected KEY=VALUE"
    );
}

#[test]
fn test_env_error_size() {
    let size = std::mem::size_of::<EnvError>();
    assert!(size <= 56, "EnvError is {size} bytes, expected <= 56");
}
