// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for environment codes and the name table.

use super::Environment;
use crate::error::EnvError;

#[test]
fn test_codes_are_distinct_single_bits() {
    let table = Environment::table();
    for (i, (name, a)) in table.iter().enumerate() {
        assert_eq!(a.bits().count_ones(), 1, "{name} must be a single bit");
        for (other, b) in &table[i + 1..] {
            assert!(!a.intersects(*b), "{name} overlaps {other}");
        }
    }
}

#[test]
fn test_name_round_trip_over_table() {
    for (name, env) in Environment::table() {
        assert_eq!(Environment::lookup_name(name).unwrap(), *env);
        assert_eq!(env.name(), Some(*name));
    }
}

#[test]
fn test_lookup_name_ignores_case() {
    assert_eq!(
        Environment::lookup_name("PRODUCTION").unwrap(),
        Environment::PRODUCTION
    );
    assert_eq!(Environment::lookup_name("Beta").unwrap(), Environment::BETA);
}

#[test]
fn test_lookup_name_coexists_with_flag_names() {
    // bitflags' own `from_name` matches flag identifiers exactly
    assert_eq!(Environment::from_name("ALPHA"), Some(Environment::ALPHA));
    assert_eq!(Environment::from_name("alpha"), None);
    assert_eq!(Environment::lookup_name("alpha").unwrap(), Environment::ALPHA);
}

#[test]
fn test_lookup_name_rejects_unknown() {
    let err = Environment::lookup_name("staging").unwrap_err();
    match err {
        EnvError::InvalidName { name, valid } => {
            assert_eq!(name, "staging");
            assert_eq!(valid, ["development", "test", "alpha", "beta", "production"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_name_of_mask_is_none() {
    assert_eq!((Environment::ALPHA | Environment::BETA).name(), None);
    assert_eq!(Environment::empty().name(), None);
    assert_eq!(Environment::from_bits_retain(0x0001).name(), None);
}

#[test]
fn test_parse_mask() {
    let mask: Environment = "alpha | Beta".parse().unwrap();
    assert_eq!(mask, Environment::ALPHA | Environment::BETA);
    assert!("alpha|staging".parse::<Environment>().is_err());
}

#[test]
fn test_display() {
    let rendered = [
        Environment::DEVELOPMENT.to_string(),
        (Environment::ALPHA | Environment::PRODUCTION).to_string(),
        Environment::empty().to_string(),
        Environment::from_bits_retain(0x0011).to_string(),
    ]
    .join(", ");
    insta::assert_snapshot!(rendered, @"development, alpha|production, none, test|0x0001");
}

#[test]
fn test_mask_membership() {
    let staged = Environment::ALPHA | Environment::BETA;
    assert!(staged.intersects(Environment::ALPHA));
    assert!(!staged.intersects(Environment::PRODUCTION));
}
