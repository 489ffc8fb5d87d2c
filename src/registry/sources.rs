// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key-value sources the registry reads from.
//!
//! ```text
//! VarSource
//!   ProcessEnv          std::env::var
//!   HashMap / BTreeMap  request context, tests
//!   SettingsStore       fake_<key>_environment lookups
//!   Arc<T>              shared sources
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::settings::SettingsStore;

/// Read-only string lookup by key.
pub trait VarSource: Send + Sync {
    /// Returns the value for `key`, or `None` if absent.
    fn var(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<S: std::hash::BuildHasher + Send + Sync> VarSource for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl VarSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl VarSource for SettingsStore {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key)
    }
}

impl<T: VarSource + ?Sized> VarSource for Arc<T> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
