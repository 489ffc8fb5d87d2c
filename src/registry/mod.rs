// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment registry.
//!
//! # Lifecycle
//!
//! ```text
//!  Uninitialized ──initialize()/set()──> Initialized(env)
//!                                          │      ^
//!                                          └set()─┘
//! ```
//!
//! # Initialization Sources
//!
//! ```text
//! 1. env vars       cs_environment   (resolved by name)
//! 2. server vars    CS_ENVIRONMENT   (resolved by name)
//! 3. default        development
//! ```
//!
//! # Fake Environments
//!
//! While the real environment is exactly development, `current(Some(key))`
//! consults `fake_<key>_environment` in the settings store. Only
//! `production`, `beta` and `alpha` are honored; anything else falls back to
//! development. Either outcome is cached per key for the registry's lifetime.
//!
//! ```
//! use csenv::environment::Environment;
//! use csenv::registry::EnvironmentRegistry;
//! use csenv::settings::SettingsStore;
//!
//! let settings = SettingsStore::parse(r#"fake_payments_environment = "production""#)?;
//! let registry = EnvironmentRegistry::new().with_settings(settings);
//!
//! assert_eq!(registry.current(None)?, Environment::DEVELOPMENT);
//! assert_eq!(registry.current(Some("payments"))?, Environment::PRODUCTION);
//! assert!(registry.is(Environment::DEVELOPMENT | Environment::TEST, None)?);
//! # Ok::<(), csenv::error::EnvError>(())
//! ```

pub mod sources;


use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{debug, trace};

use crate::environment::Environment;
use crate::error::EnvResult;
use crate::settings::fake_setting_key;

use sources::{ProcessEnv, VarSource};

/// Environment-variable key read first during initialization.
pub const ENV_VAR_KEY: &str = "cs_environment";

/// Server/request-context key read when [`ENV_VAR_KEY`] is absent.
pub const SERVER_VAR_KEY: &str = "CS_ENVIRONMENT";

/// Environments a fake key may be mapped to.
const FAKE_TARGETS: [(&str, Environment); 3] = [
    ("production", Environment::PRODUCTION),
    ("beta", Environment::BETA),
    ("alpha", Environment::ALPHA),
];

/// Holds the current environment and the per-key fake environment cache.
///
/// Construct one at startup and pass it to whatever needs environment
/// checks. All methods take `&self`; the registry is `Send + Sync`.
#[derive(Default)]
pub struct EnvironmentRegistry {
    current: RwLock<Option<Environment>>,
    fakes: Mutex<BTreeMap<String, Environment>>,
    env_vars: Option<Arc<dyn VarSource>>,
    server_vars: Option<Arc<dyn VarSource>>,
    settings: Option<Arc<dyn VarSource>>,
}

impl std::fmt::Debug for EnvironmentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentRegistry")
            .field("current", &*self.read_current())
            .field("fakes", &self.fake_environments())
            .field("env_vars", &self.env_vars.is_some())
            .field("server_vars", &self.server_vars.is_some())
            .field("settings", &self.settings.is_some())
            .finish()
    }
}

impl EnvironmentRegistry {
    /// Creates a registry with no sources; it initializes to development.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that reads both initialization keys from the
    /// process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self::new()
            .with_env_vars(ProcessEnv)
            .with_server_vars(ProcessEnv)
    }

    /// Sets the source consulted for [`ENV_VAR_KEY`].
    #[must_use]
    pub fn with_env_vars(mut self, source: impl VarSource + 'static) -> Self {
        self.env_vars = Some(Arc::new(source));
        self
    }

    /// Sets the source consulted for [`SERVER_VAR_KEY`].
    #[must_use]
    pub fn with_server_vars(mut self, source: impl VarSource + 'static) -> Self {
        self.server_vars = Some(Arc::new(source));
        self
    }

    /// Sets the settings store used for fake environment lookups.
    #[must_use]
    pub fn with_settings(mut self, source: impl VarSource + 'static) -> Self {
        self.settings = Some(Arc::new(source));
        self
    }

    /// Resolves an environment name, ignoring ASCII case.
    ///
    /// An absent or unset (empty or `"0"`) name yields
    /// [`current`](Self::current).
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidName`](crate::error::EnvError::InvalidName)
    /// for an unknown non-empty name, or any initialization error.
    pub fn resolve(&self, name: Option<&str>) -> EnvResult<Environment> {
        match name.filter(|n| !is_unset(n)) {
            Some(name) => Environment::lookup_name(name),
            None => self.current(None),
        }
    }

    /// Returns the name of `env`, or of the current environment when `env`
    /// is absent or empty.
    ///
    /// `Ok(None)` means no name maps to the code.
    ///
    /// # Errors
    ///
    /// Returns an error only if lazy initialization fails.
    pub fn name_of(&self, env: Option<Environment>) -> EnvResult<Option<&'static str>> {
        let env = match env.filter(|e| !e.is_empty()) {
            Some(env) => env,
            None => self.current(None)?,
        };
        Ok(env.name())
    }

    /// Tests whether `env` (or the current environment) shares any bit with
    /// `mask`.
    ///
    /// # Errors
    ///
    /// Returns an error only if lazy initialization fails.
    pub fn is(&self, mask: Environment, env: Option<Environment>) -> EnvResult<bool> {
        let env = match env.filter(|e| !e.is_empty()) {
            Some(env) => env,
            None => self.current(None)?,
        };
        Ok(mask.intersects(env))
    }

    /// Returns the current environment, initializing on first use.
    ///
    /// With a set (non-empty, not `"0"`) `fake_key` and a real environment of exactly
    /// development, returns the faked environment for that key instead.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization resolves an unknown name.
    pub fn current(&self, fake_key: Option<&str>) -> EnvResult<Environment> {
        let env = self.initialize()?;
        match fake_key {
            Some(key) if !is_unset(key) && env == Environment::DEVELOPMENT => {
                Ok(self.fake_environment(key))
            }
            _ => Ok(env),
        }
    }

    /// Overwrites the current environment. The value is not validated.
    pub fn set(&self, env: Environment) -> Environment {
        *self.write_current() = Some(env);
        debug!(environment = %env, "environment set");
        env
    }

    /// Returns true once [`set`](Self::set) or
    /// [`initialize`](Self::initialize) has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.read_current().is_some()
    }

    /// Resolves the environment from the configured sources once.
    ///
    /// Later calls return the stored value without consulting the sources.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidName`](crate::error::EnvError::InvalidName)
    /// if a source holds an unknown name. The registry stays uninitialized.
    pub fn initialize(&self) -> EnvResult<Environment> {
        if let Some(env) = *self.read_current() {
            return Ok(env);
        }

        let mut current = self.write_current();
        if let Some(env) = *current {
            return Ok(env);
        }

        let env = self.env_from_sources()?;
        *current = Some(env);
        debug!(environment = %env, "environment initialized");
        Ok(env)
    }

    /// Returns a snapshot of the fake environments resolved so far.
    #[must_use]
    pub fn fake_environments(&self) -> BTreeMap<String, Environment> {
        self.fakes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn env_from_sources(&self) -> EnvResult<Environment> {
        if let Some(name) = lookup(self.env_vars.as_deref(), ENV_VAR_KEY) {
            debug!(key = ENV_VAR_KEY, %name, "environment from env vars");
            return Environment::lookup_name(&name);
        }

        if let Some(name) = lookup(self.server_vars.as_deref(), SERVER_VAR_KEY) {
            debug!(key = SERVER_VAR_KEY, %name, "environment from server vars");
            return Environment::lookup_name(&name);
        }

        debug!("no environment configured, defaulting to development");
        Ok(Environment::DEVELOPMENT)
    }

    fn fake_environment(&self, key: &str) -> Environment {
        let mut fakes = self.fakes.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(env) = fakes.get(key) {
            trace!(key, environment = %env, "fake environment cache hit");
            return *env;
        }

        let setting = fake_setting_key(key);
        let value = lookup(self.settings.as_deref(), &setting);
        let env = match value.as_deref().and_then(fake_target) {
            Some(env) => {
                debug!(key, environment = %env, "faking environment");
                env
            }
            None => {
                debug!(key, value = ?value, "no usable fake environment, using development");
                Environment::DEVELOPMENT
            }
        };

        fakes.insert(key.to_string(), env);
        env
    }

    fn read_current(&self) -> std::sync::RwLockReadGuard<'_, Option<Environment>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_current(&self) -> std::sync::RwLockWriteGuard<'_, Option<Environment>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn lookup(source: Option<&dyn VarSource>, key: &str) -> Option<String> {
    source
        .and_then(|s| s.var(key))
        .filter(|value| !is_unset(value))
}

/// Empty strings and `"0"` count as absent values.
fn is_unset(value: &str) -> bool {
    value.is_empty() || value == "0"
}

/// Maps a fake setting value to its environment. Case-sensitive.
fn fake_target(name: &str) -> Option<Environment> {
    FAKE_TARGETS
        .iter()
        .find(|(target, _)| *target == name)
        .map(|(_, env)| *env)
}
