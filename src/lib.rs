// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                                current / is / name / list
//!                           |
//!                           v
//!              ,---------------------------,
//!              |         registry          |
//!              |  current env, fake cache  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!            environment   sources   settings
//!            bitflags +   env vars,  TOML via
//!            name table   server vars `config`
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Usage
//!
//! ```
//! use csenv::environment::Environment;
//! use csenv::registry::EnvironmentRegistry;
//!
//! let registry = EnvironmentRegistry::new();
//! if registry.is(Environment::DEVELOPMENT | Environment::ALPHA, None)? {
//!     // verbose diagnostics
//! }
//! assert!(!registry.is(Environment::PRODUCTION, None)?);
//! # Ok::<(), csenv::error::EnvError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod environment;
pub mod error;
pub mod logging;
pub mod registry;
pub mod settings;
