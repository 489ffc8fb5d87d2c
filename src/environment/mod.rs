// csenv: Deployment Environment Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment codes and the name table.
//!
//! ```text
//! DEVELOPMENT  0x0008  0000 0000 0000 1000
//! TEST         0x0010  0000 0000 0001 0000
//! ALPHA        0x0080  0000 0000 1000 0000
//! BETA         0x0800  0000 1000 0000 0000
//! PRODUCTION   0x8000  1000 0000 0000 0000
//! ```
//!
//! Masks are built by OR-ing codes; membership is a single AND:
//!
//! ```
//! use csenv::environment::Environment;
//!
//! let staged = Environment::ALPHA | Environment::BETA;
//! assert!(staged.intersects(Environment::ALPHA));
//! assert!(!staged.intersects(Environment::PRODUCTION));
//! ```

use bitflags::bitflags;

use crate::error::{EnvError, EnvResult};

bitflags! {
    /// A deployment environment, or a mask of several.
    ///
    /// Every named code is a single distinct bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Environment: u16 {
        const DEVELOPMENT = 0x0008;
        const TEST = 0x0010;
        const ALPHA = 0x0080;
        const BETA = 0x0800;
        const PRODUCTION = 0x8000;
    }
}

/// Lowercase name of each environment, one entry per code.
const NAME_TABLE: [(&str, Environment); 5] = [
    ("development", Environment::DEVELOPMENT),
    ("test", Environment::TEST),
    ("alpha", Environment::ALPHA),
    ("beta", Environment::BETA),
    ("production", Environment::PRODUCTION),
];

impl Environment {
    /// Returns the name table in declaration order.
    #[must_use]
    pub fn table() -> &'static [(&'static str, Self)] {
        &NAME_TABLE
    }

    /// Iterates over the valid environment names.
    pub fn names() -> impl Iterator<Item = &'static str> {
        NAME_TABLE.iter().map(|(name, _)| *name)
    }

    /// Looks up a single environment by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidName`] if `name` is not in the table.
    pub fn lookup_name(name: &str) -> EnvResult<Self> {
        NAME_TABLE
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, env)| *env)
            .ok_or_else(|| EnvError::invalid_name(name))
    }

    /// Returns the name of this code, or `None` unless it is exactly one
    /// known environment.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        NAME_TABLE
            .iter()
            .find(|(_, env)| *env == self)
            .map(|(name, _)| *name)
    }
}

/// Parses a single name (`beta`) or a `|`-separated mask (`alpha|beta`).
impl std::str::FromStr for Environment {
    type Err = EnvError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.split('|')
            .map(str::trim)
            .try_fold(Self::empty(), |mask, name| Ok(mask | Self::lookup_name(name)?))
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let mut first = true;
        for (name, env) in &NAME_TABLE {
            if self.contains(*env) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }

        let unknown = self.bits() & !Self::all().bits();
        if unknown != 0 {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{unknown:#06x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
