//! Required-parameter checks
//!
//! Request builders collect every missing field before failing, so a single
//! error names all of them.

use crate::error::{Error, Result};

/// Accumulates missing required parameters
#[derive(Debug, Default)]
#[must_use]
pub struct RequiredParams {
    missing: Vec<&'static str>,
}

impl RequiredParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// A string parameter; empty or blank counts as missing
    pub fn text(mut self, name: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(name);
        }
        self
    }

    /// An optional parameter that must be set
    pub fn some<T>(mut self, name: &'static str, value: Option<&T>) -> Self {
        if value.is_none() {
            self.missing.push(name);
        }
        self
    }

    /// A parameter whose presence was decided by the caller
    pub fn present(mut self, name: &'static str, present: bool) -> Self {
        if !present {
            self.missing.push(name);
        }
        self
    }

    /// Fail with every missing name, in declaration order
    pub fn check(self) -> Result<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(Error::missing_parameters(self.missing))
        }
    }
}
