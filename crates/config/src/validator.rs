//! Accumulator for configuration-load diagnostics.
//!
//! Responsibilities:
//! - Collect ordered error and warning sequences during a configuration load.
//! - Let the caller inspect everything at once after the load completes.
//!
//! Does NOT handle:
//! - Deciding whether accumulated errors should abort startup; that policy
//!   belongs to the owner of this instance.
//!
//! Invariants:
//! - Both sequences are append-only within one load pass and preserve input
//!   order.
//! - `clear()` is only called between independent load attempts.

use crate::loader::ConfigError;

/// Collects errors and warnings produced while loading configuration.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ConfigError>,
    warnings: Vec<String>,
}

impl Validator {
    /// Create an empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one error.
    pub fn push_error(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    /// Append one warning.
    ///
    /// Currently unused by the translators; the channel is kept for soft
    /// deprecation notices.
    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Accumulated errors, in input order.
    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    /// Accumulated warnings, in input order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Reset both sequences for an independent load attempt.
    pub fn clear(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }
}
