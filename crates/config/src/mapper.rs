//! Environment variable name translation.
//!
//! Responsibilities:
//! - Map an environment variable name to its canonical dotted key, or decide
//!   that the variable is suppressed.
//!
//! Does NOT handle:
//! - Secret file resolution (see `secrets.rs`).
//! - Walking the process environment (see `loader/source.rs`).
//!
//! Invariants:
//! - Pure and infallible: unknown names are passed through unchanged, never
//!   rejected.
//! - Precedence is fixed: Ignore List, then Key Map, then the naming
//!   convention, then identity passthrough.
//! - The value is forwarded byte-identical; no trimming or coercion.

use crate::convention;
use crate::keymap::{IgnoreList, KeyMap};

/// Translates environment variable names into canonical configuration keys.
#[derive(Debug, Clone)]
pub struct EnvKeyMapper {
    key_map: KeyMap,
    ignored: IgnoreList,
}

impl EnvKeyMapper {
    /// Create a mapper over an alias table and an ignore list.
    pub fn new(key_map: KeyMap, ignored: IgnoreList) -> Self {
        Self { key_map, ignored }
    }

    /// Translate one environment variable.
    ///
    /// Returns `None` when the variable is suppressed (ignore list
    /// membership), otherwise the canonical key paired with the untouched
    /// value. Names matching neither the alias table nor the double-delimiter
    /// convention come back unchanged.
    pub fn map<'v>(&self, name: &str, value: &'v str) -> Option<(String, &'v str)> {
        if self.ignored.contains(name) {
            return None;
        }

        if let Some(key) = self.key_map.get(name) {
            return Some((key.to_owned(), value));
        }

        if let Some(suffix) = convention::literal_key_suffix(name) {
            if let Some(key) = convention::canonicalize(suffix) {
                return Some((key, value));
            }
        }

        Some((name.to_owned(), value))
    }
}
