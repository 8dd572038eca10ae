//! Key Map and Ignore List tables.
//!
//! Responsibilities:
//! - Hold the immutable alias table from exact environment variable names to
//!   canonical dotted configuration keys.
//! - Hold the set of variable names that must never surface as plain values.
//! - Build the default secret alias table and its covering ignore list.
//!
//! Does NOT handle:
//! - Name translation logic (see `mapper.rs` and `convention.rs`).
//! - Secret file IO (see `secrets.rs`).
//!
//! Invariants:
//! - Lookups are case-sensitive on the environment variable side.
//! - Many-to-one entries are supported: several variable spellings may map to
//!   the same canonical key.
//! - Both tables are constructed once and read-only afterwards.

use std::collections::{HashMap, HashSet};

use crate::constants::{DEFAULT_SECRET_KEYS, ENV_DELIMITER, ENV_LITERAL_PREFIX, ENV_PREFIX,
    KEY_SEPARATOR};

/// Immutable mapping from environment variable names to canonical keys.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    entries: HashMap<String, String>,
}

impl KeyMap {
    /// Create an empty key map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one environment variable spelling for a canonical key.
    pub fn insert(&mut self, variable: impl Into<String>, key: impl Into<String>) {
        self.entries.insert(variable.into(), key.into());
    }

    /// Register both legacy spellings (single- and double-delimiter) of a
    /// canonical key.
    pub fn insert_aliases(&mut self, key: &str) {
        let flat: String = key
            .chars()
            .map(|c| {
                if c == KEY_SEPARATOR {
                    ENV_DELIMITER
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect();

        self.insert(format!("{ENV_PREFIX}{flat}"), key);
        self.insert(format!("{ENV_LITERAL_PREFIX}{flat}"), key);
    }

    /// Canonical key for an exact environment variable name, if registered.
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.entries.get(variable).map(String::as_str)
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.entries.contains_key(variable)
    }

    /// Registered environment variable names, in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Default secret alias table: two spellings per secret-capable key.
    pub fn secrets() -> Self {
        let mut map = Self::new();
        for key in DEFAULT_SECRET_KEYS {
            map.insert_aliases(key);
        }
        map
    }
}

/// Set of environment variable names suppressed during plain value mapping.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    names: HashSet<String>,
}

impl IgnoreList {
    /// Create an empty ignore list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore list covering every variable name of a key map.
    ///
    /// Used so that secret-bearing variables never leak through the plain
    /// value pass; their file paths are only visible to the secret resolver.
    pub fn covering(key_map: &KeyMap) -> Self {
        Self {
            names: key_map.variables().map(str::to_owned).collect(),
        }
    }

    pub fn insert(&mut self, variable: impl Into<String>) {
        self.names.insert(variable.into());
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.names.contains(variable)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_aliases_registers_both_spellings() {
        let mut map = KeyMap::new();
        map.insert_aliases("storage.mysql.password");

        assert_eq!(
            map.get("AUTHELIA_STORAGE_MYSQL_PASSWORD"),
            Some("storage.mysql.password")
        );
        assert_eq!(
            map.get("AUTHELIA__STORAGE_MYSQL_PASSWORD"),
            Some("storage.mysql.password")
        );
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut map = KeyMap::new();
        map.insert("AUTHELIA_JWT_SECRET", "jwt_secret");

        assert_eq!(map.get("AUTHELIA_JWT_SECRET"), Some("jwt_secret"));
        assert_eq!(map.get("authelia_jwt_secret"), None);
    }

    #[test]
    fn test_default_secret_table_covers_all_keys() {
        let map = KeyMap::secrets();

        // Two spellings per secret key.
        assert_eq!(map.len(), crate::constants::DEFAULT_SECRET_KEYS.len() * 2);
        assert_eq!(map.get("AUTHELIA_JWT_SECRET"), Some("jwt_secret"));
        assert_eq!(map.get("AUTHELIA__JWT_SECRET"), Some("jwt_secret"));
        assert_eq!(
            map.get("AUTHELIA_SESSION_REDIS_PASSWORD"),
            Some("session.redis.password")
        );
    }

    #[test]
    fn test_covering_ignore_list() {
        let map = KeyMap::secrets();
        let ignored = IgnoreList::covering(&map);

        assert_eq!(ignored.len(), map.len());
        assert!(ignored.contains("AUTHELIA_JWT_SECRET"));
        assert!(ignored.contains("AUTHELIA__NOTIFIER_SMTP_PASSWORD"));
        assert!(!ignored.contains("AUTHELIA_THEME"));
    }
}
