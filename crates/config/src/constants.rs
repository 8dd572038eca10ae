//! Centralized constants for environment configuration ingestion.
//!
//! This module contains the naming-convention contract shared by the key
//! mapper, the secret resolver, and the environment source.

/// Prefix identifying environment variables that belong to this process.
pub const ENV_PREFIX: &str = "AUTHELIA_";

/// Doubled-delimiter prefix marking "the suffix is a literal nested key".
pub const ENV_LITERAL_PREFIX: &str = "AUTHELIA__";

/// Delimiter used within environment variable names.
pub const ENV_DELIMITER: char = '_';

/// Separator used within canonical configuration keys.
pub const KEY_SEPARATOR: char = '.';

/// Top-level configuration segments recognized by the naming convention.
///
/// A double-delimiter variable is only translated when its lowercased suffix
/// starts with one of these segments; anything else is passed through
/// untouched so unknown variables are left alone.
pub const KNOWN_ROOT_SEGMENTS: &[&str] = &[
    "access_control",
    "authentication_backend",
    "duo_api",
    "host",
    "log",
    "notifier",
    "port",
    "regulation",
    "server",
    "session",
    "storage",
    "theme",
    "tls_cert",
    "tls_key",
    "totp",
];

/// Canonical keys whose values may be supplied through secret files.
///
/// Each key yields two environment aliases (single- and double-delimiter
/// spellings) in the default secret [`KeyMap`](crate::KeyMap), and those
/// alias names populate the default [`IgnoreList`](crate::IgnoreList).
pub const DEFAULT_SECRET_KEYS: &[&str] = &[
    "authentication_backend.ldap.password",
    "duo_api.secret_key",
    "jwt_secret",
    "notifier.smtp.password",
    "session.redis.password",
    "session.secret",
    "storage.mysql.password",
    "storage.postgres.password",
];
