//! Naming-convention helpers for environment variable translation.
//!
//! Responsibilities:
//! - Detect the reserved `AUTHELIA_` prefix and its doubled-delimiter form.
//! - Derive canonical dotted keys from double-delimiter variable suffixes.
//!
//! Does NOT handle:
//! - Key Map lookups or Ignore List membership (see `mapper.rs`).
//! - Secret file resolution (see `secrets.rs`).
//!
//! Invariants:
//! - All functions are pure; translation never fails, it declines (`None`).
//! - A suffix is only translated when it starts with a known top-level
//!   segment; the longest matching segment wins, so multi-word segments such
//!   as `access_control` keep their literal underscore.

use crate::constants::{
    ENV_DELIMITER, ENV_LITERAL_PREFIX, ENV_PREFIX, KEY_SEPARATOR, KNOWN_ROOT_SEGMENTS,
};

/// Whether `name` carries the reserved environment prefix.
pub fn has_env_prefix(name: &str) -> bool {
    name.starts_with(ENV_PREFIX)
}

/// Extract the suffix of a double-delimiter variable name.
///
/// Returns `None` for single-delimiter names and for a bare prefix with no
/// suffix at all.
pub fn literal_key_suffix(name: &str) -> Option<&str> {
    match name.strip_prefix(ENV_LITERAL_PREFIX) {
        Some("") | None => None,
        Some(suffix) => Some(suffix),
    }
}

/// Translate a double-delimiter suffix into a canonical dotted key.
///
/// The suffix is lowercased and matched against the known top-level segments.
/// On a match the remainder has its delimiters substituted with the key
/// separator; otherwise `None` is returned and the caller falls back to
/// identity passthrough.
pub fn canonicalize(suffix: &str) -> Option<String> {
    let lowered = suffix.to_ascii_lowercase();
    let root = known_root(&lowered)?;

    if lowered.len() == root.len() {
        return Some(lowered);
    }

    let rest = &lowered[root.len() + 1..];
    let mut key = String::with_capacity(lowered.len() + 1);
    key.push_str(root);
    key.push(KEY_SEPARATOR);
    for c in rest.chars() {
        key.push(if c == ENV_DELIMITER { KEY_SEPARATOR } else { c });
    }

    Some(key)
}

/// Longest known top-level segment that `lowered` starts with, where the
/// segment is followed by either the end of the string or a delimiter.
fn known_root(lowered: &str) -> Option<&'static str> {
    KNOWN_ROOT_SEGMENTS
        .iter()
        .copied()
        .filter(|root| {
            lowered.strip_prefix(root).is_some_and(|rest| {
                rest.is_empty() || rest.starts_with(ENV_DELIMITER)
            })
        })
        .max_by_key(|root| root.len())
}
