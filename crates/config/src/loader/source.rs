//! Two-pass environment source.
//!
//! Responsibilities:
//! - Collect every `AUTHELIA_`-prefixed variable from the process
//!   environment.
//! - Pass 1: translate plain variables through the key mapper.
//! - Pass 2: resolve secret variables through the secret resolver, letting
//!   secret values win over plain values for the same key.
//! - Optionally load a `.env` file first (gated by `DOTENV_DISABLED`).
//!
//! Invariants:
//! - Variables are processed in sorted name order so validator diagnostics
//!   are deterministic.
//! - Secret variable names sit on the mapper's ignore list, so their file
//!   paths never surface as plain values.

use std::collections::BTreeMap;

use secrecy::SecretString;
use tracing::debug;

use super::error::ConfigError;
use crate::convention;
use crate::keymap::{IgnoreList, KeyMap};
use crate::mapper::EnvKeyMapper;
use crate::secrets::SecretResolver;
use crate::validator::Validator;

/// A single resolved configuration value.
#[derive(Debug, Clone)]
pub enum ConfigValue {
    /// Plain value taken verbatim from the environment.
    Plain(String),
    /// Secret value read from a file; redacted in `Debug` output.
    Secret(SecretString),
}

/// Loads configuration overrides from the process environment.
pub struct EnvironmentSource {
    mapper: EnvKeyMapper,
    secrets: KeyMap,
}

impl Default for EnvironmentSource {
    /// Source over the default tables: no legacy renames, the built-in
    /// secret alias table, and an ignore list covering it.
    fn default() -> Self {
        let secrets = KeyMap::secrets();
        let ignored = IgnoreList::covering(&secrets);
        Self::new(KeyMap::new(), ignored, secrets)
    }
}

impl EnvironmentSource {
    /// Create a source over explicit tables.
    ///
    /// `ignored` should cover every variable name in `secrets`, otherwise
    /// secret file paths leak through the plain pass as values.
    pub fn new(key_map: KeyMap, ignored: IgnoreList, secrets: KeyMap) -> Self {
        Self {
            mapper: EnvKeyMapper::new(key_map, ignored),
            secrets,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or
    /// "1", the `.env` file will not be loaded (useful for testing). Missing
    /// `.env` files are silently ignored.
    ///
    /// SAFETY: Error values never include raw .env line contents to prevent
    /// secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Resolve every in-scope environment variable.
    ///
    /// IO failures during secret resolution are appended to `validator`; the
    /// affected keys receive empty values and the load keeps going.
    pub fn load(&self, validator: &mut Validator) -> BTreeMap<String, ConfigValue> {
        let mut variables: Vec<(String, String)> = std::env::vars()
            .filter(|(name, _)| convention::has_env_prefix(name))
            .collect();
        variables.sort();

        let mut resolved = BTreeMap::new();

        for (name, value) in &variables {
            if let Some((key, value)) = self.mapper.map(name, value) {
                resolved.insert(key, ConfigValue::Plain(value.to_owned()));
            }
        }

        let resolver = SecretResolver::new(&self.secrets);
        for (name, path) in &variables {
            if let Some((key, secret)) = resolver.resolve(name, path, validator) {
                resolved.insert(key, ConfigValue::Secret(secret));
            }
        }

        debug!(
            variables = variables.len(),
            entries = resolved.len(),
            errors = validator.errors().len(),
            "environment configuration loaded"
        );

        resolved
    }
}
