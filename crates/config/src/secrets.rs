//! Secret environment variable resolution.
//!
//! Responsibilities:
//! - Map a secret-bearing environment variable to its canonical key.
//! - Read the file the variable points at and substitute its contents as the
//!   effective value.
//! - Record IO failures on the shared [`Validator`] instead of raising them,
//!   so one bad secret file never aborts the whole configuration load.
//!
//! Does NOT handle:
//! - Plain value translation (see `mapper.rs`).
//! - Deciding whether accumulated errors block startup (caller's policy).
//!
//! Invariants:
//! - Variable names absent from the secret table are silently ignored; this
//!   keeps deployments forward/backward compatible when secret variables are
//!   added or removed.
//! - On IO failure the mapped key still comes back, paired with an empty
//!   value, and exactly one error is appended to the validator.
//! - Secret contents are never logged.

use std::fs;

use secrecy::SecretString;
use tracing::debug;

use crate::keymap::KeyMap;
use crate::loader::ConfigError;
use crate::validator::Validator;

/// Resolves secret variables whose values are filesystem paths.
#[derive(Debug, Clone, Copy)]
pub struct SecretResolver<'a> {
    key_map: &'a KeyMap,
}

impl<'a> SecretResolver<'a> {
    /// Create a resolver over a secret alias table.
    pub fn new(key_map: &'a KeyMap) -> Self {
        Self { key_map }
    }

    /// Resolve one secret variable.
    ///
    /// `path` is the variable's raw value, interpreted as a filesystem path.
    /// Returns `None` for names absent from the table, without touching the
    /// validator. On a successful read the file contents (trailing
    /// newline/whitespace stripped) become the value; on IO failure the key
    /// is paired with an empty value and the failure is recorded.
    pub fn resolve(
        &self,
        name: &str,
        path: &str,
        validator: &mut Validator,
    ) -> Option<(String, SecretString)> {
        let key = self.key_map.get(name)?;

        match fs::read(path) {
            Ok(raw) => {
                let content = String::from_utf8_lossy(&raw);
                let content = content.trim_end();
                debug!(key, "resolved secret from file");
                Some((key.to_owned(), SecretString::new(content.into())))
            }
            Err(source) => {
                validator.push_error(ConfigError::SecretRead {
                    path: path.to_owned(),
                    key: key.to_owned(),
                    source,
                });
                Some((key.to_owned(), SecretString::new("".into())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    fn secret_table() -> KeyMap {
        let mut key_map = KeyMap::new();
        key_map.insert("AUTHELIA_JWT_SECRET", "jwt_secret");
        key_map.insert("AUTHELIA__JWT_SECRET", "jwt_secret");
        key_map.insert("AUTHELIA_FAKE_KEY", "fake_key");
        key_map.insert("AUTHELIA__FAKE_KEY", "fake_key");
        key_map.insert("AUTHELIA_STORAGE_MYSQL_FAKE_PASSWORD", "storage.mysql.fake_password");
        key_map.insert("AUTHELIA__STORAGE_MYSQL_FAKE_PASSWORD", "storage.mysql.fake_password");
        key_map.insert("AUTHELIA_THEME", "theme");
        key_map.insert("AUTHELIA__THEME", "theme");
        key_map
    }

    #[test]
    fn test_resolve_reads_file_contents() {
        let key_map = secret_table();
        let resolver = SecretResolver::new(&key_map);
        let mut validator = Validator::new();

        let dir = TempDir::new().unwrap();
        let secret_one = dir.path().join("secret_one");
        let secret_two = dir.path().join("secret_two");
        std::fs::write(&secret_one, "value one").unwrap();
        std::fs::write(&secret_two, "value two").unwrap();

        let (key, value) = resolver
            .resolve("AUTHELIA_FAKE_KEY", secret_one.to_str().unwrap(), &mut validator)
            .unwrap();
        assert_eq!(key, "fake_key");
        assert_eq!(value.expose_secret(), "value one");

        let (key, value) = resolver
            .resolve(
                "AUTHELIA__STORAGE_MYSQL_FAKE_PASSWORD",
                secret_two.to_str().unwrap(),
                &mut validator,
            )
            .unwrap();
        assert_eq!(key, "storage.mysql.fake_password");
        assert_eq!(value.expose_secret(), "value two");

        assert!(validator.errors().is_empty());
        assert!(validator.warnings().is_empty());
    }

    #[test]
    fn test_resolve_strips_trailing_newline_only() {
        let key_map = secret_table();
        let resolver = SecretResolver::new(&key_map);
        let mut validator = Validator::new();

        let dir = TempDir::new().unwrap();
        let secret = dir.path().join("secret");
        std::fs::write(&secret, "value one\n").unwrap();

        let (_, value) = resolver
            .resolve("AUTHELIA_JWT_SECRET", secret.to_str().unwrap(), &mut validator)
            .unwrap();
        assert_eq!(value.expose_secret(), "value one");

        std::fs::write(&secret, "  spaced value\n\n").unwrap();
        let (_, value) = resolver
            .resolve("AUTHELIA_JWT_SECRET", secret.to_str().unwrap(), &mut validator)
            .unwrap();
        assert_eq!(value.expose_secret(), "  spaced value");

        assert!(validator.errors().is_empty());
    }

    #[test]
    fn test_undetected_secret_is_silently_ignored() {
        let key_map = secret_table();
        let resolver = SecretResolver::new(&key_map);
        let mut validator = Validator::new();

        let resolved = resolver.resolve("AUTHELIA__SESSION_DOMAIN", "/tmp/not-a-path", &mut validator);
        assert!(resolved.is_none());
        assert!(validator.errors().is_empty());
        assert!(validator.warnings().is_empty());
    }

    #[test]
    fn test_unreadable_path_records_one_error_and_yields_empty_value() {
        let key_map = secret_table();
        let resolver = SecretResolver::new(&key_map);
        let mut validator = Validator::new();

        // A directory cannot be read as a file, even by privileged users.
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap().to_owned();

        let (key, value) = resolver
            .resolve("AUTHELIA_THEME", &path, &mut validator)
            .unwrap();
        assert_eq!(key, "theme");
        assert_eq!(value.expose_secret(), "");

        assert_eq!(validator.errors().len(), 1);
        assert!(validator.warnings().is_empty());

        let message = validator.errors()[0].to_string();
        let prefix = format!("secret file path {path} for key theme could not be read: ");
        assert!(
            message.starts_with(&prefix),
            "unexpected error message: {message}"
        );
        assert!(message.len() > prefix.len(), "missing IO error text");
    }

    #[test]
    fn test_missing_file_records_os_error_text() {
        let key_map = secret_table();
        let resolver = SecretResolver::new(&key_map);
        let mut validator = Validator::new();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist");
        let path = path.to_str().unwrap();

        let (key, value) = resolver.resolve("AUTHELIA_JWT_SECRET", path, &mut validator).unwrap();
        assert_eq!(key, "jwt_secret");
        assert_eq!(value.expose_secret(), "");

        assert_eq!(validator.errors().len(), 1);
        let message = validator.errors()[0].to_string();
        assert!(message.starts_with(&format!(
            "secret file path {path} for key jwt_secret could not be read: "
        )));
        assert!(message.contains("No such file"), "got: {message}");
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_records_os_error_text() {
        use std::os::unix::fs::PermissionsExt;

        let key_map = secret_table();
        let resolver = SecretResolver::new(&key_map);
        let mut validator = Validator::new();

        let dir = TempDir::new().unwrap();
        let secret = dir.path().join("inaccessible");
        std::fs::write(&secret, "secret").unwrap();
        std::fs::set_permissions(&secret, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users bypass file modes; nothing to assert in that case.
        if std::fs::read(&secret).is_ok() {
            return;
        }

        let (key, value) = resolver
            .resolve("AUTHELIA_THEME", secret.to_str().unwrap(), &mut validator)
            .unwrap();
        assert_eq!(key, "theme");
        assert_eq!(value.expose_secret(), "");

        assert_eq!(validator.errors().len(), 1);
        assert!(validator.warnings().is_empty());
        assert!(
            validator.errors()[0]
                .to_string()
                .contains("ermission denied")
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let key_map = secret_table();
        let resolver = SecretResolver::new(&key_map);
        let mut validator = Validator::new();

        let dir = TempDir::new().unwrap();
        let secret = dir.path().join("secret");
        std::fs::write(&secret, "stable").unwrap();
        let path = secret.to_str().unwrap();

        let first = resolver.resolve("AUTHELIA_FAKE_KEY", path, &mut validator).unwrap();
        let second = resolver.resolve("AUTHELIA_FAKE_KEY", path, &mut validator).unwrap();
        assert_eq!(first.0, second.0);
        assert_eq!(first.1.expose_secret(), second.1.expose_secret());
        assert!(validator.errors().is_empty());
    }
}
