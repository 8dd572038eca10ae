//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for configuration load failures.
//!
//! Does NOT handle:
//! - Accumulation or ordering of errors (see `validator.rs`).
//!
//! Invariants:
//! - `SecretRead` renders exactly as
//!   `secret file path {path} for key {key} could not be read: {io error}`;
//!   downstream reporting depends on that shape.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while loading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A secret variable pointed at a file that could not be read.
    #[error("secret file path {path} for key {key} could not be read: {source}")]
    SecretRead {
        path: String,
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
