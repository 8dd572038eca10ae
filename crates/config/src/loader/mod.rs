//! Environment configuration loading.
//!
//! Responsibilities:
//! - Walk the process environment and produce resolved key/value pairs via
//!   the key mapper and the secret resolver.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading
//!   in tests.
//!
//! Does NOT handle:
//! - Applying resolved pairs to the configuration tree (caller's store).
//! - Startup abort decisions after a load with errors (caller's policy).

mod error;
mod source;

pub use error::ConfigError;
pub use source::{ConfigValue, EnvironmentSource};
