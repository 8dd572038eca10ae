//! Environment configuration ingestion for the Authelia server.
//!
//! This crate translates flat, delimiter-encoded environment variables
//! (`AUTHELIA_*`) into the dotted key paths used by the configuration tree,
//! and resolves secret variables whose values are filesystem paths by reading
//! the referenced files. IO failures are collected on a [`Validator`] instead
//! of aborting the load, so the caller can report everything at once.

pub mod constants;
mod convention;
mod keymap;
mod loader;
mod mapper;
mod secrets;
mod validator;

pub use keymap::{IgnoreList, KeyMap};
pub use loader::{ConfigError, ConfigValue, EnvironmentSource};
pub use mapper::EnvKeyMapper;
pub use secrets::SecretResolver;
pub use validator::Validator;
