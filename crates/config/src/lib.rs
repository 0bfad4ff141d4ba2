//! Configuration management for the Cloudera Manager client.
//!
//! This crate provides types and loaders for managing Cloudera Manager
//! connection, credential, and command-polling configuration from
//! environment variables, `.env` files, and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig, PollingConfig};
