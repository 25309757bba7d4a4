//! Configuration management
//!
//! Layered configuration for the container and its ambient services.
//! Defaults are overridden by a TOML file, which is overridden by
//! `SNOWBANK__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ContainerConfig, LoggingConfig};
