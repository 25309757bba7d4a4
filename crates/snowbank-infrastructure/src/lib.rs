//! # Infrastructure Layer
//!
//! Ambient services around the Snowbank container: layered configuration,
//! structured logging, error context helpers and container bootstrap.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | `AppConfig` and the figment-based `ConfigLoader` |
//! | [`logging`] | tracing subscriber setup |
//! | [`error_ext`] | `ErrorContext` extension trait |
//! | [`bootstrap`] | Container construction from configuration |
//! | [`constants`] | File names, env prefixes, defaults |
//!
//! ## Example
//!
//! ```no_run
//! use snowbank_infrastructure::bootstrap::bootstrap_linked_container;
//! use snowbank_infrastructure::config::ConfigLoader;
//! use snowbank_infrastructure::logging::init_logging;
//!
//! let config = ConfigLoader::new().load()?;
//! init_logging(&config.logging)?;
//! let container = bootstrap_linked_container(&config)?;
//! println!("{} snowflakes", container.len());
//! # Ok::<(), snowbank_domain::Error>(())
//! ```

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{bootstrap_container, bootstrap_linked_container};
pub use config::{AppConfig, ConfigLoader, ContainerConfig, LoggingConfig};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
