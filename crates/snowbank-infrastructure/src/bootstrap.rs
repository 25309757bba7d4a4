//! Container bootstrap
//!
//! Builds a [`Container`] from [`AppConfig`]: picks the reporter, applies the
//! container settings and registers every configured location in order.

use std::sync::Arc;

use snowbank_application::discovery::LinkedDiscovery;
use snowbank_application::{Container, FileReporter};
use snowbank_domain::DiscoveryProvider;
use snowbank_domain::error::Result;
use tracing::info;

use crate::config::{AppConfig, ContainerConfig};

/// Build a container over `discovery` and register the configured locations
///
/// Stops at the first failing location; its error is returned unchanged.
pub fn bootstrap_container(
    config: &AppConfig,
    discovery: Arc<dyn DiscoveryProvider>,
) -> Result<Container> {
    let container = Container::builder(discovery)
        .with_reporter(Arc::new(file_reporter(&config.container)))
        .with_settings(config.container.settings())
        .build();

    for location in &config.container.locations {
        container.register(location)?;
    }

    info!(
        locations = config.container.locations.len(),
        snowflakes = container.len(),
        "Container bootstrapped"
    );
    Ok(container)
}

/// Build a container over the link-time snowflake registry
pub fn bootstrap_linked_container(config: &AppConfig) -> Result<Container> {
    bootstrap_container(config, Arc::new(LinkedDiscovery::new()))
}

fn file_reporter(config: &ContainerConfig) -> FileReporter {
    match &config.report_dir {
        Some(dir) => FileReporter::new().with_base_dir(dir),
        None => FileReporter::new(),
    }
}
