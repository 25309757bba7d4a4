//! Link-time snowflake registry
//!
//! Snowflakes register themselves with a `linkme` distributed slice and are
//! discovered at runtime by location, the way a package scan would find
//! annotated classes.
//!
//! ## Registering a Snowflake
//!
//! ```ignore
//! use snowbank_application::discovery::{SNOWFLAKES, SnowflakeRegistration};
//! use snowbank_domain::TypeDescriptor;
//!
//! #[derive(Default)]
//! pub struct Fox;
//!
//! #[linkme::distributed_slice(SNOWFLAKES)]
//! static MINDY: SnowflakeRegistration = SnowflakeRegistration {
//!     location: module_path!(),
//!     name: "Mindy",
//!     transient: false,
//!     denied: false,
//!     report_destination: "",
//!     type_descriptor: TypeDescriptor::of::<Fox>,
//! };
//! ```
//!
//! A registration matches a location when its own location is equal to it or
//! nested below it (`zoo` matches `zoo`, `zoo::canids` and `zoo.canids`, but
//! not `zookeeper`).

use snowbank_domain::error::{Error, Result};
use snowbank_domain::{DiscoveredType, DiscoveryProvider, MetadataDescriptor, TypeDescriptor};
use tracing::debug;

/// Compile-time declaration of one snowflake
#[derive(Debug)]
pub struct SnowflakeRegistration {
    /// Location the snowflake lives at (usually `module_path!()`)
    pub location: &'static str,
    /// Unique snowflake name
    pub name: &'static str,
    /// Fresh instance on every request
    pub transient: bool,
    /// Instantiation forbidden
    pub denied: bool,
    /// Report destination; empty disables reporting
    pub report_destination: &'static str,
    /// Describes and constructs the snowflake type
    pub type_descriptor: fn() -> TypeDescriptor,
}

impl SnowflakeRegistration {
    /// Whether this registration lives at or below `location`
    pub fn matches(&self, location: &str) -> bool {
        match self.location.strip_prefix(location) {
            Some("") => true,
            Some(rest) => rest.starts_with("::") || rest.starts_with('.'),
            None => false,
        }
    }

    /// Turn the declaration into a discovered type
    pub fn to_discovered(&self) -> Result<DiscoveredType> {
        let descriptor = MetadataDescriptor::new(self.name)?
            .with_transient(self.transient)
            .with_denied(self.denied)
            .with_report(self.report_destination);
        Ok(DiscoveredType::new((self.type_descriptor)(), descriptor))
    }
}

// Auto-collection via linkme distributed slices - snowflakes submit entries at compile time
#[linkme::distributed_slice]
pub static SNOWFLAKES: [SnowflakeRegistration] = [..];

/// Discovery provider reading link-time registrations
#[derive(Debug, Clone, Copy)]
pub struct LinkedDiscovery {
    registrations: &'static [SnowflakeRegistration],
}

impl LinkedDiscovery {
    /// Discover from the global [`SNOWFLAKES`] slice
    pub fn new() -> Self {
        Self {
            registrations: &SNOWFLAKES,
        }
    }

    /// Discover from an explicit set of registrations
    pub fn from_slice(registrations: &'static [SnowflakeRegistration]) -> Self {
        Self { registrations }
    }

    /// List all registered snowflakes as (location, name) pairs
    pub fn list(&self) -> Vec<(&'static str, &'static str)> {
        self.registrations
            .iter()
            .map(|registration| (registration.location, registration.name))
            .collect()
    }
}

impl Default for LinkedDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscoveryProvider for LinkedDiscovery {
    fn discover(&self, location: &str) -> Result<Vec<DiscoveredType>> {
        let found = self
            .registrations
            .iter()
            .filter(|registration| registration.matches(location))
            .map(|registration| {
                registration.to_discovered().map_err(|e| {
                    Error::discovery(
                        location,
                        format!("invalid registration at {}: {e}", registration.location),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(location, count = found.len(), "Linked snowflakes discovered");
        Ok(found)
    }

    fn provider_name(&self) -> &str {
        "linked"
    }
}
