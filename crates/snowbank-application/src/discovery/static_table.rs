//! Static table discovery
//!
//! Snowflakes are declared explicitly, per location, before the container
//! registers that location.

use std::collections::HashMap;

use snowbank_domain::error::Result;
use snowbank_domain::{DiscoveredType, DiscoveryProvider, MetadataDescriptor, TypeDescriptor};

/// Discovery provider backed by a declaration table
///
/// # Example
///
/// ```
/// use snowbank_application::discovery::StaticTableDiscovery;
/// use snowbank_domain::{DiscoveryProvider, MetadataDescriptor, TypeDescriptor};
///
/// #[derive(Default)]
/// struct Fox;
///
/// let table = StaticTableDiscovery::new()
///     .with("zoo", TypeDescriptor::of::<Fox>(), MetadataDescriptor::new("Mindy")?);
///
/// assert_eq!(table.discover("zoo")?.len(), 1);
/// assert!(table.discover("farm")?.is_empty());
/// # Ok::<(), snowbank_domain::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTableDiscovery {
    table: HashMap<String, Vec<DiscoveredType>>,
}

impl StaticTableDiscovery {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a snowflake at `location`
    pub fn with<S: Into<String>>(
        mut self,
        location: S,
        type_descriptor: TypeDescriptor,
        descriptor: MetadataDescriptor,
    ) -> Self {
        self.declare(location, DiscoveredType::new(type_descriptor, descriptor));
        self
    }

    /// Declare a snowflake at `location` in place
    pub fn declare<S: Into<String>>(&mut self, location: S, discovered: DiscoveredType) {
        self.table
            .entry(location.into())
            .or_default()
            .push(discovered);
    }

    /// Locations that have at least one declaration
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

impl DiscoveryProvider for StaticTableDiscovery {
    fn discover(&self, location: &str) -> Result<Vec<DiscoveredType>> {
        Ok(self.table.get(location).cloned().unwrap_or_default())
    }

    fn provider_name(&self) -> &str {
        "static-table"
    }
}
