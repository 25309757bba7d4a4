//! Discovery Provider Port
//!
//! Defines how the container learns which snowflakes live at a location.
//! The container never scans anything itself; any implementation that maps a
//! location to a set of described types is substitutable (a static table, a
//! compile-time registry, a build-time generated list).

use crate::error::Result;
use crate::value_objects::{MetadataDescriptor, TypeDescriptor};

/// One discovered snowflake: its type and its declared metadata
#[derive(Debug, Clone)]
pub struct DiscoveredType {
    /// Handle used to construct instances and describe the type
    pub type_descriptor: TypeDescriptor,
    /// Registration metadata declared for the type
    pub descriptor: MetadataDescriptor,
}

impl DiscoveredType {
    /// Pair a type with its metadata
    pub fn new(type_descriptor: TypeDescriptor, descriptor: MetadataDescriptor) -> Self {
        Self {
            type_descriptor,
            descriptor,
        }
    }
}

/// Discovery provider port
///
/// # Example
///
/// ```ignore
/// use snowbank_domain::ports::DiscoveryProvider;
///
/// fn count(provider: &dyn DiscoveryProvider) -> snowbank_domain::Result<usize> {
///     Ok(provider.discover("zoo::animals")?.len())
/// }
/// ```
pub trait DiscoveryProvider: Send + Sync {
    /// Return every snowflake declared at `location`
    ///
    /// A location with no snowflakes yields an empty set, not an error.
    fn discover(&self, location: &str) -> Result<Vec<DiscoveredType>>;

    /// Provider name for diagnostics
    fn provider_name(&self) -> &str;
}
