//! # Domain Layer
//!
//! Core types of the Snowbank container: the metadata declared for a
//! snowflake, the descriptor of the type behind it, the ports through which
//! snowflakes are discovered and reported, and the error taxonomy.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `MetadataDescriptor`, `TypeDescriptor`, `TypeShape`, policies |
//! | [`ports`] | `DiscoveryProvider` and `Reporter` interfaces |
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`constants`] | Report layout and marker names |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{BoxError, Error, Result};
pub use ports::{DiscoveredType, DiscoveryProvider, Reporter};
pub use value_objects::{
    Instance, MetadataDescriptor, ReportFailurePolicy, TypeDescriptor, TypeShape,
};
