//! Domain ports
//!
//! Interfaces the container depends on. Implementations live in
//! `snowbank-application`.

pub mod discovery;
pub mod reporter;

pub use discovery::{DiscoveredType, DiscoveryProvider};
pub use reporter::Reporter;
