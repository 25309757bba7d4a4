//! Value objects
//!
//! Immutable data describing snowflakes and the policies applied to them.

pub mod descriptor;
pub mod policy;
pub mod type_info;

pub use descriptor::MetadataDescriptor;
pub use policy::ReportFailurePolicy;
pub use type_info::{Instance, TypeDescriptor, TypeShape};
