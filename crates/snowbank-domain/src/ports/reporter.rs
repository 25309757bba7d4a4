//! Reporter Port
//!
//! Writes a diagnostic dump of a snowflake's structure after it is
//! constructed. Entries decide what to do with a failure; the reporter only
//! reports it.

use crate::error::Result;
use crate::value_objects::{MetadataDescriptor, TypeDescriptor};

/// Reporter port
pub trait Reporter: Send + Sync {
    /// Write the report for `type_descriptor` to `destination`
    fn report(
        &self,
        type_descriptor: &TypeDescriptor,
        metadata: &MetadataDescriptor,
        destination: &str,
    ) -> Result<()>;
}
