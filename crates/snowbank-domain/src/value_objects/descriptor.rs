//! Snowflake metadata descriptor
//!
//! The registration intent declared for a discovered type: its unique name and
//! the instantiation policy the container must enforce for it.

use serde::Serialize;

use crate::constants::{MARKER_DENIED, MARKER_REPORT, MARKER_SNOWFLAKE, MARKER_TRANSIENT};
use crate::error::{Error, Result};

/// Immutable registration metadata for one snowflake
///
/// Produced by a discovery provider and consumed by the container when it
/// builds entries. The name is validated at construction time and an empty
/// report destination is treated as "no report".
///
/// # Example
///
/// ```
/// use snowbank_domain::MetadataDescriptor;
///
/// let descriptor = MetadataDescriptor::new("Mindy")?
///     .with_transient(true)
///     .with_report("mindy.txt");
///
/// assert_eq!(descriptor.name(), "Mindy");
/// assert!(descriptor.is_transient());
/// assert_eq!(descriptor.report_destination(), Some("mindy.txt"));
/// # Ok::<(), snowbank_domain::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataDescriptor {
    name: String,
    transient: bool,
    denied: bool,
    report_destination: Option<String>,
}

impl MetadataDescriptor {
    /// Create a singleton, allowed descriptor with the given name
    ///
    /// Fails with [`Error::InvalidArgument`] when the name is empty or blank.
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("Snowflake name cannot be empty"));
        }
        Ok(Self {
            name,
            transient: false,
            denied: false,
            report_destination: None,
        })
    }

    /// Set whether a fresh instance is produced on every request
    pub fn with_transient(mut self, transient: bool) -> Self {
        self.transient = transient;
        self
    }

    /// Set whether instantiation is forbidden
    pub fn with_denied(mut self, denied: bool) -> Self {
        self.denied = denied;
        self
    }

    /// Set the report destination; an empty destination disables reporting
    pub fn with_report<S: Into<String>>(mut self, destination: S) -> Self {
        let destination = destination.into();
        self.report_destination = (!destination.is_empty()).then_some(destination);
        self
    }

    /// Unique snowflake name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the snowflake is transient (not a singleton)
    pub fn is_transient(&self) -> bool {
        self.transient
    }

    /// Whether instantiation is denied
    pub fn is_denied(&self) -> bool {
        self.denied
    }

    /// Report destination, if reporting is enabled
    pub fn report_destination(&self) -> Option<&str> {
        self.report_destination.as_deref()
    }

    /// Declared metadata markers, in declaration order
    pub fn markers(&self) -> Vec<String> {
        let mut markers = vec![format!("@{}(name = {:?})", MARKER_SNOWFLAKE, self.name)];
        if self.transient {
            markers.push(format!("@{MARKER_TRANSIENT}"));
        }
        if self.denied {
            markers.push(format!("@{MARKER_DENIED}"));
        }
        if let Some(destination) = &self.report_destination {
            markers.push(format!(
                "@{}(destination = {:?})",
                MARKER_REPORT, destination
            ));
        }
        markers
    }
}
