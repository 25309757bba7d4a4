//! Container entries
//!
//! An [`Entry`] wraps one discovered snowflake and enforces its instantiation
//! policy on every [`Entry::create`] call.
//!
//! ```text
//!            create()
//!               │
//!        denied? ── yes ──▶ Err(DeniedAccess)
//!               │ no
//!     transient? ── yes ──▶ construct ──▶ report ──▶ Ok(fresh)
//!               │ no
//!        cached? ── yes ──▶ Ok(cached)
//!               │ no
//!           construct ──▶ cache ──▶ report ──▶ Ok(cached)
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use snowbank_domain::error::{Error, Result};
use snowbank_domain::{
    DiscoveredType, Instance, MetadataDescriptor, ReportFailurePolicy, Reporter, TypeDescriptor,
};
use tracing::{debug, warn};

/// Registry wrapper around one snowflake
///
/// The singleton cache is guarded by a mutex held across construction, so
/// concurrent first lookups build the instance exactly once. A failed
/// construction leaves the cache empty and the next call retries.
pub struct Entry {
    descriptor: MetadataDescriptor,
    type_descriptor: TypeDescriptor,
    cached: Mutex<Option<Instance>>,
    reporter: Arc<dyn Reporter>,
    report_failure: ReportFailurePolicy,
}

impl Entry {
    /// Build an entry for a discovered snowflake
    pub fn new(
        discovered: DiscoveredType,
        reporter: Arc<dyn Reporter>,
        report_failure: ReportFailurePolicy,
    ) -> Self {
        Self {
            descriptor: discovered.descriptor,
            type_descriptor: discovered.type_descriptor,
            cached: Mutex::new(None),
            reporter,
            report_failure,
        }
    }

    /// Snowflake name
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Registration metadata
    pub fn descriptor(&self) -> &MetadataDescriptor {
        &self.descriptor
    }

    /// Type behind the snowflake
    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    /// Whether a singleton instance has been cached
    pub fn is_cached(&self) -> bool {
        self.cache().is_some()
    }

    /// Read-only snapshot of this entry for introspection
    pub fn metadata(&self) -> EntryMetadata {
        EntryMetadata {
            descriptor: self.descriptor.clone(),
            type_name: self.type_descriptor.type_name().to_string(),
            cached: self.is_cached(),
        }
    }

    /// Produce an instance according to the entry's policy
    ///
    /// # Errors
    ///
    /// * [`Error::DeniedAccess`] - the snowflake is denied
    /// * [`Error::Instantiation`] - the constructor failed
    /// * [`Error::Report`] - the report failed under [`ReportFailurePolicy::Propagate`]
    pub fn create(&self) -> Result<Instance> {
        if self.descriptor.is_denied() {
            return Err(Error::denied_access(self.name()));
        }

        if self.descriptor.is_transient() {
            let instance = self.construct()?;
            self.report()?;
            return Ok(instance);
        }

        let mut cached = self.cache();
        if let Some(instance) = cached.as_ref() {
            return Ok(Arc::clone(instance));
        }
        let instance = self.construct()?;
        *cached = Some(Arc::clone(&instance));
        drop(cached);

        self.report()?;
        Ok(instance)
    }

    fn construct(&self) -> Result<Instance> {
        let instance = self
            .type_descriptor
            .construct()
            .map_err(|source| Error::instantiation(self.name(), source))?;
        debug!(
            snowflake = self.name(),
            type_name = self.type_descriptor.type_name(),
            "Snowflake created"
        );
        Ok(instance)
    }

    fn report(&self) -> Result<()> {
        let Some(destination) = self.descriptor.report_destination() else {
            return Ok(());
        };
        let Err(error) = self
            .reporter
            .report(&self.type_descriptor, &self.descriptor, destination)
        else {
            return Ok(());
        };
        match self.report_failure {
            ReportFailurePolicy::Log => {
                warn!(
                    snowflake = self.name(),
                    destination,
                    error = %error,
                    "Snowflake report failed"
                );
                Ok(())
            }
            ReportFailurePolicy::Propagate => Err(error),
        }
    }

    // The cache is never left half-written, so a poisoned lock is still usable.
    fn cache(&self) -> MutexGuard<'_, Option<Instance>> {
        self.cached.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("descriptor", &self.descriptor)
            .field("type_name", &self.type_descriptor.type_name())
            .field("cached", &self.is_cached())
            .field("report_failure", &self.report_failure)
            .finish()
    }
}

/// Introspection snapshot of an [`Entry`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryMetadata {
    /// Registration metadata
    pub descriptor: MetadataDescriptor,
    /// Canonical name of the type behind the snowflake
    pub type_name: String,
    /// Whether a singleton instance has been cached
    pub cached: bool,
}
