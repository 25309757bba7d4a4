//! Snowflake container
//!
//! The registry that owns every [`Entry`] by name and the set of locations
//! already registered.
//!
//! ## Architecture
//!
//! ```text
//! register("zoo")
//!      │
//!      ▼
//! DiscoveryProvider::discover("zoo") ──▶ [(TypeDescriptor, MetadataDescriptor)]
//!      │
//!      ▼
//! name collision? ── yes ──▶ Err(DuplicateName)
//!      │ no
//!      ▼
//! entries["Mindy"] = Entry ──▶ locations += "zoo"
//!
//! lookup("Mindy") ──▶ entries["Mindy"].create()
//! ```
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use snowbank_application::Container;
//! use snowbank_application::discovery::StaticTableDiscovery;
//! use snowbank_domain::{MetadataDescriptor, TypeDescriptor};
//!
//! #[derive(Default)]
//! struct Fox {
//!     age: u32,
//! }
//!
//! let table = StaticTableDiscovery::new()
//!     .with("zoo", TypeDescriptor::of::<Fox>(), MetadataDescriptor::new("Mindy")?);
//! let container = Container::with_location(Arc::new(table), "zoo")?;
//!
//! let mindy = container.lookup_as::<Fox>("Mindy")?;
//! assert_eq!(mindy.age, 0);
//! # Ok::<(), snowbank_domain::Error>(())
//! ```

use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use snowbank_domain::error::{Error, Result};
use snowbank_domain::{DiscoveredType, DiscoveryProvider, Instance, ReportFailurePolicy, Reporter};
use tracing::{debug, info};

use crate::entry::{Entry, EntryMetadata};
use crate::reporting::FileReporter;
use crate::view::ReadOnly;

/// Behaviour switches of a container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerSettings {
    /// Validate a whole registration batch before inserting any entry
    ///
    /// When unset, entries inserted before a name collision in the same
    /// `register` call stay registered.
    pub atomic_registration: bool,
    /// What entries do when their report cannot be written
    pub report_failure: ReportFailurePolicy,
}

/// Name-keyed registry of snowflake entries
///
/// Every container owns its own entries and locations; there is no global
/// instance. Registration is serialized by an internal write lock and
/// construction happens outside of it.
pub struct Container {
    discovery: Arc<dyn DiscoveryProvider>,
    reporter: Arc<dyn Reporter>,
    settings: ContainerSettings,
    entries: RwLock<HashMap<String, Arc<Entry>>>,
    locations: RwLock<BTreeSet<String>>,
}

impl Container {
    /// Create an empty container with default settings and a [`FileReporter`]
    pub fn new(discovery: Arc<dyn DiscoveryProvider>) -> Self {
        Self::builder(discovery).build()
    }

    /// Start building a container
    pub fn builder(discovery: Arc<dyn DiscoveryProvider>) -> ContainerBuilder {
        ContainerBuilder::new(discovery)
    }

    /// Create a container and register `location` into it
    pub fn with_location(discovery: Arc<dyn DiscoveryProvider>, location: &str) -> Result<Self> {
        let container = Self::new(discovery);
        container.register(location)?;
        Ok(container)
    }

    /// Discover the snowflakes at `location` and add them to the container
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyLocation`] - `location` is empty or blank
    /// * [`Error::DuplicateName`] - a discovered name is already registered,
    ///   or appears twice in the batch
    /// * any error returned by the discovery provider
    ///
    /// On failure the location is not recorded. Without
    /// [`ContainerSettings::atomic_registration`], entries inserted before the
    /// collision remain registered.
    pub fn register(&self, location: &str) -> Result<()> {
        if location.trim().is_empty() {
            return Err(Error::EmptyLocation);
        }

        let discovered = self.discovery.discover(location)?;
        let count = discovered.len();

        let mut entries = self.write_entries();
        if self.settings.atomic_registration {
            check_batch(&entries, &discovered)?;
        }
        for found in discovered {
            match entries.entry(found.descriptor.name().to_string()) {
                MapEntry::Occupied(occupied) => {
                    return Err(Error::duplicate_name(occupied.key().as_str()));
                }
                MapEntry::Vacant(vacant) => {
                    debug!(
                        snowflake = vacant.key().as_str(),
                        type_name = found.type_descriptor.type_name(),
                        transient = found.descriptor.is_transient(),
                        denied = found.descriptor.is_denied(),
                        "Snowflake registered"
                    );
                    vacant.insert(Arc::new(Entry::new(
                        found,
                        Arc::clone(&self.reporter),
                        self.settings.report_failure,
                    )));
                }
            }
        }
        self.write_locations().insert(location.to_string());
        drop(entries);

        info!(
            location,
            count,
            provider = self.discovery.provider_name(),
            "Snowflake location registered"
        );
        Ok(())
    }

    /// Get an instance of the snowflake registered under `name`
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] - `name` is empty
    /// * [`Error::UnknownName`] - nothing is registered under `name`
    /// * [`Error::DeniedAccess`], [`Error::Instantiation`], [`Error::Report`] -
    ///   from [`Entry::create`]
    pub fn lookup(&self, name: &str) -> Result<Instance> {
        self.entry(name)?.create()
    }

    /// Get an instance and downcast it to `T`
    pub fn lookup_as<T>(&self, name: &str) -> Result<Arc<T>>
    where
        T: std::any::Any + Send + Sync,
    {
        self.lookup(name)?
            .downcast::<T>()
            .map_err(|_| Error::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Whether a snowflake is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.read_entries().contains_key(name)
    }

    /// Number of registered snowflakes
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    /// Whether no snowflake is registered
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// Registered snowflake names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read_entries().keys().cloned().collect();
        names.sort();
        names
    }

    /// Snapshot of every location registered so far
    pub fn locations(&self) -> ReadOnly<BTreeSet<String>> {
        ReadOnly::new(self.read_locations().clone())
    }

    /// Snapshot of every entry's metadata, keyed by name
    pub fn entries(&self) -> ReadOnly<BTreeMap<String, EntryMetadata>> {
        let snapshot = self
            .read_entries()
            .iter()
            .map(|(name, entry)| (name.clone(), entry.metadata()))
            .collect();
        ReadOnly::new(snapshot)
    }

    /// Settings this container was built with
    pub fn settings(&self) -> ContainerSettings {
        self.settings
    }

    fn entry(&self, name: &str) -> Result<Arc<Entry>> {
        if name.is_empty() {
            return Err(Error::invalid_argument("Snowflake name cannot be empty"));
        }
        self.read_entries()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::unknown_name(name))
    }

    // Constructors never run under these locks and single map operations
    // cannot leave partial state, so a poisoned lock still guards valid data.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Entry>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Entry>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_locations(&self) -> RwLockReadGuard<'_, BTreeSet<String>> {
        self.locations.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_locations(&self) -> RwLockWriteGuard<'_, BTreeSet<String>> {
        self.locations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn check_batch(
    existing: &HashMap<String, Arc<Entry>>,
    discovered: &[DiscoveredType],
) -> Result<()> {
    let mut seen = HashSet::new();
    for found in discovered {
        let name = found.descriptor.name();
        if existing.contains_key(name) || !seen.insert(name) {
            return Err(Error::duplicate_name(name));
        }
    }
    Ok(())
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("discovery", &self.discovery.provider_name())
            .field("settings", &self.settings)
            .field("entries", &self.names())
            .field("locations", &*self.read_locations())
            .finish()
    }
}

/// Builder for [`Container`]
pub struct ContainerBuilder {
    discovery: Arc<dyn DiscoveryProvider>,
    reporter: Option<Arc<dyn Reporter>>,
    settings: ContainerSettings,
}

impl ContainerBuilder {
    /// Start from a discovery provider with default settings
    pub fn new(discovery: Arc<dyn DiscoveryProvider>) -> Self {
        Self {
            discovery,
            reporter: None,
            settings: ContainerSettings::default(),
        }
    }

    /// Use a specific reporter instead of a [`FileReporter`]
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Replace all settings
    pub fn with_settings(mut self, settings: ContainerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set atomic registration
    pub fn with_atomic_registration(mut self, atomic: bool) -> Self {
        self.settings.atomic_registration = atomic;
        self
    }

    /// Set the report failure policy
    pub fn with_report_failure(mut self, policy: ReportFailurePolicy) -> Self {
        self.settings.report_failure = policy;
        self
    }

    /// Build the container
    pub fn build(self) -> Container {
        Container {
            discovery: self.discovery,
            reporter: self
                .reporter
                .unwrap_or_else(|| Arc::new(FileReporter::new()) as Arc<dyn Reporter>),
            settings: self.settings,
            entries: RwLock::new(HashMap::new()),
            locations: RwLock::new(BTreeSet::new()),
        }
    }
}
