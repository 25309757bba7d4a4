//! Shared fixtures for application tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use snowbank_domain::{
    DiscoveredType, Error, MetadataDescriptor, Reporter, Result, TypeDescriptor,
};

#[derive(Debug, Default)]
pub struct Fox {
    pub age: u32,
}

#[derive(Debug, Default)]
pub struct Wolf;

#[derive(Debug, Default)]
pub struct Counter {
    pub value: usize,
}

/// Descriptor for `name` with default flags
pub fn descriptor(name: &str) -> MetadataDescriptor {
    MetadataDescriptor::new(name).expect("test names are valid")
}

/// Fox type whose constructor counts its invocations
pub fn counted_fox(calls: &Arc<AtomicUsize>) -> TypeDescriptor {
    let calls = Arc::clone(calls);
    TypeDescriptor::with_constructor(move || {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok::<_, std::io::Error>(Fox { age: 25 })
    })
}

/// Type whose constructor fails the first `failures` times
pub fn flaky(failures: usize) -> TypeDescriptor {
    let attempts = Arc::new(AtomicUsize::new(0));
    TypeDescriptor::with_constructor(move || {
        if attempts.fetch_add(1, Ordering::SeqCst) < failures {
            Err("constructor is not accessible")
        } else {
            Ok(Counter::default())
        }
    })
}

pub fn discovered(type_descriptor: TypeDescriptor, descriptor: MetadataDescriptor) -> DiscoveredType {
    DiscoveredType::new(type_descriptor, descriptor)
}

/// Reporter remembering every destination it was asked to write
#[derive(Default)]
pub struct RecordingReporter {
    pub destinations: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn calls(&self) -> usize {
        self.destinations.lock().expect("not poisoned").len()
    }
}

impl Reporter for RecordingReporter {
    fn report(
        &self,
        _type_descriptor: &TypeDescriptor,
        _metadata: &MetadataDescriptor,
        destination: &str,
    ) -> Result<()> {
        self.destinations
            .lock()
            .expect("not poisoned")
            .push(destination.to_string());
        Ok(())
    }
}

/// Reporter that always fails
pub struct FailingReporter;

impl Reporter for FailingReporter {
    fn report(&self, _: &TypeDescriptor, _: &MetadataDescriptor, destination: &str) -> Result<()> {
        Err(Error::report(
            destination,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}
