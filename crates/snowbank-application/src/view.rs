//! Read-only snapshot views
//!
//! Introspection methods on the container hand out [`ReadOnly`] values. They
//! dereference to the underlying collection but never mutably, so a caller
//! cannot insert into or remove from a view:
//!
//! ```compile_fail
//! use std::sync::Arc;
//! use snowbank_application::Container;
//! use snowbank_application::discovery::StaticTableDiscovery;
//!
//! let container = Container::new(Arc::new(StaticTableDiscovery::new()));
//! container.locations().insert("zoo".to_string());
//! ```
//!
//! Reading works as usual:
//!
//! ```
//! use std::sync::Arc;
//! use snowbank_application::Container;
//! use snowbank_application::discovery::StaticTableDiscovery;
//!
//! let container = Container::new(Arc::new(StaticTableDiscovery::new()));
//! assert!(container.locations().is_empty());
//! ```

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Shared, immutable snapshot of a collection
pub struct ReadOnly<T>(Arc<T>);

impl<T> ReadOnly<T> {
    pub(crate) fn new(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl<T> Clone for ReadOnly<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Deref for ReadOnly<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for ReadOnly<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<'a, T> IntoIterator for &'a ReadOnly<T>
where
    &'a T: IntoIterator,
{
    type Item = <&'a T as IntoIterator>::Item;
    type IntoIter = <&'a T as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&*self.0).into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadOnly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: PartialEq> PartialEq<T> for ReadOnly<T> {
    fn eq(&self, other: &T) -> bool {
        *self.0 == *other
    }
}
