//! # Application Layer
//!
//! The Snowbank container: entries enforcing instantiation policy, the
//! name-keyed registry that owns them, discovery providers and reporting.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | `Container` registry and its builder |
//! | [`entry`] | `Entry` lifecycle: denied, singleton, transient |
//! | [`discovery`] | Static table and link-time discovery providers |
//! | [`reporting`] | Report rendering, `FileReporter`, `NullReporter` |
//! | [`view`] | Read-only snapshot views |

pub mod container;
pub mod discovery;
pub mod entry;
pub mod reporting;
pub mod view;

pub use container::{Container, ContainerBuilder, ContainerSettings};
pub use entry::{Entry, EntryMetadata};
pub use reporting::{FileReporter, NullReporter, render_report};
pub use view::ReadOnly;
