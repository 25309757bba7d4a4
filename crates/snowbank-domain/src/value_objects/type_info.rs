//! Type descriptors
//!
//! Rust has no runtime reflection, so the structural facts a report needs
//! (modifiers, generics, interfaces, ancestors) are declared up front in a
//! [`TypeShape`]. A [`TypeDescriptor`] pairs that shape with the constructor
//! used to build instances.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;

/// A constructed snowflake instance
///
/// Identity is pointer identity: two lookups returned the same instance when
/// [`Arc::ptr_eq`] holds.
pub type Instance = Arc<dyn Any + Send + Sync>;

type Constructor = Arc<dyn Fn() -> Result<Instance, BoxError> + Send + Sync>;

/// Declared structural metadata of a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeShape {
    canonical_name: String,
    modifiers: Vec<String>,
    type_parameters: Vec<String>,
    interfaces: Vec<String>,
    parent: Option<Arc<TypeShape>>,
    annotations: Vec<String>,
}

impl TypeShape {
    /// Create a bare shape with only a canonical name
    pub fn new<S: Into<String>>(canonical_name: S) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            interfaces: Vec::new(),
            parent: None,
            annotations: Vec::new(),
        }
    }

    /// Create a bare shape named after `T`
    pub fn of<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    /// Set the access and finality modifiers
    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the generic parameter names
    pub fn with_type_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Set the implemented interfaces
    pub fn with_interfaces<I, S>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces = interfaces.into_iter().map(Into::into).collect();
        self
    }

    /// Set the declared annotations
    pub fn with_annotations<I, S>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.annotations = annotations.into_iter().map(Into::into).collect();
        self
    }

    /// Declare the direct ancestor of this type
    pub fn extending(mut self, parent: TypeShape) -> Self {
        self.parent = Some(Arc::new(parent));
        self
    }

    /// Canonical type name
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// Access and finality modifiers
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    /// Generic parameter names
    pub fn type_parameters(&self) -> &[String] {
        &self.type_parameters
    }

    /// Implemented interfaces
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    /// Declared annotations
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    /// Direct ancestor, if any
    pub fn parent(&self) -> Option<&TypeShape> {
        self.parent.as_deref()
    }

    /// Ancestors ordered from nearest to furthest
    pub fn ancestors(&self) -> Vec<&TypeShape> {
        let mut chain = Vec::new();
        let mut current = self.parent();
        while let Some(shape) = current {
            chain.push(shape);
            current = shape.parent();
        }
        chain
    }
}

/// Opaque handle to a constructible type
///
/// Cheap to clone; the shape and the constructor are shared.
#[derive(Clone)]
pub struct TypeDescriptor {
    shape: Arc<TypeShape>,
    constructor: Constructor,
}

impl TypeDescriptor {
    /// Describe `T`, constructed through its [`Default`] implementation
    pub fn of<T>() -> Self
    where
        T: Default + Any + Send + Sync,
    {
        Self {
            shape: Arc::new(TypeShape::of::<T>()),
            constructor: Arc::new(|| Ok::<Instance, BoxError>(Arc::new(T::default()))),
        }
    }

    /// Describe `T`, constructed through a fallible factory
    pub fn with_constructor<T, E, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        E: Into<BoxError> + 'static,
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self {
            shape: Arc::new(TypeShape::of::<T>()),
            constructor: Arc::new(move || -> Result<Instance, BoxError> {
                factory()
                    .map(|value| Arc::new(value) as Instance)
                    .map_err(Into::into)
            }),
        }
    }

    /// Replace the declared shape
    pub fn with_shape(mut self, shape: TypeShape) -> Self {
        self.shape = Arc::new(shape);
        self
    }

    /// Declared structural metadata
    pub fn shape(&self) -> &TypeShape {
        &self.shape
    }

    /// Canonical type name
    pub fn type_name(&self) -> &str {
        self.shape.canonical_name()
    }

    /// Invoke the constructor
    pub fn construct(&self) -> Result<Instance, BoxError> {
        (self.constructor)()
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}
