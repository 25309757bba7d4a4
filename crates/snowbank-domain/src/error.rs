//! Error handling types

use thiserror::Error;

/// Boxed error used for constructor and reporter failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Snowbank container
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Registration
    // ========================================================================
    /// A location passed to registration was empty or blank
    #[error("Location is empty: a non-empty discovery location is required")]
    EmptyLocation,

    /// A snowflake name is already taken in this container
    #[error("Snowflake with name '{name}' already exists")]
    DuplicateName {
        /// The colliding snowflake name
        name: String,
    },

    /// The discovery provider could not scan a location
    #[error("Discovery failed for location '{location}': {message}")]
    Discovery {
        /// Location being scanned
        location: String,
        /// Description of the failure
        message: String,
    },

    // ========================================================================
    // Lookup
    // ========================================================================
    /// No snowflake is registered under the requested name
    #[error("Container does not contain snowflake with name: {name}")]
    UnknownName {
        /// The requested name
        name: String,
    },

    /// The snowflake is marked as denied and can never be created
    #[error("Creation of snowflake '{name}' is denied")]
    DeniedAccess {
        /// Name of the denied snowflake
        name: String,
    },

    /// The snowflake constructor failed
    #[error("Failed to instantiate snowflake '{name}': {source}")]
    Instantiation {
        /// Name of the snowflake being created
        name: String,
        /// Error returned by the constructor
        #[source]
        source: BoxError,
    },

    /// A typed lookup asked for a type the instance does not have
    #[error("Snowflake '{name}' is not of type {expected}")]
    TypeMismatch {
        /// Name of the snowflake
        name: String,
        /// Type name the caller expected
        expected: &'static str,
    },

    // ========================================================================
    // Reporting
    // ========================================================================
    /// Writing a snowflake report failed
    #[error("Failed to write report to '{destination}': {source}")]
    Report {
        /// Report destination
        destination: String,
        /// Underlying failure
        #[source]
        source: BoxError,
    },

    // ========================================================================
    // General
    // ========================================================================
    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Registration and lookup error creation methods
impl Error {
    /// Create a duplicate name error
    pub fn duplicate_name<S: Into<String>>(name: S) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create an unknown name error
    pub fn unknown_name<S: Into<String>>(name: S) -> Self {
        Self::UnknownName { name: name.into() }
    }

    /// Create a denied access error
    pub fn denied_access<S: Into<String>>(name: S) -> Self {
        Self::DeniedAccess { name: name.into() }
    }

    /// Create an instantiation error wrapping the constructor failure
    pub fn instantiation<S: Into<String>>(name: S, source: BoxError) -> Self {
        Self::Instantiation {
            name: name.into(),
            source,
        }
    }

    /// Create a discovery error
    pub fn discovery<L: Into<String>, S: Into<String>>(location: L, message: S) -> Self {
        Self::Discovery {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a report error
    pub fn report<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        destination: S,
        source: E,
    ) -> Self {
        Self::Report {
            destination: destination.into(),
            source: Box::new(source),
        }
    }
}

// General error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
