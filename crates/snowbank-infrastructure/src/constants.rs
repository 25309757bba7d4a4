//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Report layout constants are defined in `snowbank_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "snowbank.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "snowbank";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SNOWBANK";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "SNOWBANK_LOG";

/// File name prefix for rolling log files
pub const DEFAULT_LOG_FILE_PREFIX: &str = "snowbank";
