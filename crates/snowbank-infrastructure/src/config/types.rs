//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snowbank_application::ContainerSettings;
use snowbank_domain::ReportFailurePolicy;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Container configuration
    pub container: ContainerConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Container configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Locations registered at bootstrap, in order
    pub locations: Vec<String>,
    /// Validate each registration batch before inserting anything
    pub atomic_registration: bool,
    /// Behaviour when a report cannot be written (`log` or `propagate`)
    pub report_failure: ReportFailurePolicy,
    /// Directory relative report destinations are resolved against
    pub report_dir: Option<PathBuf>,
}

impl ContainerConfig {
    /// Container behaviour switches derived from this configuration
    pub fn settings(&self) -> ContainerSettings {
        ContainerSettings {
            atomic_registration: self.atomic_registration,
            report_failure: self.report_failure,
        }
    }
}
