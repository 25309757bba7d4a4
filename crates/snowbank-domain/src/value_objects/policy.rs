//! Container policies

use serde::{Deserialize, Serialize};

/// What an entry does when writing its report fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFailurePolicy {
    /// Log the failure and still return the instance
    #[default]
    Log,
    /// Fail the lookup with [`crate::Error::Report`]
    Propagate,
}

impl ReportFailurePolicy {
    /// Get the policy name as it appears in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFailurePolicy::Log => "log",
            ReportFailurePolicy::Propagate => "propagate",
        }
    }
}
