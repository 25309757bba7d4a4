//! Domain layer constants
//!
//! Report layout and metadata marker names shared by every reporter and
//! discovery provider.

// ============================================================================
// REPORT SECTIONS
// ============================================================================

/// Section header for the canonical type name
pub const REPORT_SECTION_CLASS: &str = "Class:";

/// Section header for access and finality flags
pub const REPORT_SECTION_MODIFIERS: &str = "Modifiers:";

/// Section header for generic parameter names
pub const REPORT_SECTION_TYPE_PARAMETERS: &str = "Type Parameters:";

/// Section header for implemented interfaces
pub const REPORT_SECTION_INTERFACES: &str = "Implemented Interfaces:";

/// Section header for the ancestor chain
pub const REPORT_SECTION_INHERITANCE: &str = "Inheritance Path:";

/// Section header for declared metadata markers
pub const REPORT_SECTION_ANNOTATIONS: &str = "Annotations:";

/// Indentation applied to every section content line
pub const REPORT_INDENT: &str = "  ";

// ============================================================================
// REPORT PLACEHOLDERS
// ============================================================================

/// Placeholder for a type without modifiers
pub const NO_MODIFIERS: &str = "-- No Modifiers --";

/// Placeholder for a non-generic type
pub const NO_TYPE_PARAMETERS: &str = "-- No Type Parameters --";

/// Placeholder for a type without interfaces
pub const NO_INTERFACES: &str = "-- No Implemented Interfaces --";

/// Placeholder for a type without an explicit ancestor
pub const NO_SUPER_CLASSES: &str = "-- No Super Classes --";

/// Placeholder for a type without annotations
pub const NO_ANNOTATIONS: &str = "-- No Annotations --";

// ============================================================================
// METADATA MARKERS
// ============================================================================

/// Registration marker name
pub const MARKER_SNOWFLAKE: &str = "Snowflake";

/// Transient (non-singleton) marker name
pub const MARKER_TRANSIENT: &str = "Transient";

/// Denial marker name
pub const MARKER_DENIED: &str = "Denied";

/// Report marker name
pub const MARKER_REPORT: &str = "Report";
