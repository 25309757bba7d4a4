//! Snowflake reports
//!
//! Renders the structural metadata of a snowflake's type as plain text and
//! writes it to the destination declared by its report marker.
//!
//! ```text
//! Class:
//!   zoo.Fox
//!
//! Modifiers:
//!   public final
//!
//! Type Parameters:
//!   -- No Type Parameters --
//!
//! Implemented Interfaces:
//!   zoo.Pet
//!
//! Inheritance Path:
//!   zoo.Canid
//!   zoo.Animal
//!
//! Annotations:
//!   @Snowflake(name = "Mindy")
//!   @Report(destination = "fox.txt")
//! ```

use std::path::{Path, PathBuf};

use snowbank_domain::constants::{
    NO_ANNOTATIONS, NO_INTERFACES, NO_MODIFIERS, NO_SUPER_CLASSES, NO_TYPE_PARAMETERS,
    REPORT_INDENT, REPORT_SECTION_ANNOTATIONS, REPORT_SECTION_CLASS, REPORT_SECTION_INHERITANCE,
    REPORT_SECTION_INTERFACES, REPORT_SECTION_MODIFIERS, REPORT_SECTION_TYPE_PARAMETERS,
};
use snowbank_domain::error::{Error, Result};
use snowbank_domain::{MetadataDescriptor, Reporter, TypeDescriptor, TypeShape};
use tracing::debug;

/// Render the report text for a snowflake
pub fn render_report(type_descriptor: &TypeDescriptor, metadata: &MetadataDescriptor) -> String {
    let shape = type_descriptor.shape();
    let mut out = String::new();

    push_section(
        &mut out,
        REPORT_SECTION_CLASS,
        &[shape.canonical_name().to_string()],
        "",
    );
    push_section(
        &mut out,
        REPORT_SECTION_MODIFIERS,
        &joined(shape.modifiers()),
        NO_MODIFIERS,
    );
    push_section(
        &mut out,
        REPORT_SECTION_TYPE_PARAMETERS,
        &joined(shape.type_parameters()),
        NO_TYPE_PARAMETERS,
    );
    push_section(
        &mut out,
        REPORT_SECTION_INTERFACES,
        shape.interfaces(),
        NO_INTERFACES,
    );

    let ancestors: Vec<String> = shape
        .ancestors()
        .into_iter()
        .map(TypeShape::canonical_name)
        .map(str::to_string)
        .collect();
    push_section(
        &mut out,
        REPORT_SECTION_INHERITANCE,
        &ancestors,
        NO_SUPER_CLASSES,
    );

    let mut annotations = metadata.markers();
    annotations.extend(shape.annotations().iter().cloned());
    push_section(
        &mut out,
        REPORT_SECTION_ANNOTATIONS,
        &annotations,
        NO_ANNOTATIONS,
    );

    out
}

fn joined(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        Vec::new()
    } else {
        vec![items.join(" ")]
    }
}

fn push_section(out: &mut String, header: &str, lines: &[String], placeholder: &str) {
    out.push_str(header);
    out.push('\n');
    if lines.is_empty() {
        out.push_str(REPORT_INDENT);
        out.push_str(placeholder);
        out.push('\n');
    }
    for line in lines {
        out.push_str(REPORT_INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
}

/// Reporter writing reports to files
///
/// Relative destinations are resolved against the base directory when one is
/// set, otherwise against the process working directory. An existing file is
/// overwritten.
#[derive(Debug, Clone, Default)]
pub struct FileReporter {
    base_dir: Option<PathBuf>,
}

impl FileReporter {
    /// Create a reporter resolving destinations against the working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative destinations against `base_dir`
    pub fn with_base_dir<P: AsRef<Path>>(mut self, base_dir: P) -> Self {
        self.base_dir = Some(base_dir.as_ref().to_path_buf());
        self
    }

    /// Path a destination is written to
    pub fn resolve(&self, destination: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(destination),
            None => PathBuf::from(destination),
        }
    }
}

impl Reporter for FileReporter {
    fn report(
        &self,
        type_descriptor: &TypeDescriptor,
        metadata: &MetadataDescriptor,
        destination: &str,
    ) -> Result<()> {
        let path = self.resolve(destination);
        let body = render_report(type_descriptor, metadata);
        std::fs::write(&path, body).map_err(|e| Error::report(destination, e))?;
        debug!(
            snowflake = metadata.name(),
            path = %path.display(),
            "Snowflake report written"
        );
        Ok(())
    }
}

/// Reporter that discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl NullReporter {
    /// Create a null reporter
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for NullReporter {
    fn report(&self, _: &TypeDescriptor, _: &MetadataDescriptor, _: &str) -> Result<()> {
        Ok(())
    }
}
