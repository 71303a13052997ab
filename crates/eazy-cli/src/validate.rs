//! # validate_format
//!
//! Checks the content of every record under the catalog root and prints
//! each finding. A parse failure in one file does not stop the others.

use std::io::Write;

use anyhow::Result;

use eazy_schema::{FormatReport, SchemaValidator};

use crate::CatalogArgs;

/// Execute `validate_format`.
///
/// Returns exit code 0 if every record is valid, 1 otherwise.
pub fn run_validate_format(args: &CatalogArgs, out: &mut impl Write) -> Result<u8> {
    if !args.root.is_dir() {
        tracing::warn!(root = %args.root.display(), "catalog root is not a directory");
    }
    let report = SchemaValidator::new().validate_catalog(&args.root);
    print_report(&report, out)
}

fn print_report(report: &FormatReport, out: &mut impl Write) -> Result<u8> {
    if report.is_valid() {
        writeln!(out, "All file contents are valid.")?;
        return Ok(0);
    }
    writeln!(out, "Invalid file content detected:")?;
    for violation in &report.violations {
        writeln!(out, "  - {violation}")?;
    }
    Ok(1)
}
