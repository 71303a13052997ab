//! # validate_naming
//!
//! Checks every record filename under the catalog root against its
//! category's convention.

use std::io::Write;

use anyhow::Result;

use eazy_schema::validate_catalog_names;

use crate::CatalogArgs;

/// Execute `validate_naming`.
///
/// Returns exit code 0 if every filename matches, 1 otherwise.
pub fn run_validate_naming(args: &CatalogArgs, out: &mut impl Write) -> Result<u8> {
    if !args.root.is_dir() {
        tracing::warn!(root = %args.root.display(), "catalog root is not a directory");
    }
    let report = validate_catalog_names(&args.root);
    if report.is_valid() {
        writeln!(out, "All filenames are valid.")?;
        return Ok(0);
    }
    writeln!(out, "Invalid filenames detected:")?;
    for violation in &report.violations {
        writeln!(out, "  - {}", violation.filename)?;
    }
    Ok(1)
}
