//! # eazy-schema: Catalog Validation
//!
//! Validates the YAML catalog before it is transpiled to SQL.
//!
//! ## Record Validation (`validate`)
//!
//! [`SchemaValidator`] checks every record under the fixed catalog layout
//! for required fields, field shapes, known `level` / `language` values, allowlisted
//! course technologies, well-formed FAQ questions, and catalog-wide `name`
//! uniqueness. Findings are returned as [`Violation`]s; nothing here fails
//! fast.
//!
//! ## Filename Conventions (`naming`)
//!
//! [`validate_catalog_names`] matches each basename against its category's
//! anchored pattern and reports the offenders.
//!
//! ## Crate Policy
//!
//! - Depends only on `eazy-core` internally.
//! - Validation is a trust boundary for the SQL generator: a catalog that
//!   passes both validators produces a script without missing keys.

pub mod naming;
pub mod validate;

pub use naming::{
    is_valid_filename, naming_pattern, validate_catalog_names, validate_names, NamingReport,
    NamingViolation,
};
pub use validate::{
    field_shapes, FieldShape, FormatReport, SchemaValidator, Violation, ViolationKind,
};
