//! # eazy-sql: Catalog to SQL
//!
//! Transpiles catalog records into idempotent upsert statements for the
//! relational store behind the EazySkills site.
//!
//! ## Statement Building (`statement`)
//!
//! [`UpsertStatement`] renders `INSERT ... ON CONFLICT (file_path) DO
//! UPDATE SET ...` for any table from an ordered column list. Lists become
//! `ARRAY[...]` literals, booleans `TRUE`/`FALSE`, integers are unquoted,
//! and text is single-quoted after [`escape_text`].
//!
//! ## Script Generation (`generate`)
//!
//! [`generate`] loads each file, routes it by category, builds its
//! statement, and joins the statements with newlines. The first failing
//! file aborts the run.
//!
//! ## Crate Policy
//!
//! - Depends only on `eazy-core` internally.
//! - No database connection: the output is a script applied by a separate
//!   pipeline step.

pub mod error;
pub mod generate;
pub mod statement;

pub use error::SqlGenerationError;
pub use generate::{
    generate, generate_statements, output_path, render_script, statement_for, write_script,
    DEFAULT_OUTPUT,
};
pub use statement::{escape_text, SqlValue, UpsertStatement, CONFLICT_KEY};
