//! # eazy-core: Foundational Types for the EazySkills Catalog
//!
//! The course catalog is a tree of YAML files, one record per file, under
//! four fixed top-level directories (`courses/`, `paths/`, `bootcamps/`,
//! `faqs/`). This crate defines the vocabulary every tool in the workspace
//! shares.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Category` enum.** Directory, table, and required-field
//!    table all hang off one exhaustive enum. Routing a file is a lookup on
//!    its directory components, never a substring search.
//!
//! 2. **Static catalog rules.** The technology allowlist and required-field
//!    tables are immutable data compiled into the binary.
//!
//! 3. **Sorted discovery.** Every directory scan returns paths in sorted
//!    order so duplicate detection is reproducible.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `eazy-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod attributes;
pub mod category;
pub mod discovery;
pub mod error;
pub mod record;
pub mod technology;

// Re-export primary types for ergonomic imports.
pub use attributes::{Language, Level};
pub use category::Category;
pub use discovery::{category_files, collect_inputs, yaml_files_in};
pub use error::CatalogError;
pub use record::{Bootcamp, Course, Faq, LearningPath, ListItem, LoadedRecord, Record};
