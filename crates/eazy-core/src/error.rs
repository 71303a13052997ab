//! # Error Types
//!
//! Errors raised while loading catalog records from disk. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Validation findings (missing fields, bad tags, duplicate names) are not
//! errors at this level: the schema validator reports them as data so a
//! single run can surface every problem at once.

use thiserror::Error;

/// Top-level error type for catalog loading.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The file does not live under any known category directory.
    #[error("Unknown directory for file: {path}")]
    UnknownCategory {
        /// Path as supplied by the caller.
        path: String,
    },

    /// A vocabulary value (language, level, category) was not recognized.
    #[error("unknown {kind}: {value:?}")]
    UnknownValue {
        /// Vocabulary name, e.g. `"language"`.
        kind: &'static str,
        /// The offending input.
        value: String,
    },

    /// The record file could not be read.
    #[error("cannot read file: {source}")]
    Read {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The record file is not valid YAML or does not match the record shape.
    #[error("invalid record: {source}")]
    Parse {
        /// Path to the file.
        path: String,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// An input argument was treated as a glob pattern and failed to compile.
    #[error("invalid glob pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Compiler message.
        reason: String,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
