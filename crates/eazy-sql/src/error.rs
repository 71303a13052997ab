//! # SQL Generation Errors

use eazy_core::CatalogError;
use thiserror::Error;

/// Error that aborts a generation run.
#[derive(Error, Debug)]
pub enum SqlGenerationError {
    /// A record could not be categorized, read, or parsed.
    #[error("Error processing file {file}: {source}")]
    Record {
        /// The file being processed when the run stopped.
        file: String,
        #[source]
        source: CatalogError,
    },

    /// The finished script could not be written.
    #[error("cannot write {path}: {source}")]
    Write {
        /// Output path.
        path: String,
        #[source]
        source: std::io::Error,
    },
}
