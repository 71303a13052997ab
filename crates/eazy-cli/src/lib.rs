//! # eazy-cli: EazySkills Catalog Tools
//!
//! Handler library behind the three catalog binaries. Each binary parses
//! its own arguments, installs logging, and hands off to one handler here.
//!
//! ## Binaries
//!
//! - `generate_sql`: transpile record files into one upsert SQL script.
//! - `validate_format`: check record contents across the catalog.
//! - `validate_naming`: check record filenames across the catalog.
//!
//! ```bash
//! validate_naming --root .
//! validate_format --root .
//! generate_sql courses/ paths/ bootcamps/ faqs/ --output eazyskills_update.sql
//! ```
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers delegate to domain crates and only format results.
//! - Results are written to the supplied writer (stdout in the binaries);
//!   diagnostics go to stderr through `tracing`.

pub mod generate;
pub mod naming;
pub mod validate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use tracing_subscriber::EnvFilter;

/// Flags shared by every binary.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Location of the catalog for the validators.
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Directory holding `courses/`, `paths/`, `bootcamps/` and `faqs/`.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

/// Install the stderr log subscriber.
///
/// Without `-v` the filter comes from `RUST_LOG`, falling back to `warn`.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Map a handler result to the process exit code.
pub fn exit_code(result: anyhow::Result<u8>) -> ExitCode {
    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
