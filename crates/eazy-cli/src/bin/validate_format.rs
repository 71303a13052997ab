//! # validate_format entry point

use std::process::ExitCode;

use clap::Parser;

use eazy_cli::validate::run_validate_format;
use eazy_cli::{CatalogArgs, GlobalArgs};

/// Validate the content of every catalog record.
#[derive(Parser, Debug)]
#[command(name = "validate_format", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    catalog: CatalogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    eazy_cli::init_tracing(cli.global.verbose);
    tracing::debug!(root = %cli.catalog.root.display(), "validate_format starting");

    eazy_cli::exit_code(run_validate_format(&cli.catalog, &mut std::io::stdout().lock()))
}
