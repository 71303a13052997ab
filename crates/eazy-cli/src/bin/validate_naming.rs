//! # validate_naming entry point

use std::process::ExitCode;

use clap::Parser;

use eazy_cli::naming::run_validate_naming;
use eazy_cli::{CatalogArgs, GlobalArgs};

/// Validate the filename of every catalog record.
#[derive(Parser, Debug)]
#[command(name = "validate_naming", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    catalog: CatalogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    eazy_cli::init_tracing(cli.global.verbose);
    tracing::debug!(root = %cli.catalog.root.display(), "validate_naming starting");

    eazy_cli::exit_code(run_validate_naming(&cli.catalog, &mut std::io::stdout().lock()))
}
