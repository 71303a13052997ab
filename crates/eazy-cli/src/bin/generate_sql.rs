//! # generate_sql entry point

use std::process::ExitCode;

use clap::Parser;

use eazy_cli::generate::{run_generate, GenerateArgs};
use eazy_cli::GlobalArgs;

/// Transpile catalog YAML records into one upsert SQL script.
#[derive(Parser, Debug)]
#[command(name = "generate_sql", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: GenerateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    eazy_cli::init_tracing(cli.global.verbose);
    tracing::debug!("generate_sql starting");

    eazy_cli::exit_code(run_generate(&cli.args, &mut std::io::stdout().lock()))
}
