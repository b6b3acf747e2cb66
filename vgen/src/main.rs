mod cli;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    cli.run()
}

/// Logs go to stderr; stdout carries progress and previews.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("vgen=debug,vaporgen_core=debug,vaporgen_codegen=debug")
    } else {
        EnvFilter::new("warn")
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
