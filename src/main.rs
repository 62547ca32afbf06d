mod cli;
mod commands;
mod error;
mod model;
mod tsv;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

/// Parses the command line and runs one subcommand to completion.
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Agreement(args) => commands::agreement::run(args),
        Commands::Extract(args) => commands::extract::run(args),
    }
}

/// Logs go to stderr; stdout carries only agreement reports.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
