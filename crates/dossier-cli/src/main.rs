//! # dossier CLI Entry Point
//!
//! Parses arguments and maps the validation outcome to the process exit
//! code: valid → 0, invalid or any error → 1.

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = dossier_cli::Cli::parse();
    dossier_cli::run(&cli).exit_code()
}
