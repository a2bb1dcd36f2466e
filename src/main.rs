use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    // Silent unless RUST_LOG is set, so stderr stays reserved for the
    // single-line diagnostics the commands emit themselves.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract {
            path,
            file,
            default,
        } => commands::handle_extract(&path, &file, default.as_deref()),
        Commands::Json { file } => commands::handle_convert(file.as_deref()),
    }
}
