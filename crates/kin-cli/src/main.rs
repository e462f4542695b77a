//! kin — product catalog family normalization CLI.

mod commands;
mod progress;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kin",
    version,
    about = "Normalizes a product catalog into families of variants"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Build a family snapshot from a brand catalog
    Build(commands::build::BuildArgs),
    /// Fetch specification attributes for every product
    Fetch(commands::fetch::FetchArgs),
    /// Verify a family snapshot's invariants
    Verify(commands::verify::VerifyArgs),
    /// Export the distinct colors across a snapshot's families
    Colors(commands::colors::ColorsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Build(args) => commands::build::run(args),
        Command::Fetch(args) => commands::fetch::run(args),
        Command::Verify(args) => commands::verify::run(args),
        Command::Colors(args) => commands::colors::run(args),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
