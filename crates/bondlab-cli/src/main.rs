//! Bondlab CLI - Command-line interface for bond analytics.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a generated 10% semi-annual bullet bond at par
//! bondlab analyze --issue 2025-09-10 --maturity 2035-09-10 --coupon 10 \
//!     --settlement 2025-09-10 --price 100
//!
//! # Analyze a bond from a repository file at a clean price, with cash flows
//! bondlab analyze --bonds bonds.json --name BOND10 --settlement 2025-12-10 \
//!     --price 98.5 --clean --cashflows
//!
//! # Price from an effective annual yield
//! bondlab price --bonds bonds.json --name BOND10 --settlement 2025-12-10 --yield 10.25
//!
//! # List bonds in a repository file
//! bondlab bonds --bonds bonds.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let format = cli.format;
    let calculator = commands::load_calculator(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &calculator, format)?,
        Commands::Price(args) => commands::price::execute(args, &calculator, format)?,
        Commands::Bonds(args) => commands::bonds::execute(&args, format)?,
    }

    Ok(())
}

/// Logs go to stderr so that JSON and CSV output stay clean.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
