//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AnalyzeArgs, BondsArgs, PriceArgs};

/// Bondlab - bond yield, duration and accrued interest analytics
#[derive(Parser)]
#[command(name = "bondlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Analytics configuration file (TOML)
    #[arg(short, long, global = true, env = "BONDLAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log solver and projection details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a bond at a price (yields, duration, accrued interest, parity)
    Analyze(AnalyzeArgs),

    /// Price a bond from an effective annual yield
    Price(PriceArgs),

    /// List the bonds in a repository file
    Bonds(BondsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the key values)
    Minimal,
}
