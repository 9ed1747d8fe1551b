//! Bonds command implementation.
//!
//! Lists the definitions held in a repository file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondlab_analytics::bond::BondDefinition;
use bondlab_analytics::cashflows::coupon_rate_in_effect;

use crate::cli::OutputFormat;
use crate::commands::load_repository;
use crate::output::{print_header, print_output};

/// Arguments for the bonds command.
#[derive(Args, Debug)]
pub struct BondsArgs {
    /// Bond repository file (JSON array of bond definitions)
    #[arg(short, long)]
    pub bonds: PathBuf,
}

/// One line of the bond listing.
#[derive(Debug, Serialize, Tabled)]
struct BondRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Class")]
    classification: String,
    #[tabled(rename = "Day Count")]
    day_count: String,
    #[tabled(rename = "Frequency")]
    periodicity: u32,
    #[tabled(rename = "First Date")]
    first_date: String,
    #[tabled(rename = "Maturity")]
    maturity: String,
    #[tabled(rename = "Coupon")]
    coupon_rate: String,
    #[tabled(rename = "Payments")]
    payments: usize,
}

impl From<&BondDefinition> for BondRow {
    fn from(bond: &BondDefinition) -> Self {
        let first_date = bond.first_date();
        Self {
            name: bond.name().to_string(),
            classification: bond.classification().to_string(),
            day_count: bond.day_count().to_string(),
            periodicity: bond.periodicity().periods_per_year(),
            first_date: first_date.to_string(),
            maturity: bond.maturity().to_string(),
            coupon_rate: coupon_rate_in_effect(bond.schedule(), first_date).to_string(),
            payments: bond.schedule().len(),
        }
    }
}

/// Execute the bonds command.
pub fn execute(args: &BondsArgs, format: OutputFormat) -> Result<()> {
    let repo = load_repository(&args.bonds)?;
    let rows: Vec<BondRow> = repo.iter().map(BondRow::from).collect();

    match format {
        OutputFormat::Minimal => {
            for name in repo.names() {
                println!("{name}");
            }
        }
        _ => {
            if format == OutputFormat::Table {
                print_header(&format!("Bonds in {}", args.bonds.display()));
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
