//! Price command implementation.
//!
//! Calculates dirty price, accrued interest and clean price from an
//! effective annual yield.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use bondlab_analytics::metrics::{BondCalculator, PriceResult};

use crate::cli::OutputFormat;
use crate::commands::{settlement_or_today, validate_yield, BondSourceArgs};
use crate::output::{print_header, print_json, print_output, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub source: BondSourceArgs,

    /// Settlement date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub settlement: Option<String>,

    /// Effective annual yield (as percentage, e.g., 10.25 for 10.25%)
    #[arg(short, long = "yield", allow_negative_numbers = true)]
    pub yield_value: f64,
}

#[derive(Serialize)]
struct PriceReport<'a> {
    bond: &'a str,
    settlement: String,
    effective_yield: f64,
    #[serde(flatten)]
    price: PriceResult,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, calculator: &BondCalculator, format: OutputFormat) -> Result<()> {
    let bond = args.source.resolve()?;
    let settlement = settlement_or_today(args.settlement.as_deref())?;
    let yield_pct = validate_yield(args.yield_value)?;
    let effective_yield = yield_pct / 100.0;

    let price = calculator.price_from_yield(&bond, settlement, effective_yield)?;

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            let results = vec![
                KeyValue::new("Bond", bond.name()),
                KeyValue::new("Settlement", settlement.to_string()),
                KeyValue::from_percent("Effective Yield (Input)", effective_yield),
                KeyValue::from_decimal("Dirty Price", price.dirty_price, 6),
                KeyValue::from_decimal("Accrued Interest", price.accrued_interest, 6),
                KeyValue::from_decimal("Clean Price", price.clean_price, 6),
            ];
            if format == OutputFormat::Table {
                print_header("Bond Pricing Results");
            }
            print_output(&results, format)?;
        }
        OutputFormat::Json => {
            print_json(&PriceReport {
                bond: bond.name(),
                settlement: settlement.to_string(),
                effective_yield,
                price,
            })?;
        }
        OutputFormat::Minimal => {
            println!("{:.6}", price.clean_price);
        }
    }

    Ok(())
}
