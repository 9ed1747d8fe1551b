//! Analyze command implementation.
//!
//! Solves for the yield of a bond at a price and reports duration, accrued
//! interest and the derived price measures.

use anyhow::Result;
use clap::Args;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tabled::Tabled;

use bondlab_analytics::bond::BondDefinition;
use bondlab_analytics::cashflows::{discounted_table, DiscountedCashFlow};
use bondlab_analytics::metrics::{Analysis, BondCalculator, PriceBasis, SettlementContext};
use bondlab_analytics::yields::SolveStatus;

use crate::cli::OutputFormat;
use crate::commands::{settlement_or_today, validate_price, BondSourceArgs};
use crate::output::{print_header, print_json, print_output, print_warning, KeyValue};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: BondSourceArgs,

    /// Settlement date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub settlement: Option<String>,

    /// Price per 100 face (dirty unless --clean is given)
    #[arg(short, long)]
    pub price: f64,

    /// Treat --price as a clean price
    #[arg(long)]
    pub clean: bool,

    /// Show the discounted cash-flow table
    #[arg(long)]
    pub cashflows: bool,
}

/// Analysis with its discounted cash flows, for JSON output.
#[derive(Serialize)]
struct AnalysisReport<'a> {
    bond: &'a str,
    #[serde(flatten)]
    analysis: &'a Analysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    discounted_cash_flows: Option<Vec<DiscountedCashFlow>>,
}

#[derive(Serialize, Tabled)]
struct CashflowRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Periods")]
    periods: String,
    #[tabled(rename = "Capital")]
    capital: String,
    #[tabled(rename = "Coupon")]
    coupon: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Discount")]
    discount_factor: String,
    #[tabled(rename = "PV")]
    present_value: String,
}

impl From<&DiscountedCashFlow> for CashflowRow {
    fn from(row: &DiscountedCashFlow) -> Self {
        Self {
            date: row.date.to_string(),
            days: row.days,
            periods: format!("{:.4}", row.periods),
            capital: format!("{:.4}", row.capital),
            coupon: format!("{:.4}", row.coupon),
            total: format!("{:.4}", row.total),
            discount_factor: format!("{:.8}", row.discount_factor),
            present_value: format!("{:.6}", row.present_value),
        }
    }
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, calculator: &BondCalculator, format: OutputFormat) -> Result<()> {
    let bond = args.source.resolve()?;
    let settlement = settlement_or_today(args.settlement.as_deref())?;
    let price = validate_price(args.price)?;
    let basis = if args.clean {
        PriceBasis::Clean
    } else {
        PriceBasis::Dirty
    };

    let analysis = calculator.analyze(&SettlementContext::new(&bond, settlement, price, basis))?;
    let result = &analysis.result;
    tracing::debug!(
        bond = bond.name(),
        %settlement,
        status = %result.solve_status,
        iterations = result.iterations,
        "analysis complete"
    );

    match result.solve_status {
        SolveStatus::Degraded => print_warning(&format!(
            "yield solver did not converge; {:.6}% is an estimate",
            result.annualized_yield * 100.0
        )),
        SolveStatus::Fallback => print_warning(&format!(
            "Newton-Raphson failed; yield found by bisection after {} iteration(s)",
            result.iterations
        )),
        SolveStatus::Converged => {}
    }

    let table = args.cashflows.then(|| discounted_table_for(&bond, &analysis));

    match format {
        OutputFormat::Table => {
            print_header(&format!("Bond Analytics: {}", bond.name()));
            print_output(&metric_rows(&bond, &analysis, basis), format)?;

            if let Some(table) = &table {
                print_header("Cash Flows");
                let rows: Vec<CashflowRow> = table.iter().map(CashflowRow::from).collect();
                print_output(&rows, format)?;
            }
        }
        OutputFormat::Json => {
            print_json(&AnalysisReport {
                bond: bond.name(),
                analysis: &analysis,
                discounted_cash_flows: table,
            })?;
        }
        OutputFormat::Csv => match &table {
            Some(table) => {
                let rows: Vec<CashflowRow> = table.iter().map(CashflowRow::from).collect();
                print_output(&rows, format)?;
            }
            None => print_output(&metric_rows(&bond, &analysis, basis), format)?,
        },
        OutputFormat::Minimal => {
            println!(
                "{:.6} {:.6} {:.4} {:.4}",
                result.periodic_yield,
                result.annualized_yield,
                result.macaulay_duration,
                result.modified_duration
            );
        }
    }

    Ok(())
}

fn discounted_table_for(bond: &BondDefinition, analysis: &Analysis) -> Vec<DiscountedCashFlow> {
    discounted_table(
        &analysis.cash_flows,
        analysis.result.annualized_yield,
        bond.day_count(),
        bond.periodicity(),
    )
}

fn metric_rows(bond: &BondDefinition, analysis: &Analysis, basis: PriceBasis) -> Vec<KeyValue> {
    let result = &analysis.result;
    vec![
        KeyValue::new("Bond", bond.name()),
        KeyValue::new("Day Count", bond.day_count().to_string()),
        KeyValue::new("Frequency", bond.periodicity().to_string()),
        KeyValue::new("Price Basis", basis.to_string()),
        KeyValue::from_percent(
            "Coupon Rate",
            result.current_coupon_rate.to_f64().unwrap_or(0.0),
        ),
        KeyValue::from_date("Last Coupon", result.last_coupon_date),
        KeyValue::from_date("Next Coupon", result.next_coupon_date),
        KeyValue::from_percent("Periodic Yield", result.periodic_yield),
        KeyValue::from_percent("Annualized Yield", result.annualized_yield),
        KeyValue::from_percent("Nominal Yield", result.nominal_yield),
        KeyValue::from_f64("Macaulay Duration", result.macaulay_duration, 4),
        KeyValue::from_f64("Modified Duration", result.modified_duration, 4),
        KeyValue::from_f64(
            "Modified Duration (periodic)",
            result.modified_duration_periodic,
            4,
        ),
        KeyValue::from_f64("Duration (periods)", result.macaulay_periods, 4),
        KeyValue::from_f64("Average Life", result.average_life, 4),
        KeyValue::from_decimal("Clean Price", result.clean_price, 6),
        KeyValue::from_decimal("Accrued Interest", result.accrued_interest, 6),
        KeyValue::from_decimal("Dirty Price", result.dirty_price, 6),
        KeyValue::from_decimal("Residual Principal", result.residual_principal, 4),
        KeyValue::from_decimal("Technical Value", result.technical_value, 6),
        KeyValue::from_decimal("Parity", result.parity, 6),
        KeyValue::new(
            "Solver",
            format!("{} ({} iterations)", result.solve_status, result.iterations),
        ),
    ]
}
