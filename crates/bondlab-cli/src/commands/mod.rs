//! CLI command implementations.

pub mod analyze;
pub mod bonds;
pub mod price;

pub use analyze::AnalyzeArgs;
pub use bonds::BondsArgs;
pub use price::PriceArgs;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use bondlab_analytics::bond::BondDefinition;
use bondlab_analytics::config::AnalyticsConfig;
use bondlab_analytics::metrics::BondCalculator;
use bondlab_analytics::repository::BondRepository;
use bondlab_core::daycounts::DayCountConvention;
use bondlab_core::types::{Date, Frequency};

use crate::error::{CliError, CliResult};

/// Where the bond under analysis comes from: a repository file or a
/// generated bullet schedule.
#[derive(Args, Debug)]
pub struct BondSourceArgs {
    /// Bond repository file (JSON array of bond definitions)
    #[arg(short, long, requires = "name")]
    pub bonds: Option<PathBuf>,

    /// Name of the bond in the repository
    #[arg(short, long, requires = "bonds")]
    pub name: Option<String>,

    /// Issue date of a generated bullet bond (YYYY-MM-DD)
    #[arg(long, conflicts_with = "bonds")]
    pub issue: Option<String>,

    /// Maturity date of a generated bullet bond (YYYY-MM-DD)
    #[arg(short, long, conflicts_with = "bonds")]
    pub maturity: Option<String>,

    /// Annual coupon rate of a generated bullet bond (as percentage, e.g., 5.0 for 5%)
    #[arg(long, conflicts_with = "bonds")]
    pub coupon: Option<f64>,

    /// Coupon frequency: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long, default_value = "2")]
    pub frequency: u32,

    /// Day count convention: 30/360, ACT/360, ACT/365, ACT/ACT
    #[arg(long, default_value = "30/360")]
    pub day_count: String,
}

impl BondSourceArgs {
    /// Loads the named bond from the repository, or generates a bullet bond.
    pub fn resolve(&self) -> Result<BondDefinition> {
        if let (Some(path), Some(name)) = (&self.bonds, &self.name) {
            let repo = load_repository(path)?;
            return Ok(repo.require(name)?.clone());
        }

        let issue = parse_date(
            self.issue
                .as_deref()
                .ok_or_else(|| CliError::MissingArgument("--issue or --bonds".into()))?,
        )?;
        let maturity = parse_date(
            self.maturity
                .as_deref()
                .ok_or_else(|| CliError::MissingArgument("--maturity".into()))?,
        )?;
        let coupon = validate_coupon(
            self.coupon
                .ok_or_else(|| CliError::MissingArgument("--coupon".into()))?,
        )?;
        let coupon_rate =
            to_decimal(coupon / 100.0).ok_or(CliError::InvalidCoupon(coupon))?;

        let frequency = Frequency::from_periods(self.frequency)?;
        let day_count: DayCountConvention = self.day_count.parse()?;

        let name = format!("{coupon}% {maturity}");
        Ok(BondDefinition::bullet(
            name, issue, maturity, coupon_rate, frequency, day_count,
        )?)
    }
}

/// Builds the calculator, reading an analytics configuration if one is given.
pub fn load_calculator(path: Option<&Path>) -> Result<BondCalculator> {
    let Some(path) = path else {
        return Ok(BondCalculator::new());
    };

    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AnalyticsConfig = toml::from_str(&text).map_err(|e| CliError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(?config, "loaded analytics configuration");

    BondCalculator::with_config(config)
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

/// Reads a bond repository file.
pub fn load_repository(path: &Path) -> Result<BondRepository> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    BondRepository::from_json(&json)
        .with_context(|| format!("cannot load bonds from {}", path.display()))
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Settlement date from the command line, or today.
pub fn settlement_or_today(settlement: Option<&str>) -> CliResult<Date> {
    settlement.map_or_else(|| Ok(Date::today()), parse_date)
}

/// Validates a coupon rate.
pub fn validate_coupon(coupon: f64) -> CliResult<f64> {
    if !(0.0..=100.0).contains(&coupon) {
        return Err(CliError::InvalidCoupon(coupon));
    }
    Ok(coupon)
}

/// Validates a yield value.
pub fn validate_yield(yield_value: f64) -> CliResult<f64> {
    if !yield_value.is_finite() || yield_value <= -100.0 {
        return Err(CliError::InvalidYield(yield_value));
    }
    Ok(yield_value)
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<Decimal> {
    if price <= 0.0 {
        return Err(CliError::InvalidPrice(price));
    }
    to_decimal(price).ok_or(CliError::InvalidPrice(price))
}

/// Converts a command-line number to a decimal, dropping binary noise.
fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value).map(|d| d.round_dp(12).normalize())
}
