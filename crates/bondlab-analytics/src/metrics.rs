//! Bond metrics calculator.
//!
//! Combines cash-flow projection, the yield solver, duration, average life and
//! accrued interest into a single analysis of a bond at a settlement date and
//! price.

use std::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bondlab_core::types::{CashFlow, Date};

use crate::accrued::{accrued_interest, clean_price, parity, technical_value};
use crate::bond::BondDefinition;
use crate::cashflows::{
    coupon_rate_in_effect, future_flows, last_coupon, next_coupon, project, residual_principal,
};
use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::risk::{average_life, macaulay_and_modified_on_basis, macaulay_periods, modified_periodic};
use crate::yields::{nominal_yield, periodic_yield, present_value, SolveStatus, YieldSolver};

/// Decimal places kept when converting a discounted price back to `Decimal`.
const PRICE_DECIMALS: u32 = 10;

/// Whether a quoted price includes accrued interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PriceBasis {
    /// Price includes accrued interest.
    #[default]
    Dirty,
    /// Price excludes accrued interest.
    Clean,
}

impl fmt::Display for PriceBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceBasis::Dirty => write!(f, "dirty"),
            PriceBasis::Clean => write!(f, "clean"),
        }
    }
}

/// A bond, a settlement date and a price per 100 face.
#[derive(Debug, Clone, Copy)]
pub struct SettlementContext<'a> {
    /// Bond being analyzed.
    pub bond: &'a BondDefinition,
    /// Settlement date.
    pub settlement: Date,
    /// Quoted price per 100 face.
    pub price: Decimal,
    /// Whether `price` includes accrued interest.
    pub basis: PriceBasis,
}

impl<'a> SettlementContext<'a> {
    /// Creates a settlement context.
    #[must_use]
    pub fn new(
        bond: &'a BondDefinition,
        settlement: Date,
        price: Decimal,
        basis: PriceBasis,
    ) -> Self {
        Self {
            bond,
            settlement,
            price,
            basis,
        }
    }

    /// Context for a dirty price quote.
    #[must_use]
    pub fn dirty(bond: &'a BondDefinition, settlement: Date, price: Decimal) -> Self {
        Self::new(bond, settlement, price, PriceBasis::Dirty)
    }

    /// Context for a clean price quote.
    #[must_use]
    pub fn clean(bond: &'a BondDefinition, settlement: Date, price: Decimal) -> Self {
        Self::new(bond, settlement, price, PriceBasis::Clean)
    }
}

/// Metrics of a bond at a settlement date and price.
///
/// Yields are decimal fractions (0.05 for 5%). Durations and average life
/// are in years; prices and accrued interest are per 100 face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    // ===== Yields =====
    /// Yield per coupon period, `(1 + annualized)^(1/p) - 1`.
    pub periodic_yield: f64,
    /// Effective annual yield.
    pub annualized_yield: f64,
    /// Nominal annual yield compounded `p` times a year.
    pub nominal_yield: f64,

    // ===== Risk =====
    /// Macaulay duration in years.
    pub macaulay_duration: f64,
    /// Modified duration, `macaulay / (1 + annualized)`.
    pub modified_duration: f64,
    /// Modified duration under periodic compounding, `macaulay / (1 + nominal/p)`.
    pub modified_duration_periodic: f64,
    /// Macaulay duration in coupon periods.
    pub macaulay_periods: f64,
    /// Principal-weighted mean time to repayment in years.
    pub average_life: f64,

    // ===== Prices =====
    /// Interest accrued since the last coupon.
    pub accrued_interest: Decimal,
    /// Price excluding accrued interest.
    pub clean_price: Decimal,
    /// Price including accrued interest.
    pub dirty_price: Decimal,
    /// Face value not yet repaid.
    pub residual_principal: Decimal,
    /// Residual principal plus accrued interest.
    pub technical_value: Decimal,
    /// Clean price over technical value.
    pub parity: Decimal,

    // ===== Schedule =====
    /// Latest coupon-bearing date before settlement.
    pub last_coupon_date: Option<Date>,
    /// Next coupon payment on or after settlement.
    pub next_coupon_date: Option<Date>,
    /// Nominal coupon rate in effect.
    pub current_coupon_rate: Decimal,

    // ===== Solver =====
    /// How the yield was obtained.
    pub solve_status: SolveStatus,
    /// Iterations spent by the method that produced the yield.
    pub iterations: u32,
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " YIELDS")?;
        writeln!(f, "   Periodic:           {:>12.6}%", self.periodic_yield * 100.0)?;
        writeln!(f, "   Annualized:         {:>12.6}%", self.annualized_yield * 100.0)?;
        writeln!(f, "   Nominal:            {:>12.6}%", self.nominal_yield * 100.0)?;
        writeln!(f, " RISK")?;
        writeln!(f, "   Macaulay Duration:  {:>12.4}", self.macaulay_duration)?;
        writeln!(f, "   Modified Duration:  {:>12.4}", self.modified_duration)?;
        writeln!(f, "   Duration (periods): {:>12.4}", self.macaulay_periods)?;
        writeln!(f, "   Average Life:       {:>12.4}", self.average_life)?;
        writeln!(f, " PRICES")?;
        writeln!(f, "   Clean Price:        {:>12.6}", self.clean_price)?;
        writeln!(f, "   Accrued Interest:   {:>12.6}", self.accrued_interest)?;
        writeln!(f, "   Dirty Price:        {:>12.6}", self.dirty_price)?;
        writeln!(f, "   Technical Value:    {:>12.6}", self.technical_value)?;
        writeln!(f, "   Parity:             {:>12.6}", self.parity)?;
        write!(f, "   Solver:             {:>12}", self.solve_status)
    }
}

/// An analysis together with the cash flows it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Computed metrics.
    pub result: AnalysisResult,
    /// Projected cash flows, funding leg first.
    pub cash_flows: Vec<CashFlow>,
}

/// Prices implied by a yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceResult {
    /// Present value of the future flows.
    pub dirty_price: Decimal,
    /// Interest accrued at settlement.
    pub accrued_interest: Decimal,
    /// Dirty price less accrued interest.
    pub clean_price: Decimal,
}

/// Calculator for bond metrics.
///
/// # Example
///
/// ```rust
/// use bondlab_analytics::bond::BondDefinition;
/// use bondlab_analytics::metrics::{BondCalculator, SettlementContext};
/// use bondlab_core::daycounts::DayCountConvention;
/// use bondlab_core::types::{Date, Frequency};
/// use rust_decimal_macros::dec;
///
/// let issue = Date::from_ymd(2025, 1, 15).unwrap();
/// let maturity = Date::from_ymd(2030, 1, 15).unwrap();
/// let bond = BondDefinition::bullet(
///     "BOND-2030", issue, maturity, dec!(0.08), Frequency::SemiAnnual, DayCountConvention::Thirty360,
/// ).unwrap();
///
/// let calculator = BondCalculator::new();
/// let analysis = calculator.analyze(&SettlementContext::dirty(&bond, issue, dec!(100))).unwrap();
///
/// assert!((analysis.result.periodic_yield - 0.04).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BondCalculator {
    config: AnalyticsConfig,
    solver: YieldSolver,
}

impl BondCalculator {
    /// Creates a calculator with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Configuration` if the configuration is invalid.
    pub fn with_config(config: AnalyticsConfig) -> AnalyticsResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            solver: YieldSolver::from_config(&config),
        })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Computes every metric of the bond at the context's settlement and price.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::OutOfRange` if settlement falls outside the schedule
    /// - `AnalyticsError::InvalidPrice` if the dirty price is not positive
    /// - `AnalyticsError::InsufficientCashFlows` if nothing remains to be received
    pub fn analyze(&self, ctx: &SettlementContext<'_>) -> AnalyticsResult<Analysis> {
        let bond = ctx.bond;
        let settlement = ctx.settlement;
        let schedule = bond.schedule();
        let convention = bond.day_count();
        let periodicity = bond.periodicity();

        bond.check_settlement(settlement)?;

        let accrued = accrued_interest(schedule, settlement, convention);
        let dirty = match ctx.basis {
            PriceBasis::Dirty => ctx.price,
            PriceBasis::Clean => ctx.price + accrued,
        };

        let cash_flows = project(schedule, settlement, dirty, convention)?;
        let solution = self.solver.solve(&cash_flows, convention)?;
        let annualized = solution.rate;
        let nominal = nominal_yield(annualized, periodicity);

        let (macaulay, modified) = macaulay_and_modified_on_basis(
            &cash_flows,
            annualized,
            self.config.duration_basis_days,
        );

        let residual = residual_principal(schedule, settlement);
        let clean = clean_price(dirty, accrued);
        let technical = technical_value(residual, accrued);

        log::debug!(
            "{} at {}: yield {:.6} ({}), duration {:.4}",
            bond.name(),
            settlement,
            annualized,
            solution.status,
            macaulay
        );

        let result = AnalysisResult {
            periodic_yield: periodic_yield(annualized, periodicity),
            annualized_yield: annualized,
            nominal_yield: nominal,
            macaulay_duration: macaulay,
            modified_duration: modified,
            modified_duration_periodic: modified_periodic(macaulay, nominal, periodicity),
            macaulay_periods: macaulay_periods(macaulay, periodicity),
            average_life: average_life(schedule, settlement, convention),
            accrued_interest: accrued,
            clean_price: clean,
            dirty_price: dirty,
            residual_principal: residual,
            technical_value: technical,
            parity: parity(clean, technical),
            last_coupon_date: last_coupon(schedule, settlement).map(|row| row.date),
            next_coupon_date: next_coupon(schedule, settlement).map(|row| row.date),
            current_coupon_rate: coupon_rate_in_effect(schedule, settlement),
            solve_status: solution.status,
            iterations: solution.iterations,
        };

        Ok(Analysis { result, cash_flows })
    }

    /// Prices the bond at an effective annual yield.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::OutOfRange` if settlement falls outside the schedule
    /// - `AnalyticsError::Configuration` if the yield is not above -100%
    /// - `AnalyticsError::InsufficientCashFlows` if nothing remains to be received
    /// - `AnalyticsError::InvalidPrice` if the discounted value is not finite
    pub fn price_from_yield(
        &self,
        bond: &BondDefinition,
        settlement: Date,
        effective_yield: f64,
    ) -> AnalyticsResult<PriceResult> {
        bond.check_settlement(settlement)?;
        if !effective_yield.is_finite() || effective_yield <= -1.0 {
            return Err(AnalyticsError::configuration(format!(
                "yield {effective_yield} must be finite and greater than -100%"
            )));
        }

        let schedule = bond.schedule();
        let convention = bond.day_count();
        let receipts = future_flows(schedule, settlement, convention);
        if receipts.is_empty() {
            return Err(AnalyticsError::InsufficientCashFlows { count: 0 });
        }

        let value = present_value(&receipts, effective_yield, convention);
        let dirty = Decimal::from_f64(value)
            .ok_or_else(|| AnalyticsError::invalid_price(value, "discounted value is not finite"))?
            .round_dp(PRICE_DECIMALS);
        let accrued = accrued_interest(schedule, settlement, convention);

        Ok(PriceResult {
            dirty_price: dirty,
            accrued_interest: accrued,
            clean_price: clean_price(dirty, accrued),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondlab_core::daycounts::DayCountConvention;
    use bondlab_core::types::{Frequency, ScheduledPayment};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn two_year_annual() -> BondDefinition {
        BondDefinition::bullet(
            "TWO-YEAR",
            date(2025, 1, 1),
            date(2027, 1, 1),
            dec!(0.06),
            Frequency::Annual,
            DayCountConvention::Thirty360,
        )
        .unwrap()
    }

    #[test]
    fn test_annual_par_bond() {
        let bond = two_year_annual();
        let analysis = BondCalculator::new()
            .analyze(&SettlementContext::dirty(&bond, date(2025, 1, 1), dec!(100)))
            .unwrap();
        let result = &analysis.result;

        assert_relative_eq!(result.annualized_yield, 0.06, epsilon = 1e-8);
        assert_relative_eq!(result.periodic_yield, 0.06, epsilon = 1e-8);
        assert_relative_eq!(result.nominal_yield, 0.06, epsilon = 1e-8);
        assert_eq!(result.solve_status, SolveStatus::Converged);
        assert_eq!(result.accrued_interest, Decimal::ZERO);
        assert_eq!(result.parity, dec!(1));
        assert_eq!(result.next_coupon_date, Some(date(2026, 1, 1)));
        assert_eq!(result.last_coupon_date, None);
        assert_eq!(result.current_coupon_rate, dec!(0.06));
        assert_eq!(analysis.cash_flows.len(), 3);
    }

    #[test]
    fn test_clean_basis_adds_accrued() {
        let bond = two_year_annual();
        let settlement = date(2025, 7, 1);
        let calculator = BondCalculator::new();

        let clean = calculator
            .analyze(&SettlementContext::clean(&bond, settlement, dec!(100)))
            .unwrap();
        let dirty = calculator
            .analyze(&SettlementContext::dirty(&bond, settlement, dec!(103)))
            .unwrap();

        // 0.06 × 100 × 180 / 360
        assert_eq!(clean.result.accrued_interest, dec!(3));
        assert_eq!(clean.result.dirty_price, dec!(103));
        assert_relative_eq!(
            clean.result.annualized_yield,
            dirty.result.annualized_yield,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_out_of_range() {
        let bond = two_year_annual();
        let calculator = BondCalculator::new();

        for settlement in [date(2024, 12, 31), date(2027, 1, 2)] {
            let err = calculator
                .analyze(&SettlementContext::dirty(&bond, settlement, dec!(100)))
                .unwrap_err();
            assert!(matches!(err, AnalyticsError::OutOfRange { .. }));
        }
    }

    #[test]
    fn test_settlement_at_maturity() {
        let bond = two_year_annual();
        let err = BondCalculator::new()
            .analyze(&SettlementContext::dirty(&bond, date(2027, 1, 1), dec!(100)))
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::InsufficientCashFlows { .. }));
    }

    #[test]
    fn test_invalid_price() {
        let bond = two_year_annual();
        let err = BondCalculator::new()
            .analyze(&SettlementContext::dirty(&bond, date(2025, 1, 1), dec!(0)))
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidPrice { .. }));
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = AnalyticsConfig {
            tolerance: 0.0,
            ..AnalyticsConfig::default()
        };
        assert!(BondCalculator::with_config(config).is_err());
    }

    #[test]
    fn test_price_from_yield() {
        let bond = two_year_annual();
        let calculator = BondCalculator::new();

        let at_par = calculator
            .price_from_yield(&bond, date(2025, 1, 1), 0.06)
            .unwrap();
        assert!((at_par.dirty_price - dec!(100)).abs() < dec!(0.00000001));

        let mid = calculator
            .price_from_yield(&bond, date(2025, 7, 1), 0.06)
            .unwrap();
        assert_eq!(mid.accrued_interest, dec!(3));
        assert_eq!(mid.clean_price, mid.dirty_price - dec!(3));

        assert!(calculator
            .price_from_yield(&bond, date(2025, 1, 1), -1.0)
            .is_err());
    }

    #[test]
    fn test_amortizing_bond_metrics() {
        let schedule = vec![
            ScheduledPayment::new(date(2025, 1, 1), dec!(0), dec!(0), dec!(0)).unwrap(),
            ScheduledPayment::new(date(2026, 1, 1), dec!(0), dec!(0), dec!(50)).unwrap(),
            ScheduledPayment::new(date(2027, 1, 1), dec!(0), dec!(0), dec!(50)).unwrap(),
        ];
        let bond = BondDefinition::new(
            "AMORT",
            DayCountConvention::Thirty360,
            Frequency::Annual,
            "amortizing",
            schedule,
        )
        .unwrap();

        let result = BondCalculator::new()
            .analyze(&SettlementContext::dirty(&bond, date(2025, 1, 1), dec!(90)))
            .unwrap()
            .result;

        assert_relative_eq!(result.average_life, 1.5, epsilon = 1e-12);
        assert_eq!(result.next_coupon_date, None);
        assert_eq!(result.last_coupon_date, None);
        assert_eq!(result.current_coupon_rate, Decimal::ZERO);
        assert!(result.annualized_yield > 0.0);
    }
}
