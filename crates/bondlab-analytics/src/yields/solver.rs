//! Yield-to-maturity solver.
//!
//! Newton-Raphson on the NPV of the projected flows, restricted to an
//! admissible rate interval, with bisection over that interval as fallback.

use std::fmt;

use serde::{Deserialize, Serialize};

use bondlab_core::daycounts::DayCountConvention;
use bondlab_core::types::CashFlow;
use bondlab_math::error::MathError;
use bondlab_math::solvers::{bisection, newton_raphson_bounded, SolverConfig};

use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, AnalyticsResult};

/// How a yield was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Newton-Raphson converged.
    Converged,
    /// Newton-Raphson gave up and bisection converged.
    Fallback,
    /// Neither method converged; the rate is a best-effort estimate.
    Degraded,
}

impl SolveStatus {
    /// True when the rate is only an estimate.
    #[must_use]
    pub fn is_degraded(self) -> bool {
        self == SolveStatus::Degraded
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolveStatus::Converged => "Converged",
            SolveStatus::Fallback => "Fallback",
            SolveStatus::Degraded => "Degraded",
        };
        write!(f, "{name}")
    }
}

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldSolution {
    /// Effective annual yield (as a decimal, e.g., 0.05 for 5%).
    pub rate: f64,
    /// Iterations spent by the method that produced `rate`.
    pub iterations: u32,
    /// NPV at `rate`.
    pub residual: f64,
    /// How `rate` was obtained.
    pub status: SolveStatus,
}

/// Yield-to-maturity solver.
///
/// Uses Newton-Raphson from an initial guess, abandoning it when the
/// derivative vanishes, an iterate leaves `[lower, upper]` or goes
/// non-finite, or the iteration budget runs out. Bisection over
/// `[lower, upper]` then takes over.
#[derive(Debug, Clone, Copy)]
pub struct YieldSolver {
    newton: SolverConfig,
    bisection: SolverConfig,
    initial_guess: f64,
    bounds: (f64, f64),
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-8
    /// Default max iterations: 100 (Newton), 200 (bisection)
    /// Default initial guess: 5%
    /// Default bounds: [-99%, 200%]
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&AnalyticsConfig::default())
    }

    /// Creates a solver from an analytics configuration.
    ///
    /// The configuration is assumed valid; see [`AnalyticsConfig::validate`].
    #[must_use]
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self {
            newton: SolverConfig::new(config.tolerance, config.max_iterations),
            bisection: SolverConfig::new(config.tolerance, config.bisection_iterations),
            initial_guess: config.initial_guess,
            bounds: (config.lower_bound, config.upper_bound),
        }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.newton = self.newton.with_tolerance(tolerance);
        self.bisection = self.bisection.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum Newton-Raphson iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.newton = self.newton.with_max_iterations(max_iterations);
        self
    }

    /// Sets the Newton-Raphson starting rate.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Solves for the effective annual yield that zeroes the NPV.
    ///
    /// `cash_flows` must include the funding leg, as produced by
    /// [`crate::cashflows::project`].
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InsufficientCashFlows` for fewer than two
    /// flows, and `AnalyticsError::Math` if the NPV is not finite at the
    /// bracket ends. Failure to converge is not an error: the solution is
    /// returned with [`SolveStatus::Degraded`].
    pub fn solve(
        &self,
        cash_flows: &[CashFlow],
        convention: DayCountConvention,
    ) -> AnalyticsResult<YieldSolution> {
        if cash_flows.len() < 2 {
            return Err(AnalyticsError::InsufficientCashFlows {
                count: cash_flows.len(),
            });
        }

        let cf_data = timed_amounts(cash_flows, convention);
        let objective = |r: f64| npv(&cf_data, r);
        let derivative = |r: f64| npv_derivative(&cf_data, r);

        match newton_raphson_bounded(
            objective,
            derivative,
            self.initial_guess,
            self.bounds,
            &self.newton,
        ) {
            Ok(result) => {
                log::debug!(
                    "yield converged to {} in {} Newton iteration(s)",
                    result.root,
                    result.iterations
                );
                Ok(YieldSolution {
                    rate: result.root,
                    iterations: result.iterations,
                    residual: result.residual,
                    status: SolveStatus::Converged,
                })
            }
            Err(err) => {
                log::warn!("Newton-Raphson abandoned ({err}), falling back to bisection");
                self.solve_with_bisection(objective)
            }
        }
    }

    fn solve_with_bisection<F>(&self, objective: F) -> AnalyticsResult<YieldSolution>
    where
        F: Fn(f64) -> f64,
    {
        let (lower, upper) = self.bounds;
        match bisection(&objective, lower, upper, &self.bisection) {
            Ok(result) => Ok(YieldSolution {
                rate: result.root,
                iterations: result.iterations,
                residual: result.residual,
                status: SolveStatus::Fallback,
            }),
            Err(MathError::ConvergenceFailed {
                iterations,
                estimate,
                ..
            }) => {
                let residual = objective(estimate);
                log::warn!(
                    "bisection exhausted {iterations} iterations; using midpoint {estimate} (NPV {residual:.3e})"
                );
                Ok(YieldSolution {
                    rate: estimate,
                    iterations,
                    residual,
                    status: SolveStatus::Degraded,
                })
            }
            Err(MathError::InvalidBracket { a, b, fa, fb }) => {
                let (rate, residual) = if fa.abs() <= fb.abs() { (a, fa) } else { (b, fb) };
                log::warn!(
                    "no sign change on [{a}, {b}] (NPV {fa:.3e} / {fb:.3e}); using endpoint {rate}"
                );
                Ok(YieldSolution {
                    rate,
                    iterations: 0,
                    residual,
                    status: SolveStatus::Degraded,
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Converts flows to `(years, amount)` pairs under the convention's divisor.
fn timed_amounts(cash_flows: &[CashFlow], convention: DayCountConvention) -> Vec<(f64, f64)> {
    let divisor = f64::from(convention.annual_divisor());
    cash_flows
        .iter()
        .map(|cf| (cf.days() as f64 / divisor, cf.total_f64()))
        .collect()
}

fn npv(cf_data: &[(f64, f64)], rate: f64) -> f64 {
    cf_data
        .iter()
        .map(|(years, amount)| amount * (1.0 + rate).powf(-years))
        .sum()
}

fn npv_derivative(cf_data: &[(f64, f64)], rate: f64) -> f64 {
    cf_data
        .iter()
        .map(|(years, amount)| -amount * years * (1.0 + rate).powf(-years - 1.0))
        .sum()
}

/// Present value of `cash_flows` at the effective annual `rate`.
///
/// Includes the funding leg when present, so this is the NPV the solver
/// drives to zero.
#[must_use]
pub fn present_value(cash_flows: &[CashFlow], rate: f64, convention: DayCountConvention) -> f64 {
    npv(&timed_amounts(cash_flows, convention), rate)
}

/// Derivative of [`present_value`] with respect to `rate`.
#[must_use]
pub fn pv_derivative(cash_flows: &[CashFlow], rate: f64, convention: DayCountConvention) -> f64 {
    npv_derivative(&timed_amounts(cash_flows, convention), rate)
}

/// Dirty price implied by an effective annual yield.
///
/// The funding leg, if present, is ignored.
#[must_use]
pub fn price_from_yield(cash_flows: &[CashFlow], rate: f64, convention: DayCountConvention) -> f64 {
    let receipts: Vec<CashFlow> = cash_flows
        .iter()
        .filter(|cf| !cf.is_funding())
        .copied()
        .collect();
    present_value(&receipts, rate, convention)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondlab_core::types::Date;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Funding at `price` plus a 10% semi-annual 2-year bullet on 30/360.
    fn two_year(price: Decimal) -> Vec<CashFlow> {
        vec![
            CashFlow::funding(date(2025, 9, 10), price),
            CashFlow::receipt(date(2026, 3, 10), 180, dec!(0), dec!(5)),
            CashFlow::receipt(date(2026, 9, 10), 360, dec!(0), dec!(5)),
            CashFlow::receipt(date(2027, 3, 10), 540, dec!(0), dec!(5)),
            CashFlow::receipt(date(2027, 9, 10), 720, dec!(100), dec!(5)),
        ]
    }

    #[test]
    fn test_par_bond_converges() {
        let solution = YieldSolver::new()
            .solve(&two_year(dec!(100)), DayCountConvention::Thirty360)
            .unwrap();

        assert_eq!(solution.status, SolveStatus::Converged);
        assert_relative_eq!(solution.rate, 0.1025, epsilon = 1e-9);
        assert!(solution.residual.abs() < 1e-6);
    }

    #[test]
    fn test_initial_guess_does_not_move_root() {
        let solution = YieldSolver::new()
            .with_initial_guess(0.30)
            .solve(&two_year(dec!(100)), DayCountConvention::Thirty360)
            .unwrap();

        assert!(!solution.status.is_degraded());
        assert_relative_eq!(solution.rate, 0.1025, epsilon = 1e-7);
    }

    #[test]
    fn test_discount_bond_yields_more() {
        let solution = YieldSolver::new()
            .solve(&two_year(dec!(95)), DayCountConvention::Thirty360)
            .unwrap();

        assert!(solution.rate > 0.1025);
        let pv = present_value(&two_year(dec!(95)), solution.rate, DayCountConvention::Thirty360);
        assert!(pv.abs() < 1e-6);
    }

    #[test]
    fn test_price_from_yield_inverts_solve() {
        let flows = two_year(dec!(103.25));
        let solution = YieldSolver::new()
            .solve(&flows, DayCountConvention::Thirty360)
            .unwrap();

        let price = price_from_yield(&flows, solution.rate, DayCountConvention::Thirty360);
        assert_relative_eq!(price, 103.25, epsilon = 1e-6);
    }

    #[test]
    fn test_pv_monotone_and_bracketed() {
        let flows = two_year(dec!(100));
        let dc = DayCountConvention::Thirty360;

        assert!(present_value(&flows, -0.99, dc) > 0.0);
        assert!(present_value(&flows, 2.0, dc) < 0.0);

        let mut previous = present_value(&flows, -0.5, dc);
        for step in 1..=25 {
            let rate = -0.5 + f64::from(step) * 0.1;
            let pv = present_value(&flows, rate, dc);
            assert!(pv < previous);
            previous = pv;
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let flows = two_year(dec!(97));
        let dc = DayCountConvention::Act365;
        let h = 1e-6;

        let numeric = (present_value(&flows, 0.08 + h, dc) - present_value(&flows, 0.08 - h, dc))
            / (2.0 * h);
        assert_relative_eq!(pv_derivative(&flows, 0.08, dc), numeric, epsilon = 1e-4);
    }

    #[test]
    fn test_fallback_when_newton_cannot_start() {
        // One Newton step is not enough to converge from 5%
        let solution = YieldSolver::new()
            .with_max_iterations(1)
            .solve(&two_year(dec!(80)), DayCountConvention::Thirty360)
            .unwrap();

        assert_eq!(solution.status, SolveStatus::Fallback);
        let converged = YieldSolver::new()
            .solve(&two_year(dec!(80)), DayCountConvention::Thirty360)
            .unwrap();
        assert_relative_eq!(solution.rate, converged.rate, epsilon = 1e-7);
    }

    #[test]
    fn test_degraded_when_root_outside_bracket() {
        // Paying 1 for 120 in a year implies a yield of 11900%
        let flows = vec![
            CashFlow::funding(date(2025, 1, 1), dec!(1)),
            CashFlow::receipt(date(2026, 1, 1), 360, dec!(100), dec!(20)),
        ];

        let solution = YieldSolver::new()
            .solve(&flows, DayCountConvention::Thirty360)
            .unwrap();

        assert!(solution.status.is_degraded());
        assert_relative_eq!(solution.rate, 2.0);
        assert!(solution.residual > 0.0);
    }

    #[test]
    fn test_insufficient_flows() {
        let flows = vec![CashFlow::funding(date(2025, 1, 1), dec!(100))];
        let err = YieldSolver::new()
            .solve(&flows, DayCountConvention::Thirty360)
            .unwrap_err();

        assert_eq!(err, AnalyticsError::InsufficientCashFlows { count: 1 });
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SolveStatus::Fallback.to_string(), "Fallback");
        assert!(!SolveStatus::Converged.is_degraded());
    }
}
