//! Yield calculation methods.
//!
//! The solver returns an **effective annual** yield: the rate `r` for which
//!
//! ```text
//! Σ flow_i / (1 + r)^(days_i / divisor) = 0
//! ```
//!
//! with the funding leg (the price paid) embedded as a negative flow at
//! `days = 0`. [`periodic_yield`] and [`nominal_yield`] convert it to the
//! per-period and nominal annual quotes.
//!
//! # Usage
//!
//! ```rust
//! use bondlab_analytics::yields::{periodic_yield, YieldSolver, SolveStatus};
//! use bondlab_core::daycounts::DayCountConvention;
//! use bondlab_core::types::{CashFlow, Date, Frequency};
//! use rust_decimal_macros::dec;
//!
//! let settlement = Date::from_ymd(2025, 9, 10).unwrap();
//! let flows = vec![
//!     CashFlow::funding(settlement, dec!(100)),
//!     CashFlow::receipt(Date::from_ymd(2026, 3, 10).unwrap(), 180, dec!(0), dec!(5)),
//!     CashFlow::receipt(Date::from_ymd(2026, 9, 10).unwrap(), 360, dec!(100), dec!(5)),
//! ];
//!
//! let solution = YieldSolver::new().solve(&flows, DayCountConvention::Thirty360).unwrap();
//! assert_eq!(solution.status, SolveStatus::Converged);
//! assert!((solution.rate - 0.1025).abs() < 1e-8);
//! assert!((periodic_yield(solution.rate, Frequency::SemiAnnual) - 0.05).abs() < 1e-8);
//! ```

mod rates;
mod solver;

pub use rates::{nominal_yield, periodic_yield};
pub use solver::{
    present_value, price_from_yield, pv_derivative, SolveStatus, YieldSolution, YieldSolver,
};
