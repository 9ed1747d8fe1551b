//! Macaulay and modified duration.
//!
//! ## Formula
//!
//! ```text
//! t_i   = days_i / 365
//! PV_i  = flow_i / (1 + y)^t_i
//! D_mac = Σ t_i × PV_i / Σ PV_i
//! D_mod = D_mac / (1 + y)
//! ```
//!
//! where `y` is the effective annual yield and only positive flows take part
//! (the funding leg is excluded). Time is measured on a fixed 365-day year
//! regardless of the bond's day count convention.

use bondlab_core::types::{CashFlow, Frequency};

/// Days per year used to express duration in years.
pub const DURATION_BASIS_DAYS: u32 = 365;

/// Macaulay and modified duration in years on a 365-day basis.
///
/// Returns `(0.0, 0.0)` when the discounted positive flows sum to zero.
///
/// # Example
///
/// ```rust
/// use bondlab_analytics::risk::macaulay_and_modified;
/// use bondlab_core::types::{CashFlow, Date};
/// use rust_decimal_macros::dec;
///
/// let flows = vec![
///     CashFlow::funding(Date::from_ymd(2025, 1, 1).unwrap(), dec!(90)),
///     CashFlow::receipt(Date::from_ymd(2027, 1, 1).unwrap(), 730, dec!(100), dec!(0)),
/// ];
///
/// let (macaulay, modified) = macaulay_and_modified(&flows, 0.054);
/// assert!((macaulay - 2.0).abs() < 1e-12);
/// assert!((modified - 2.0 / 1.054).abs() < 1e-12);
/// ```
#[must_use]
pub fn macaulay_and_modified(cash_flows: &[CashFlow], yield_rate: f64) -> (f64, f64) {
    macaulay_and_modified_on_basis(cash_flows, yield_rate, DURATION_BASIS_DAYS)
}

/// Macaulay and modified duration with time measured in `basis_days` years.
#[must_use]
pub fn macaulay_and_modified_on_basis(
    cash_flows: &[CashFlow],
    yield_rate: f64,
    basis_days: u32,
) -> (f64, f64) {
    let basis = f64::from(basis_days);
    let (weighted, total) = cash_flows
        .iter()
        .filter(|cf| cf.total().is_sign_positive() && !cf.total().is_zero())
        .map(|cf| {
            let years = cf.days() as f64 / basis;
            let pv = cf.total_f64() * (1.0 + yield_rate).powf(-years);
            (years * pv, pv)
        })
        .fold((0.0, 0.0), |(w, t), (wpv, pv)| (w + wpv, t + pv));

    if total == 0.0 {
        return (0.0, 0.0);
    }

    let macaulay = weighted / total;
    (macaulay, macaulay / (1.0 + yield_rate))
}

/// Modified duration with periodic compounding: `D_mac / (1 + y/p)`.
///
/// `yield_rate` is the nominal annual yield compounded `p` times a year.
#[must_use]
pub fn modified_periodic(macaulay: f64, yield_rate: f64, periodicity: Frequency) -> f64 {
    let p = f64::from(periodicity.periods_per_year());
    macaulay / (1.0 + yield_rate / p)
}

/// Macaulay duration expressed in coupon periods.
#[must_use]
pub fn macaulay_periods(macaulay: f64, periodicity: Frequency) -> f64 {
    macaulay * f64::from(periodicity.periods_per_year())
}
