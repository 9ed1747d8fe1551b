//! Conversions from the effective annual yield.

use bondlab_core::types::Frequency;

/// Yield per coupon period: `(1 + effective)^(1/p) - 1`.
#[must_use]
pub fn periodic_yield(effective: f64, periodicity: Frequency) -> f64 {
    let p = f64::from(periodicity.periods_per_year());
    (1.0 + effective).powf(1.0 / p) - 1.0
}

/// Nominal annual yield compounded `p` times a year: `p × periodic`.
#[must_use]
pub fn nominal_yield(effective: f64, periodicity: Frequency) -> f64 {
    f64::from(periodicity.periods_per_year()) * periodic_yield(effective, periodicity)
}
