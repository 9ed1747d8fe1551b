//! Discounted cash-flow table.

use rust_decimal::Decimal;
use serde::Serialize;

use bondlab_core::daycounts::DayCountConvention;
use bondlab_core::types::{CashFlow, Date, Frequency};

/// One row of the discounted cash-flow table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountedCashFlow {
    /// Payment date.
    pub date: Date,
    /// Days from settlement under the bond's convention.
    pub days: i64,
    /// `days / annual divisor`.
    pub years: f64,
    /// Coupon periods from settlement (`years × periodicity`).
    pub periods: f64,
    /// Principal component.
    pub capital: Decimal,
    /// Coupon component.
    pub coupon: Decimal,
    /// Total received.
    pub total: Decimal,
    /// `(1 + yield)^-years`.
    pub discount_factor: f64,
    /// `total × discount_factor`.
    pub present_value: f64,
}

/// Discounts every receipt at the effective annual `yield_rate`.
///
/// The funding leg is skipped, so the present values sum to the dirty price
/// implied by `yield_rate`.
#[must_use]
pub fn discounted_table(
    cash_flows: &[CashFlow],
    yield_rate: f64,
    convention: DayCountConvention,
    periodicity: Frequency,
) -> Vec<DiscountedCashFlow> {
    let divisor = f64::from(convention.annual_divisor());
    let periods_per_year = f64::from(periodicity.periods_per_year());

    cash_flows
        .iter()
        .filter(|cf| !cf.is_funding())
        .map(|cf| {
            let years = cf.days() as f64 / divisor;
            let discount_factor = (1.0 + yield_rate).powf(-years);
            DiscountedCashFlow {
                date: cf.date(),
                days: cf.days(),
                years,
                periods: years * periods_per_year,
                capital: cf.capital(),
                coupon: cf.coupon(),
                total: cf.total(),
                discount_factor,
                present_value: cf.total_f64() * discount_factor,
            }
        })
        .collect()
}
