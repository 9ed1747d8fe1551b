//! Projection of a contractual schedule into dated cash flows.

use rust_decimal::Decimal;

use bondlab_core::daycounts::DayCountConvention;
use bondlab_core::types::{CashFlow, Date, ScheduledPayment};

use crate::bond::FACE_VALUE;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Projects the cash flows seen by a buyer settling on `settlement` at `price`.
///
/// The first flow is the funding leg (`days == 0`, total `-price`). Every
/// schedule row strictly after settlement follows, with its day count from
/// settlement under `convention`.
///
/// # Errors
///
/// - `AnalyticsError::InvalidPrice` if `price` is not positive
/// - `AnalyticsError::InsufficientCashFlows` if no row falls after
///   settlement, or every remaining row pays nothing
///
/// # Example
///
/// ```rust
/// use bondlab_analytics::cashflows::project;
/// use bondlab_core::daycounts::DayCountConvention;
/// use bondlab_core::types::{Date, ScheduledPayment};
/// use rust_decimal_macros::dec;
///
/// let schedule = vec![
///     ScheduledPayment::new(Date::from_ymd(2025, 1, 1).unwrap(), dec!(0.05), dec!(0), dec!(0)).unwrap(),
///     ScheduledPayment::new(Date::from_ymd(2026, 1, 1).unwrap(), dec!(0.05), dec!(5), dec!(100)).unwrap(),
/// ];
/// let settlement = Date::from_ymd(2025, 7, 1).unwrap();
///
/// let flows = project(&schedule, settlement, dec!(101), DayCountConvention::Thirty360).unwrap();
/// assert_eq!(flows.len(), 2);
/// assert_eq!(flows[0].total(), dec!(-101));
/// assert_eq!(flows[1].days(), 180);
/// ```
pub fn project(
    schedule: &[ScheduledPayment],
    settlement: Date,
    price: Decimal,
    convention: DayCountConvention,
) -> AnalyticsResult<Vec<CashFlow>> {
    if price <= Decimal::ZERO {
        return Err(AnalyticsError::invalid_price(price, "price must be positive"));
    }

    let receipts = future_flows(schedule, settlement, convention);
    let count = receipts.len() + 1;
    if receipts.is_empty() || receipts.iter().all(|cf| cf.total().is_zero()) {
        return Err(AnalyticsError::InsufficientCashFlows { count });
    }

    let mut flows = Vec::with_capacity(count);
    flows.push(CashFlow::funding(settlement, price));
    flows.extend(receipts);

    log::debug!(
        "projected {} cash flow(s) from {} at price {}",
        flows.len(),
        settlement,
        price
    );
    Ok(flows)
}

/// Cash flows strictly after `settlement`, without a funding leg.
#[must_use]
pub fn future_flows(
    schedule: &[ScheduledPayment],
    settlement: Date,
    convention: DayCountConvention,
) -> Vec<CashFlow> {
    schedule
        .iter()
        .filter(|row| row.date > settlement)
        .map(|row| {
            CashFlow::receipt(
                row.date,
                convention.days_between(settlement, row.date),
                row.principal,
                row.coupon,
            )
        })
        .collect()
}

/// Face value not yet repaid as of `settlement`.
///
/// Principal paid on the settlement date itself is not subtracted.
#[must_use]
pub fn residual_principal(schedule: &[ScheduledPayment], settlement: Date) -> Decimal {
    let repaid: Decimal = schedule
        .iter()
        .filter(|row| row.date < settlement)
        .map(|row| row.principal)
        .sum();
    FACE_VALUE - repaid
}

/// Latest coupon-bearing row strictly before `settlement`.
///
/// The issue row counts: it carries the coupon rate that accrues from it.
#[must_use]
pub fn last_coupon(schedule: &[ScheduledPayment], settlement: Date) -> Option<&ScheduledPayment> {
    schedule
        .iter()
        .rev()
        .find(|row| row.date < settlement && row.bears_coupon_rate())
}

/// Earliest row on or after `settlement` that pays a coupon.
#[must_use]
pub fn next_coupon(schedule: &[ScheduledPayment], settlement: Date) -> Option<&ScheduledPayment> {
    schedule
        .iter()
        .find(|row| row.date >= settlement && row.pays_coupon())
}

/// Nominal coupon rate in effect at `settlement`.
///
/// The rate of the latest coupon-bearing row on or before settlement; before
/// the first such row, the rate it introduces. Zero for a bond with no
/// coupon-bearing rows.
#[must_use]
pub fn coupon_rate_in_effect(schedule: &[ScheduledPayment], settlement: Date) -> Decimal {
    schedule
        .iter()
        .rev()
        .find(|row| row.date <= settlement && row.bears_coupon_rate())
        .or_else(|| schedule.iter().find(|row| row.bears_coupon_rate()))
        .map_or(Decimal::ZERO, |row| row.coupon_rate)
}
