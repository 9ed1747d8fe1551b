//! Accrued interest and the price measures derived from it.
//!
//! ## Formula
//!
//! ```text
//! accrued         = rate × residual × days(last coupon, settlement) / divisor
//! clean           = dirty − accrued
//! technical value = residual + accrued
//! parity          = clean / technical value
//! ```

use rust_decimal::Decimal;

use bondlab_core::daycounts::DayCountConvention;
use bondlab_core::types::{Date, ScheduledPayment};

use crate::cashflows::{last_coupon, residual_principal};

/// Interest accrued from the last coupon-bearing row up to `settlement`.
///
/// Zero when no coupon-bearing row precedes settlement, which includes
/// settling on the issue date.
///
/// # Example
///
/// ```rust
/// use bondlab_analytics::accrued::accrued_interest;
/// use bondlab_core::daycounts::DayCountConvention;
/// use bondlab_core::types::{Date, ScheduledPayment};
/// use rust_decimal_macros::dec;
///
/// let schedule = vec![
///     ScheduledPayment::new(Date::from_ymd(2025, 9, 10).unwrap(), dec!(0.10), dec!(0), dec!(0)).unwrap(),
///     ScheduledPayment::new(Date::from_ymd(2026, 3, 10).unwrap(), dec!(0.10), dec!(5), dec!(100)).unwrap(),
/// ];
/// let settlement = Date::from_ymd(2025, 12, 10).unwrap();
///
/// let accrued = accrued_interest(&schedule, settlement, DayCountConvention::Thirty360);
/// assert_eq!(accrued, dec!(2.5));
/// ```
#[must_use]
pub fn accrued_interest(
    schedule: &[ScheduledPayment],
    settlement: Date,
    convention: DayCountConvention,
) -> Decimal {
    let Some(last) = last_coupon(schedule, settlement) else {
        return Decimal::ZERO;
    };

    let days = Decimal::from(convention.days_between(last.date, settlement));
    let divisor = Decimal::from(convention.annual_divisor());
    let residual = residual_principal(schedule, settlement);

    last.coupon_rate * residual * days / divisor
}

/// Clean price from dirty price.
#[must_use]
pub fn clean_price(dirty: Decimal, accrued: Decimal) -> Decimal {
    dirty - accrued
}

/// Dirty price from clean price.
#[must_use]
pub fn dirty_price(clean: Decimal, accrued: Decimal) -> Decimal {
    clean + accrued
}

/// Residual principal plus accrued interest.
#[must_use]
pub fn technical_value(residual: Decimal, accrued: Decimal) -> Decimal {
    residual + accrued
}

/// Clean price over technical value; zero when the technical value is zero.
#[must_use]
pub fn parity(clean: Decimal, technical_value: Decimal) -> Decimal {
    if technical_value.is_zero() {
        Decimal::ZERO
    } else {
        clean / technical_value
    }
}
