//! Average life.

use rust_decimal::prelude::ToPrimitive;

use bondlab_core::daycounts::DayCountConvention;
use bondlab_core::types::{Date, ScheduledPayment};

/// Principal-weighted mean time to repayment, in years of the convention's
/// annual divisor.
///
/// ```text
/// WAL = Σ principal_i × (days(settlement, date_i) / divisor) / Σ principal_i
/// ```
///
/// Every schedule row dated on or after `settlement` counts, so a repayment
/// falling on the settlement date weighs in at day 0 and the weights always
/// sum to the residual principal. Returns `0.0` when nothing remains to be
/// repaid.
#[must_use]
pub fn average_life(
    schedule: &[ScheduledPayment],
    settlement: Date,
    convention: DayCountConvention,
) -> f64 {
    let divisor = f64::from(convention.annual_divisor());
    let (weighted, principal) = schedule
        .iter()
        .filter(|row| row.date >= settlement)
        .filter_map(|row| {
            let principal = row.principal.to_f64()?;
            let days = convention.days_between(settlement, row.date);
            (principal > 0.0).then(|| (principal * days as f64 / divisor, principal))
        })
        .fold((0.0, 0.0), |(w, p), (wp, pr)| (w + wp, p + pr));

    if principal == 0.0 {
        0.0
    } else {
        weighted / principal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn row(d: Date, coupon: Decimal, principal: Decimal) -> ScheduledPayment {
        ScheduledPayment::new(d, dec!(0.05), coupon, principal).unwrap()
    }

    fn two_amortizations() -> Vec<ScheduledPayment> {
        vec![
            row(date(2025, 1, 1), dec!(0), dec!(0)),
            row(date(2026, 1, 1), dec!(0), dec!(50)),
            row(date(2027, 1, 1), dec!(0), dec!(50)),
        ]
    }

    #[test]
    fn test_two_equal_amortizations() {
        assert_relative_eq!(
            average_life(&two_amortizations(), date(2025, 1, 1), DayCountConvention::Thirty360),
            1.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_repayment_on_settlement_counts_at_day_zero() {
        // (50 × 0 + 50 × 1) / 100
        assert_relative_eq!(
            average_life(&two_amortizations(), date(2026, 1, 1), DayCountConvention::Thirty360),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_coupons_do_not_count() {
        let schedule = vec![
            row(date(2025, 1, 1), dec!(0), dec!(0)),
            row(date(2025, 7, 1), dec!(5), dec!(0)),
            row(date(2026, 1, 1), dec!(5), dec!(100)),
        ];
        assert_relative_eq!(
            average_life(&schedule, date(2025, 1, 1), DayCountConvention::Thirty360),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_no_principal_left() {
        assert_eq!(
            average_life(&two_amortizations(), date(2027, 1, 2), DayCountConvention::Act365),
            0.0
        );
    }
}
