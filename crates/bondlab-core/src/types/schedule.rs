//! Contractual schedule rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Date;
use crate::error::{CoreError, CoreResult};

/// One row of a bond's contractual schedule.
///
/// Amounts are expressed as a percentage of face value (face normalized to
/// 100). `coupon_rate` is the nominal annual rate in effect from this date
/// until superseded by a later row, as a decimal fraction (`0.10` for 10%).
///
/// # Example
///
/// ```rust
/// use bondlab_core::types::{Date, ScheduledPayment};
/// use rust_decimal_macros::dec;
///
/// let row = ScheduledPayment::new(
///     Date::from_ymd(2035, 9, 10).unwrap(),
///     dec!(0.10),
///     dec!(5),
///     dec!(100),
/// )
/// .unwrap();
/// assert_eq!(row.total(), dec!(105));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    /// Payment date.
    pub date: Date,
    /// Nominal annual coupon rate in effect from this date.
    pub coupon_rate: Decimal,
    /// Coupon paid on this date (% of face).
    #[serde(default)]
    pub coupon: Decimal,
    /// Principal repaid on this date (% of face).
    #[serde(default)]
    pub principal: Decimal,
}

impl ScheduledPayment {
    /// Creates a validated schedule row.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPayment` if any rate or amount is negative.
    pub fn new(
        date: Date,
        coupon_rate: Decimal,
        coupon: Decimal,
        principal: Decimal,
    ) -> CoreResult<Self> {
        let row = Self {
            date,
            coupon_rate,
            coupon,
            principal,
        };
        row.validate()?;
        Ok(row)
    }

    /// Checks that the row carries no negative rate or amount.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPayment` describing the first violation.
    pub fn validate(&self) -> CoreResult<()> {
        if self.coupon_rate.is_sign_negative() && !self.coupon_rate.is_zero() {
            return Err(CoreError::invalid_payment(
                self.date,
                format!("negative coupon rate {}", self.coupon_rate),
            ));
        }
        if self.coupon.is_sign_negative() && !self.coupon.is_zero() {
            return Err(CoreError::invalid_payment(
                self.date,
                format!("negative coupon amount {}", self.coupon),
            ));
        }
        if self.principal.is_sign_negative() && !self.principal.is_zero() {
            return Err(CoreError::invalid_payment(
                self.date,
                format!("negative principal amount {}", self.principal),
            ));
        }
        Ok(())
    }

    /// Coupon plus principal paid on this date.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.coupon + self.principal
    }

    /// True when a coupon rate is in effect from this row.
    #[must_use]
    pub fn bears_coupon_rate(&self) -> bool {
        !self.coupon_rate.is_zero()
    }

    /// True when this row pays a coupon amount.
    #[must_use]
    pub fn pays_coupon(&self) -> bool {
        !self.coupon.is_zero()
    }
}
