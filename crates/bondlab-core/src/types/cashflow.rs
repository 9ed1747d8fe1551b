//! Projected cash flow type for bond analytics.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Price paid at settlement (negative amount)
    Funding,
    /// Regular coupon payment
    Coupon,
    /// Principal repayment without coupon
    Principal,
    /// Combined coupon and principal
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Funding => "Funding",
            CashFlowType::Coupon => "Coupon",
            CashFlowType::Principal => "Principal",
            CashFlowType::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A cash flow dated relative to a settlement date.
///
/// The first flow of a projection is the funding leg: `days == 0` and a
/// negative total equal to the price paid. Every later flow is a receipt
/// split into capital and coupon.
///
/// # Example
///
/// ```rust
/// use bondlab_core::types::{CashFlow, CashFlowType, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::receipt(Date::from_ymd(2026, 3, 10).unwrap(), 180, dec!(0), dec!(5));
/// assert_eq!(cf.total(), dec!(5));
/// assert_eq!(cf.cf_type(), CashFlowType::Coupon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    date: Date,
    days: i64,
    capital: Decimal,
    coupon: Decimal,
    total: Decimal,
    cf_type: CashFlowType,
}

impl CashFlow {
    /// Creates the funding leg: the price paid at settlement.
    #[must_use]
    pub fn funding(settlement: Date, price: Decimal) -> Self {
        Self {
            date: settlement,
            days: 0,
            capital: Decimal::ZERO,
            coupon: Decimal::ZERO,
            total: -price,
            cf_type: CashFlowType::Funding,
        }
    }

    /// Creates a future receipt `days` after settlement.
    #[must_use]
    pub fn receipt(date: Date, days: i64, capital: Decimal, coupon: Decimal) -> Self {
        let cf_type = match (capital.is_zero(), coupon.is_zero()) {
            (true, _) => CashFlowType::Coupon,
            (false, true) => CashFlowType::Principal,
            (false, false) => CashFlowType::CouponAndPrincipal,
        };
        Self {
            date,
            days,
            capital,
            coupon,
            total: capital + coupon,
            cf_type,
        }
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the day count from settlement.
    #[must_use]
    pub fn days(&self) -> i64 {
        self.days
    }

    /// Returns the principal component.
    #[must_use]
    pub fn capital(&self) -> Decimal {
        self.capital
    }

    /// Returns the coupon component.
    #[must_use]
    pub fn coupon(&self) -> Decimal {
        self.coupon
    }

    /// Returns the signed total amount.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn cf_type(&self) -> CashFlowType {
        self.cf_type
    }

    /// True for the settlement funding leg.
    #[must_use]
    pub fn is_funding(&self) -> bool {
        self.cf_type == CashFlowType::Funding
    }

    /// Signed total as `f64` for the numerical routines.
    #[must_use]
    pub fn total_f64(&self) -> f64 {
        self.total.to_f64().unwrap_or(0.0)
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (+{}d) {} {}",
            self.date, self.days, self.cf_type, self.total
        )
    }
}
