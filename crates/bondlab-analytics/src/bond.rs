//! Bond definitions.
//!
//! A [`BondDefinition`] is the read-only description of a bond: its name,
//! day count convention, coupon periodicity, a free-form classification tag
//! and the contractual schedule of [`ScheduledPayment`]s, sorted by date.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use bondlab_core::daycounts::DayCountConvention;
use bondlab_core::types::{Date, Frequency, ScheduledPayment};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Face value all schedule amounts are expressed against.
pub const FACE_VALUE: Decimal = dec!(100);

/// Allowed deviation of the principal total from [`FACE_VALUE`].
const PRINCIPAL_TOLERANCE: Decimal = dec!(0.000001);

/// Classification tag given to generated bullet bonds.
pub const BULLET_CLASSIFICATION: &str = "bullet";

/// A validated bond definition.
///
/// Deserialization runs the same validation as [`BondDefinition::new`], so a
/// definition loaded from JSON is always sorted and fully amortizing.
///
/// # Example
///
/// ```rust
/// use bondlab_analytics::bond::BondDefinition;
/// use bondlab_core::daycounts::DayCountConvention;
/// use bondlab_core::types::{Date, Frequency};
/// use rust_decimal_macros::dec;
///
/// let bond = BondDefinition::bullet(
///     "BOND10",
///     Date::from_ymd(2025, 9, 10).unwrap(),
///     Date::from_ymd(2035, 9, 10).unwrap(),
///     dec!(0.10),
///     Frequency::SemiAnnual,
///     DayCountConvention::Thirty360,
/// )
/// .unwrap();
///
/// assert_eq!(bond.schedule().len(), 21);
/// assert_eq!(bond.maturity(), Date::from_ymd(2035, 9, 10).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BondData")]
pub struct BondDefinition {
    name: String,
    day_count: DayCountConvention,
    periodicity: Frequency,
    classification: String,
    schedule: Vec<ScheduledPayment>,
}

/// Unvalidated serialized form of a bond definition.
#[derive(Deserialize)]
struct BondData {
    name: String,
    day_count: DayCountConvention,
    #[serde(default)]
    periodicity: Frequency,
    #[serde(default)]
    classification: String,
    schedule: Vec<ScheduledPayment>,
}

impl TryFrom<BondData> for BondDefinition {
    type Error = AnalyticsError;

    fn try_from(data: BondData) -> Result<Self, Self::Error> {
        Self::new(
            data.name,
            data.day_count,
            data.periodicity,
            data.classification,
            data.schedule,
        )
    }
}

impl BondDefinition {
    /// Creates a bond definition from an arbitrary schedule.
    ///
    /// The schedule is sorted by date. Rows are validated individually and
    /// the principal column must sum to 100.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidBond` for an empty schedule, duplicate
    /// dates or a principal total other than 100, and `AnalyticsError::Core`
    /// for a row with negative amounts.
    pub fn new(
        name: impl Into<String>,
        day_count: DayCountConvention,
        periodicity: Frequency,
        classification: impl Into<String>,
        mut schedule: Vec<ScheduledPayment>,
    ) -> AnalyticsResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AnalyticsError::invalid_bond(name, "name must not be empty"));
        }
        if schedule.is_empty() {
            return Err(AnalyticsError::invalid_bond(name, "schedule is empty"));
        }
        for row in &schedule {
            row.validate()?;
        }

        schedule.sort_by_key(|row| row.date);
        if let Some(pair) = schedule.windows(2).find(|pair| pair[0].date == pair[1].date) {
            return Err(AnalyticsError::invalid_bond(
                name,
                format!("duplicate schedule date {}", pair[0].date),
            ));
        }

        let principal: Decimal = schedule.iter().map(|row| row.principal).sum();
        if (principal - FACE_VALUE).abs() > PRINCIPAL_TOLERANCE {
            return Err(AnalyticsError::invalid_bond(
                name,
                format!("principal repayments sum to {principal}, expected {FACE_VALUE}"),
            ));
        }

        Ok(Self {
            name,
            day_count,
            periodicity,
            classification: classification.into(),
            schedule,
        })
    }

    /// Generates a bullet bond schedule.
    ///
    /// The first row is the issue date: it carries the coupon rate but pays
    /// nothing. Coupon dates follow every `12 / periodicity` months from the
    /// issue date, each paying `coupon_rate / periodicity` of face. The
    /// maturity row is always present and repays the full face value with
    /// the last coupon, even when it closes a short final period.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidBond` if maturity is not after issue
    /// or the coupon rate is negative.
    pub fn bullet(
        name: impl Into<String>,
        issue: Date,
        maturity: Date,
        coupon_rate: Decimal,
        periodicity: Frequency,
        day_count: DayCountConvention,
    ) -> AnalyticsResult<Self> {
        let name = name.into();
        if maturity <= issue {
            return Err(AnalyticsError::invalid_bond(
                name,
                format!("maturity {maturity} must be after issue {issue}"),
            ));
        }
        if coupon_rate.is_sign_negative() && !coupon_rate.is_zero() {
            return Err(AnalyticsError::invalid_bond(
                name,
                format!("negative coupon rate {coupon_rate}"),
            ));
        }

        let coupon = coupon_rate * FACE_VALUE / Decimal::from(periodicity.periods_per_year());
        let step = periodicity.months_per_period() as i32;

        let mut schedule = vec![ScheduledPayment::new(
            issue,
            coupon_rate,
            Decimal::ZERO,
            Decimal::ZERO,
        )?];
        let mut period = 1;
        loop {
            let date = issue.add_months(step * period)?;
            if date >= maturity {
                break;
            }
            schedule.push(ScheduledPayment::new(date, coupon_rate, coupon, Decimal::ZERO)?);
            period += 1;
        }
        schedule.push(ScheduledPayment::new(
            maturity,
            coupon_rate,
            coupon,
            FACE_VALUE,
        )?);

        Self::new(name, day_count, periodicity, BULLET_CLASSIFICATION, schedule)
    }

    /// Returns the bond name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the day count convention.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the coupon periodicity.
    #[must_use]
    pub fn periodicity(&self) -> Frequency {
        self.periodicity
    }

    /// Returns the classification tag.
    #[must_use]
    pub fn classification(&self) -> &str {
        &self.classification
    }

    /// Returns the schedule, sorted by date.
    #[must_use]
    pub fn schedule(&self) -> &[ScheduledPayment] {
        &self.schedule
    }

    /// Returns the first schedule date (normally the issue date).
    #[must_use]
    pub fn first_date(&self) -> Date {
        // Non-empty by construction
        self.schedule[0].date
    }

    /// Returns the last schedule date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.schedule[self.schedule.len() - 1].date
    }

    /// Checks that `settlement` falls within `[first_date, maturity]`.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::OutOfRange` otherwise.
    pub fn check_settlement(&self, settlement: Date) -> AnalyticsResult<()> {
        let first = self.first_date();
        let last = self.maturity();
        if settlement < first || settlement > last {
            return Err(AnalyticsError::OutOfRange {
                settlement: settlement.to_string(),
                first: first.to_string(),
                last: last.to_string(),
            });
        }
        Ok(())
    }
}
