//! Day count conventions for fixed income calculations.
//!
//! Day count conventions determine how many days separate two dates for
//! accrual and discounting, and which annual divisor turns that count into
//! a year fraction.
//!
//! # Supported Conventions
//!
//! | Convention | Day count | Divisor |
//! |------------|-----------|---------|
//! | [`Thirty360Isda`] `30/360` | 30-day months, ISDA capping | 360 |
//! | [`Act360`] `ACT/360` | actual days | 360 |
//! | [`Act365Fixed`] `ACT/365` | actual days | 365 |
//! | [`ActActApprox`] `ACT/ACT` | actual days | 365 (approximation) |
//!
//! Every component resolves a convention through the single lookup table
//! behind [`DayCountConvention`], so the capping rule and divisor for a tag
//! are defined exactly once.
//!
//! # Usage
//!
//! ```rust
//! use bondlab_core::daycounts::DayCountConvention;
//! use bondlab_core::types::Date;
//!
//! let dc: DayCountConvention = "30/360".parse().unwrap();
//! let start = Date::from_ymd(2025, 9, 10).unwrap();
//! let end = Date::from_ymd(2026, 3, 10).unwrap();
//!
//! assert_eq!(dc.days_between(start, end), 180);
//! assert_eq!(dc.annual_divisor(), 360);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use actact::ActActApprox;
pub use thirty360::Thirty360Isda;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so they can live in
/// the static convention table.
pub trait DayCount: Send + Sync {
    /// Returns the canonical name of the convention (e.g. "30/360").
    fn name(&self) -> &'static str;

    /// Calculates the day count between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Annual divisor used to turn a day count into a year fraction.
    fn basis(&self) -> u32;

    /// Calculates the year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / f64::from(self.basis())
    }
}

/// Enumeration of all supported day count conventions.
///
/// The enum is `Copy` and indexes a static table of rules, so callers pass
/// it around by value instead of branching on convention strings.
///
/// Serialized as its canonical name (`"30/360"`, `"ACT/360"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCountConvention {
    /// 30/360 ISDA (bond basis)
    #[default]
    Thirty360,
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    Act365,
    /// Actual/Actual on a 365-day divisor
    ActAct,
}

/// One row of the convention lookup table.
struct ConventionEntry {
    rule: &'static dyn DayCount,
    aliases: &'static [&'static str],
}

/// Indexed by `DayCountConvention as usize`.
static CONVENTIONS: [ConventionEntry; 4] = [
    ConventionEntry {
        rule: &Thirty360Isda,
        aliases: &[
            "30/360",
            "30/360 ISDA",
            "30/360 BOND",
            "BOND",
            "BOND BASIS",
            "30360",
            "THIRTY360",
        ],
    },
    ConventionEntry {
        rule: &Act360,
        aliases: &["ACT/360", "ACTUAL/360", "ACT360", "A/360"],
    },
    ConventionEntry {
        rule: &Act365Fixed,
        aliases: &[
            "ACT/365",
            "ACT/365F",
            "ACT/365 FIXED",
            "ACTUAL/365",
            "ACTUAL/365 FIXED",
            "ACT365",
            "A/365",
        ],
    },
    ConventionEntry {
        rule: &ActActApprox,
        aliases: &["ACT/ACT", "ACTUAL/ACTUAL", "ACTACT", "A/A"],
    },
];

impl DayCountConvention {
    fn entry(self) -> &'static ConventionEntry {
        &CONVENTIONS[self as usize]
    }

    /// Returns the rule implementing this convention.
    #[must_use]
    pub fn rule(self) -> &'static dyn DayCount {
        self.entry().rule
    }

    /// Returns the canonical name of the convention.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.rule().name()
    }

    /// Day count between two dates under this convention.
    #[must_use]
    pub fn days_between(self, start: Date, end: Date) -> i64 {
        self.rule().day_count(start, end)
    }

    /// Annual divisor: 360 for `30/360` and `ACT/360`, 365 otherwise.
    #[must_use]
    pub fn annual_divisor(self) -> u32 {
        self.rule().basis()
    }

    /// Year fraction between two dates under this convention.
    #[must_use]
    pub fn year_fraction(self, start: Date, end: Date) -> f64 {
        self.rule().year_fraction(start, end)
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Thirty360,
            DayCountConvention::Act360,
            DayCountConvention::Act365,
            DayCountConvention::ActAct,
        ]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses a convention tag, case-insensitively, including common aliases.
    ///
    /// Unknown tags are rejected rather than defaulted to 30/360.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|convention| convention.entry().aliases.contains(&normalized.as_str()))
            .ok_or_else(|| CoreError::unknown_convention(s))
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCountConvention> for String {
    fn from(convention: DayCountConvention) -> Self {
        convention.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_table_is_indexed_by_variant() {
        for convention in DayCountConvention::all() {
            let parsed: DayCountConvention = convention.name().parse().unwrap();
            assert_eq!(*convention, parsed);
        }
    }

    #[test]
    fn test_annual_divisors() {
        assert_eq!(DayCountConvention::Thirty360.annual_divisor(), 360);
        assert_eq!(DayCountConvention::Act360.annual_divisor(), 360);
        assert_eq!(DayCountConvention::Act365.annual_divisor(), 365);
        assert_eq!(DayCountConvention::ActAct.annual_divisor(), 365);
    }

    #[test]
    fn test_days_between_dispatch() {
        let start = date(2025, 1, 31);
        let end = date(2025, 3, 1);

        assert_eq!(DayCountConvention::Thirty360.days_between(start, end), 31);
        assert_eq!(DayCountConvention::Act360.days_between(start, end), 29);
        assert_eq!(DayCountConvention::Act365.days_between(start, end), 29);
        assert_eq!(DayCountConvention::ActAct.days_between(start, end), 29);
    }

    #[test]
    fn test_actual_conventions_leap_year() {
        let start = date(2024, 2, 1);
        let end = date(2024, 3, 1);
        for convention in [
            DayCountConvention::Act360,
            DayCountConvention::Act365,
            DayCountConvention::ActAct,
        ] {
            assert_eq!(convention.days_between(start, end), 29);
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(
            "30/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360
        );
        assert_eq!(
            "bond".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360
        );
        assert_eq!(
            " actual/360 ".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act360
        );
        assert_eq!(
            "ACT/365F".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365
        );
        assert_eq!(
            "act/act".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActAct
        );
    }

    #[test]
    fn test_from_str_unknown_is_configuration_error() {
        let err = "BUS/252".parse::<DayCountConvention>().unwrap_err();
        assert_eq!(err, CoreError::unknown_convention("BUS/252"));

        assert!("".parse::<DayCountConvention>().is_err());
    }

    #[test]
    fn test_serde_by_name() {
        let json = serde_json::to_string(&DayCountConvention::Act365).unwrap();
        assert_eq!(json, "\"ACT/365\"");

        let parsed: DayCountConvention = serde_json::from_str("\"30/360\"").unwrap();
        assert_eq!(parsed, DayCountConvention::Thirty360);

        assert!(serde_json::from_str::<DayCountConvention>("\"NL/365\"").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(DayCountConvention::Thirty360.to_string(), "30/360");
        assert_eq!(DayCountConvention::ActAct.to_string(), "ACT/ACT");
    }
}
