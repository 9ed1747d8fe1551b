//! Actual/Actual day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/Actual, approximated on a 365-day basis.
///
/// Counts actual calendar days like the other ACT conventions. The annual
/// divisor is fixed at 365 rather than split by calendar year, so a period
/// spanning February 29 is measured against 365 days. Year fractions match
/// ACT/365 Fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActApprox;

impl DayCount for ActActApprox {
    fn name(&self) -> &'static str {
        "ACT/ACT"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn basis(&self) -> u32 {
        365
    }
}
