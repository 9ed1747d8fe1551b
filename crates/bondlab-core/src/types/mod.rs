//! Domain types for bond analytics.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Frequency`]: Coupon payment frequency
//! - [`ScheduledPayment`]: One row of a contractual schedule
//! - [`CashFlow`]: Cash flow dated relative to settlement

mod cashflow;
mod date;
mod frequency;
mod schedule;

pub use cashflow::{CashFlow, CashFlowType};
pub use date::Date;
pub use frequency::Frequency;
pub use schedule::ScheduledPayment;
