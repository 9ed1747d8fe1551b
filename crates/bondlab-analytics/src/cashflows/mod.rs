//! Cash flow projection for bonds.
//!
//! This module provides:
//! - Projection of a schedule into settlement-relative cash flows with the
//!   funding leg embedded
//! - Residual principal and last/next coupon lookups
//! - The discounted cash-flow table shown by front ends

mod projector;
mod table;

pub use projector::{
    coupon_rate_in_effect, future_flows, last_coupon, next_coupon, project, residual_principal,
};
pub use table::{discounted_table, DiscountedCashFlow};
