//! Risk analytics for bonds.
//!
//! - **Duration**: Macaulay and modified, in years and in coupon periods
//! - **Average life**: principal-weighted mean time to repayment

mod average_life;
mod duration;

pub use average_life::average_life;
pub use duration::{
    macaulay_and_modified, macaulay_and_modified_on_basis, macaulay_periods, modified_periodic,
    DURATION_BASIS_DAYS,
};
