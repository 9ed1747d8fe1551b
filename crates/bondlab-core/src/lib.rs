//! # Bondlab Core
//!
//! Core types and conventions for the Bondlab fixed income analytics library.
//!
//! This crate provides the foundational building blocks used throughout Bondlab:
//!
//! - **Types**: `Date`, `Frequency`, schedule rows and projected cash flows
//! - **Day Count Conventions**: 30/360 ISDA, ACT/360, ACT/365 and ACT/ACT
//!   behind a single convention table
//!
//! ## Example
//!
//! ```rust
//! use bondlab_core::prelude::*;
//!
//! let dc: DayCountConvention = "30/360".parse().unwrap();
//! let start = Date::from_ymd(2025, 9, 10).unwrap();
//! let end = Date::from_ymd(2035, 9, 10).unwrap();
//! assert_eq!(dc.days_between(start, end), 3600);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowType, Date, Frequency, ScheduledPayment};
}

// Re-export commonly used types at crate root
pub use daycounts::DayCountConvention;
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency};
