//! # Bondlab Analytics
//!
//! Analytics engine for fixed income securities.
//!
//! - **Bonds**: validated bond definitions, bullet schedule generation and a
//!   named repository
//! - **Cash Flows**: projection of a schedule from a settlement date, residual
//!   principal, coupon lookups
//! - **Yields**: effective annual yield by Newton-Raphson with bisection
//!   fallback, periodic and nominal conversions
//! - **Risk**: Macaulay and modified duration, average life
//! - **Accrued**: accrued interest, clean price, technical value, parity
//! - **Metrics**: a calculator combining all of the above
//!
//! ## Architecture
//!
//! `bondlab-analytics` depends on `bondlab-core` for dates, conventions and
//! cash-flow types and on `bondlab-math` for root finding. Bond definitions
//! are plain data; every calculation lives in this crate.
//!
//! ## Usage
//!
//! ```rust
//! use bondlab_analytics::prelude::*;
//! use bondlab_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let issue = Date::from_ymd(2025, 9, 10).unwrap();
//! let maturity = Date::from_ymd(2035, 9, 10).unwrap();
//! let bond = BondDefinition::bullet(
//!     "PAR-10Y", issue, maturity, dec!(0.10), Frequency::SemiAnnual, DayCountConvention::Thirty360,
//! )?;
//!
//! let calculator = BondCalculator::new();
//! let analysis = calculator.analyze(&SettlementContext::dirty(&bond, issue, dec!(100)))?;
//!
//! assert!((analysis.result.annualized_yield - 0.1025).abs() < 1e-6);
//! assert_eq!(analysis.result.accrued_interest, dec!(0));
//! # Ok::<(), AnalyticsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]

pub mod accrued;
pub mod bond;
pub mod cashflows;
pub mod config;
pub mod error;
pub mod metrics;
pub mod repository;
pub mod risk;
pub mod yields;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bondlab_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Definitions
    pub use crate::bond::{BondDefinition, FACE_VALUE};
    pub use crate::config::AnalyticsConfig;
    pub use crate::repository::BondRepository;

    // Cash flows
    pub use crate::cashflows::{discounted_table, project, DiscountedCashFlow};

    // Yields
    pub use crate::yields::{nominal_yield, periodic_yield, SolveStatus, YieldSolution, YieldSolver};

    // Risk
    pub use crate::risk::{average_life, macaulay_and_modified};

    // Accrued
    pub use crate::accrued::accrued_interest;

    // Metrics
    pub use crate::metrics::{
        Analysis, AnalysisResult, BondCalculator, PriceBasis, PriceResult, SettlementContext,
    };
}
