//! Unified error types for the analytics engine.
//!
//! Numeric degradation of the yield solver is not an error: it is reported
//! through [`crate::yields::SolveStatus::Degraded`] instead.

use bondlab_core::error::CoreError;
use bondlab_math::error::MathError;
use thiserror::Error;

/// Unified error type for all analytics operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    // ========== Configuration Errors ==========
    /// Invalid solver or calculator configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ========== Calculation Errors ==========
    /// Fewer than two cash flows, or nothing left to receive
    #[error("insufficient cash flows: {count} flow(s) after settlement projection, need a funding leg and at least one non-zero receipt")]
    InsufficientCashFlows {
        /// Number of flows projected, funding leg included.
        count: usize,
    },

    /// Settlement date outside the bond's schedule
    #[error("settlement {settlement} is outside the schedule range [{first}, {last}]")]
    OutOfRange {
        /// The settlement date that was provided.
        settlement: String,
        /// First schedule date.
        first: String,
        /// Last schedule date.
        last: String,
    },

    /// Invalid price input
    #[error("invalid price {price}: {reason}")]
    InvalidPrice {
        /// The rejected price.
        price: String,
        /// Reason for invalidity.
        reason: String,
    },

    // ========== Definition Errors ==========
    /// Bond definition failed validation
    #[error("invalid bond '{name}': {reason}")]
    InvalidBond {
        /// Bond name.
        name: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Bond repository lookup or load failure
    #[error("repository error: {0}")]
    Repository(String),

    // ========== Wrapped Errors ==========
    /// Core error (dates, conventions, schedule rows)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Math/solver error
    #[error("math error: {0}")]
    Math(#[from] MathError),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an invalid bond error.
    #[must_use]
    pub fn invalid_bond(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBond {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(price: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            price: price.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a repository error.
    #[must_use]
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository(message.into())
    }

    /// True for configuration problems, including unknown day count tags.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Core(CoreError::UnknownConvention { .. })
        )
    }
}
