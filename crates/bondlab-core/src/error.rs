//! Error types for the Bondlab core crate.
//!
//! This module defines the errors raised while building dates, parsing
//! conventions and validating schedule rows.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Unknown or missing day count convention.
    #[error("Configuration error: unknown day count convention '{name}'")]
    UnknownConvention {
        /// The convention tag that could not be resolved.
        name: String,
    },

    /// Unsupported coupon periodicity.
    #[error("Invalid frequency: {periods} payments per year (expected 1, 2, 4 or 12)")]
    InvalidFrequency {
        /// The rejected number of payments per year.
        periods: u32,
    },

    /// Invalid schedule row.
    #[error("Invalid scheduled payment on {date}: {reason}")]
    InvalidPayment {
        /// Date of the offending row.
        date: String,
        /// Reason for invalidity.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unknown convention error.
    #[must_use]
    pub fn unknown_convention(name: impl Into<String>) -> Self {
        Self::UnknownConvention { name: name.into() }
    }

    /// Creates an invalid payment error.
    #[must_use]
    pub fn invalid_payment(date: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidPayment {
            date: date.to_string(),
            reason: reason.into(),
        }
    }
}
