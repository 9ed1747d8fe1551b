//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    ///
    /// `estimate` carries the last iterate so callers can still report a
    /// degraded answer.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e}, estimate: {estimate})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
        /// Last iterate.
        estimate: f64,
    },

    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// Division by zero or near-zero value.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The near-zero value.
        value: f64,
    },

    /// An iterate left the admissible interval.
    #[error("Iterate {value} left the admissible interval [{lower}, {upper}]")]
    OutOfBounds {
        /// The offending iterate.
        value: f64,
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },

    /// An iterate or function value became NaN or infinite.
    #[error("Non-finite value encountered at iteration {iteration}")]
    NonFinite {
        /// Iteration at which the value was produced.
        iteration: u32,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64, estimate: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
            estimate,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an out-of-bounds error.
    #[must_use]
    pub fn out_of_bounds(value: f64, lower: f64, upper: f64) -> Self {
        Self::OutOfBounds {
            value,
            lower,
            upper,
        }
    }
}
