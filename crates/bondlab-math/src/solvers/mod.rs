//! Root-finding algorithms.
//!
//! This module provides the two numerical solvers the yield calculation
//! relies on:
//!
//! - [`newton_raphson`]: Fast quadratic convergence when derivative is available,
//!   with optional bounds that abort the iteration when an iterate escapes
//! - [`bisection`]: Simple and reliable bracketing method
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//!
//! Callers typically run Newton first and fall back to bisection when it
//! returns an error.
//!
//! # Example: Zero Coupon Yield
//!
//! ```rust
//! use bondlab_math::solvers::{bisection, newton_raphson, SolverConfig};
//!
//! // Pay 95 today, receive 100 in one year
//! let npv = |y: f64| -95.0 + 100.0 / (1.0 + y);
//! let d_npv = |y: f64| -100.0 / (1.0 + y).powi(2);
//!
//! let config = SolverConfig::default();
//! let result = newton_raphson(npv, d_npv, 0.05, &config)
//!     .or_else(|_| bisection(npv, -0.99, 2.0, &config))
//!     .unwrap();
//! assert!((result.root - 100.0 / 95.0 + 1.0).abs() < 1e-9);
//! ```

mod bisection;
mod newton;

pub use bisection::bisection;
pub use newton::{newton_raphson, newton_raphson_bounded};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Smallest derivative magnitude Newton-Raphson will divide by.
pub const MIN_DERIVATIVE: f64 = 1e-10;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
