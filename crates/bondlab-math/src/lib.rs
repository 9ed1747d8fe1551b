//! # Bondlab Math
//!
//! Numerical root finding for the Bondlab bond analytics library.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson (optionally bounded) and bisection
//! - **Errors**: [`MathError`] describing why an iteration stopped
//!
//! Everything works on `f64`; callers convert decimal amounts at the
//! boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, newton_raphson, newton_raphson_bounded, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
