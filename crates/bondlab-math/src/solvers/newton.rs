//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, MIN_DERIVATIVE};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// Convergence is declared when `|x_{n+1} - x_n| < tolerance` (or when
/// `f(x_n)` is exactly zero). The iteration aborts with an error when the
/// derivative magnitude drops below [`MIN_DERIVATIVE`] or when any value
/// becomes non-finite.
///
/// # Example
///
/// ```rust
/// use bondlab_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    iterate(f, df, initial_guess, None, config)
}

/// Newton-Raphson restricted to `[lower, upper]`.
///
/// Identical to [`newton_raphson`], except that an iterate falling outside
/// the interval stops the search with [`MathError::OutOfBounds`]. Yield
/// solvers use this to hand over to a bracketing method instead of chasing
/// a rate below -100%.
///
/// # Example
///
/// ```rust
/// use bondlab_math::error::MathError;
/// use bondlab_math::solvers::{newton_raphson_bounded, SolverConfig};
///
/// // Starting far from the root, the tangent overshoots the bounds
/// let f = |x: f64| x.atan();
/// let df = |x: f64| 1.0 / (1.0 + x * x);
///
/// let result = newton_raphson_bounded(f, df, 1.5, (-1.0, 1.0), &SolverConfig::default());
/// assert!(matches!(result, Err(MathError::OutOfBounds { .. })));
/// ```
pub fn newton_raphson_bounded<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: (f64, f64),
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let (lower, upper) = bounds;
    if lower.is_nan() || upper.is_nan() || lower >= upper {
        return Err(MathError::invalid_input(format!(
            "lower bound {lower} must be below upper bound {upper}"
        )));
    }
    if initial_guess < lower || initial_guess > upper {
        return Err(MathError::out_of_bounds(initial_guess, lower, upper));
    }
    iterate(f, df, initial_guess, Some(bounds), config)
}

fn iterate<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::NonFinite { iteration });
        }

        if fx == 0.0 {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() {
            return Err(MathError::NonFinite { iteration });
        }

        // Check for vanishing derivative
        if dfx.abs() < MIN_DERIVATIVE {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        // Newton step
        let step = fx / dfx;
        let next = x - step;
        log::trace!("newton iteration {iteration}: x = {x}, f(x) = {fx:.3e}, next = {next}");

        if !next.is_finite() {
            return Err(MathError::NonFinite { iteration });
        }
        if let Some((lower, upper)) = bounds {
            if next < lower || next > upper {
                return Err(MathError::out_of_bounds(next, lower, upper));
            }
        }

        // Check for step convergence
        if step.abs() < config.tolerance {
            return Ok(SolverResult {
                root: next,
                iterations: iteration + 1,
                residual: f(next),
            });
        }

        x = next;
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
        x,
    ))
}
