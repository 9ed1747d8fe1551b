//! Property tests for the root finders on NPV-shaped functions.

use bondlab_math::solvers::{bisection, newton_raphson_bounded, SolverConfig};
use proptest::prelude::*;

/// NPV of paying `price` now for `amount` received after `t` years.
fn npv(rate: f64, price: f64, amount: f64, t: f64) -> f64 {
    -price + amount / (1.0 + rate).powf(t)
}

fn npv_derivative(rate: f64, amount: f64, t: f64) -> f64 {
    -amount * t / (1.0 + rate).powf(t + 1.0)
}

proptest! {
    #[test]
    fn bisection_recovers_single_flow_yield(
        rate in -0.5f64..1.5,
        t in 0.25f64..10.0,
    ) {
        let amount = 100.0;
        let price = amount / (1.0 + rate).powf(t);
        let config = SolverConfig::new(1e-12, 200);

        let result = bisection(|r| npv(r, price, amount, t), -0.99, 2.0, &config).unwrap();

        prop_assert!((result.root - rate).abs() < 1e-8);
    }

    #[test]
    fn bounded_newton_never_returns_outside_bounds(
        rate in -0.5f64..1.5,
        t in 0.25f64..10.0,
        guess in -0.5f64..1.5,
    ) {
        let amount = 100.0;
        let price = amount / (1.0 + rate).powf(t);
        let config = SolverConfig::new(1e-12, 100);

        if let Ok(result) = newton_raphson_bounded(
            |r| npv(r, price, amount, t),
            |r| npv_derivative(r, amount, t),
            guess,
            (-0.99, 2.0),
            &config,
        ) {
            prop_assert!(result.root >= -0.99 && result.root <= 2.0);
            prop_assert!((result.root - rate).abs() < 1e-6);
        }
    }
}
