//! Analytics configuration.
//!
//! Every field has a serde default, so a partial TOML table (or none at all)
//! yields a usable configuration:
//!
//! ```toml
//! tolerance = 1e-10
//! max_iterations = 50
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Solver and duration settings for [`crate::metrics::BondCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Newton/bisection step tolerance.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Newton-Raphson iteration budget.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Newton-Raphson starting rate.
    #[serde(default = "default_initial_guess")]
    pub initial_guess: f64,

    /// Lower end of the admissible rate interval and bisection bracket.
    #[serde(default = "default_lower_bound")]
    pub lower_bound: f64,

    /// Upper end of the admissible rate interval and bisection bracket.
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f64,

    /// Bisection iteration budget.
    #[serde(default = "default_bisection_iterations")]
    pub bisection_iterations: u32,

    /// Days per year used to express duration in years.
    #[serde(default = "default_duration_basis_days")]
    pub duration_basis_days: u32,
}

fn default_tolerance() -> f64 {
    1e-8
}

fn default_max_iterations() -> u32 {
    100
}

fn default_initial_guess() -> f64 {
    0.05
}

fn default_lower_bound() -> f64 {
    -0.99
}

fn default_upper_bound() -> f64 {
    2.0
}

fn default_bisection_iterations() -> u32 {
    200
}

fn default_duration_basis_days() -> u32 {
    365
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            initial_guess: default_initial_guess(),
            lower_bound: default_lower_bound(),
            upper_bound: default_upper_bound(),
            bisection_iterations: default_bisection_iterations(),
            duration_basis_days: default_duration_basis_days(),
        }
    }
}

impl AnalyticsConfig {
    /// Checks the configuration for values the solver cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Configuration` naming the first bad field.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(AnalyticsError::configuration(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 || self.bisection_iterations == 0 {
            return Err(AnalyticsError::configuration(
                "iteration budgets must be at least 1",
            ));
        }
        if !(self.lower_bound.is_finite() && self.upper_bound.is_finite())
            || self.lower_bound >= self.upper_bound
        {
            return Err(AnalyticsError::configuration(format!(
                "rate bounds [{}, {}] are not an interval",
                self.lower_bound, self.upper_bound
            )));
        }
        if self.lower_bound <= -1.0 {
            return Err(AnalyticsError::configuration(format!(
                "lower bound {} must stay above -100%",
                self.lower_bound
            )));
        }
        if self.initial_guess < self.lower_bound || self.initial_guess > self.upper_bound {
            return Err(AnalyticsError::configuration(format!(
                "initial guess {} is outside [{}, {}]",
                self.initial_guess, self.lower_bound, self.upper_bound
            )));
        }
        if self.duration_basis_days == 0 {
            return Err(AnalyticsError::configuration(
                "duration basis must be a positive number of days",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.bisection_iterations, 200);
        assert_eq!(config.duration_basis_days, 365);
        assert!((config.initial_guess - 0.05).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AnalyticsConfig = toml::from_str("tolerance = 1e-10\nmax_iterations = 50").unwrap();
        assert!((config.tolerance - 1e-10).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
        assert!((config.upper_bound - 2.0).abs() < f64::EPSILON);

        let empty: AnalyticsConfig = toml::from_str("").unwrap();
        assert_eq!(empty, AnalyticsConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_tolerance = AnalyticsConfig {
            tolerance: 0.0,
            ..AnalyticsConfig::default()
        };
        assert!(bad_tolerance.validate().unwrap_err().is_configuration());

        let inverted = AnalyticsConfig {
            lower_bound: 1.0,
            upper_bound: 0.5,
            ..AnalyticsConfig::default()
        };
        assert!(inverted.validate().is_err());

        let below_minus_one = AnalyticsConfig {
            lower_bound: -1.0,
            ..AnalyticsConfig::default()
        };
        assert!(below_minus_one.validate().is_err());

        let guess_outside = AnalyticsConfig {
            initial_guess: 3.0,
            ..AnalyticsConfig::default()
        };
        assert!(guess_outside.validate().is_err());
    }
}
