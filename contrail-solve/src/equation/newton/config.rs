#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Configuration for the Newton-Raphson solver.
///
/// Iteration stops once a step satisfies `|Δx| ≤ x_abs_tol`,
/// or after `max_iters` steps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Config {
    pub max_iters: usize,
    pub x_abs_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 20,
            x_abs_tol: 1e-3,
        }
    }
}

impl Config {
    /// Validates that the step tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err("x_abs_tol must be finite and non-negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerances() {
        for x_abs_tol in [-1e-3, f64::NAN, f64::INFINITY] {
            let config = Config {
                x_abs_tol,
                ..Config::default()
            };
            assert!(config.validate().is_err(), "accepted {x_abs_tol}");
        }
    }
}
