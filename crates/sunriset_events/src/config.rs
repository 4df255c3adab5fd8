//! Iteration limits for the event solver.

use crate::error::SolverError;

/// Convergence parameters for [`crate::event_times_with`].
///
/// Built with [`SolverConfig::new`] or [`Default`]; the fields are private
/// so an unvalidated config cannot reach the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    max_iterations: u32,
    tolerance_hours: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            tolerance_hours: 1.0e-6,
        }
    }
}

impl SolverConfig {
    /// Create a validated config.
    pub fn new(max_iterations: u32, tolerance_hours: f64) -> Result<Self, SolverError> {
        if max_iterations == 0 {
            return Err(SolverError::InvalidConfig("max_iterations must be at least 1"));
        }
        if !tolerance_hours.is_finite() || tolerance_hours <= 0.0 {
            return Err(SolverError::InvalidConfig(
                "tolerance_hours must be positive and finite",
            ));
        }
        Ok(Self {
            max_iterations,
            tolerance_hours,
        })
    }

    /// Maximum fixed-point iterations per branch. Default: 10.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Stop once an iteration moves the estimate by no more than this,
    /// in hours. Default: 1e-6 (3.6 ms).
    pub fn tolerance_hours(&self) -> f64 {
        self.tolerance_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = SolverConfig::default();
        assert_eq!(c.max_iterations(), 10);
        assert_eq!(c.tolerance_hours(), 1.0e-6);
    }

    #[test]
    fn new_accepts_valid() {
        let c = SolverConfig::new(25, 1.0e-9).unwrap();
        assert_eq!(c.max_iterations(), 25);
        assert_eq!(c.tolerance_hours(), 1.0e-9);
    }

    #[test]
    fn new_rejects_zero_iterations() {
        assert!(matches!(
            SolverConfig::new(0, 1.0e-6),
            Err(SolverError::InvalidConfig(_))
        ));
    }

    #[test]
    fn new_rejects_bad_tolerance() {
        for tol in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(SolverConfig::new(10, tol).is_err(), "tolerance {tol} accepted");
        }
    }
}
