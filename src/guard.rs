//! Guarded division.
//!
//! Every division in the formula solvers goes through [`safe_divide`], so a
//! zero or near-zero denominator is treated the same way everywhere.

use crate::error::{EeeError, Result};

/// Denominators with a magnitude below this are treated as zero.
pub const DIVISION_EPSILON: f64 = 1e-12;

/// Divide `numerator` by `denominator` unless `|denominator| < DIVISION_EPSILON`.
///
/// On failure there is no quotient; callers that need a display default use
/// `unwrap_or_default()`, which yields `0.0`.
pub fn safe_divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator.abs() < DIVISION_EPSILON {
        return None;
    }
    Some(numerator / denominator)
}

/// [`safe_divide`], reporting a singularity with `reason` on failure.
pub fn guarded_divide(numerator: f64, denominator: f64, reason: &str) -> Result<f64> {
    safe_divide(numerator, denominator).ok_or_else(|| EeeError::singularity(reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_small_denominators_fail_with_zero_default() {
        for den in [0.0, -0.0, 1e-13, -9.99e-13, f64::MIN_POSITIVE] {
            assert_eq!(safe_divide(5.0, den), None);
            assert_eq!(safe_divide(5.0, den).unwrap_or_default(), 0.0);
        }
    }

    #[test]
    fn test_other_denominators_divide() {
        assert_relative_eq!(safe_divide(1.0, 1e-12).unwrap(), 1e12);
        assert_relative_eq!(safe_divide(10.0, -4.0).unwrap(), -2.5);
        assert_relative_eq!(safe_divide(0.0, 3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_guarded_divide_reports_reason() {
        let err = guarded_divide(1.0, 0.0, "I cannot be zero (or near zero)").unwrap_err();
        assert!(matches!(err, EeeError::Singularity { .. }));
        assert_eq!(err.to_string(), "I cannot be zero (or near zero)");
    }
}
