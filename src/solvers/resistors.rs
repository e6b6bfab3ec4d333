//! Resistor networks: series sums and two-resistor parallel combinations.
//!
//! Series variants take a variable number of resistors, so they are driven
//! through [`SeriesRequest`] directly rather than the fixed-field
//! [`Variant`] interface used by the parallel variants.

use super::{take_inputs, Field, Menu, Solution, Variant};
use crate::error::{EeeError, Result};
use crate::guard::guarded_divide;
use crate::quantity::{Quantity, Unit};

/// Resistor tools sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResistorGroup {
    Series,
    Parallel,
}

impl Menu for ResistorGroup {
    const ALL: &'static [Self] = &[Self::Series, Self::Parallel];

    fn label(&self) -> &'static str {
        match self {
            ResistorGroup::Series => "Series",
            ResistorGroup::Parallel => "Parallel (2 resistors)",
        }
    }
}

// ============ Series ============

/// A series chain problem.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesRequest {
    /// `Rt = R1 + R2 + ... + Rn`
    Total { resistors: Vec<f64> },
    /// `R_missing = Rt - sum(known)`, with `n - 1` known resistors
    Missing { target: f64, known: Vec<f64> },
}

impl SeriesRequest {
    pub fn solve(&self) -> Result<Solution> {
        match self {
            SeriesRequest::Total { resistors } => {
                let n = SeriesMode::Total.check_count(resistors.len() as i64)?;
                let total: f64 = resistors.iter().sum();

                let mut inputs = vec![Quantity::new("n", n as f64, Unit::Count)];
                inputs.extend(numbered("R", resistors));
                Ok(Solution::new(
                    "Resistors Series",
                    inputs,
                    vec![Quantity::new("Rt", total, Unit::Ohm)],
                ))
            }

            SeriesRequest::Missing { target, known } => {
                let n = SeriesMode::Missing.check_count(known.len() as i64 + 1)?;
                let sum_known: f64 = known.iter().sum();

                // A negative result is reported as-is
                let missing = target - sum_known;

                let mut inputs = vec![
                    Quantity::new("n", n as f64, Unit::Count),
                    Quantity::new("Rt", *target, Unit::Ohm),
                ];
                inputs.extend(numbered("R", known));
                Ok(Solution::new(
                    "Resistors Series Missing",
                    inputs,
                    vec![
                        Quantity::new("R_missing", missing, Unit::Ohm),
                        Quantity::new("sum_known", sum_known, Unit::Ohm),
                    ],
                ))
            }
        }
    }
}

fn numbered<'a>(prefix: &'a str, values: &'a [f64]) -> impl Iterator<Item = Quantity> + 'a {
    values
        .iter()
        .enumerate()
        .map(move |(i, &r)| Quantity::new(format!("{}{}", prefix, i + 1), r, Unit::Ohm))
}

/// Series menu selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMode {
    Total,
    Missing,
}

impl SeriesMode {
    /// Validate the total resistor count `n` for this mode.
    pub fn check_count(&self, n: i64) -> Result<usize> {
        match self {
            SeriesMode::Total if n < 1 => Err(EeeError::domain("Count must be positive")),
            SeriesMode::Missing if n < 2 => Err(EeeError::domain("n must be at least 2")),
            _ => usize::try_from(n).map_err(|_| EeeError::domain("Count is too large")),
        }
    }

    /// How many resistor values must be entered for a chain of `n`.
    pub fn values_needed(&self, n: usize) -> usize {
        match self {
            SeriesMode::Total => n,
            SeriesMode::Missing => n - 1,
        }
    }

    /// Prompt for the count `n`.
    pub fn count_prompt(&self) -> &'static str {
        match self {
            SeriesMode::Total => "How many resistors? ",
            SeriesMode::Missing => "Total number of series resistors n: ",
        }
    }
}

impl Menu for SeriesMode {
    const ALL: &'static [Self] = &[Self::Total, Self::Missing];

    fn label(&self) -> &'static str {
        match self {
            SeriesMode::Total => "Total Rt given n resistors",
            SeriesMode::Missing => "Missing resistor given Rt and the other (n-1)",
        }
    }
}

// ============ Parallel (2 resistors) ============

/// A two-resistor parallel problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParallelRequest {
    /// `Req = R1 * R2 / (R1 + R2)`
    Req { r1: f64, r2: f64 },
    /// `R1 = Req * R2 / (R2 - Req)`
    R1 { req: f64, r2: f64 },
    /// `R2 = Req * R1 / (R1 - Req)`
    R2 { req: f64, r1: f64 },
}

impl ParallelRequest {
    pub fn solve(&self) -> Result<Solution> {
        match *self {
            ParallelRequest::Req { r1, r2 } => {
                let inputs = vec![ohms("R1", r1), ohms("R2", r2)];

                // A shorted branch makes the combination exactly zero
                if r1 == 0.0 || r2 == 0.0 {
                    return Ok(Solution::new("Resistors Parallel(2)", inputs, vec![ohms("Req", 0.0)])
                        .with_remark("one branch is a short"));
                }

                let req = guarded_divide(r1 * r2, r1 + r2, "R1 + R2 cannot be zero (or near zero)")?;
                Ok(Solution::new("Resistors Parallel(2)", inputs, vec![ohms("Req", req)]))
            }

            ParallelRequest::R1 { req, r2 } => {
                let r1 = guarded_divide(
                    req * r2,
                    r2 - req,
                    "R2 must not equal Req (denominator near zero)",
                )?;
                Ok(Solution::new(
                    "Resistors Parallel(2) solve R1",
                    vec![ohms("Req", req), ohms("R2", r2)],
                    vec![ohms("R1", r1)],
                ))
            }

            ParallelRequest::R2 { req, r1 } => {
                let r2 = guarded_divide(
                    req * r1,
                    r1 - req,
                    "R1 must not equal Req (denominator near zero)",
                )?;
                Ok(Solution::new(
                    "Resistors Parallel(2) solve R2",
                    vec![ohms("Req", req), ohms("R1", r1)],
                    vec![ohms("R2", r2)],
                ))
            }
        }
    }
}

fn ohms(name: &'static str, value: f64) -> Quantity {
    Quantity::new(name, value, Unit::Ohm)
}

/// Parallel menu selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallelMode {
    Req,
    R1,
    R2,
}

const REQ: Field = Field::new("Req", Unit::Ohm);
const R1: Field = Field::new("R1", Unit::Ohm);
const R2: Field = Field::new("R2", Unit::Ohm);

impl Menu for ParallelMode {
    const ALL: &'static [Self] = &[Self::Req, Self::R1, Self::R2];

    fn label(&self) -> &'static str {
        match self {
            ParallelMode::Req => "Req given R1 and R2",
            ParallelMode::R1 => "R1  given Req and R2",
            ParallelMode::R2 => "R2  given Req and R1",
        }
    }
}

impl Variant for ParallelMode {
    fn fields(&self) -> &'static [Field] {
        match self {
            ParallelMode::Req => &[R1, R2],
            ParallelMode::R1 => &[REQ, R2],
            ParallelMode::R2 => &[REQ, R1],
        }
    }

    fn solve(&self, values: &[f64]) -> Result<Solution> {
        let request = match self {
            ParallelMode::Req => {
                let [r1, r2] = take_inputs("parallel Req", values)?;
                ParallelRequest::Req { r1, r2 }
            }
            ParallelMode::R1 => {
                let [req, r2] = take_inputs("parallel R1", values)?;
                ParallelRequest::R1 { req, r2 }
            }
            ParallelMode::R2 => {
                let [req, r1] = take_inputs("parallel R2", values)?;
                ParallelRequest::R2 { req, r1 }
            }
        };
        request.solve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_series_total() {
        let solution = SeriesRequest::Total {
            resistors: vec![100.0, 220.0, 330.0],
        }
        .solve()
        .unwrap();
        assert_relative_eq!(solution.value(), 650.0);
        assert_eq!(
            solution.record().as_str(),
            "Resistors Series: n=3, R1=100.000000 ohm, R2=220.000000 ohm, R3=330.000000 ohm -> Rt=650.000000 ohm"
        );
    }

    #[test]
    fn test_series_count_limits() {
        assert!(SeriesRequest::Total { resistors: vec![] }.solve().is_err());
        assert!(SeriesRequest::Missing {
            target: 100.0,
            known: vec![],
        }
        .solve()
        .is_err());
        assert!(SeriesMode::Total.check_count(0).is_err());
        assert!(SeriesMode::Total.check_count(-3).is_err());
        assert_eq!(SeriesMode::Total.check_count(1).unwrap(), 1);
        assert!(SeriesMode::Missing.check_count(1).is_err());
        assert_eq!(SeriesMode::Missing.check_count(2).unwrap(), 2);
        assert_eq!(SeriesMode::Missing.values_needed(4), 3);
    }

    #[test]
    fn test_series_missing_may_be_negative() {
        let solution = SeriesRequest::Missing {
            target: 100.0,
            known: vec![80.0, 50.0],
        }
        .solve()
        .unwrap();
        assert_relative_eq!(solution.output("R_missing").unwrap(), -30.0);
        assert_relative_eq!(solution.output("sum_known").unwrap(), 130.0);
    }

    #[test]
    fn test_parallel_equal_resistors() {
        let solution = ParallelRequest::Req { r1: 1000.0, r2: 1000.0 }.solve().unwrap();
        assert_relative_eq!(solution.value(), 500.0);
        assert_eq!(solution.remark, None);
    }

    #[test]
    fn test_parallel_short_branch() {
        let solution = ParallelRequest::Req { r1: 0.0, r2: 100.0 }.solve().unwrap();
        assert_eq!(solution.value(), 0.0);
        assert_eq!(solution.remark, Some("one branch is a short"));

        // Both shorted would trip the guard without the special case
        let solution = ParallelRequest::Req { r1: 0.0, r2: 0.0 }.solve().unwrap();
        assert_eq!(solution.value(), 0.0);
        assert!(solution.record().as_str().ends_with("(one branch is a short)"));
    }

    #[test]
    fn test_parallel_opposite_resistors_trip_guard() {
        let err = ParallelRequest::Req { r1: 100.0, r2: -100.0 }.solve().unwrap_err();
        assert!(matches!(err, EeeError::Singularity { .. }));
    }

    #[test]
    fn test_parallel_inverse_variants() {
        let r1 = ParallelMode::R1.solve(&[500.0, 1000.0]).unwrap();
        assert_relative_eq!(r1.value(), 1000.0);
        let r2 = ParallelMode::R2.solve(&[750.0, 3000.0]).unwrap();
        assert_relative_eq!(r2.value(), 1000.0);

        let err = ParallelMode::R1.solve(&[100.0, 100.0]).unwrap_err();
        assert_eq!(err.to_string(), "R2 must not equal Req (denominator near zero)");
    }
}
