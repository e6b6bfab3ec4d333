//! Power law: `P = V * I`.

use super::{take_inputs, Field, Menu, Solution, Variant};
use crate::error::Result;
use crate::guard::guarded_divide;
use crate::quantity::{Quantity, Unit};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PowerRequest {
    Power { v: f64, i: f64 },
    Voltage { p: f64, i: f64 },
    Current { p: f64, v: f64 },
}

impl PowerRequest {
    pub fn solve(&self) -> Result<Solution> {
        match *self {
            PowerRequest::Power { v, i } => Ok(Solution::new(
                "Power",
                vec![volts(v), amps(i)],
                vec![watts(v * i)],
            )),

            PowerRequest::Voltage { p, i } => {
                let v = guarded_divide(p, i, "I cannot be zero (or near zero)")?;
                Ok(Solution::new("Power solve V", vec![watts(p), amps(i)], vec![volts(v)]))
            }

            PowerRequest::Current { p, v } => {
                let i = guarded_divide(p, v, "V cannot be zero (or near zero)")?;
                Ok(Solution::new("Power solve I", vec![watts(p), volts(v)], vec![amps(i)]))
            }
        }
    }
}

fn volts(value: f64) -> Quantity {
    Quantity::new("V", value, Unit::Volt)
}

fn amps(value: f64) -> Quantity {
    Quantity::new("I", value, Unit::Amp)
}

fn watts(value: f64) -> Quantity {
    Quantity::new("P", value, Unit::Watt)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerMode {
    Power,
    Voltage,
    Current,
}

const P: Field = Field::new("P", Unit::Watt);
const V: Field = Field::new("V", Unit::Volt);
const I: Field = Field::new("I", Unit::Amp);

impl Menu for PowerMode {
    const ALL: &'static [Self] = &[Self::Power, Self::Voltage, Self::Current];

    fn label(&self) -> &'static str {
        match self {
            PowerMode::Power => "Power  (P)  given V and I",
            PowerMode::Voltage => "Voltage (V) given P and I",
            PowerMode::Current => "Current (I) given P and V",
        }
    }
}

impl Variant for PowerMode {
    fn fields(&self) -> &'static [Field] {
        match self {
            PowerMode::Power => &[V, I],
            PowerMode::Voltage => &[P, I],
            PowerMode::Current => &[P, V],
        }
    }

    fn solve(&self, values: &[f64]) -> Result<Solution> {
        let request = match self {
            PowerMode::Power => {
                let [v, i] = take_inputs("P", values)?;
                PowerRequest::Power { v, i }
            }
            PowerMode::Voltage => {
                let [p, i] = take_inputs("V", values)?;
                PowerRequest::Voltage { p, i }
            }
            PowerMode::Current => {
                let [p, v] = take_inputs("I", values)?;
                PowerRequest::Current { p, v }
            }
        };
        request.solve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EeeError;
    use approx::assert_relative_eq;

    #[test]
    fn test_power_variants() {
        assert_relative_eq!(PowerRequest::Power { v: 12.0, i: 0.5 }.solve().unwrap().value(), 6.0);
        assert_relative_eq!(PowerRequest::Voltage { p: 6.0, i: 0.5 }.solve().unwrap().value(), 12.0);
        assert_relative_eq!(PowerRequest::Current { p: 6.0, v: 12.0 }.solve().unwrap().value(), 0.5);
    }

    #[test]
    fn test_zero_power_needs_no_guard() {
        assert_eq!(PowerRequest::Power { v: 0.0, i: 0.0 }.solve().unwrap().value(), 0.0);
    }

    #[test]
    fn test_guards() {
        let err = PowerRequest::Voltage { p: 5.0, i: 0.0 }.solve().unwrap_err();
        assert!(matches!(err, EeeError::Singularity { .. }));
        let err = PowerRequest::Current { p: 5.0, v: 1e-13 }.solve().unwrap_err();
        assert_eq!(err.to_string(), "V cannot be zero (or near zero)");
    }

    #[test]
    fn test_log_record() {
        let solution = PowerMode::Current.solve(&[6.0, 12.0]).unwrap();
        assert_eq!(
            solution.record().to_string(),
            "Power solve I: P=6.000000 W, V=12.000000 V -> I=0.500000 A"
        );
    }
}
