//! Voltage divider: `Vout = Vin * R2 / (R1 + R2)`.

use super::{take_inputs, Field, Menu, Solution, Variant};
use crate::error::Result;
use crate::guard::guarded_divide;
use crate::quantity::{Quantity, Unit};

/// A voltage divider problem, one variant per unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DividerRequest {
    /// Output voltage from the supply and both resistors
    Vout { vin: f64, r1: f64, r2: f64 },
    /// Supply voltage needed for a given output
    Vin { vout: f64, r1: f64, r2: f64 },
    /// Upper resistor for a given ratio
    R1 { vin: f64, vout: f64, r2: f64 },
    /// Lower resistor for a given ratio
    R2 { vin: f64, vout: f64, r1: f64 },
}

impl DividerRequest {
    pub fn solve(&self) -> Result<Solution> {
        match *self {
            DividerRequest::Vout { vin, r1, r2 } => {
                let ratio = guarded_divide(r2, r1 + r2, "R1 + R2 cannot be zero (or near zero)")?;
                Ok(Solution::new(
                    "Voltage Divider (Vout)",
                    vec![volts("Vin", vin), ohms("R1", r1), ohms("R2", r2)],
                    vec![volts("Vout", vin * ratio)],
                ))
            }

            DividerRequest::Vin { vout, r1, r2 } => {
                let gain = guarded_divide(r1 + r2, r2, "R2 cannot be zero (or near zero)")?;
                Ok(Solution::new(
                    "Voltage Divider (Vin)",
                    vec![volts("Vout", vout), ohms("R1", r1), ohms("R2", r2)],
                    vec![volts("Vin", vout * gain)],
                ))
            }

            DividerRequest::R1 { vin, vout, r2 } => {
                let ratio = guarded_divide(vin, vout, "Vout cannot be zero (or near zero)")?;
                Ok(Solution::new(
                    "Voltage Divider (R1)",
                    vec![volts("Vin", vin), volts("Vout", vout), ohms("R2", r2)],
                    vec![ohms("R1", r2 * (ratio - 1.0))],
                ))
            }

            DividerRequest::R2 { vin, vout, r1 } => {
                let ratio = guarded_divide(
                    vout,
                    vin - vout,
                    "Vin must not equal Vout (denominator near zero)",
                )?;
                Ok(Solution::new(
                    "Voltage Divider (R2)",
                    vec![volts("Vin", vin), volts("Vout", vout), ohms("R1", r1)],
                    vec![ohms("R2", r1 * ratio)],
                ))
            }
        }
    }
}

fn volts(name: &'static str, value: f64) -> Quantity {
    Quantity::new(name, value, Unit::Volt)
}

fn ohms(name: &'static str, value: f64) -> Quantity {
    Quantity::new(name, value, Unit::Ohm)
}

/// Divider menu selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerMode {
    Vout,
    Vin,
    R1,
    R2,
}

const VIN: Field = Field::new("Vin", Unit::Volt);
const VOUT: Field = Field::new("Vout", Unit::Volt);
const R1: Field = Field::new("R1", Unit::Ohm);
const R2: Field = Field::new("R2", Unit::Ohm);

impl Menu for DividerMode {
    const ALL: &'static [Self] = &[Self::Vout, Self::Vin, Self::R1, Self::R2];

    fn label(&self) -> &'static str {
        match self {
            DividerMode::Vout => "Vout given Vin, R1, R2",
            DividerMode::Vin => "Vin  given Vout, R1, R2",
            DividerMode::R1 => "R1   given Vin, Vout, R2",
            DividerMode::R2 => "R2   given Vin, Vout, R1",
        }
    }
}

impl Variant for DividerMode {
    fn fields(&self) -> &'static [Field] {
        match self {
            DividerMode::Vout => &[VIN, R1, R2],
            DividerMode::Vin => &[VOUT, R1, R2],
            DividerMode::R1 => &[VIN, VOUT, R2],
            DividerMode::R2 => &[VIN, VOUT, R1],
        }
    }

    fn solve(&self, values: &[f64]) -> Result<Solution> {
        let request = match self {
            DividerMode::Vout => {
                let [vin, r1, r2] = take_inputs("Vout", values)?;
                DividerRequest::Vout { vin, r1, r2 }
            }
            DividerMode::Vin => {
                let [vout, r1, r2] = take_inputs("Vin", values)?;
                DividerRequest::Vin { vout, r1, r2 }
            }
            DividerMode::R1 => {
                let [vin, vout, r2] = take_inputs("R1", values)?;
                DividerRequest::R1 { vin, vout, r2 }
            }
            DividerMode::R2 => {
                let [vin, vout, r1] = take_inputs("R2", values)?;
                DividerRequest::R2 { vin, vout, r1 }
            }
        };
        request.solve()
    }
}
