//! AC reactance and LC resonance.
//!
//! - Inductive: `X_L = 2πfL`
//! - Capacitive: `X_C = 1 / (2πfC)`
//! - Resonance: `f0 = 1 / (2π√(LC))`
//!
//! Frequencies and reactances display at 6 decimals, inductance and
//! capacitance in scientific notation.

use super::{require, take_inputs, Field, Menu, Solution, Variant, TWO_PI};
use crate::error::Result;
use crate::guard::guarded_divide;
use crate::quantity::{Quantity, Unit};

const INVALID_DENOMINATOR: &str = "invalid denominator";

/// AC sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactanceGroup {
    Inductive,
    Capacitive,
    Resonance,
}

impl Menu for ReactanceGroup {
    const ALL: &'static [Self] = &[Self::Inductive, Self::Capacitive, Self::Resonance];

    fn label(&self) -> &'static str {
        match self {
            ReactanceGroup::Inductive => "Inductive Reactance (X_L)",
            ReactanceGroup::Capacitive => "Capacitive Reactance (X_C)",
            ReactanceGroup::Resonance => "Resonance (f0)",
        }
    }
}

fn hertz(name: &'static str, value: f64) -> Quantity {
    Quantity::new(name, value, Unit::Hertz)
}

fn henries(name: &'static str, value: f64) -> Quantity {
    Quantity::new(name, value, Unit::Henry)
}

fn farads(name: &'static str, value: f64) -> Quantity {
    Quantity::new(name, value, Unit::Farad)
}

fn ohms(name: &'static str, value: f64) -> Quantity {
    Quantity::new(name, value, Unit::Ohm)
}

const F: Field = Field::new("f", Unit::Hertz);
const F0: Field = Field::new("f0", Unit::Hertz);
const L: Field = Field::new("L", Unit::Henry);
const C: Field = Field::new("C", Unit::Farad);
const XL: Field = Field::new("X_L", Unit::Ohm);
const XC: Field = Field::new("X_C", Unit::Ohm);

// ============ Inductive ============

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InductiveRequest {
    Reactance { f: f64, l: f64 },
    Inductance { xl: f64, f: f64 },
    Frequency { xl: f64, l: f64 },
}

impl InductiveRequest {
    pub fn solve(&self) -> Result<Solution> {
        match *self {
            InductiveRequest::Reactance { f, l } => {
                require(f > 0.0 && l >= 0.0, "requires f > 0 and L >= 0")?;
                Ok(Solution::new(
                    "AC Inductive Reactance",
                    vec![hertz("f", f), henries("L", l)],
                    vec![ohms("XL", TWO_PI * f * l)],
                ))
            }

            InductiveRequest::Inductance { xl, f } => {
                require(f > 0.0, "requires f > 0")?;
                let l = guarded_divide(xl, TWO_PI * f, INVALID_DENOMINATOR)?;
                Ok(Solution::new(
                    "AC Inductive Reactance solve L",
                    vec![ohms("XL", xl), hertz("f", f)],
                    vec![henries("L", l)],
                ))
            }

            InductiveRequest::Frequency { xl, l } => {
                require(l > 0.0, "requires L > 0")?;
                let f = guarded_divide(xl, TWO_PI * l, INVALID_DENOMINATOR)?;
                Ok(Solution::new(
                    "AC Inductive Reactance solve f",
                    vec![ohms("XL", xl), henries("L", l)],
                    vec![hertz("f", f)],
                ))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InductiveMode {
    Reactance,
    Inductance,
    Frequency,
}

impl Menu for InductiveMode {
    const ALL: &'static [Self] = &[Self::Reactance, Self::Inductance, Self::Frequency];

    fn label(&self) -> &'static str {
        match self {
            InductiveMode::Reactance => "X_L given f, L",
            InductiveMode::Inductance => "L   given X_L, f",
            InductiveMode::Frequency => "f   given X_L, L",
        }
    }
}

impl Variant for InductiveMode {
    fn fields(&self) -> &'static [Field] {
        match self {
            InductiveMode::Reactance => &[F, L],
            InductiveMode::Inductance => &[XL, F],
            InductiveMode::Frequency => &[XL, L],
        }
    }

    fn solve(&self, values: &[f64]) -> Result<Solution> {
        let request = match self {
            InductiveMode::Reactance => {
                let [f, l] = take_inputs("X_L", values)?;
                InductiveRequest::Reactance { f, l }
            }
            InductiveMode::Inductance => {
                let [xl, f] = take_inputs("L from X_L", values)?;
                InductiveRequest::Inductance { xl, f }
            }
            InductiveMode::Frequency => {
                let [xl, l] = take_inputs("f from X_L", values)?;
                InductiveRequest::Frequency { xl, l }
            }
        };
        request.solve()
    }
}

// ============ Capacitive ============

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapacitiveRequest {
    Reactance { f: f64, c: f64 },
    Capacitance { xc: f64, f: f64 },
    Frequency { xc: f64, c: f64 },
}

impl CapacitiveRequest {
    pub fn solve(&self) -> Result<Solution> {
        match *self {
            CapacitiveRequest::Reactance { f, c } => {
                require(f > 0.0 && c > 0.0, "requires f > 0 and C > 0")?;
                let xc = guarded_divide(1.0, TWO_PI * f * c, INVALID_DENOMINATOR)?;
                Ok(Solution::new(
                    "AC Capacitive Reactance",
                    vec![hertz("f", f), farads("C", c)],
                    vec![ohms("XC", xc)],
                ))
            }

            CapacitiveRequest::Capacitance { xc, f } => {
                require(f > 0.0 && xc > 0.0, "requires f > 0 and X_C > 0")?;
                let c = guarded_divide(1.0, TWO_PI * f * xc, INVALID_DENOMINATOR)?;
                Ok(Solution::new(
                    "AC Capacitive Reactance solve C",
                    vec![ohms("XC", xc), hertz("f", f)],
                    vec![farads("C", c)],
                ))
            }

            CapacitiveRequest::Frequency { xc, c } => {
                require(c > 0.0 && xc > 0.0, "requires C > 0 and X_C > 0")?;
                let f = guarded_divide(1.0, TWO_PI * c * xc, INVALID_DENOMINATOR)?;
                Ok(Solution::new(
                    "AC Capacitive Reactance solve f",
                    vec![ohms("XC", xc), farads("C", c)],
                    vec![hertz("f", f)],
                ))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacitiveMode {
    Reactance,
    Capacitance,
    Frequency,
}

impl Menu for CapacitiveMode {
    const ALL: &'static [Self] = &[Self::Reactance, Self::Capacitance, Self::Frequency];

    fn label(&self) -> &'static str {
        match self {
            CapacitiveMode::Reactance => "X_C given f, C",
            CapacitiveMode::Capacitance => "C   given X_C, f",
            CapacitiveMode::Frequency => "f   given X_C, C",
        }
    }
}

impl Variant for CapacitiveMode {
    fn fields(&self) -> &'static [Field] {
        match self {
            CapacitiveMode::Reactance => &[F, C],
            CapacitiveMode::Capacitance => &[XC, F],
            CapacitiveMode::Frequency => &[XC, C],
        }
    }

    fn solve(&self, values: &[f64]) -> Result<Solution> {
        let request = match self {
            CapacitiveMode::Reactance => {
                let [f, c] = take_inputs("X_C", values)?;
                CapacitiveRequest::Reactance { f, c }
            }
            CapacitiveMode::Capacitance => {
                let [xc, f] = take_inputs("C from X_C", values)?;
                CapacitiveRequest::Capacitance { xc, f }
            }
            CapacitiveMode::Frequency => {
                let [xc, c] = take_inputs("f from X_C", values)?;
                CapacitiveRequest::Frequency { xc, c }
            }
        };
        request.solve()
    }
}

// ============ Resonance ============

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResonanceRequest {
    Frequency { l: f64, c: f64 },
    Inductance { f0: f64, c: f64 },
    Capacitance { f0: f64, l: f64 },
}

impl ResonanceRequest {
    pub fn solve(&self) -> Result<Solution> {
        match *self {
            ResonanceRequest::Frequency { l, c } => {
                require(l > 0.0 && c > 0.0, "requires L > 0 and C > 0")?;
                let f0 = guarded_divide(1.0, TWO_PI * (l * c).sqrt(), INVALID_DENOMINATOR)?;
                Ok(Solution::new(
                    "Resonance",
                    vec![henries("L", l), farads("C", c)],
                    vec![hertz("f0", f0)],
                ))
            }

            ResonanceRequest::Inductance { f0, c } => {
                require(f0 > 0.0 && c > 0.0, "requires f0 > 0 and C > 0")?;
                let omega = TWO_PI * f0;
                let l = guarded_divide(1.0, omega * omega * c, INVALID_DENOMINATOR)?;
                Ok(Solution::new(
                    "Resonance solve L",
                    vec![hertz("f0", f0), farads("C", c)],
                    vec![henries("L", l)],
                ))
            }

            ResonanceRequest::Capacitance { f0, l } => {
                require(f0 > 0.0 && l > 0.0, "requires f0 > 0 and L > 0")?;
                let omega = TWO_PI * f0;
                let c = guarded_divide(1.0, omega * omega * l, INVALID_DENOMINATOR)?;
                Ok(Solution::new(
                    "Resonance solve C",
                    vec![hertz("f0", f0), henries("L", l)],
                    vec![farads("C", c)],
                ))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResonanceMode {
    Frequency,
    Inductance,
    Capacitance,
}

impl Menu for ResonanceMode {
    const ALL: &'static [Self] = &[Self::Frequency, Self::Inductance, Self::Capacitance];

    fn label(&self) -> &'static str {
        match self {
            ResonanceMode::Frequency => "f0 given L, C",
            ResonanceMode::Inductance => "L  given f0, C",
            ResonanceMode::Capacitance => "C  given f0, L",
        }
    }
}

impl Variant for ResonanceMode {
    fn fields(&self) -> &'static [Field] {
        match self {
            ResonanceMode::Frequency => &[L, C],
            ResonanceMode::Inductance => &[F0, C],
            ResonanceMode::Capacitance => &[F0, L],
        }
    }

    fn solve(&self, values: &[f64]) -> Result<Solution> {
        let request = match self {
            ResonanceMode::Frequency => {
                let [l, c] = take_inputs("f0", values)?;
                ResonanceRequest::Frequency { l, c }
            }
            ResonanceMode::Inductance => {
                let [f0, c] = take_inputs("L from f0", values)?;
                ResonanceRequest::Inductance { f0, c }
            }
            ResonanceMode::Capacitance => {
                let [f0, l] = take_inputs("C from f0", values)?;
                ResonanceRequest::Capacitance { f0, l }
            }
        };
        request.solve()
    }
}
