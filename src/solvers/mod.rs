//! Closed-form formula solvers.
//!
//! Each submodule covers one physical law and offers a set of "solve for X"
//! variants:
//!
//! - [`divider`] - Voltage divider, `Vout = Vin * R2 / (R1 + R2)`
//! - [`resistors`] - Series sums and two-resistor parallel combinations
//! - [`reactance`] - Inductive/capacitive reactance and LC resonance
//! - [`transient`] - RC charge/discharge, `tau = R * C`
//! - [`power`] - `P = V * I`
//!
//! A variant is described twice: as a request enum carrying typed inputs
//! (e.g. [`DividerRequest`]) and as a data-free selector (e.g.
//! [`DividerMode`]) implementing [`Variant`], which the interactive shell uses
//! to know which inputs to ask for.
//!
//! Every variant checks its domain preconditions first, performs its
//! divisions through [`crate::guard`], and returns either a complete
//! [`Solution`] or an error. Nothing is ever partially solved.

pub mod divider;
pub mod power;
pub mod reactance;
pub mod resistors;
pub mod transient;

pub use divider::{DividerMode, DividerRequest};
pub use power::{PowerMode, PowerRequest};
pub use reactance::{
    CapacitiveMode, CapacitiveRequest, InductiveMode, InductiveRequest, ReactanceGroup,
    ResonanceMode, ResonanceRequest,
};
pub use resistors::{ParallelMode, ParallelRequest, ResistorGroup, SeriesMode, SeriesRequest};
pub use transient::{TransientMode, TransientRequest};

use crate::error::{EeeError, Result};
use crate::log::LogRecord;
use crate::quantity::{Quantity, Unit};

/// 2π, shared by the AC formulas.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// The outcome of one successful solver invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Module and variant name, e.g. `Voltage Divider (Vout)`
    pub title: &'static str,
    /// Every input, in the order supplied
    pub inputs: Vec<Quantity>,
    /// Every derived value
    pub outputs: Vec<Quantity>,
    /// Extra note shown next to the result
    pub remark: Option<&'static str>,
}

impl Solution {
    pub fn new(title: &'static str, inputs: Vec<Quantity>, outputs: Vec<Quantity>) -> Self {
        Self {
            title,
            inputs,
            outputs,
            remark: None,
        }
    }

    pub fn with_remark(mut self, remark: &'static str) -> Self {
        self.remark = Some(remark);
        self
    }

    /// Look up an output value by name.
    pub fn output(&self, name: &str) -> Option<f64> {
        self.outputs.iter().find(|q| q.name == name).map(|q| q.value)
    }

    /// The first (primary) output value.
    pub fn value(&self) -> f64 {
        self.outputs.first().map(|q| q.value).unwrap_or_default()
    }

    /// The log line summarizing this computation.
    pub fn record(&self) -> LogRecord {
        LogRecord::new(self.title, &self.inputs, &self.outputs, self.remark)
    }
}

/// One input a variant needs from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub unit: Unit,
}

impl Field {
    pub const fn new(name: &'static str, unit: Unit) -> Self {
        Self { name, unit }
    }

    /// Prompt text, e.g. `R1 (ohm): `.
    pub fn prompt(&self) -> String {
        format!("{} ({}): ", self.name, self.unit.symbol())
    }
}

/// A menu of choices numbered from 1.
pub trait Menu: Copy + Sized + 'static {
    /// All choices in menu order.
    const ALL: &'static [Self];

    /// Menu line text.
    fn label(&self) -> &'static str;

    /// Map a 1-based menu code to a choice.
    fn from_choice(choice: i64) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Like [`Menu::from_choice`], failing with [`EeeError::InvalidSelection`].
    fn choose(choice: i64) -> Result<Self> {
        Self::from_choice(choice).ok_or(EeeError::InvalidSelection { choice })
    }
}

/// A "solve for X" selector that knows its inputs.
pub trait Variant: Menu {
    /// Inputs in the order [`Variant::solve`] expects them.
    fn fields(&self) -> &'static [Field];

    /// Solve from values given in [`Variant::fields`] order.
    fn solve(&self, values: &[f64]) -> Result<Solution>;
}

/// Fail with a domain error unless `condition` holds.
pub(crate) fn require(condition: bool, message: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(EeeError::domain(message))
    }
}

/// Destructure `values` into exactly `N` inputs for `variant`.
pub(crate) fn take_inputs<const N: usize>(variant: &'static str, values: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(values).map_err(|_| EeeError::Arity {
        variant,
        expected: N,
        got: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice_bounds() {
        assert_eq!(DividerMode::from_choice(1), Some(DividerMode::Vout));
        assert_eq!(DividerMode::from_choice(4), Some(DividerMode::R2));
        assert_eq!(DividerMode::from_choice(0), None);
        assert_eq!(DividerMode::from_choice(5), None);
        assert_eq!(DividerMode::from_choice(-1), None);
    }

    #[test]
    fn test_choose_reports_the_rejected_code() {
        assert_eq!(PowerMode::choose(3).unwrap(), PowerMode::Current);
        let err = PowerMode::choose(4).unwrap_err();
        assert!(matches!(err, EeeError::InvalidSelection { choice: 4 }));
        assert_eq!(err.to_string(), "Invalid selection 4");
    }

    #[test]
    fn test_every_variant_solves_from_its_fields() {
        fn check<V: Variant>() {
            for variant in V::ALL {
                let values = vec![1.0; variant.fields().len()];
                // Only arity matters here; domain failures are fine
                let result = variant.solve(&values);
                assert!(!matches!(result, Err(EeeError::Arity { .. })), "{}", variant.label());
            }
        }
        check::<DividerMode>();
        check::<ParallelMode>();
        check::<InductiveMode>();
        check::<CapacitiveMode>();
        check::<ResonanceMode>();
        check::<TransientMode>();
        check::<PowerMode>();
    }

    #[test]
    fn test_wrong_arity_is_an_error() {
        let err = PowerMode::Power.solve(&[1.0]).unwrap_err();
        assert!(matches!(err, EeeError::Arity { expected: 2, got: 1, .. }));
    }

    #[test]
    fn test_field_prompt() {
        assert_eq!(Field::new("R1", Unit::Ohm).prompt(), "R1 (ohm): ");
    }
}
