//! Unit-tagged quantities and their display precision.

use std::borrow::Cow;
use std::fmt;

/// How a unit's values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Fixed-point with the given number of decimals
    Fixed(usize),
    /// C `%.Ne` style scientific notation with N mantissa decimals
    Scientific(usize),
    /// Whole number
    Integer,
}

/// Physical units handled by the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Ohm,
    Volt,
    Amp,
    Watt,
    Hertz,
    Second,
    Henry,
    Farad,
    Percent,
    /// Dimensionless count (number of resistors)
    Count,
}

impl Unit {
    /// Symbol used in prompts, results and log records.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Ohm => "ohm",
            Unit::Volt => "V",
            Unit::Amp => "A",
            Unit::Watt => "W",
            Unit::Hertz => "Hz",
            Unit::Second => "s",
            Unit::Henry => "H",
            Unit::Farad => "F",
            Unit::Percent => "%",
            Unit::Count => "",
        }
    }

    /// Display precision for values in this unit.
    pub fn precision(&self) -> Precision {
        match self {
            Unit::Henry | Unit::Farad => Precision::Scientific(9),
            Unit::Percent => Precision::Fixed(2),
            Unit::Count => Precision::Integer,
            _ => Precision::Fixed(6),
        }
    }

    /// Render `value` at this unit's precision, without the symbol.
    pub fn format_value(&self, value: f64) -> String {
        match self.precision() {
            Precision::Fixed(decimals) => format!("{:.*}", decimals, value),
            Precision::Scientific(decimals) => format_scientific(value, decimals),
            Precision::Integer => format!("{:.0}", value),
        }
    }

    fn separator(&self) -> &'static str {
        match self {
            Unit::Percent | Unit::Count => "",
            _ => " ",
        }
    }
}

/// Format like C's `%.{decimals}e`: signed exponent with at least two digits.
pub fn format_scientific(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*e}", decimals, value);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        Err(_) => raw,
    }
}

/// A named value with its unit, e.g. `Vout = 5 V`.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub name: Cow<'static, str>,
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(name: impl Into<Cow<'static, str>>, value: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            value,
            unit,
        }
    }

    /// Value and unit, e.g. `5.000000 V` or `63.21%`.
    pub fn formatted(&self) -> String {
        format!(
            "{}{}{}",
            self.unit.format_value(self.value),
            self.unit.separator(),
            self.unit.symbol()
        )
    }
}

/// Compact `name=value unit` form used in log records.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientific_matches_c_style() {
        assert_eq!(format_scientific(1e-3, 9), "1.000000000e-03");
        assert_eq!(format_scientific(2.5e-12, 9), "2.500000000e-12");
        assert_eq!(format_scientific(1234.4, 3), "1.234e+03");
        assert_eq!(format_scientific(0.0, 2), "0.00e+00");
        assert_eq!(format_scientific(-4.7e-100, 1), "-4.7e-100");
    }

    #[test]
    fn test_unit_precision() {
        assert_eq!(Unit::Volt.format_value(5.0), "5.000000");
        assert_eq!(Unit::Percent.format_value(63.212), "63.21");
        assert_eq!(Unit::Farad.format_value(1e-6), "1.000000000e-06");
        assert_eq!(Unit::Count.format_value(3.0), "3");
    }

    #[test]
    fn test_quantity_display() {
        assert_eq!(Quantity::new("Vout", 5.0, Unit::Volt).to_string(), "Vout=5.000000 V");
        assert_eq!(Quantity::new("charge", 50.0, Unit::Percent).to_string(), "charge=50.00%");
        assert_eq!(Quantity::new("n", 4.0, Unit::Count).to_string(), "n=4");
        assert_eq!(Quantity::new("R1", 1e3, Unit::Ohm).formatted(), "1000.000000 ohm");
    }
}
