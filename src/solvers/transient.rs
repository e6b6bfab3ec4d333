//! RC transient response.
//!
//! With `tau = R * C`:
//! - `charge%(t) = 100 * (1 - e^(-t/tau))`
//! - `discharge%(t) = 100 * e^(-t/tau)`
//!
//! Solving for time or for a component inverts the charge curve with
//! `t = -tau * ln(1 - p)`, where `p = charge% / 100`.

use super::{require, take_inputs, Field, Menu, Solution, Variant};
use crate::error::Result;
use crate::guard::guarded_divide;
use crate::quantity::{Quantity, Unit};

/// An RC transient problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransientRequest {
    /// Time constant and charge state after `t` seconds
    Response { r: f64, c: f64, t: f64 },
    /// Time to reach a target charge percentage
    Time { r: f64, c: f64, charge: f64 },
    /// Charge state from a known time constant
    FromTau { tau: f64, t: f64 },
    /// Capacitance reaching `charge` percent after `t` seconds through `r`
    Capacitance { r: f64, charge: f64, t: f64 },
    /// Resistance reaching `charge` percent after `t` seconds into `c`
    Resistance { c: f64, charge: f64, t: f64 },
}

impl TransientRequest {
    pub fn solve(&self) -> Result<Solution> {
        match *self {
            TransientRequest::Response { r, c, t } => {
                require(r > 0.0 && c > 0.0, "requires R > 0 and C > 0")?;
                require(t >= 0.0, "requires t >= 0")?;

                let tau = r * c;
                let (charge, discharge) = charge_state(t, tau);
                Ok(Solution::new(
                    "RC Transient",
                    vec![ohms("R", r), farads("C", c), seconds("t", t)],
                    vec![seconds("tau", tau), percent("charge", charge), percent("discharge", discharge)],
                ))
            }

            TransientRequest::Time { r, c, charge } => {
                require(r > 0.0 && c > 0.0, "requires R > 0 and C > 0")?;
                check_percent(charge)?;

                let tau = r * c;
                let t = -tau * (1.0 - charge / 100.0).ln();
                Ok(Solution::new(
                    "RC solve t",
                    vec![ohms("R", r), farads("C", c), percent("charge", charge)],
                    vec![seconds("t", t)],
                ))
            }

            TransientRequest::FromTau { tau, t } => {
                require(tau > 0.0, "requires tau > 0")?;
                require(t >= 0.0, "requires t >= 0")?;

                let (charge, discharge) = charge_state(t, tau);
                Ok(Solution::new(
                    "RC from tau,t",
                    vec![seconds("tau", tau), seconds("t", t)],
                    vec![percent("charge", charge), percent("discharge", discharge)],
                ))
            }

            TransientRequest::Capacitance { r, charge, t } => {
                require(r > 0.0, "requires R > 0")?;
                let tau = tau_for_charge(charge, t)?;
                let c = guarded_divide(tau, r, "division by zero")?;
                Ok(Solution::new(
                    "RC solve C",
                    vec![ohms("R", r), percent("charge", charge), seconds("t", t)],
                    vec![farads("C", c), seconds("tau", tau)],
                ))
            }

            TransientRequest::Resistance { c, charge, t } => {
                require(c > 0.0, "requires C > 0")?;
                let tau = tau_for_charge(charge, t)?;
                let r = guarded_divide(tau, c, "division by zero")?;
                Ok(Solution::new(
                    "RC solve R",
                    vec![farads("C", c), percent("charge", charge), seconds("t", t)],
                    vec![ohms("R", r), seconds("tau", tau)],
                ))
            }
        }
    }
}

/// `(charge%, discharge%)` after `t` seconds; `tau` must already be positive.
fn charge_state(t: f64, tau: f64) -> (f64, f64) {
    let remaining = (-t / tau).exp();
    (100.0 * (1.0 - remaining), 100.0 * remaining)
}

/// Time constant that reaches `charge` percent after `t` seconds.
fn tau_for_charge(charge: f64, t: f64) -> Result<f64> {
    require(t >= 0.0, "requires t >= 0")?;
    check_percent(charge)?;

    let ln_arg = 1.0 - charge / 100.0;
    require(ln_arg > 0.0, "invalid ln() domain")?;

    guarded_divide(-t, ln_arg.ln(), "charge % too small to resolve a time constant")
}

fn check_percent(charge: f64) -> Result<()> {
    require(charge > 0.0 && charge < 100.0, "% must be in (0,100)")
}

fn ohms(name: &'static str, value: f64) -> Quantity {
    Quantity::new(name, value, Unit::Ohm)
}

fn farads(name: &'static str, value: f64) -> Quantity {
    Quantity::new(name, value, Unit::Farad)
}

fn seconds(name: &'static str, value: f64) -> Quantity {
    Quantity::new(name, value, Unit::Second)
}

fn percent(name: &'static str, value: f64) -> Quantity {
    Quantity::new(name, value, Unit::Percent)
}

/// RC transient menu selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientMode {
    Response,
    Time,
    FromTau,
    Capacitance,
    Resistance,
}

const R: Field = Field::new("R", Unit::Ohm);
const C: Field = Field::new("C", Unit::Farad);
const T: Field = Field::new("t", Unit::Second);
const TAU: Field = Field::new("Tau", Unit::Second);
const CHARGE: Field = Field::new("Target charge", Unit::Percent);

impl Menu for TransientMode {
    const ALL: &'static [Self] = &[
        Self::Response,
        Self::Time,
        Self::FromTau,
        Self::Capacitance,
        Self::Resistance,
    ];

    fn label(&self) -> &'static str {
        match self {
            TransientMode::Response => "Given R, C, t  -> tau, %charge, %discharge",
            TransientMode::Time => "Given R, C, %charge -> t",
            TransientMode::FromTau => "Given tau, t   -> %charge, %discharge",
            TransientMode::Capacitance => "Given R, %charge, t -> C",
            TransientMode::Resistance => "Given C, %charge, t -> R",
        }
    }
}

impl Variant for TransientMode {
    fn fields(&self) -> &'static [Field] {
        match self {
            TransientMode::Response => &[R, C, T],
            TransientMode::Time => &[R, C, CHARGE],
            TransientMode::FromTau => &[TAU, T],
            TransientMode::Capacitance => &[R, CHARGE, T],
            TransientMode::Resistance => &[C, CHARGE, T],
        }
    }

    fn solve(&self, values: &[f64]) -> Result<Solution> {
        let request = match self {
            TransientMode::Response => {
                let [r, c, t] = take_inputs("RC response", values)?;
                TransientRequest::Response { r, c, t }
            }
            TransientMode::Time => {
                let [r, c, charge] = take_inputs("RC time", values)?;
                TransientRequest::Time { r, c, charge }
            }
            TransientMode::FromTau => {
                let [tau, t] = take_inputs("RC from tau", values)?;
                TransientRequest::FromTau { tau, t }
            }
            TransientMode::Capacitance => {
                let [r, charge, t] = take_inputs("RC capacitance", values)?;
                TransientRequest::Capacitance { r, charge, t }
            }
            TransientMode::Resistance => {
                let [c, charge, t] = take_inputs("RC resistance", values)?;
                TransientRequest::Resistance { c, charge, t }
            }
        };
        request.solve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EeeError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_one_time_constant() {
        // 1k * 1 mF = 1 s
        let solution = TransientRequest::Response { r: 1000.0, c: 1e-3, t: 1.0 }.solve().unwrap();
        assert_relative_eq!(solution.output("tau").unwrap(), 1.0);
        assert_relative_eq!(solution.output("charge").unwrap(), 63.21205588285577, epsilon = 1e-9);
        assert_relative_eq!(solution.output("discharge").unwrap(), 36.787944117144235, epsilon = 1e-9);
    }

    #[test]
    fn test_t_zero_is_uncharged() {
        for (r, c) in [(1.0, 1.0), (4.7e3, 1e-9), (1e6, 220e-6)] {
            let solution = TransientMode::Response.solve(&[r, c, 0.0]).unwrap();
            assert_eq!(solution.outputs[1].formatted(), "0.00%");
            assert_eq!(solution.outputs[2].formatted(), "100.00%");
        }
        let solution = TransientMode::FromTau.solve(&[0.5, 0.0]).unwrap();
        assert_eq!(solution.output("charge").unwrap(), 0.0);
        assert_eq!(solution.output("discharge").unwrap(), 100.0);
    }

    #[test]
    fn test_percent_boundaries_rejected() {
        for pct in [0.0, 100.0, -5.0, 150.0] {
            assert!(TransientRequest::Time { r: 1e3, c: 1e-6, charge: pct }.solve().is_err());
            assert!(TransientRequest::Capacitance { r: 1e3, charge: pct, t: 1.0 }.solve().is_err());
            assert!(TransientRequest::Resistance { c: 1e-6, charge: pct, t: 1.0 }.solve().is_err());
        }
    }

    #[test]
    fn test_domain_checks() {
        assert!(TransientRequest::Response { r: 0.0, c: 1e-6, t: 1.0 }.solve().is_err());
        assert!(TransientRequest::Response { r: 1e3, c: 1e-6, t: -1.0 }.solve().is_err());
        assert!(TransientRequest::FromTau { tau: 0.0, t: 1.0 }.solve().is_err());
        assert!(TransientRequest::Capacitance { r: -1.0, charge: 50.0, t: 1.0 }.solve().is_err());
        assert!(TransientRequest::Resistance { c: 1e-6, charge: 50.0, t: -1.0 }.solve().is_err());
    }

    #[test]
    fn test_time_to_charge_round_trip() {
        let t = TransientRequest::Time { r: 1e3, c: 1e-6, charge: 50.0 }.solve().unwrap().value();
        assert_relative_eq!(t, 1e-3 * std::f64::consts::LN_2, max_relative = 1e-12);

        let back = TransientRequest::FromTau { tau: 1e-3, t }.solve().unwrap();
        assert_abs_diff_eq!(back.output("charge").unwrap(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_solve_components() {
        let t = 2e-3 * std::f64::consts::LN_2;
        let c = TransientRequest::Capacitance { r: 2e3, charge: 50.0, t }.solve().unwrap();
        assert_relative_eq!(c.output("C").unwrap(), 1e-6, max_relative = 1e-9);
        assert_relative_eq!(c.output("tau").unwrap(), 2e-3, max_relative = 1e-9);

        let r = TransientRequest::Resistance { c: 1e-6, charge: 50.0, t }.solve().unwrap();
        assert_relative_eq!(r.output("R").unwrap(), 2e3, max_relative = 1e-9);
    }

    #[test]
    fn test_unresolvable_percentage_is_singular() {
        let err = TransientRequest::Capacitance { r: 1e3, charge: 1e-20, t: 1.0 }
            .solve()
            .unwrap_err();
        assert!(matches!(err, EeeError::Singularity { .. }));
    }

    #[test]
    fn test_log_record() {
        let solution = TransientMode::Response.solve(&[1000.0, 1e-3, 1.0]).unwrap();
        assert_eq!(
            solution.record().as_str(),
            "RC Transient: R=1000.000000 ohm, C=1.000000000e-03 F, t=1.000000 s -> tau=1.000000 s, charge=63.21%, discharge=36.79%"
        );
    }
}
