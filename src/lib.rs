//! # EEE Helper
//!
//! An interactive calculator for everyday electrical-engineering formulas.
//!
//! This library provides:
//! - A strict numeric parser that rejects partially numeric input such as `12abc`
//! - Closed-form solvers for voltage dividers, resistor networks, AC reactance
//!   and resonance, RC transients and electrical power
//! - A single guarded-division choke point shared by every formula
//! - An append-only log of completed computations
//!
//! ## Architecture
//!
//! - [`input`] - Strict integer/real parsing and the re-prompting reader
//! - [`guard`] - Division with a near-zero denominator guard
//! - [`quantity`] - Unit-tagged values and their display precision
//! - [`solvers`] - The formula families and their "solve for X" variants
//! - [`log`] - Log records and the append-only log store
//! - [`shell`] - Menu-driven interactive session (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! eee-helper --log-file eee_log.txt
//! ```
//!
//! ### Library
//!
//! ```
//! use eee_helper::solvers::DividerRequest;
//!
//! let solution = DividerRequest::Vout { vin: 10.0, r1: 1000.0, r2: 1000.0 }.solve()?;
//! assert_eq!(solution.outputs[0].formatted(), "5.000000 V");
//! # Ok::<(), eee_helper::EeeError>(())
//! ```
//!
//! ## Error Model
//!
//! Solvers never panic on bad input. A violated precondition (e.g. a
//! non-positive frequency) is an [`EeeError::Domain`]; a denominator within
//! [`guard::DIVISION_EPSILON`] of zero is an [`EeeError::Singularity`]. Both
//! abort only the current computation. Only successful computations produce
//! a [`log::LogRecord`].

pub mod error;
pub mod guard;
pub mod input;
pub mod log;
pub mod quantity;
pub mod solvers;

#[cfg(feature = "cli")]
pub mod shell;

// Re-export main types for convenience
pub use error::{EeeError, Result};
pub use log::{FileLog, LogStore, MemoryLog};
pub use quantity::{Quantity, Unit};
pub use solvers::Solution;

#[cfg(feature = "cli")]
pub use shell::Shell;
