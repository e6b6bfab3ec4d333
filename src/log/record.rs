//! One-line summaries of completed computations.

use std::fmt;

use crate::quantity::Quantity;

/// A single formatted log line, e.g.
///
/// ```text
/// Power: V=12.000000 V, I=0.500000 A -> P=6.000000 W
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord(String);

impl LogRecord {
    /// Build `<title>: <inputs> -> <outputs>[ (<remark>)]`.
    pub fn new(title: &str, inputs: &[Quantity], outputs: &[Quantity], remark: Option<&str>) -> Self {
        let mut line = format!("{}: {} -> {}", title, join(inputs), join(outputs));
        if let Some(remark) = remark {
            line.push_str(&format!(" ({})", remark));
        }
        Self(line)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn join(quantities: &[Quantity]) -> String {
    quantities
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
