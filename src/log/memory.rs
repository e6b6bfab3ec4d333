//! In-memory log store.

use super::{LogRecord, LogStore};
use crate::error::Result;

/// Keeps records in a vector; used by tests and embedders without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    lines: Vec<String>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LogStore for MemoryLog {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.lines.push(record.to_string());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}
