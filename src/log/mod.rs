//! Append-only log of completed computations.
//!
//! Each successful solver invocation yields one [`LogRecord`]. A [`LogStore`]
//! appends records in completion order and replays them verbatim; there is
//! no deduplication, editing or deletion.
//!
//! Appends take `&mut self`, so a store has exactly one writer at a time.
//! Callers treat append failures as non-fatal: the computed result stands
//! whether or not it was persisted.

mod file;
mod memory;
mod record;

pub use file::FileLog;
pub use memory::MemoryLog;
pub use record::LogRecord;

use crate::error::Result;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "eee_log.txt";

/// Append-only record storage.
pub trait LogStore {
    /// Append one record after all previously appended ones.
    fn append(&mut self, record: &LogRecord) -> Result<()>;

    /// Every stored line, in append order.
    fn read_all(&self) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{DividerRequest, ParallelRequest, PowerRequest};

    #[test]
    fn test_replay_preserves_completion_order() {
        let mut log = MemoryLog::new();
        let solutions = [
            DividerRequest::Vout { vin: 10.0, r1: 1e3, r2: 1e3 }.solve().unwrap(),
            PowerRequest::Power { v: 1.0, i: 2.0 }.solve().unwrap(),
            ParallelRequest::Req { r1: 0.0, r2: 10.0 }.solve().unwrap(),
            PowerRequest::Power { v: 1.0, i: 2.0 }.solve().unwrap(),
        ];
        for solution in &solutions {
            log.append(&solution.record()).unwrap();
        }

        let replay = log.read_all().unwrap();
        assert_eq!(replay.len(), 4);
        for (line, solution) in replay.iter().zip(&solutions) {
            assert_eq!(line, solution.record().as_str());
        }
        // Duplicates are kept
        assert_eq!(replay[1], replay[3]);
    }
}
