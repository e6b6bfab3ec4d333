//! File-backed log store.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{LogRecord, LogStore};
use crate::error::{EeeError, Result};

/// Appends records as lines of a plain text file.
///
/// Nothing touches the filesystem until the first append or read; a file
/// that does not exist yet reads as an empty log.
#[derive(Debug, Clone)]
pub struct FileLog {
    path: PathBuf,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> EeeError {
        EeeError::LogWrite {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl LogStore for FileLog {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;

        writeln!(file, "{}", record).map_err(|e| self.write_error(e))?;
        debug!(path = %self.path.display(), "appended log record");
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<String>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes
                .split_inclusive(|&b| b == b'\n')
                .map(|line| {
                    let line = line.strip_suffix(b"\n").unwrap_or(line);
                    String::from_utf8_lossy(line).into_owned()
                })
                .collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(EeeError::LogRead {
                path: self.path.display().to_string(),
                source,
            }),
        }
    }
}
