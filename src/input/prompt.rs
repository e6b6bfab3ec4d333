//! Line-oriented prompting with re-prompt on invalid input.

use std::io::{BufRead, Write};

use tracing::debug;

use super::number::{parse_int, parse_real};
use crate::error::{EeeError, Result};

/// Reads one line per request from `R`, writing prompts and complaints to `W`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter over the given line source and display sink.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `prompt` and read one line with its terminator stripped.
    ///
    /// Bytes that are not UTF-8 come through as U+FFFD, so such a line fails
    /// numeric parsing like any other junk. Returns [`EeeError::EndOfInput`]
    /// once the stream is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        if !prompt.is_empty() {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;
        }

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(EeeError::EndOfInput);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let end = line.find(|c: char| c == '\r' || c == '\n').unwrap_or(line.len());
        line.truncate(end);
        Ok(line)
    }

    /// Re-prompt until a valid integer is entered.
    pub fn read_int(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_int(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(error = %e, "rejected integer input");
                    writeln!(self.writer, "Invalid integer. Try again.")?;
                }
            }
        }
    }

    /// Re-prompt until a valid real number is entered.
    pub fn read_real(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_real(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(error = %e, "rejected real input");
                    writeln!(self.writer, "Invalid number. Try again.")?;
                }
            }
        }
    }

    /// The display sink.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the prompter, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
