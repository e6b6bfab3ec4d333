//! Interactive menu shell for the CLI frontend.
//!
//! The shell owns the prompt/response conversation: it shows menus, reads
//! values through [`Prompter`], hands them to a solver, prints the outcome
//! and appends the log record. Formula errors are shown and the session goes
//! on; end of input ends the session with [`EeeError::EndOfInput`].

mod menu;

pub use menu::MainMenu;

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::error::{EeeError, Result};
use crate::input::{parse_int, Prompter};
use crate::log::LogStore;
use crate::solvers::{
    CapacitiveMode, DividerMode, InductiveMode, Menu, ParallelMode, PowerMode, ReactanceGroup,
    ResistorGroup, ResonanceMode, SeriesMode, SeriesRequest, Solution, TransientMode, Variant,
};

/// Menu-driven calculator session.
pub struct Shell<R, W, L> {
    prompter: Prompter<R, W>,
    log: L,
}

impl<R: BufRead, W: Write, L: LogStore> Shell<R, W, L> {
    /// Create a session reading from `reader`, displaying to `writer` and logging to `log`.
    pub fn new(reader: R, writer: W, log: L) -> Self {
        Self {
            prompter: Prompter::new(reader, writer),
            log,
        }
    }

    /// Run the main menu until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_main_menu()?;

            let line = self.prompter.read_line("Select: ")?;
            let choice = match parse_int(&line).and_then(MainMenu::choose) {
                Ok(choice) => choice,
                Err(e) => {
                    debug!(error = %e, "main menu choice rejected");
                    writeln!(self.out(), "Invalid choice.")?;
                    continue;
                }
            };
            info!(?choice, "main menu selection");

            match choice {
                MainMenu::Divider => self.divider()?,
                MainMenu::Resistors => self.resistors()?,
                MainMenu::Reactance => self.reactance()?,
                MainMenu::Transient => self.transient()?,
                MainMenu::Power => self.power()?,
                MainMenu::ViewLog => self.view_log()?,
                MainMenu::Quit => {
                    writeln!(self.out(), "Bye!")?;
                    return Ok(());
                }
            }

            self.wait_back()?;
        }
    }

    /// Consume the shell, returning the display sink and the log store.
    pub fn into_parts(self) -> (W, L) {
        let (_, writer) = self.prompter.into_parts();
        (writer, self.log)
    }

    fn out(&mut self) -> &mut W {
        self.prompter.writer()
    }

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.out(), "\n====== EEE Helper CLI ======")?;
        for (i, item) in MainMenu::ALL.iter().enumerate() {
            writeln!(self.out(), "{}) {}", i + 1, item.label())?;
        }
        Ok(())
    }

    // ============ Modules ============

    fn divider(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Voltage Divider ---")?;
        if let Some(mode) = self.select::<DividerMode>("Solve:")? {
            self.run_variant(mode)?;
        }
        Ok(())
    }

    fn resistors(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Resistor Tools ---")?;
        match self.select::<ResistorGroup>("")? {
            Some(ResistorGroup::Series) => self.series(),
            Some(ResistorGroup::Parallel) => {
                if let Some(mode) = self.select::<ParallelMode>("\nParallel(2) modes:")? {
                    self.run_variant(mode)?;
                }
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn series(&mut self) -> Result<()> {
        let Some(mode) = self.select::<SeriesMode>("\nSeries modes:")? else {
            return Ok(());
        };

        let n = self.prompter.read_int(mode.count_prompt())?;
        let n = match mode.check_count(n) {
            Ok(n) => n,
            Err(e) => return self.show_error(&e),
        };

        let request = match mode {
            SeriesMode::Total => SeriesRequest::Total {
                resistors: self.read_resistors("R", mode.values_needed(n))?,
            },
            SeriesMode::Missing => {
                let target = self.prompter.read_real("Target Rt (ohm): ")?;
                let known = self.read_resistors("Known R", mode.values_needed(n))?;
                SeriesRequest::Missing { target, known }
            }
        };
        self.report(request.solve())
    }

    fn reactance(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- AC Reactance & Resonance ---")?;
        match self.select::<ReactanceGroup>("")? {
            Some(ReactanceGroup::Inductive) => self.select_and_run::<InductiveMode>("\nSolve for:"),
            Some(ReactanceGroup::Capacitive) => self.select_and_run::<CapacitiveMode>("\nSolve for:"),
            Some(ReactanceGroup::Resonance) => self.select_and_run::<ResonanceMode>("\nSolve for:"),
            None => Ok(()),
        }
    }

    fn transient(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- RC Transient Calculator ---")?;
        self.select_and_run::<TransientMode>("")
    }

    fn power(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Power Equation ---")?;
        self.select_and_run::<PowerMode>("Choose using P = V * I:")
    }

    fn view_log(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Saved Log ---")?;
        match self.log.read_all() {
            Ok(lines) if lines.is_empty() => writeln!(self.out(), "No saved calculations yet.")?,
            Ok(lines) => {
                for line in lines {
                    writeln!(self.out(), "{}", line)?;
                }
            }
            Err(e) => {
                warn!(error = %e, "could not read log");
                writeln!(self.out(), "Could not read the saved log.")?;
            }
        }
        Ok(())
    }

    // ============ Helpers ============

    /// Show a numbered menu and read a choice; `None` after "Invalid selection.".
    fn select<M: Menu>(&mut self, heading: &str) -> Result<Option<M>> {
        if !heading.is_empty() {
            writeln!(self.out(), "{}", heading)?;
        }
        for (i, item) in M::ALL.iter().enumerate() {
            writeln!(self.out(), "{}) {}", i + 1, item.label())?;
        }

        let choice = self.prompter.read_int("Select: ")?;
        match M::choose(choice) {
            Ok(selected) => Ok(Some(selected)),
            Err(e) => {
                debug!(error = %e, "sub-menu choice rejected");
                writeln!(self.out(), "Invalid selection.")?;
                Ok(None)
            }
        }
    }

    fn select_and_run<V: Variant>(&mut self, heading: &str) -> Result<()> {
        if let Some(variant) = self.select::<V>(heading)? {
            self.run_variant(variant)?;
        }
        Ok(())
    }

    fn run_variant<V: Variant>(&mut self, variant: V) -> Result<()> {
        let mut values = Vec::with_capacity(variant.fields().len());
        for field in variant.fields() {
            values.push(self.prompter.read_real(&field.prompt())?);
        }
        self.report(variant.solve(&values))
    }

    fn read_resistors(&mut self, prefix: &str, count: usize) -> Result<Vec<f64>> {
        (1..=count)
            .map(|i| self.prompter.read_real(&format!("{}{} (ohm): ", prefix, i)))
            .collect()
    }

    /// Print a solver outcome and log it on success. Formula errors are shown, not returned.
    fn report(&mut self, result: Result<Solution>) -> Result<()> {
        let solution = match result {
            Ok(solution) => solution,
            Err(e) if e.is_formula_error() => return self.show_error(&e),
            Err(e) => return Err(e),
        };

        for output in &solution.outputs {
            writeln!(self.out(), "{} = {}", output.name, output.formatted())?;
        }
        if let Some(remark) = solution.remark {
            writeln!(self.out(), "({})", remark)?;
        }

        let record = solution.record();
        debug!(%record, "computation complete");
        if let Err(e) = self.log.append(&record) {
            warn!(error = %e, "log record not saved");
        }
        Ok(())
    }

    fn show_error(&mut self, error: &EeeError) -> Result<()> {
        debug!(%error, "formula rejected");
        writeln!(self.out(), "Error: {}.", error)?;
        Ok(())
    }

    fn wait_back(&mut self) -> Result<()> {
        loop {
            let line = self
                .prompter
                .read_line("\nEnter 'b' to go back to the main menu: ")?;
            if line == "b" || line == "B" {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{LogRecord, MemoryLog};
    use std::io::Cursor;

    fn session(input: &str) -> (Result<()>, String, MemoryLog) {
        raw_session(input.as_bytes())
    }

    fn raw_session(input: &[u8]) -> (Result<()>, String, MemoryLog) {
        let mut shell = Shell::new(Cursor::new(input.to_vec()), Vec::new(), MemoryLog::new());
        let result = shell.run();
        let (out, log) = shell.into_parts();
        (result, String::from_utf8(out).unwrap(), log)
    }

    #[test]
    fn test_divider_session() {
        let (result, out, log) = session("1\n1\n10\n1000\n1000\nb\n7\n");
        assert!(result.is_ok());
        assert!(out.contains("Vout = 5.000000 V"));
        assert!(out.ends_with("Bye!\n"));
        assert_eq!(
            log.read_all().unwrap(),
            vec!["Voltage Divider (Vout): Vin=10.000000 V, R1=1000.000000 ohm, R2=1000.000000 ohm -> Vout=5.000000 V"]
        );
    }

    #[test]
    fn test_invalid_main_choice_redisplays_menu() {
        let (result, out, _) = session("2abc\n0\n8\n7\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Invalid choice.").count(), 3);
        assert_eq!(out.matches("====== EEE Helper CLI ======").count(), 4);
        assert!(!out.contains("Enter 'b'"));
    }

    #[test]
    fn test_non_utf8_input_is_rejected_not_fatal() {
        let (result, out, _) = raw_session(b"\xff\n7\n");
        assert!(result.is_ok());
        let invalid = out.find("Invalid choice.").unwrap();
        assert!(out[invalid..].ends_with("Bye!\n"));

        let (result, out, log) = raw_session(b"5\n1\n1\xe9\n2\n3\nb\n7\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Invalid number. Try again.").count(), 1);
        assert!(out.contains("P = 6.000000 W"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_end_of_input_is_fatal() {
        let (result, _, log) = session("1\n1\n10\n");
        assert!(matches!(result, Err(EeeError::EndOfInput)));
        assert!(log.is_empty());

        let (result, _, _) = session("");
        assert!(matches!(result, Err(EeeError::EndOfInput)));
    }

    #[test]
    fn test_invalid_numbers_reprompt() {
        let (result, out, log) = session("5\n1\n12abc\n12\n0.5\nb\n7\n");
        assert!(result.is_ok());
        assert!(out.contains("Invalid number. Try again."));
        assert!(out.contains("P = 6.000000 W"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_domain_error_is_shown_and_not_logged() {
        let (result, out, log) = session("4\n2\n1000\n1e-6\n100\nb\n7\n");
        assert!(result.is_ok());
        assert!(out.contains("Error: % must be in (0,100)."));
        assert!(log.is_empty());
    }

    #[test]
    fn test_singularity_is_shown() {
        let (_, out, log) = session("5\n2\n10\n0\nb\n7\n");
        assert!(out.contains("Error: I cannot be zero (or near zero)."));
        assert!(log.is_empty());
    }

    #[test]
    fn test_series_sessions() {
        let (_, out, log) = session("2\n1\n1\n3\n100\n220\n330\nb\n7\n");
        assert!(out.contains("R3 (ohm): "));
        assert!(out.contains("Rt = 650.000000 ohm"));
        assert_eq!(log.len(), 1);

        let (_, out, _) = session("2\n1\n2\n3\n1000\n100\n200\nb\n7\n");
        assert!(out.contains("Known R2 (ohm): "));
        assert!(out.contains("R_missing = 700.000000 ohm"));

        let (_, out, log) = session("2\n1\n1\n0\nb\n7\n");
        assert!(out.contains("Error: Count must be positive."));
        assert!(log.is_empty());
    }

    #[test]
    fn test_parallel_short_remark() {
        let (_, out, log) = session("2\n2\n1\n0\n100\nb\n7\n");
        assert!(out.contains("Req = 0.000000 ohm"));
        assert!(out.contains("(one branch is a short)"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_reactance_session() {
        let (_, out, _) = session("3\n3\n1\n1e-3\n1e-6\nb\n7\n");
        assert!(out.contains("f0 = 5032.921210 Hz"));
    }

    #[test]
    fn test_invalid_sub_selection() {
        let (result, out, log) = session("1\n9\nb\n7\n");
        assert!(result.is_ok());
        assert!(out.contains("Invalid selection."));
        assert!(log.is_empty());
    }

    #[test]
    fn test_back_gate_needs_exact_b() {
        let (result, out, _) = session("6\nx\nbb\n b\nB\n7\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Enter 'b' to go back").count(), 4);
    }

    #[test]
    fn test_view_log_replays_in_order() {
        let (_, out, _) = session("6\nb\n5\n1\n2\n3\nb\n5\n1\n4\n5\nb\n6\nb\n7\n");
        assert!(out.contains("No saved calculations yet."));
        let first = out.find("--- Saved Log ---\nPower: V=2.000000 V").unwrap();
        let second = out.find("Power: V=4.000000 V, I=5.000000 A -> P=20.000000 W").unwrap();
        assert!(first < second);
    }

    struct BrokenLog;

    impl LogStore for BrokenLog {
        fn append(&mut self, _record: &LogRecord) -> Result<()> {
            Err(EeeError::LogWrite {
                path: "eee_log.txt".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn read_all(&self) -> Result<Vec<String>> {
            Err(EeeError::LogRead {
                path: "eee_log.txt".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn test_log_failure_does_not_abort() {
        let input = "5\n1\n2\n3\nb\n6\nb\n7\n";
        let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), BrokenLog);
        assert!(shell.run().is_ok());
        let (out, _) = shell.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("P = 6.000000 W"));
        assert!(out.contains("Could not read the saved log."));
    }
}
