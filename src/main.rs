//! EEE Helper - interactive electrical-engineering calculator.
//!
//! # Usage
//!
//! ```bash
//! eee-helper                        # log to ./eee_log.txt
//! eee-helper --log-file calcs.txt   # log elsewhere
//! RUST_LOG=debug eee-helper         # diagnostics on stderr
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eee_helper::{log::DEFAULT_LOG_FILE, EeeError, FileLog, Shell};
use tracing_subscriber::EnvFilter;

/// Menu-driven calculator for voltage dividers, resistors, reactance, RC transients and power
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Append-only file that stores every successful calculation
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Diagnostic verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    // Diagnostics go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let log = FileLog::new(&args.log_file);
    tracing::info!(path = %args.log_file.display(), "starting session");

    let result = Shell::new(io::stdin().lock(), io::stdout().lock(), log).run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(EeeError::EndOfInput) => {
            println!("Input error. Exiting.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
