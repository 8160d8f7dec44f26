//! Prints the name of every member in a CSV file.
//!
//! Errors, warnings, and the final count all go to stdout. The process exits
//! with status 1 when the file cannot be loaded.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use roster_core::{DEFAULT_CSV_PATH, print_names};

#[derive(Parser, Debug)]
#[command(name = "display-names", version, about = "Prints member names from a CSV file.")]
struct CliArgs {
    /// Path to the member CSV file.
    #[arg(default_value = DEFAULT_CSV_PATH)]
    filename: PathBuf,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let stdout = io::stdout();
    run(&args.filename, &mut stdout.lock())
}

fn run<W: Write>(path: &Path, out: &mut W) -> ExitCode {
    match print_names(path, out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(out, "Error: {err}");
            ExitCode::FAILURE
        }
    }
}
