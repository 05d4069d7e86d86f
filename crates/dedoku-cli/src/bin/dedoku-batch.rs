//! Solve a file of puzzles and print aggregate statistics.

use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;

/// Solves every puzzle in a file and reports aggregate statistics.
#[derive(Debug, Parser)]
#[command(name = "dedoku-batch", version, about)]
struct Args {
    /// Path to a file with one 81-character puzzle per line.
    file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let content = match fs::read_to_string(&args.file) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Error: cannot read {}: {err}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    let started = Instant::now();
    match dedoku_cli::run_batch(&content) {
        Ok(report) => {
            print!(
                "{}",
                dedoku_cli::render_batch_report(&report, started.elapsed().as_secs_f64())
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
