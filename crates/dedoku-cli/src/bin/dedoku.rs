//! Solve a single sudoku puzzle from the command line.

use std::process::ExitCode;

use clap::Parser;

/// Solves an 81-character sudoku puzzle with human-style techniques.
#[derive(Debug, Parser)]
#[command(name = "dedoku", version, about)]
struct Args {
    /// Puzzle string of 81 digits; '0' marks an unsolved cell.
    puzzle: String,

    /// Also print the per-cell candidate state after solving.
    #[arg(long)]
    candidates: bool,
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

    if args.puzzle.len() != 81 {
        eprintln!("Error: puzzle must be exactly 81 characters");
        return ExitCode::FAILURE;
    }

    match dedoku_cli::run_single(&args.puzzle, args.candidates) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
