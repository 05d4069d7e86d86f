//! Report building for the dedoku command-line binaries.
//!
//! The binaries stay thin: argument handling and I/O live in
//! `src/bin`, while everything worth testing (solving, aggregation,
//! and the exact report formats) lives here.

use derive_more::{Display, Error};

use dedoku_core::ParseGridError;
use dedoku_solver::{SolveOutcome, TechniqueCounts, TechniqueId, solve_puzzle};

/// Error produced by the batch runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BatchError {
    /// The input file contained no lines of exactly 81 characters.
    #[display("no 81-character lines found in file")]
    NoPuzzles,
}

/// Solves one puzzle and renders the single-puzzle report.
///
/// The report lists the used technique counts, the final grid, and
/// the `Filled: N/81` summary; with `show_candidates` the candidate
/// state is appended, which makes empty-candidate cells visible for
/// over-constrained inputs.
///
/// # Errors
///
/// Returns [`ParseGridError`] when the puzzle string is malformed.
pub fn run_single(puzzle: &str, show_candidates: bool) -> Result<String, ParseGridError> {
    let outcome = solve_puzzle(puzzle)?;
    Ok(render_single_report(&outcome, show_candidates))
}

fn render_single_report(outcome: &SolveOutcome, show_candidates: bool) -> String {
    let mut out = String::from("Used techniques:\n");
    for (id, count) in outcome.counts().used() {
        out.push_str(&format!("- {}: {count}\n", id.name()));
    }
    out.push_str("\nFinal grid:\n");
    out.push_str(&outcome.grid().to_string());
    out.push_str(&format!("\nFilled: {}/81\n", outcome.grid().filled_count()));
    if show_candidates {
        out.push_str("\nCandidates:\n");
        out.push_str(&outcome.board().to_string());
    }
    out
}

/// Aggregated results of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of retained (81-character) puzzle lines.
    pub total: usize,
    /// Puzzles that ended filled and valid.
    pub solved: usize,
    /// Puzzles that left an unsolved cell with no candidates.
    pub empty_candidates: usize,
    /// Puzzles that ended filled but invalid.
    pub wrong_solutions: usize,
    /// Per-technique sums across all puzzles.
    pub counts: TechniqueCounts,
}

/// Solves every 81-character line of `content` and aggregates results.
///
/// Lines of any other length are ignored; retained lines that fail to
/// parse are skipped with a warning but still count toward the total.
///
/// # Errors
///
/// Returns [`BatchError::NoPuzzles`] when no line has exactly 81
/// characters.
pub fn run_batch(content: &str) -> Result<BatchReport, BatchError> {
    let puzzles: Vec<&str> = content.lines().filter(|line| line.len() == 81).collect();
    if puzzles.is_empty() {
        return Err(BatchError::NoPuzzles);
    }

    let mut report = BatchReport {
        total: puzzles.len(),
        solved: 0,
        empty_candidates: 0,
        wrong_solutions: 0,
        counts: TechniqueCounts::new(),
    };
    for puzzle in puzzles {
        let outcome = match solve_puzzle(puzzle) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("skipping malformed puzzle line: {err}");
                continue;
            }
        };

        if !outcome.empty_candidate_cells().is_empty() {
            report.empty_candidates += 1;
        }
        if outcome.is_filled() {
            if outcome.is_valid() {
                report.solved += 1;
            } else {
                report.wrong_solutions += 1;
            }
        }
        report.counts.merge(outcome.counts());
    }
    Ok(report)
}

/// Renders the batch report with the elapsed wall-clock time.
///
/// The technique table covers every known technique, stable-sorted by
/// descending count.
#[must_use]
pub fn render_batch_report(report: &BatchReport, elapsed_seconds: f64) -> String {
    let mut out = String::from("\nErrors:\n");
    out.push_str(&format!(
        "    Empty Candidates        {}\n",
        report.empty_candidates
    ));
    out.push_str(&format!(
        "    Wrong Solution          {}\n",
        report.wrong_solutions
    ));

    out.push_str("\nSolved:\n");
    out.push_str(&format!(
        "                            {}/{}\n",
        report.solved, report.total
    ));

    out.push_str("\nUsed:\n");
    let mut table: Vec<(TechniqueId, usize)> = report.counts.iter().collect();
    table.sort_by(|a, b| b.1.cmp(&a.1));
    for (id, count) in table {
        out.push_str(&format!("    {:<23} {count}\n", id.name()));
    }

    out.push_str(&format!("\nFinished in {elapsed_seconds:.2}s\n"));
    out
}
