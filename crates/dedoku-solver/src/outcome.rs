//! One-call solving surface for embedders.

use dedoku_core::{Board, DigitGrid, ParseGridError, PositionSet};

use crate::{Solver, TechniqueCounts, TechniqueId};

/// Length of the fixed statistics vector of [`SolveOutcome::stats_vector`].
const STATS_LEN: usize = 9;

/// The result of running the default solver over one puzzle.
///
/// Carries the final board (grid plus candidate state) and the
/// per-technique usage counts; convenience accessors answer the usual
/// questions an embedder asks.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    board: Board,
    counts: TechniqueCounts,
}

impl SolveOutcome {
    /// Returns the final board state.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the final digit grid.
    #[must_use]
    pub fn grid(&self) -> &DigitGrid {
        self.board.grid()
    }

    /// Returns the per-technique usage counts.
    #[must_use]
    pub fn counts(&self) -> &TechniqueCounts {
        &self.counts
    }

    /// Returns `true` if every cell was placed.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.board.grid().is_filled()
    }

    /// Returns `true` if no house holds a duplicate digit.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.board.grid().is_valid()
    }

    /// Returns the unsolved cells left with no candidates: the
    /// engine's reported error state for over-constrained puzzles.
    #[must_use]
    pub fn empty_candidate_cells(&self) -> PositionSet {
        self.board.empty_candidate_cells()
    }

    /// Returns the fixed-layout statistics vector:
    /// `[is_filled, naked_pair, hidden_pair, naked_triple, naked_quad,
    /// x_wing, y_wing, rectangle_elim, xyz_wing]`.
    #[must_use]
    pub fn stats_vector(&self) -> [usize; STATS_LEN] {
        [
            usize::from(self.is_filled()),
            self.counts.get(TechniqueId::NakedPair),
            self.counts.get(TechniqueId::HiddenPair),
            self.counts.get(TechniqueId::NakedTriple),
            self.counts.get(TechniqueId::NakedQuad),
            self.counts.get(TechniqueId::XWing),
            self.counts.get(TechniqueId::YWing),
            self.counts.get(TechniqueId::RectangleElimination),
            self.counts.get(TechniqueId::XyzWing),
        ]
    }
}

/// Parses an 81-character puzzle string and runs the default solver.
///
/// # Errors
///
/// Returns [`ParseGridError`] when the string is not a well-formed
/// 81-cell puzzle.
///
/// # Examples
///
/// ```
/// use dedoku_solver::solve_puzzle;
///
/// let outcome = solve_puzzle(
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
/// )?;
/// assert_eq!(outcome.stats_vector()[0], 1); // filled
/// # Ok::<(), dedoku_core::ParseGridError>(())
/// ```
pub fn solve_puzzle(input: &str) -> Result<SolveOutcome, ParseGridError> {
    let grid: DigitGrid = input.parse()?;
    let mut board = Board::from_grid(grid);
    let counts = Solver::with_default_techniques().solve(&mut board);
    Ok(SolveOutcome { board, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_solve_puzzle_outcome() {
        let outcome = solve_puzzle(EASY).unwrap();
        assert!(outcome.is_filled());
        assert!(outcome.is_valid());
        assert!(outcome.counts().has_progress());
        assert!(outcome.empty_candidate_cells().is_empty());

        let stats = outcome.stats_vector();
        assert_eq!(stats[0], 1);
    }

    #[test]
    fn test_solve_puzzle_rejects_bad_input() {
        assert!(solve_puzzle("123").is_err());
        assert!(solve_puzzle(&format!("x{}", "0".repeat(80))).is_err());
    }

    #[test]
    fn test_stats_vector_reports_not_filled() {
        // An empty puzzle makes no progress at all.
        let outcome = solve_puzzle(&"0".repeat(81)).unwrap();
        assert_eq!(outcome.stats_vector()[0], 0);
        assert!(!outcome.counts().has_progress());
    }
}
