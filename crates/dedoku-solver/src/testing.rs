//! Test utilities for technique implementations.
//!
//! [`TechniqueTester`] snapshots a board, applies techniques, and
//! offers fluent assertions about what changed.
//!
//! # Example
//!
//! ```
//! use dedoku_core::{Digit, Position};
//! use dedoku_solver::{technique::BasicElimination, testing::TechniqueTester};
//!
//! TechniqueTester::from_grid_str(&format!("5{}", "0".repeat(80)))
//!     .apply_once(&BasicElimination::new())
//!     .assert_removed_includes(Position::new(0, 8), [Digit::D5]);
//! ```

use dedoku_core::{Board, Digit, DigitGrid, DigitSet, Position};

use crate::technique::Technique;

/// A test harness for verifying technique implementations.
///
/// Tracks the initial and current state of a board so assertions can
/// compare the two. All methods return `self` for chaining; assertion
/// methods panic with detailed messages and `#[track_caller]` source
/// locations.
#[derive(Debug)]
pub struct TechniqueTester {
    initial: Board,
    current: Board,
}

impl TechniqueTester {
    /// Creates a tester from an initial board state.
    #[must_use]
    pub fn new(initial: Board) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a tester from a grid string (see
    /// [`DigitGrid::from_str`](std::str::FromStr)).
    ///
    /// Candidates start full; apply
    /// [`BasicElimination`](crate::technique::BasicElimination) first
    /// when the test needs the givens pruned.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed.
    #[track_caller]
    pub fn from_grid_str(s: &str) -> Self {
        let grid: DigitGrid = s.parse().expect("invalid grid string");
        Self::new(Board::from_grid(grid))
    }

    /// Applies the technique once.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        technique.apply(&mut self.current);
        self
    }

    /// Applies the technique repeatedly until it reports no progress.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while technique.apply(&mut self.current) > 0 {}
        self
    }

    /// Returns the current board state.
    #[must_use]
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Consumes the tester and returns the current board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.current
    }

    /// Asserts that the cell was placed with the given digit.
    ///
    /// # Panics
    ///
    /// Panics if the cell was already placed initially or holds a
    /// different digit now.
    #[track_caller]
    pub fn assert_placed(self, pos: Position, digit: Digit) -> Self {
        assert!(
            self.initial.is_unsolved(pos),
            "expected {pos} to start unsolved"
        );
        assert_eq!(
            self.current.digit(pos),
            Some(digit),
            "expected {digit} to be placed at {pos}, grid holds {:?} with candidates {:?}",
            self.current.digit(pos),
            self.current.candidates(pos)
        );
        self
    }

    /// Asserts that all the given candidates were removed from a cell.
    ///
    /// Other candidates may have been removed as well.
    ///
    /// # Panics
    ///
    /// Panics if a digit was not initially present or is still present.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        assert_eq!(
            initial & digits,
            digits,
            "expected initial candidates at {pos} to include {digits:?}, but they are {initial:?}"
        );
        assert!(
            (current & digits).is_empty(),
            "expected {digits:?} to be removed from {pos}, but {:?} remain",
            current & digits
        );
        self
    }

    /// Asserts that exactly the given candidates were removed from a
    /// cell, no more and no less.
    ///
    /// # Panics
    ///
    /// Panics if the removed set differs from `digits`.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        let removed = initial.difference(current);
        assert_eq!(
            removed, digits,
            "expected exactly {digits:?} removed from {pos} (initial {initial:?}, current {current:?})"
        );
        self
    }

    /// Asserts that a cell's candidates and digit are unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the cell changed in any way.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        assert_eq!(
            self.initial.digit(pos),
            self.current.digit(pos),
            "expected no placement change at {pos}"
        );
        assert_eq!(
            self.initial.candidates(pos),
            self.current.candidates(pos),
            "expected candidates at {pos} to stay unchanged"
        );
        self
    }
}
