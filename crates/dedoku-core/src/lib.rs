//! Core data structures for the dedoku solving engine.
//!
//! This crate holds the state every solving technique reads and writes,
//! and nothing else. It is organized around a small set of value types:
//!
//! - [`Digit`]: type-safe sudoku digit 1-9
//! - [`DigitSet`]: bitset of candidate digits for a single cell
//! - [`Position`] / [`PositionSet`]: a cell coordinate and a bitset over
//!   all 81 cells
//! - [`House`]: the 27 rows, columns, and boxes, enumerable as constants
//! - [`DigitGrid`]: the digits-only view of a puzzle, with parsing,
//!   rendering, and the `is_valid` / `is_filled` validators
//! - [`Board`]: the dual grid/candidate state with the two mutation
//!   paths ([`Board::set_cell`] and [`Board::remove_candidate`]) that
//!   techniques express every deduction through
//!
//! # Examples
//!
//! ```
//! use dedoku_core::{Board, Digit, DigitGrid, Position};
//!
//! let mut board = Board::from_grid(DigitGrid::new());
//!
//! board.set_cell(Position::new(4, 4), Digit::D5);
//! assert!(!board.candidates(Position::new(4, 5)).contains(Digit::D5));
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod position_set;

pub use self::{
    board::Board,
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
    position_set::PositionSet,
};
