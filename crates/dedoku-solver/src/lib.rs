//! Human-style sudoku solving engine.
//!
//! The solver applies a catalog of named deduction techniques in
//! difficulty order inside a fixed-point loop: after any technique
//! makes progress the loop restarts from the cheapest one, which keeps
//! the engine working at the easiest productive level, the way a
//! human solver does. No search or backtracking is involved, so a
//! puzzle beyond the enabled techniques simply terminates unsolved.
//!
//! # Overview
//!
//! - [`technique`]: the [`Technique`](technique::Technique) trait, one
//!   type per deduction technique, and the registry that orders them
//! - [`Solver`]: the driver loop, with [`TechniqueCounts`] reporting
//!   how many times each technique carried the solve
//! - [`solve_puzzle`] / [`SolveOutcome`]: the one-call embedding
//!   surface over an 81-character puzzle string
//! - [`testing`]: a fluent harness for technique unit tests
//!
//! # Examples
//!
//! ```
//! use dedoku_solver::solve_puzzle;
//!
//! let outcome = solve_puzzle(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )?;
//! assert!(outcome.is_filled());
//! assert!(outcome.is_valid());
//! # Ok::<(), dedoku_core::ParseGridError>(())
//! ```

pub mod technique;
pub mod testing;

mod outcome;
mod solver;

pub use self::{
    outcome::{SolveOutcome, solve_puzzle},
    solver::{Solver, TechniqueCounts},
    technique::{Technique, TechniqueId},
};
