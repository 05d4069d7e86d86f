use dedoku_core::{Board, DigitSet};

use super::{BoxedTechnique, Technique, TechniqueId};

/// Removes candidates that conflict with already-placed peer digits.
///
/// For every unsolved cell, any digit placed in the same row, column,
/// or box is removed from the cell's candidates. This is the cheapest
/// technique and the one that prunes a freshly loaded board against its
/// givens; afterwards [`Board::set_cell`] keeps peers pruned
/// incrementally, so later sweeps rarely find anything.
///
/// Counts once per sweep that changed the board.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicElimination;

impl BasicElimination {
    /// Creates a new `BasicElimination` technique.
    #[must_use]
    pub const fn new() -> Self {
        BasicElimination
    }
}

impl Technique for BasicElimination {
    fn id(&self) -> TechniqueId {
        TechniqueId::BasicElimination
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut changed = false;
        for pos in board.unsolved_cells() {
            let mut placed_nearby = DigitSet::EMPTY;
            for peer in pos.peers() {
                if let Some(digit) = board.digit(peer) {
                    placed_nearby.insert(digit);
                }
            }
            for digit in board.candidates(pos) & placed_nearby {
                changed |= board.remove_candidate(pos, digit);
            }
        }
        usize::from(changed)
    }
}

#[cfg(test)]
mod tests {
    use dedoku_core::{Digit, Position};

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_prunes_givens() {
        TechniqueTester::from_grid_str(&format!("5{}", "0".repeat(80)))
            .apply_once(&BasicElimination::new())
            // The given 5 is pruned from its row, column, and box.
            .assert_removed_includes(Position::new(0, 8), [Digit::D5])
            .assert_removed_includes(Position::new(8, 0), [Digit::D5])
            .assert_removed_includes(Position::new(2, 2), [Digit::D5])
            .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_counts_once_per_changed_sweep() {
        let mut board = TechniqueTester::from_grid_str(&format!("12{}", "0".repeat(79)))
            .into_board();
        let technique = BasicElimination::new();
        assert_eq!(technique.apply(&mut board), 1);
        // A second sweep finds nothing left to prune.
        assert_eq!(technique.apply(&mut board), 0);
    }

    #[test]
    fn test_no_change_on_empty_board() {
        TechniqueTester::from_grid_str(&"0".repeat(81))
            .apply_once(&BasicElimination::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(8, 8));
    }
}
