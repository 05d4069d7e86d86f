use dedoku_core::{Board, Position};

use super::{BoxedTechnique, Technique, TechniqueId};

/// Places the digit in any cell that has exactly one candidate left.
///
/// Placement goes through [`Board::set_cell`], which also removes the
/// digit from all 20 peers, so each naked single performs the
/// fundamental constraint propagation step of the engine.
///
/// Counts once per placement.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Technique for NakedSingle {
    fn id(&self) -> TechniqueId {
        TechniqueId::NakedSingle
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut placed = 0;
        for pos in Position::all() {
            if let Some(digit) = board.candidates(pos).as_single() {
                board.set_cell(pos, digit);
                placed += 1;
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use dedoku_core::{Digit, DigitGrid, Position};

    use super::*;
    use crate::{
        technique::BasicElimination,
        testing::TechniqueTester,
    };

    #[test]
    fn test_places_single_candidate() {
        let mut board = dedoku_core::Board::from_grid(DigitGrid::new());
        let pos = Position::new(3, 3);
        for digit in Digit::ALL {
            if digit != Digit::D6 {
                board.remove_candidate(pos, digit);
            }
        }

        TechniqueTester::new(board)
            .apply_once(&NakedSingle::new())
            .assert_placed(pos, Digit::D6)
            // Placement propagates to row, column, and box peers.
            .assert_removed_includes(Position::new(3, 8), [Digit::D6])
            .assert_removed_includes(Position::new(8, 3), [Digit::D6])
            .assert_removed_includes(Position::new(4, 4), [Digit::D6]);
    }

    #[test]
    fn test_counts_per_placement() {
        let mut board = dedoku_core::Board::from_grid(DigitGrid::new());
        for (pos, digit) in [
            (Position::new(0, 0), Digit::D1),
            (Position::new(4, 4), Digit::D9),
        ] {
            for other in Digit::ALL {
                if other != digit {
                    board.remove_candidate(pos, other);
                }
            }
        }

        assert_eq!(NakedSingle::new().apply(&mut board), 2);
        assert_eq!(NakedSingle::new().apply(&mut board), 0);
    }

    #[test]
    fn test_no_change_without_singles() {
        TechniqueTester::new(dedoku_core::Board::from_grid(DigitGrid::new()))
            .apply_once(&NakedSingle::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_real_puzzle_cascade() {
        // The classic easy puzzle falls to basic elimination plus
        // singles alone once the solver interleaves them.
        TechniqueTester::from_grid_str(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ",
        )
        .apply_once(&BasicElimination::new())
        .apply_until_stuck(&NakedSingle::new())
        .assert_placed(Position::new(4, 4), Digit::D5);
    }
}
