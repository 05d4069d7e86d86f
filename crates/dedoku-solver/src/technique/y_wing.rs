use dedoku_core::Board;

use super::{BoxedTechnique, Technique, TechniqueId};

/// Removes candidates using a Y-Wing (bent triple) pattern.
///
/// A bivalue pivot `{a, b}` sees two bivalue wings `{a, c}` and
/// `{b, c}`. Whichever digit the pivot takes, one wing is forced to
/// `c`, so `c` is removed from every cell that sees both wings.
///
/// Counts once per pattern that eliminated something.
#[derive(Debug, Default, Clone, Copy)]
pub struct YWing;

impl YWing {
    /// Creates a new `YWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        YWing
    }
}

impl Technique for YWing {
    fn id(&self) -> TechniqueId {
        TechniqueId::YWing
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut count = 0;
        for pivot in board.bivalue_cells() {
            // Eliminations elsewhere may have narrowed the pivot since
            // the snapshot was taken.
            let pivot_digits = board.candidates(pivot);
            if pivot_digits.len() != 2 {
                continue;
            }

            let wing_pool = pivot.peers();
            for wing1 in wing_pool {
                let wing1_digits = board.candidates(wing1);
                if wing1_digits.len() != 2 {
                    continue;
                }
                // The wing shares exactly one digit with the pivot; the
                // leftover digit is the elimination target.
                if (wing1_digits & pivot_digits).len() != 1 {
                    continue;
                }
                let Some(target) = wing1_digits.difference(pivot_digits).as_single() else {
                    continue;
                };
                let shared1 = wing1_digits & pivot_digits;

                for wing2 in wing_pool {
                    if wing2.index() <= wing1.index() {
                        continue;
                    }
                    let wing2_digits = board.candidates(wing2);
                    if wing2_digits.len() != 2 {
                        continue;
                    }
                    let shared2 = wing2_digits & pivot_digits;
                    if shared2.len() != 1 || shared2 == shared1 {
                        continue;
                    }
                    if wing2_digits.difference(pivot_digits).as_single() != Some(target) {
                        continue;
                    }

                    let eliminations =
                        board.digit_positions(target) & wing1.peers() & wing2.peers();
                    let mut changed = false;
                    for pos in eliminations {
                        if pos != pivot {
                            changed |= board.remove_candidate(pos, target);
                        }
                    }
                    if changed {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use dedoku_core::{Board, Digit, DigitGrid, Position};

    use super::*;
    use crate::testing::TechniqueTester;

    fn restrict(board: &mut Board, pos: Position, keep: [Digit; 2]) {
        for digit in Digit::ALL {
            if !keep.contains(&digit) {
                board.remove_candidate(pos, digit);
            }
        }
    }

    #[test]
    fn test_eliminates_shared_wing_digit() {
        let mut board = Board::from_grid(DigitGrid::new());
        let pivot = Position::new(1, 1);
        let wing1 = Position::new(1, 5);
        let wing2 = Position::new(5, 1);

        restrict(&mut board, pivot, [Digit::D1, Digit::D2]);
        restrict(&mut board, wing1, [Digit::D1, Digit::D3]);
        restrict(&mut board, wing2, [Digit::D2, Digit::D3]);

        TechniqueTester::new(board)
            .apply_once(&YWing::new())
            // (5, 5) sees both wings and loses the shared digit 3.
            .assert_removed_includes(Position::new(5, 5), [Digit::D3])
            // A cell seeing only one wing keeps it.
            .assert_no_change(Position::new(1, 7));
    }

    #[test]
    fn test_requires_distinct_shared_digits() {
        let mut board = Board::from_grid(DigitGrid::new());
        let pivot = Position::new(1, 1);
        // Both wings share the *same* pivot digit, which proves
        // nothing.
        restrict(&mut board, pivot, [Digit::D1, Digit::D2]);
        restrict(&mut board, Position::new(1, 5), [Digit::D1, Digit::D3]);
        restrict(&mut board, Position::new(5, 1), [Digit::D1, Digit::D3]);

        TechniqueTester::new(board)
            .apply_once(&YWing::new())
            .assert_no_change(Position::new(5, 5));
    }

    #[test]
    fn test_no_change_on_open_board() {
        TechniqueTester::new(Board::from_grid(DigitGrid::new()))
            .apply_once(&YWing::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }
}
