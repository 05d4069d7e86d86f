use dedoku_core::{Board, Digit, House, Position};

use super::{BoxedTechnique, Technique, TechniqueId};

/// Single-digit coloring by hypothesis testing.
///
/// For each candidate cell, tentatively place the digit on a cloned
/// board and propagate only single-digit consequences: cells whose
/// sole candidate is the digit, and houses where the digit has a
/// single cell left. If some house ends up with no placement of the
/// digit and no remaining candidate for it, the hypothesis is
/// contradictory and the candidate is removed from the real board.
///
/// Counts once per eliminated candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleColoring;

impl SingleColoring {
    /// Creates a new `SingleColoring` technique.
    #[must_use]
    pub const fn new() -> Self {
        SingleColoring
    }

    /// Returns `true` if some house can no longer hold `digit` at all.
    fn digit_exhausted(board: &Board, digit: Digit) -> bool {
        let positions = board.digit_positions(digit);
        House::ALL.iter().any(|house| {
            (positions & house.positions()).is_empty()
                && !house.cells().any(|pos| board.digit(pos) == Some(digit))
        })
    }

    /// Places `digit` at `pos` on a copy and propagates single-digit
    /// singles to a fixed point.
    fn hypothesis_fails(board: &Board, pos: Position, digit: Digit) -> bool {
        let mut trial = board.clone();
        trial.set_cell(pos, digit);

        loop {
            if Self::digit_exhausted(&trial, digit) {
                return true;
            }

            let mut changed = false;
            // Cells whose only candidate is the hypothesis digit.
            for cell in trial.digit_positions(digit) {
                if trial.candidates(cell).as_single() == Some(digit) {
                    trial.set_cell(cell, digit);
                    changed = true;
                }
            }
            // Houses where the digit has a single cell left.
            for house in House::ALL {
                if house.cells().any(|cell| trial.digit(cell) == Some(digit)) {
                    continue;
                }
                if let Some(cell) = (trial.digit_positions(digit) & house.positions()).as_single() {
                    trial.set_cell(cell, digit);
                    changed = true;
                }
            }

            if !changed {
                return Self::digit_exhausted(&trial, digit);
            }
        }
    }
}

impl Technique for SingleColoring {
    fn id(&self) -> TechniqueId {
        TechniqueId::SingleColoring
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut count = 0;
        for digit in Digit::ALL {
            for pos in board.digit_positions(digit) {
                if !board.candidates(pos).contains(digit) {
                    continue;
                }
                if Self::hypothesis_fails(board, pos, digit) {
                    board.remove_candidate(pos, digit);
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use dedoku_core::DigitGrid;

    use super::*;
    use crate::testing::TechniqueTester;

    /// Leaves `digit` in row 4 only at the given columns; every other
    /// house keeps plenty of candidates for it.
    fn confine_row_4(board: &mut Board, digit: Digit, cols: &[u8]) {
        for col in 0..9 {
            if !cols.contains(&col) {
                board.remove_candidate(Position::new(4, col), digit);
            }
        }
    }

    #[test]
    fn test_eliminates_candidate_that_starves_a_house() {
        // Digit 6 in row 4 lives only at (4, 0). Placing 6 anywhere
        // else in column 0 would take (4, 0) with it and leave row 4
        // without a home for the digit.
        let mut board = Board::from_grid(DigitGrid::new());
        confine_row_4(&mut board, Digit::D6, &[0]);

        TechniqueTester::new(board)
            .apply_once(&SingleColoring::new())
            .assert_removed_includes(Position::new(0, 0), [Digit::D6])
            .assert_removed_includes(Position::new(8, 0), [Digit::D6])
            // Cells that do not see (4, 0) are safe hypotheses.
            .assert_no_change(Position::new(0, 4));
    }

    #[test]
    fn test_keeps_candidates_with_two_homes() {
        // Row 4 keeps two homes for the digit; taking one of them away
        // just promotes the other, which starves nothing.
        let mut board = Board::from_grid(DigitGrid::new());
        confine_row_4(&mut board, Digit::D6, &[0, 8]);

        assert_eq!(SingleColoring::new().apply(&mut board), 0);
    }

    #[test]
    fn test_no_change_on_open_board() {
        TechniqueTester::new(Board::from_grid(DigitGrid::new()))
            .apply_once(&SingleColoring::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }
}
