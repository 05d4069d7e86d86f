use dedoku_core::{Board, Digit, PositionSet};

use super::{BoxedTechnique, Technique, TechniqueId};

/// Intersection removal from a box onto a line.
///
/// If all candidates for a digit inside a box fall on a single row or
/// column, the digit must be placed on that line inside the box, so it
/// is removed from the rest of the line outside the box.
///
/// Counts once per (box, digit, line) elimination.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointingPairs;

impl PointingPairs {
    /// Creates a new `PointingPairs` technique.
    #[must_use]
    pub const fn new() -> Self {
        PointingPairs
    }

    fn eliminate(board: &mut Board, digit: Digit, cells: PositionSet) -> bool {
        let mut changed = false;
        for pos in cells {
            changed |= board.remove_candidate(pos, digit);
        }
        changed
    }
}

impl Technique for PointingPairs {
    fn id(&self) -> TechniqueId {
        TechniqueId::PointingPairs
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut count = 0;
        for box_index in 0..9 {
            let box_cells = PositionSet::BOXES[box_index];
            for digit in Digit::ALL {
                let in_box = board.digit_positions(digit) & box_cells;
                if in_box.is_empty() {
                    continue;
                }

                let rows: Vec<usize> = (0..9)
                    .filter(|&r| !(in_box & PositionSet::ROWS[r]).is_empty())
                    .collect();
                if let [row] = rows[..] {
                    let outside = board.digit_positions(digit) & PositionSet::ROWS[row] & !box_cells;
                    if Self::eliminate(board, digit, outside) {
                        count += 1;
                    }
                }

                let cols: Vec<usize> = (0..9)
                    .filter(|&c| !(in_box & PositionSet::COLUMNS[c]).is_empty())
                    .collect();
                if let [col] = cols[..] {
                    let outside =
                        board.digit_positions(digit) & PositionSet::COLUMNS[col] & !box_cells;
                    if Self::eliminate(board, digit, outside) {
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
    use dedoku_core::{Board, DigitGrid, House, Position};

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_pointing_row_eliminates_outside_box() {
        let mut board = Board::from_grid(DigitGrid::new());
        // Confine digit 5 in box 0 to row 0.
        for pos in House::Box(0).cells() {
            if pos.row() != 0 {
                board.remove_candidate(pos, Digit::D5);
            }
        }

        TechniqueTester::new(board)
            .apply_once(&PointingPairs::new())
            .assert_removed_includes(Position::new(0, 3), [Digit::D5])
            .assert_removed_includes(Position::new(0, 8), [Digit::D5])
            // Inside the box and on other rows nothing changes.
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(1, 3));
    }

    #[test]
    fn test_pointing_column_eliminates_outside_box() {
        let mut board = Board::from_grid(DigitGrid::new());
        // Confine digit 3 in box 4 to column 4.
        for pos in House::Box(4).cells() {
            if pos.col() != 4 {
                board.remove_candidate(pos, Digit::D3);
            }
        }

        TechniqueTester::new(board)
            .apply_once(&PointingPairs::new())
            .assert_removed_includes(Position::new(0, 4), [Digit::D3])
            .assert_removed_includes(Position::new(8, 4), [Digit::D3])
            .assert_no_change(Position::new(3, 4));
    }

    #[test]
    fn test_no_change_on_open_board() {
        TechniqueTester::new(Board::from_grid(DigitGrid::new()))
            .apply_once(&PointingPairs::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }
}
