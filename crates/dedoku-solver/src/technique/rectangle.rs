use dedoku_core::{Board, Digit, Position, PositionSet};

use super::{BoxedTechnique, Technique, TechniqueId};

/// Rectangle elimination (empty-rectangle style hinge reasoning).
///
/// A hinge cell carries the digit together with a strong link along
/// one of its lines (exactly two candidates in the line) and a weak
/// link along the other. The hinge, the two wings, and the implied
/// fourth corner must occupy four distinct boxes; when every candidate
/// in the fourth box is covered by the wings' lines, the weak-side
/// wing cannot hold the digit. A third sub-pattern with strong links
/// on both lines eliminates both wings when some outside box would be
/// wiped out by them.
///
/// Counts once per eliminated wing (or wing pair).
#[derive(Debug, Default, Clone, Copy)]
pub struct RectangleElimination;

impl RectangleElimination {
    /// Creates a new `RectangleElimination` technique.
    #[must_use]
    pub const fn new() -> Self {
        RectangleElimination
    }

    fn row_positions(board: &Board, digit: Digit, row: u8) -> PositionSet {
        board.digit_positions(digit) & PositionSet::ROWS[usize::from(row)]
    }

    fn col_positions(board: &Board, digit: Digit, col: u8) -> PositionSet {
        board.digit_positions(digit) & PositionSet::COLUMNS[usize::from(col)]
    }

    /// Checks that the fourth box still admits the digit and that every
    /// such candidate lies on `row` or `col`.
    fn fourth_box_covered(board: &Board, digit: Digit, box_index: u8, row: u8, col: u8) -> bool {
        let cells = board.digit_positions(digit) & PositionSet::BOXES[usize::from(box_index)];
        !cells.is_empty()
            && cells
                .iter()
                .all(|pos| pos.row() == row || pos.col() == col)
    }

    fn distinct(boxes: [u8; 4]) -> bool {
        boxes
            .iter()
            .enumerate()
            .all(|(i, a)| boxes[i + 1..].iter().all(|b| a != b))
    }

    /// Strong link along the hinge's row, weak link down its column.
    fn strong_row_weak_col(board: &mut Board, digit: Digit, hinge: Position) -> usize {
        let Some(strong_col) = Self::row_positions(board, digit, hinge.row())
            .as_double()
            .map(|(a, b)| if a == hinge { b.col() } else { a.col() })
        else {
            return 0;
        };

        let mut count = 0;
        for weak_row in 0..9 {
            if weak_row == hinge.row() {
                continue;
            }
            let weak = Position::new(weak_row, hinge.col());
            if !board.candidates(weak).contains(digit) {
                continue;
            }
            // The column must be a weak link: more than two candidates.
            if Self::col_positions(board, digit, hinge.col()).len() <= 2 {
                continue;
            }

            let fourth = Position::new(weak_row, strong_col);
            let boxes = [
                hinge.box_index(),
                weak.box_index(),
                Position::new(hinge.row(), strong_col).box_index(),
                fourth.box_index(),
            ];
            if !Self::distinct(boxes) {
                continue;
            }
            if Self::fourth_box_covered(board, digit, fourth.box_index(), weak_row, strong_col)
                && board.candidates(weak).len() > 1
                && board.remove_candidate(weak, digit)
            {
                count += 1;
            }
        }
        count
    }

    /// Strong link down the hinge's column, weak link along its row.
    fn strong_col_weak_row(board: &mut Board, digit: Digit, hinge: Position) -> usize {
        let Some(strong_row) = Self::col_positions(board, digit, hinge.col())
            .as_double()
            .map(|(a, b)| if a == hinge { b.row() } else { a.row() })
        else {
            return 0;
        };

        let mut count = 0;
        for weak_col in 0..9 {
            if weak_col == hinge.col() {
                continue;
            }
            let weak = Position::new(hinge.row(), weak_col);
            if !board.candidates(weak).contains(digit) {
                continue;
            }
            if Self::row_positions(board, digit, hinge.row()).len() <= 2 {
                continue;
            }

            let fourth = Position::new(strong_row, weak_col);
            let boxes = [
                hinge.box_index(),
                weak.box_index(),
                Position::new(strong_row, hinge.col()).box_index(),
                fourth.box_index(),
            ];
            if !Self::distinct(boxes) {
                continue;
            }
            if Self::fourth_box_covered(board, digit, fourth.box_index(), strong_row, weak_col)
                && board.candidates(weak).len() > 1
                && board.remove_candidate(weak, digit)
            {
                count += 1;
            }
        }
        count
    }

    /// Strong links on both of the hinge's lines.
    ///
    /// If some box away from the pattern would lose all its candidates
    /// to the wings' lines, the wings cannot both be off the hinge, so
    /// both wings drop the digit.
    fn two_strong_links(board: &mut Board, digit: Digit, hinge: Position) -> usize {
        let row_cells = Self::row_positions(board, digit, hinge.row());
        let col_cells = Self::col_positions(board, digit, hinge.col());
        let (Some((ra, rb)), Some((ca, cb))) = (row_cells.as_double(), col_cells.as_double())
        else {
            return 0;
        };
        let wing_in_row = if ra == hinge { rb } else { ra };
        let wing_in_col = if ca == hinge { cb } else { ca };
        if wing_in_row == hinge || wing_in_col == hinge {
            return 0;
        }

        let pattern_boxes = [
            hinge.box_index(),
            wing_in_row.box_index(),
            wing_in_col.box_index(),
        ];
        for box_index in 0..9 {
            if pattern_boxes.contains(&box_index) {
                continue;
            }
            let cells = board.digit_positions(digit) & PositionSet::BOXES[usize::from(box_index)];
            if cells.is_empty() {
                continue;
            }
            let all_covered = cells.iter().all(|pos| {
                pos.row() == hinge.row()
                    || pos.col() == wing_in_row.col()
                    || pos.row() == wing_in_col.row()
                    || pos.col() == hinge.col()
            });
            if !all_covered {
                continue;
            }

            let mut eliminated = false;
            for wing in [wing_in_row, wing_in_col] {
                if board.candidates(wing).contains(digit) && board.candidates(wing).len() > 1 {
                    eliminated |= board.remove_candidate(wing, digit);
                }
            }
            if eliminated {
                return 1;
            }
            break;
        }
        0
    }
}

impl Technique for RectangleElimination {
    fn id(&self) -> TechniqueId {
        TechniqueId::RectangleElimination
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut count = 0;
        for digit in Digit::ALL {
            for hinge in Position::all() {
                if !board.candidates(hinge).contains(digit) {
                    continue;
                }
                count += Self::strong_row_weak_col(board, digit, hinge);
                count += Self::strong_col_weak_row(board, digit, hinge);
                count += Self::two_strong_links(board, digit, hinge);
            }
        }
        count
    }
}
