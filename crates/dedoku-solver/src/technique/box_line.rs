use dedoku_core::{Board, Digit, PositionSet};

use super::{BoxedTechnique, Technique, TechniqueId};

/// Intersection removal from a line onto a box.
///
/// If all candidates for a digit on a row or column fall inside a
/// single box, the digit must be placed on that line, so it is removed
/// from the rest of the box outside the line.
///
/// Counts once per (line, digit, box) elimination.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoxLineReduction;

impl BoxLineReduction {
    /// Creates a new `BoxLineReduction` technique.
    #[must_use]
    pub const fn new() -> Self {
        BoxLineReduction
    }

    fn apply_lines(board: &mut Board, lines: &[PositionSet; 9]) -> usize {
        let mut count = 0;
        for line in lines {
            for digit in Digit::ALL {
                let in_line = board.digit_positions(digit) & *line;
                if in_line.is_empty() {
                    continue;
                }
                let boxes: Vec<usize> = (0..9)
                    .filter(|&b| !(in_line & PositionSet::BOXES[b]).is_empty())
                    .collect();
                if let [box_index] = boxes[..] {
                    let outside =
                        board.digit_positions(digit) & PositionSet::BOXES[box_index] & !*line;
                    let mut changed = false;
                    for pos in outside {
                        changed |= board.remove_candidate(pos, digit);
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

impl Technique for BoxLineReduction {
    fn id(&self) -> TechniqueId {
        TechniqueId::BoxLineReduction
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        Self::apply_lines(board, &PositionSet::ROWS) + Self::apply_lines(board, &PositionSet::COLUMNS)
    }
}
