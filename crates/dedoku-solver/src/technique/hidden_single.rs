use dedoku_core::{Board, Digit, House};

use super::{BoxedTechnique, Technique, TechniqueId};

/// Places a digit that has exactly one remaining cell within a house.
///
/// Per house and digit, if only one unsolved cell still admits the
/// digit, the digit must go there even when the cell itself has other
/// candidates.
///
/// Counts once per placement.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }
}

impl Technique for HiddenSingle {
    fn id(&self) -> TechniqueId {
        TechniqueId::HiddenSingle
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut placed = 0;
        for house in House::ALL {
            for digit in Digit::ALL {
                let cells = board.digit_positions(digit) & house.positions();
                if let Some(pos) = cells.as_single() {
                    board.set_cell(pos, digit);
                    placed += 1;
                }
            }
        }
        placed
    }
}
