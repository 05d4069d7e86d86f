use dedoku_core::{Board, Digit, Position, PositionSet};
use tinyvec::ArrayVec;

use super::{BoxedTechnique, Technique, TechniqueId, combos::for_each_combination};

/// Basic fish of size k: X-Wing (2), Swordfish (3), Jellyfish (4).
///
/// For a digit, take k base lines (rows or columns) that each hold the
/// digit in 2 to k cells. If the candidates of all k lines span exactly
/// k crossing lines, every placement of the digit in the base lines
/// lands on those crossings, so the digit is removed from the crossing
/// lines everywhere outside the base lines. Both orientations are
/// searched.
///
/// Counts once per pattern that eliminated something.
#[derive(Debug, Clone, Copy)]
pub struct Fish {
    size: usize,
    id: TechniqueId,
}

impl Fish {
    /// Creates the X-Wing search (k = 2).
    #[must_use]
    pub const fn x_wing() -> Self {
        Self {
            size: 2,
            id: TechniqueId::XWing,
        }
    }

    /// Creates the Swordfish search (k = 3).
    #[must_use]
    pub const fn swordfish() -> Self {
        Self {
            size: 3,
            id: TechniqueId::Swordfish,
        }
    }

    /// Creates the Jellyfish search (k = 4).
    #[must_use]
    pub const fn jellyfish() -> Self {
        Self {
            size: 4,
            id: TechniqueId::Jellyfish,
        }
    }

    fn search(
        self,
        board: &mut Board,
        digit: Digit,
        bases: &[PositionSet; 9],
        covers: &[PositionSet; 9],
        cross_index: fn(Position) -> usize,
    ) -> usize {
        // Base lines holding the digit in 2..=k cells, with the mask of
        // crossing lines their candidates touch.
        let digit_positions = board.digit_positions(digit);
        let mut eligible = ArrayVec::<[u8; 9]>::new();
        let mut masks = [0u16; 9];
        for (line, base) in bases.iter().enumerate() {
            let cells = digit_positions & *base;
            if cells.len() < 2 || cells.len() > self.size {
                continue;
            }
            let mut mask = 0u16;
            for pos in cells {
                mask |= 1 << cross_index(pos);
            }
            masks[line] = mask;
            #[expect(clippy::cast_possible_truncation)]
            eligible.push(line as u8);
        }

        let mut count = 0;
        for_each_combination(eligible.as_slice(), self.size, &mut |combo| {
            let union: u16 = combo
                .iter()
                .fold(0, |acc, &line| acc | masks[line as usize]);
            if union.count_ones() as usize != self.size {
                return;
            }

            let base_cells = combo
                .iter()
                .fold(PositionSet::EMPTY, |acc, &line| acc | bases[line as usize]);
            let mut changed = false;
            for cross in 0..9 {
                if union & (1 << cross) == 0 {
                    continue;
                }
                let outside = board.digit_positions(digit) & covers[cross] & !base_cells;
                for pos in outside {
                    changed |= board.remove_candidate(pos, digit);
                }
            }
            if changed {
                count += 1;
            }
        });
        count
    }
}

impl Technique for Fish {
    fn id(&self) -> TechniqueId {
        self.id
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut count = 0;
        for digit in Digit::ALL {
            count += self.search(
                board,
                digit,
                &PositionSet::ROWS,
                &PositionSet::COLUMNS,
                |pos| usize::from(pos.col()),
            );
            count += self.search(
                board,
                digit,
                &PositionSet::COLUMNS,
                &PositionSet::ROWS,
                |pos| usize::from(pos.row()),
            );
        }
        count
    }
}
