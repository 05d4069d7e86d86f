use dedoku_core::{Board, Digit, DigitSet, House, PositionSet};

use super::{BoxedTechnique, Technique, TechniqueId, combos::for_each_combination};

/// Restricts cells using a hidden pair, triple, or quad in a house.
///
/// When `k` digits are confined to exactly `k` cells of a house, those
/// cells can hold nothing else, so every other candidate is removed
/// from them. The pair case requires both cells to hold both digits
/// and has a specialised path; triples and quads enumerate digit
/// k-subsets generically and only need each digit present somewhere in
/// the cells.
///
/// A set only qualifies as *hidden* when at least one of its cells has
/// an extra candidate to strip; this keeps a reduction from being
/// counted again under the matching naked-set name.
///
/// Counts once per restricted set.
#[derive(Debug, Clone, Copy)]
pub struct HiddenSet {
    size: usize,
    id: TechniqueId,
}

impl HiddenSet {
    /// Creates the hidden pair search (k = 2).
    #[must_use]
    pub const fn pair() -> Self {
        Self {
            size: 2,
            id: TechniqueId::HiddenPair,
        }
    }

    /// Creates the hidden triple search (k = 3).
    #[must_use]
    pub const fn triple() -> Self {
        Self {
            size: 3,
            id: TechniqueId::HiddenTriple,
        }
    }

    /// Creates the hidden quad search (k = 4).
    #[must_use]
    pub const fn quad() -> Self {
        Self {
            size: 4,
            id: TechniqueId::HiddenQuad,
        }
    }

    /// Strips every candidate outside `digits` from `cells`.
    fn restrict(board: &mut Board, cells: PositionSet, digits: DigitSet) -> bool {
        let mut changed = false;
        for pos in cells {
            for digit in board.candidates(pos).difference(digits) {
                changed |= board.remove_candidate(pos, digit);
            }
        }
        changed
    }

    fn apply_pair(board: &mut Board, house: House) -> usize {
        let mut count = 0;
        let mut remaining = DigitSet::FULL;
        while let Some(d1) = remaining.pop_first() {
            for d2 in remaining {
                let cells =
                    (board.digit_positions(d1) | board.digit_positions(d2)) & house.positions();
                if cells.len() != 2 {
                    continue;
                }
                let both = DigitSet::from_iter([d1, d2]);
                if !cells
                    .iter()
                    .all(|pos| both.is_subset(board.candidates(pos)))
                {
                    continue;
                }
                // Truly hidden: some extra candidate must be present.
                if cells.iter().all(|pos| board.candidates(pos).len() == 2) {
                    continue;
                }
                if Self::restrict(board, cells, both) {
                    count += 1;
                }
            }
        }
        count
    }

    fn apply_generic(self, board: &mut Board, house: House) -> usize {
        let mut count = 0;
        let digits: Vec<u8> = Digit::ALL.iter().map(|digit| digit.value()).collect();
        for_each_combination(&digits, self.size, &mut |combo| {
            let set: DigitSet = combo.iter().map(|&value| Digit::from_value(value)).collect();
            let cells = set
                .iter()
                .map(|digit| board.digit_positions(digit))
                .fold(PositionSet::EMPTY, |acc, positions| acc | positions)
                & house.positions();
            if cells.len() != self.size {
                return;
            }
            // Every digit of the set must still be placeable in the
            // house; a digit with no cell here is already resolved.
            if set
                .iter()
                .any(|digit| (board.digit_positions(digit) & house.positions()).is_empty())
            {
                return;
            }
            if cells
                .iter()
                .all(|pos| board.candidates(pos).is_subset(set))
            {
                return;
            }
            if Self::restrict(board, cells, set) {
                count += 1;
            }
        });
        count
    }
}

impl Technique for HiddenSet {
    fn id(&self) -> TechniqueId {
        self.id
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut count = 0;
        for house in House::ALL {
            count += if self.size == 2 {
                Self::apply_pair(board, house)
            } else {
                self.apply_generic(board, house)
            };
        }
        count
    }
}
