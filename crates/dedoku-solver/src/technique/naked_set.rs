use dedoku_core::{Board, DigitSet, House};
use tinyvec::ArrayVec;

use super::{BoxedTechnique, Technique, TechniqueId, combos::for_each_combination};

/// Removes candidates using a naked pair, triple, or quad in a house.
///
/// `k` unsolved cells whose candidate union has exactly `k` digits
/// claim those digits between them, so the digits are removed from
/// every other unsolved cell in the house. The search enumerates
/// k-subsets of the house cells holding at most `k` candidates.
///
/// Counts once per set that eliminated something.
#[derive(Debug, Clone, Copy)]
pub struct NakedSet {
    size: usize,
    id: TechniqueId,
}

impl NakedSet {
    /// Creates the naked pair search (k = 2).
    #[must_use]
    pub const fn pair() -> Self {
        Self {
            size: 2,
            id: TechniqueId::NakedPair,
        }
    }

    /// Creates the naked triple search (k = 3).
    #[must_use]
    pub const fn triple() -> Self {
        Self {
            size: 3,
            id: TechniqueId::NakedTriple,
        }
    }

    /// Creates the naked quad search (k = 4).
    #[must_use]
    pub const fn quad() -> Self {
        Self {
            size: 4,
            id: TechniqueId::NakedQuad,
        }
    }

    fn apply_house(self, board: &mut Board, house: House) -> usize {
        // Unsolved cells small enough to participate, as in-house
        // indices.
        let mut members = ArrayVec::<[u8; 9]>::new();
        for i in 0..9 {
            let candidates = board.candidates(house.cell(i));
            if !candidates.is_empty() && candidates.len() <= self.size {
                members.push(i);
            }
        }
        if members.len() < self.size {
            return 0;
        }

        let mut count = 0;
        for_each_combination(members.as_slice(), self.size, &mut |combo| {
            let union = combo
                .iter()
                .map(|&i| board.candidates(house.cell(i)))
                .fold(DigitSet::EMPTY, DigitSet::union);
            if union.len() != self.size {
                return;
            }

            let mut eliminated = false;
            for i in 0..9 {
                if combo.contains(&i) {
                    continue;
                }
                let pos = house.cell(i);
                for digit in board.candidates(pos) & union {
                    eliminated |= board.remove_candidate(pos, digit);
                }
            }
            if eliminated {
                count += 1;
            }
        });
        count
    }
}

impl Technique for NakedSet {
    fn id(&self) -> TechniqueId {
        self.id
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut count = 0;
        for house in House::ALL {
            count += self.apply_house(board, house);
        }
        count
    }
}
