use dedoku_core::{Board, Position};

use super::{BoxedTechnique, Technique, TechniqueId};

/// Removes candidates using an XYZ-Wing pattern.
///
/// The pivot holds exactly three candidates `{a, b, c}` and sees two
/// bivalue wings `{a, c}` and `{b, c}` whose union equals the pivot's
/// candidates. Every assignment of the pivot forces `c` into one of
/// the three cells, so `c` is removed from cells seeing the pivot and
/// both wings.
///
/// Counts once per pattern that eliminated something.
#[derive(Debug, Default, Clone, Copy)]
pub struct XyzWing;

impl XyzWing {
    /// Creates a new `XyzWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        XyzWing
    }
}

impl Technique for XyzWing {
    fn id(&self) -> TechniqueId {
        TechniqueId::XyzWing
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut count = 0;
        for pivot in Position::all() {
            let pivot_digits = board.candidates(pivot);
            if pivot_digits.len() != 3 {
                continue;
            }

            let wing_pool = pivot.peers();
            for wing1 in wing_pool {
                let wing1_digits = board.candidates(wing1);
                if wing1_digits.len() != 2 || !wing1_digits.is_subset(pivot_digits) {
                    continue;
                }

                for wing2 in wing_pool {
                    if wing2.index() <= wing1.index() {
                        continue;
                    }
                    let wing2_digits = board.candidates(wing2);
                    if wing2_digits.len() != 2 || !wing2_digits.is_subset(pivot_digits) {
                        continue;
                    }
                    let Some(target) = (wing1_digits & wing2_digits).as_single() else {
                        continue;
                    };
                    if wing1_digits | wing2_digits != pivot_digits {
                        continue;
                    }

                    // Unlike the Y-Wing, the pivot itself holds the
                    // target, so eliminations must see all three cells.
                    let eliminations = board.digit_positions(target)
                        & pivot.peers()
                        & wing1.peers()
                        & wing2.peers();
                    let mut changed = false;
                    for pos in eliminations {
                        changed |= board.remove_candidate(pos, target);
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
