use dedoku_core::{Board, Digit, Position, PositionSet};

use super::{
    BoxedTechnique, Technique, TechniqueId,
    links::{self, ChainLink},
};

/// Maximum number of cells a chain may span.
const MAX_CHAIN_CELLS: usize = 20;

/// Single-digit chains alternating strong and weak links.
///
/// Starting from a candidate cell with a strong link, the chain
/// alternates strong and weak links without revisiting cells. Whenever
/// it spans at least three links and the last link was strong, the
/// digit is true at one of the two endpoints, so it is removed from
/// every outside cell that sees both.
///
/// Counts once per chain that eliminated something.
#[derive(Debug, Default, Clone, Copy)]
pub struct XChain;

impl XChain {
    /// Creates a new `XChain` technique.
    #[must_use]
    pub const fn new() -> Self {
        XChain
    }

    #[expect(clippy::too_many_arguments)]
    fn extend_chain(
        board: &mut Board,
        start: Position,
        current: Position,
        digit: Digit,
        need_strong: bool,
        cells: usize,
        visited: &mut PositionSet,
        links: &[ChainLink],
    ) -> bool {
        if cells > MAX_CHAIN_CELLS {
            return false;
        }

        // The chain closes after three links; `need_strong == false`
        // means the link that got us here was strong.
        if cells >= 3 && !need_strong {
            let seen_by_both =
                board.digit_positions(digit) & start.peers() & current.peers() & !*visited;
            let mut found = false;
            for pos in seen_by_both {
                found |= board.remove_candidate(pos, digit);
            }
            if found {
                return true;
            }
        }

        for link in links {
            if link.from != current || link.candidate != digit {
                continue;
            }
            if need_strong && !link.strong {
                continue;
            }
            if visited.contains(link.to) {
                continue;
            }

            visited.insert(link.to);
            if Self::extend_chain(
                board,
                start,
                link.to,
                digit,
                !need_strong,
                cells + 1,
                visited,
                links,
            ) {
                return true;
            }
            visited.remove(link.to);
        }
        false
    }
}

impl Technique for XChain {
    fn id(&self) -> TechniqueId {
        TechniqueId::XChain
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let mut count = 0;
        for digit in Digit::ALL {
            let links = links::x_links(board, digit);
            for start in board.digit_positions(digit) {
                if !board.candidates(start).contains(digit) {
                    continue;
                }
                // The first link of a chain must be strong.
                let openers: Vec<ChainLink> = links
                    .iter()
                    .copied()
                    .filter(|link| link.from == start && link.strong)
                    .collect();
                for opener in openers {
                    let mut visited = PositionSet::EMPTY;
                    visited.insert(start);
                    visited.insert(opener.to);
                    if Self::extend_chain(
                        board,
                        start,
                        opener.to,
                        digit,
                        false,
                        2,
                        &mut visited,
                        &links,
                    ) {
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
    use dedoku_core::DigitGrid;

    use super::*;
    use crate::testing::TechniqueTester;

    fn clear_digit_except(board: &mut Board, digit: Digit, keep: &[Position]) {
        for pos in Position::all() {
            if !keep.contains(&pos) {
                board.remove_candidate(pos, digit);
            }
        }
    }

    #[test]
    fn test_skyscraper_shaped_chain_eliminates() {
        // Digit 4 forms strong links in columns 0 and 5, joined along
        // row 8: a three-link chain with ends (0, 0) and (1, 5). The
        // cells (0, 3) and (0, 4) share row 0 with one end and box 1
        // with the other, so they see both ends and lose the digit.
        let mut board = Board::from_grid(DigitGrid::new());
        let keep = [
            Position::new(0, 0),
            Position::new(8, 0),
            Position::new(8, 5),
            Position::new(1, 5),
            Position::new(0, 3),
            Position::new(0, 4),
            // An unrelated candidate far from the ends.
            Position::new(4, 8),
        ];
        clear_digit_except(&mut board, Digit::D4, &keep);

        TechniqueTester::new(board)
            .apply_once(&XChain::new())
            .assert_removed_includes(Position::new(0, 3), [Digit::D4])
            .assert_removed_includes(Position::new(0, 4), [Digit::D4])
            .assert_no_change(Position::new(4, 8));
    }

    #[test]
    fn test_no_chain_without_strong_links() {
        let mut board = Board::from_grid(DigitGrid::new());
        // Three candidates per house everywhere: no strong links.
        let keep = [
            Position::new(0, 0),
            Position::new(0, 4),
            Position::new(0, 8),
        ];
        clear_digit_except(&mut board, Digit::D7, &keep);

        assert_eq!(XChain::new().apply(&mut board), 0);
    }

    #[test]
    fn test_no_change_on_open_board() {
        TechniqueTester::new(Board::from_grid(DigitGrid::new()))
            .apply_once(&XChain::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }
}
