use dedoku_core::{Board, Digit, Position, PositionSet};

use super::{
    BoxedTechnique, Technique, TechniqueId,
    links::{self, ChainLink},
};

/// Maximum number of links an XY-chain may span.
const MAX_CHAIN_LINKS: usize = 20;

/// Chains of bivalue cells that carry a candidate from end to end.
///
/// The chain alternates in-cell strong links (switching to the cell's
/// other candidate) with weak links to a peering bivalue cell sharing
/// the current candidate. When a chain of at least three links starts
/// and ends on the same candidate in different cells, one of the two
/// end cells holds that candidate, so it is removed from every outside
/// cell seeing both ends.
///
/// Counts once per chain that eliminated something.
#[derive(Debug, Default, Clone, Copy)]
pub struct XyChain;

impl XyChain {
    /// Creates a new `XyChain` technique.
    #[must_use]
    pub const fn new() -> Self {
        XyChain
    }

    #[expect(clippy::too_many_arguments)]
    fn extend_chain(
        board: &mut Board,
        start: Position,
        start_digit: Digit,
        current: Position,
        current_digit: Digit,
        within_cell: bool,
        num_links: usize,
        visited: &mut PositionSet,
        links: &[ChainLink],
    ) -> bool {
        if num_links > MAX_CHAIN_LINKS {
            return false;
        }

        if num_links >= 3 && current_digit == start_digit && current != start && !within_cell {
            let seen_by_both =
                board.digit_positions(start_digit) & start.peers() & current.peers() & !*visited;
            let mut found = false;
            for pos in seen_by_both {
                found |= board.remove_candidate(pos, start_digit);
            }
            if found {
                return true;
            }
        }

        for link in links {
            if link.from != current || link.candidate != current_digit {
                continue;
            }
            if within_cell {
                // Switch candidate inside the current cell.
                if !link.strong || link.to != current {
                    continue;
                }
                if Self::extend_chain(
                    board,
                    start,
                    start_digit,
                    current,
                    link.to_candidate,
                    false,
                    num_links + 1,
                    visited,
                    links,
                ) {
                    return true;
                }
            } else {
                // Carry the candidate to a peering bivalue cell.
                if link.strong || link.to == current || visited.contains(link.to) {
                    continue;
                }
                if board.candidates(link.to).len() != 2 {
                    continue;
                }
                visited.insert(link.to);
                if Self::extend_chain(
                    board,
                    start,
                    start_digit,
                    link.to,
                    current_digit,
                    true,
                    num_links + 1,
                    visited,
                    links,
                ) {
                    return true;
                }
                visited.remove(link.to);
            }
        }
        false
    }
}

impl Technique for XyChain {
    fn id(&self) -> TechniqueId {
        TechniqueId::XyChain
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> usize {
        let links = links::xy_links(board);
        let mut count = 0;
        for start in board.bivalue_cells() {
            let Some((a, b)) = board.candidates(start).as_double() else {
                continue;
            };
            for start_digit in [a, b] {
                let mut visited = PositionSet::EMPTY;
                visited.insert(start);
                if Self::extend_chain(
                    board,
                    start,
                    start_digit,
                    start,
                    start_digit,
                    true,
                    0,
                    &mut visited,
                    &links,
                ) {
                    count += 1;
                }
            }
        }
        count
    }
}
