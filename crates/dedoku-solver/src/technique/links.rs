//! Strong/weak link index shared by the chain techniques.
//!
//! Links are rebuilt from the current board on every technique pass
//! and never persisted across driver iterations.

use dedoku_core::{Board, Digit, House, Position};

/// A directed link between two candidate assertions.
///
/// Strong: within the shared house the candidate has exactly two
/// placements (or the shared cell exactly two candidates), so if one
/// end is off the other is on. Weak: the ends merely peer, so at most
/// one of them is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChainLink {
    /// Source cell of the link.
    pub from: Position,
    /// Target cell; equals `from` for in-cell links.
    pub to: Position,
    /// Candidate asserted at the source.
    pub candidate: Digit,
    /// Candidate asserted at the target (differs from `candidate`
    /// only for in-cell links).
    pub to_candidate: Digit,
    /// Whether the link is strong.
    pub strong: bool,
}

impl ChainLink {
    fn symmetric(a: Position, b: Position, digit: Digit, strong: bool) -> [Self; 2] {
        [
            Self {
                from: a,
                to: b,
                candidate: digit,
                to_candidate: digit,
                strong,
            },
            Self {
                from: b,
                to: a,
                candidate: digit,
                to_candidate: digit,
                strong,
            },
        ]
    }
}

/// Builds the single-digit link graph for `digit`.
///
/// Houses with exactly two placements contribute strong links; box
/// links are skipped when the two cells already share a row or column.
/// Every other peering pair of candidate cells contributes a weak
/// link.
pub(crate) fn x_links(board: &Board, digit: Digit) -> Vec<ChainLink> {
    let mut links = Vec::new();
    let digit_positions = board.digit_positions(digit);

    for house in House::ROWS.iter().chain(House::COLUMNS.iter()) {
        if let Some((a, b)) = (digit_positions & house.positions()).as_double() {
            links.extend(ChainLink::symmetric(a, b, digit, true));
        }
    }
    for house in House::BOXES {
        if let Some((a, b)) = (digit_positions & house.positions()).as_double()
            && a.row() != b.row()
            && a.col() != b.col()
        {
            links.extend(ChainLink::symmetric(a, b, digit, true));
        }
    }

    let cells: Vec<Position> = digit_positions.iter().collect();
    for (i, &a) in cells.iter().enumerate() {
        for &b in &cells[i + 1..] {
            if !a.sees(b) {
                continue;
            }
            let already_strong = links
                .iter()
                .any(|link| (link.from == a && link.to == b) || (link.from == b && link.to == a));
            if !already_strong {
                links.extend(ChainLink::symmetric(a, b, digit, false));
            }
        }
    }

    links
}

/// Builds the bivalue-cell link graph used by XY-chains.
///
/// Each bivalue cell carries two internal strong links (one per
/// candidate direction); peering bivalue cells sharing a candidate
/// carry weak links on that candidate.
pub(crate) fn xy_links(board: &Board) -> Vec<ChainLink> {
    let mut links = Vec::new();
    let bivalue: Vec<Position> = board.bivalue_cells().iter().collect();

    for &cell in &bivalue {
        let Some((a, b)) = board.candidates(cell).as_double() else {
            continue;
        };
        links.push(ChainLink {
            from: cell,
            to: cell,
            candidate: a,
            to_candidate: b,
            strong: true,
        });
        links.push(ChainLink {
            from: cell,
            to: cell,
            candidate: b,
            to_candidate: a,
            strong: true,
        });
    }

    for (i, &a) in bivalue.iter().enumerate() {
        for &b in &bivalue[i + 1..] {
            if !a.sees(b) {
                continue;
            }
            for digit in board.candidates(a) & board.candidates(b) {
                links.extend(ChainLink::symmetric(a, b, digit, false));
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use dedoku_core::{DigitGrid, DigitSet};

    use super::*;

    fn clear_digit_except(board: &mut Board, digit: Digit, keep: &[Position]) {
        for pos in Position::all() {
            if !keep.contains(&pos) {
                board.remove_candidate(pos, digit);
            }
        }
    }

    #[test]
    fn test_row_strong_link() {
        let mut board = Board::from_grid(DigitGrid::new());
        let a = Position::new(0, 0);
        let b = Position::new(0, 7);
        clear_digit_except(&mut board, Digit::D5, &[a, b]);

        let links = x_links(&board, Digit::D5);
        assert!(
            links
                .iter()
                .any(|link| link.strong && link.from == a && link.to == b)
        );
        assert!(
            links
                .iter()
                .any(|link| link.strong && link.from == b && link.to == a)
        );
    }

    #[test]
    fn test_aligned_box_pair_not_duplicated() {
        let mut board = Board::from_grid(DigitGrid::new());
        // Two cells in the same box *and* the same row: the box link
        // is already represented by the row link.
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        clear_digit_except(&mut board, Digit::D5, &[a, b]);

        let links = x_links(&board, Digit::D5);
        let strong: Vec<_> = links.iter().filter(|link| link.strong).collect();
        assert_eq!(strong.len(), 2); // one direction each
    }

    #[test]
    fn test_weak_links_between_peers() {
        let mut board = Board::from_grid(DigitGrid::new());
        let cells = [
            Position::new(0, 0),
            Position::new(0, 4),
            Position::new(0, 8),
        ];
        clear_digit_except(&mut board, Digit::D3, &cells);

        let links = x_links(&board, Digit::D3);
        // Three candidates in the row: no strong link, three weak
        // pairs in both directions.
        assert!(links.iter().all(|link| !link.strong));
        assert_eq!(links.len(), 6);
    }

    #[test]
    fn test_xy_links_internal_and_external() {
        let mut board = Board::from_grid(DigitGrid::new());
        let a = Position::new(0, 0);
        let b = Position::new(0, 5);
        for pos in [a, b] {
            for digit in DigitSet::FULL.difference(DigitSet::from_iter([Digit::D1, Digit::D2])) {
                board.remove_candidate(pos, digit);
            }
        }

        let links = xy_links(&board);
        // Two internal strong links per cell.
        assert_eq!(
            links
                .iter()
                .filter(|link| link.strong && link.from == link.to)
                .count(),
            4
        );
        // Weak links on both shared candidates, both directions.
        assert_eq!(links.iter().filter(|link| !link.strong).count(), 4);
        assert!(links.iter().any(|link| {
            !link.strong && link.from == a && link.to == b && link.candidate == Digit::D1
        }));
    }
}
