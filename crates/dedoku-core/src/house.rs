//! The 27 houses of the board: rows, columns, and 3×3 boxes.

use std::fmt::{self, Display};

use crate::{Position, PositionSet};

/// One of the 27 cell groups that must each contain the digits 1-9
/// exactly once.
///
/// Houses are the shared iteration shape for techniques that treat
/// rows, columns, and boxes uniformly; techniques that exploit box
/// geometry iterate rows/columns/boxes explicitly instead.
///
/// # Examples
///
/// ```
/// use dedoku_core::House;
///
/// assert_eq!(House::ALL.len(), 27);
/// for house in House::ALL {
///     assert_eq!(house.positions().len(), 9);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row, identified by its 0-based row index.
    Row(u8),
    /// A column, identified by its 0-based column index.
    Column(u8),
    /// A 3×3 box, identified by its index (0-8, left to right, top to
    /// bottom).
    Box(u8),
}

impl House {
    /// All nine rows.
    pub const ROWS: [Self; 9] = Self::build(0);

    /// All nine columns.
    pub const COLUMNS: [Self; 9] = Self::build(1);

    /// All nine boxes.
    pub const BOXES: [Self; 9] = Self::build(2);

    /// All 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row(i as u8);
            all[i + 9] = Self::Column(i as u8);
            all[i + 18] = Self::Box(i as u8);
            i += 1;
        }
        all
    };

    const fn build(kind: u8) -> [Self; 9] {
        let mut houses = [Self::Row(0); 9];
        let mut i = 0;
        while i < 9 {
            houses[i as usize] = match kind {
                0 => Self::Row(i),
                1 => Self::Column(i),
                _ => Self::Box(i),
            };
            i += 1;
        }
        houses
    }

    /// Returns the set of the nine cells in this house.
    #[must_use]
    #[inline]
    pub const fn positions(self) -> PositionSet {
        match self {
            Self::Row(r) => PositionSet::ROWS[r as usize],
            Self::Column(c) => PositionSet::COLUMNS[c as usize],
            Self::Box(b) => PositionSet::BOXES[b as usize],
        }
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn cell(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row(r) => Position::new(r, i),
            Self::Column(c) => Position::new(i, c),
            Self::Box(b) => Position::from_box(b, i),
        }
    }

    /// Returns an iterator over the nine cells of this house.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.cell(i))
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(r) => write!(f, "row {}", r + 1),
            Self::Column(c) => write!(f, "column {}", c + 1),
            Self::Box(b) => write!(f, "box {}", b + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order() {
        assert_eq!(House::ALL[0], House::Row(0));
        assert_eq!(House::ALL[9], House::Column(0));
        assert_eq!(House::ALL[18], House::Box(0));
        assert_eq!(House::ALL[26], House::Box(8));
    }

    #[test]
    fn test_cells_match_positions() {
        for house in House::ALL {
            let from_cells: PositionSet = house.cells().collect();
            assert_eq!(from_cells, house.positions());
        }
    }

    #[test]
    fn test_box_cell_order() {
        assert_eq!(House::Box(4).cell(0), Position::new(3, 3));
        assert_eq!(House::Box(4).cell(4), Position::new(4, 4));
        assert_eq!(House::Box(4).cell(8), Position::new(5, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(House::Row(0).to_string(), "row 1");
        assert_eq!(House::Column(8).to_string(), "column 9");
        assert_eq!(House::Box(4).to_string(), "box 5");
    }
}
