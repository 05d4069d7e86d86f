//! The digits-only view of a puzzle.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{Digit, DigitSet, House, Position};

/// Error produced when a puzzle string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
pub enum ParseGridError {
    /// The string contains a character that is neither a digit, an
    /// unsolved-cell marker (`0`, `.`, `_`), nor whitespace.
    #[display("invalid character {_0:?} in puzzle string")]
    InvalidCharacter(#[error(not(source))] char),
    /// The string does not contain exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

/// A 9×9 grid of placed digits; `None` marks an unsolved cell.
///
/// This is the input and output form of a puzzle. The solver works on a
/// [`Board`](crate::Board), which pairs this grid with per-cell
/// candidate sets.
///
/// # Examples
///
/// ```
/// use dedoku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
///     .parse()
///     .unwrap();
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert!(grid.is_valid());
/// assert!(!grid.is_filled());
/// assert_eq!(grid.filled_count(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid with all cells unsolved.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit placed at `pos`, or `None` if the cell is
    /// unsolved.
    #[must_use]
    #[inline]
    pub const fn get(self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places a digit at `pos`. Cells are placed, never cleared.
    #[inline]
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Returns the number of placed cells (0-81).
    #[must_use]
    pub fn filled_count(self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_filled(self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if no house contains a duplicate placed digit.
    ///
    /// Unsolved cells are ignored, so a partially filled grid can be
    /// valid. A grid that is both valid and filled is a correct
    /// solution by definition.
    #[must_use]
    pub fn is_valid(self) -> bool {
        House::ALL.iter().all(|house| {
            let mut seen = DigitSet::EMPTY;
            house.cells().all(|pos| match self.get(pos) {
                Some(digit) => seen.insert(digit),
                None => true,
            })
        })
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses a puzzle string.
    ///
    /// Whitespace is ignored; `1`-`9` place a digit and `0`, `.`, `_`
    /// mark an unsolved cell. Exactly 81 cells are required.
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut count = 0usize;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let cell = match ch {
                '0' | '.' | '_' => None,
                _ => Some(Digit::from_char(ch).ok_or(ParseGridError::InvalidCharacter(ch))?),
            };
            if count < 81
                && let Some(digit) = cell
            {
                grid.set(Position::from_index(count), digit);
            }
            count += 1;
        }
        if count == 81 {
            Ok(grid)
        } else {
            Err(ParseGridError::WrongCellCount(count))
        }
    }
}

impl Display for DigitGrid {
    /// Renders the grid as ASCII art with box separators, using `.`
    /// for unsolved cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row % 3 == 0 && row != 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..9 {
                if col % 3 == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_parse_81_char_string() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));
        assert_eq!(grid.filled_count(), 30);
    }

    #[test]
    fn test_parse_multiline_string() {
        let grid: DigitGrid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();
        assert_eq!(grid, PUZZLE.parse().unwrap());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount(3))
        );
        let long = "0".repeat(82);
        assert_eq!(
            long.parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount(82))
        );
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let bad = format!("x{}", "0".repeat(80));
        assert_eq!(
            bad.parse::<DigitGrid>(),
            Err(ParseGridError::InvalidCharacter('x'))
        );
    }

    #[test]
    fn test_is_valid_detects_duplicates() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        assert!(grid.is_valid());

        // Duplicate 5 in row 0.
        let mut bad = grid;
        bad.set(Position::new(0, 5), Digit::D5);
        assert!(!bad.is_valid());

        // Duplicate in a column.
        let mut bad = grid;
        bad.set(Position::new(1, 0), Digit::D5);
        assert!(!bad.is_valid());

        // Duplicate in a box.
        let mut bad = grid;
        bad.set(Position::new(1, 1), Digit::D5);
        assert!(!bad.is_valid());
    }

    #[test]
    fn test_is_filled() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        assert!(!grid.is_filled());
        assert!(DigitGrid::new().is_valid());
        assert!(!DigitGrid::new().is_filled());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        let rendered = grid.to_string();
        assert!(rendered.contains("------+-------+------"));
        // The rendering parses back to the same grid: `.` is an
        // unsolved marker and `|`/`-`/`+` are not accepted, so strip
        // the separator rows and bars first.
        let body: String = rendered
            .chars()
            .filter(|ch| matches!(ch, '1'..='9' | '.') || ch.is_whitespace())
            .collect();
        assert_eq!(body.parse::<DigitGrid>().unwrap(), grid);
    }
}
