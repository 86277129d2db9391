//! Board square representation.

use crate::Direction;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a square from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("invalid square '{0}': expected a column a-h and a row 1-8")]
    Invalid(String),
}

/// A square on the board, addressed by (column, row) in [0,7]×[0,7].
///
/// Column 0 is file `a`; row 0 is the Friendly back row (rank `1`).
/// Stored as `row * 8 + column`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from column and row.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside 0-7. An off-board square is a
    /// caller bug; use [`Square::try_new`] when the input can be off-board.
    #[inline]
    pub const fn new(col: u8, row: u8) -> Self {
        assert!(col < 8 && row < 8, "square coordinates out of range");
        Square(row * 8 + col)
    }

    /// Creates a square from signed coordinates, or `None` if off-board.
    #[inline]
    pub const fn try_new(col: i8, row: i8) -> Option<Self> {
        if col >= 0 && col < 8 && row >= 0 && row < 8 {
            Some(Square(row as u8 * 8 + col as u8))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the square one step away in `dir`, or `None` off the edge.
    #[inline]
    pub const fn offset(self, dir: Direction) -> Option<Self> {
        Self::try_new(self.col() as i8 + dir.dc, self.row() as i8 + dir.dr)
    }

    /// All 64 squares in column-major scan order: column 0 rows 0-7, then
    /// column 1, and so on.
    pub fn scan() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|col| (0..8u8).map(move |row| Square::new(col, row)))
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].to_ascii_lowercase();
        let row = bytes[1];
        if col < b'a' || col > b'h' || row < b'1' || row > b'8' {
            return None;
        }
        Some(Square::new(col - b'a', row - b'1'))
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col()) as char, (b'1' + self.row()) as char)
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s.trim()).ok_or_else(|| SquareParseError::Invalid(s.to_string()))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(4, 3);
        assert_eq!(e4.col(), 4);
        assert_eq!(e4.row(), 3);
        assert_eq!(e4.index(), 28);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn square_new_off_board_panics() {
        let _ = Square::new(8, 0);
    }

    #[test]
    fn try_new_bounds() {
        assert_eq!(Square::try_new(0, 0), Some(Square::new(0, 0)));
        assert_eq!(Square::try_new(7, 7), Some(Square::new(7, 7)));
        assert_eq!(Square::try_new(-1, 0), None);
        assert_eq!(Square::try_new(8, 8), None);
        assert_eq!(Square::try_new(3, -1), None);
    }

    #[test]
    fn offset_stops_at_edges() {
        let a1 = Square::new(0, 0);
        assert_eq!(a1.offset(Direction::UP), Some(Square::new(0, 1)));
        assert_eq!(a1.offset(Direction::LEFT), None);
        assert_eq!(a1.offset(Direction::DOWN), None);
        assert_eq!(Square::new(7, 7).offset(Direction::UP_RIGHT), None);
    }

    #[test]
    fn scan_is_column_major() {
        let squares: Vec<Square> = Square::scan().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[1], Square::new(0, 1));
        assert_eq!(squares[8], Square::new(1, 0));
        assert_eq!(squares[63], Square::new(7, 7));
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::new(4, 3)));
        assert_eq!(Square::from_algebraic("H8"), Some(Square::new(7, 7)));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_from_str() {
        assert_eq!("d5".parse::<Square>(), Ok(Square::new(3, 4)));
        assert!(matches!(
            "z0".parse::<Square>(),
            Err(SquareParseError::Invalid(_))
        ));
    }

    #[test]
    fn debug_display() {
        let e4 = Square::new(4, 3);
        assert_eq!(format!("{:?}", e4), "Square(e4)");
        assert_eq!(format!("{}", e4), "e4");
    }

    proptest! {
        #[test]
        fn algebraic_roundtrip(col in 0u8..8, row in 0u8..8) {
            let sq = Square::new(col, row);
            prop_assert_eq!(Square::from_algebraic(&sq.to_algebraic()), Some(sq));
        }

        #[test]
        fn try_new_agrees_with_range(col in -3i8..11, row in -3i8..11) {
            let on_board = (0..8).contains(&col) && (0..8).contains(&row);
            prop_assert_eq!(Square::try_new(col, row).is_some(), on_board);
        }
    }
}
