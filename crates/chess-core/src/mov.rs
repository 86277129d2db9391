//! Move representation.

use crate::{Piece, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing move text such as `e2e4`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move '{0}': expected four characters like e2e4")]
    InvalidLength(String),

    #[error("invalid square in move: {0}")]
    InvalidSquare(String),
}

/// A single proposed transition.
///
/// Holds the moved piece by value and whether the destination held an
/// opponent piece when the move was generated. Moves are built during
/// enumeration and consumed right away by a search or a commit.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captures: bool,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece, captures: bool) -> Self {
        Move {
            from,
            to,
            piece,
            captures,
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the moved piece as it stood on the source square.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Returns true if the destination held an opponent piece.
    #[inline]
    pub const fn captures(self) -> bool {
        self.captures
    }

    /// Returns coordinate notation for this move (e.g., "e2e4").
    pub fn to_coords(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses coordinate notation into its source and destination squares.
    ///
    /// The piece and capture flag depend on the board, so the caller
    /// resolves the squares against its own legal move list.
    pub fn parse_coords(s: &str) -> Result<(Square, Square), MoveParseError> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength(s.to_string()));
        }
        let from = Square::from_algebraic(&s[0..2])
            .ok_or_else(|| MoveParseError::InvalidSquare(s[0..2].to_string()))?;
        let to = Square::from_algebraic(&s[2..4])
            .ok_or_else(|| MoveParseError::InvalidSquare(s[2..4].to_string()))?;
        Ok((from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {})", self.piece.to_char(), self.to_coords())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.captures { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
