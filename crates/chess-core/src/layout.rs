//! Board layout notation.
//!
//! A layout is the piece-placement field of FEN adapted to the two sides:
//! eight `/`-separated rows from row 7 down to row 0, digits for runs of
//! empty squares, uppercase letters for Friendly pieces and lowercase for
//! Opponent pieces.

use crate::{Piece, PieceKind, Side, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a layout string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid layout: row {row} has {squares} squares, expected 8")]
    InvalidRowLength { row: u8, squares: u32 },

    #[error("invalid layout: unexpected character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: u8 },
}

/// Parsed piece placement, indexed by [`Square::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: [Option<Piece>; 64],
}

impl Layout {
    /// The initial setup: back rows R N B Q K B N R, pawns in front.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Wraps an existing placement.
    pub const fn from_cells(cells: [Option<Piece>; 64]) -> Self {
        Layout { cells }
    }

    /// Parses a layout string.
    ///
    /// Pawns standing off their starting row are marked as having moved,
    /// since that is the only way they could have got there.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::InvalidRowCount(rows.len()));
        }

        let mut cells = [None; 64];
        for (i, text) in rows.iter().enumerate() {
            let row = 7 - i as u8;
            let mut col = 0u32;
            for ch in text.chars() {
                if let Some(run) = ch.to_digit(10) {
                    col += run;
                } else if let Some((kind, side)) = PieceKind::from_char(ch) {
                    if col < 8 {
                        let mut piece = Piece::new(kind, side);
                        if kind == PieceKind::Pawn && row != side.pawn_row() {
                            piece.mark_moved();
                        }
                        cells[Square::new(col as u8, row).index()] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(LayoutError::InvalidCharacter { ch, row });
                }
            }
            if col != 8 {
                return Err(LayoutError::InvalidRowLength { row, squares: col });
            }
        }

        Ok(Layout { cells })
    }

    /// Returns the placement.
    pub fn cells(&self) -> &[Option<Piece>; 64] {
        &self.cells
    }

    /// Consumes the layout, returning the placement.
    pub fn into_cells(self) -> [Option<Piece>; 64] {
        self.cells
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            let mut empty = 0;
            for col in 0..8u8 {
                match self.cells[Square::new(col, row).index()] {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.to_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
