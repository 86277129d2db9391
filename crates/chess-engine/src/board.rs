//! Board state: an 8×8 grid of optional pieces.
//!
//! [`Board`] owns piece occupancy and nothing else. It knows which piece
//! stands where but no movement rules. Move strategies only ever see it
//! through the read-only [`BoardQuery`] capability.

use chess_core::{Layout, LayoutError, Move, Piece, PieceKind, Side, Square};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Read-only occupancy queries used by move generation.
///
/// Moves are computed through this trait alone, so generating them
/// cannot change the board.
pub trait BoardQuery {
    /// Returns true if no piece stands on `sq`.
    fn is_empty(&self, sq: Square) -> bool;

    /// Returns true if `sq` holds a piece belonging to `side`.
    fn contains_ally(&self, sq: Square, side: Side) -> bool;

    /// Returns true if `sq` holds a piece belonging to the other side.
    fn contains_opponent(&self, sq: Square, side: Side) -> bool;
}

/// Piece occupancy for all 64 squares.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Creates the initial setup.
    pub fn standard() -> Self {
        Self::from_layout(Layout::STANDARD).expect("STANDARD layout is valid")
    }

    /// Creates a board from a layout string.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        Ok(Board {
            cells: Layout::parse(layout)?.into_cells(),
        })
    }

    /// Converts the board to a layout string.
    pub fn to_layout(&self) -> String {
        Layout::from_cells(self.cells).to_string()
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Returns a reference to the piece on `sq`, if any.
    #[inline]
    pub fn occupant_ref(&self, sq: Square) -> Option<&Piece> {
        self.cells[sq.index()].as_ref()
    }

    /// Writes `piece` (or clears the square) unconditionally.
    #[inline]
    pub fn set_occupant(&mut self, piece: Option<Piece>, sq: Square) {
        self.cells[sq.index()] = piece;
    }

    /// Captures the piece on `sq` if it belongs to the other side of
    /// `attacker`.
    ///
    /// On success the captured piece is deactivated, the square cleared and
    /// the piece returned. Otherwise the board is left unchanged.
    pub fn try_capture(&mut self, sq: Square, attacker: Side) -> Option<Piece> {
        if !self.contains_opponent(sq, attacker) {
            return None;
        }
        let mut captured = self.cells[sq.index()].take()?;
        captured.deactivate();
        Some(captured)
    }

    /// Iterates over occupied squares in column-major scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::scan().filter_map(move |sq| self.occupant(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the pieces of one side in scan order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side() == side)
    }

    /// Simulates `m` in place and returns a guard that undoes it on drop.
    ///
    /// The destination's previous occupant is kept by the guard. A moved
    /// pawn is written with its first-move flag set, so deeper plies only
    /// see single steps for it. The guard derefs to the board so a search
    /// can recurse through it.
    pub fn make(&mut self, m: Move) -> MadeMove<'_> {
        debug_assert_eq!(
            self.occupant(m.from()),
            Some(m.piece()),
            "move does not match the board"
        );
        let previous = self.occupant(m.to());
        let mut placed = m.piece();
        if placed.kind() == PieceKind::Pawn {
            placed.mark_moved();
        }
        self.set_occupant(None, m.from());
        self.set_occupant(Some(placed), m.to());
        MadeMove {
            board: self,
            undo: m,
            previous,
        }
    }
}

impl BoardQuery for Board {
    #[inline]
    fn is_empty(&self, sq: Square) -> bool {
        self.occupant_ref(sq).is_none()
    }

    #[inline]
    fn contains_ally(&self, sq: Square, side: Side) -> bool {
        self.occupant_ref(sq).is_some_and(|piece| piece.side() == side)
    }

    #[inline]
    fn contains_opponent(&self, sq: Square, side: Side) -> bool {
        self.occupant_ref(sq).is_some_and(|piece| piece.side() != side)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_layout())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8u8 {
                let c = self
                    .occupant(Square::new(col, row))
                    .map_or('.', |piece| piece.to_char());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// A simulated move. Restores the board when dropped.
pub struct MadeMove<'a> {
    board: &'a mut Board,
    undo: Move,
    previous: Option<Piece>,
}

impl Deref for MadeMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MadeMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MadeMove<'_> {
    fn drop(&mut self) {
        self.board.set_occupant(self.previous.take(), self.undo.to());
        self.board
            .set_occupant(Some(self.undo.piece()), self.undo.from());
    }
}
