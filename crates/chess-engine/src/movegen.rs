//! Move enumeration.
//!
//! Scans own pieces in column-major order and asks each piece's strategy
//! for destinations. Nothing here writes to the board.

use crate::{Board, BoardQuery, MoveStrategyFactory};
use chess_core::{Move, Side, Square};

/// Moves generated for one side, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Finds the move from `from` to `to`, if generated.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.moves
            .iter()
            .copied()
            .find(|m| m.from() == from && m.to() == to)
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Generates every move for `side`.
pub fn generate_moves(board: &Board, side: Side) -> MoveList {
    let mut list = MoveList::new();
    for (from, piece) in board.pieces_of(side) {
        push_piece_moves(board, from, piece, &mut list);
    }
    list
}

/// Generates the moves of the piece on `from`, whichever side it is.
pub fn piece_moves(board: &Board, from: Square) -> MoveList {
    let mut list = MoveList::new();
    if let Some(piece) = board.occupant(from) {
        push_piece_moves(board, from, piece, &mut list);
    }
    list
}

fn push_piece_moves(board: &Board, from: Square, piece: chess_core::Piece, list: &mut MoveList) {
    let side = piece.side();
    MoveStrategyFactory
        .for_piece(piece)
        .legal_moves(board, side, from, |to| {
            list.push(Move::new(from, to, piece, board.contains_opponent(to, side)));
        });
}
