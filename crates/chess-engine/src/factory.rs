//! Maps pieces to their move strategies.

use crate::strategy::MoveStrategy;
use chess_core::{Piece, PieceKind, Side};

/// Stateless lookup from `(PieceKind, Side)` to a [`MoveStrategy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveStrategyFactory;

impl MoveStrategyFactory {
    /// Returns the strategy a fresh piece of `kind` uses for `side`.
    ///
    /// Pawns get the double-step variant.
    pub const fn strategy(self, kind: PieceKind, side: Side) -> MoveStrategy {
        match kind {
            PieceKind::Pawn => MoveStrategy::Pawn {
                forward: side.forward(),
                double: true,
            },
            PieceKind::Knight => MoveStrategy::KNIGHT,
            PieceKind::Bishop => MoveStrategy::BISHOP,
            PieceKind::Rook => MoveStrategy::ROOK,
            PieceKind::Queen => MoveStrategy::QUEEN,
            PieceKind::King => MoveStrategy::KING,
        }
    }

    /// Returns the strategy for `piece` in its current state.
    pub const fn for_piece(self, piece: Piece) -> MoveStrategy {
        match piece.kind() {
            PieceKind::Pawn if piece.has_moved() => self.pawn_single_step(piece.side()),
            kind => self.strategy(kind, piece.side()),
        }
    }

    /// The reduced pawn strategy: one square forward, diagonals to capture.
    pub const fn pawn_single_step(self, side: Side) -> MoveStrategy {
        MoveStrategy::Pawn {
            forward: side.forward(),
            double: false,
        }
    }
}
