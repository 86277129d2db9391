//! Material evaluation.

use crate::Board;
use chess_core::Side;

/// The side whose material counts as positive.
pub const MAXIMIZING_SIDE: Side = Side::Opponent;

/// Sums piece values, positive for [`MAXIMIZING_SIDE`] and negative for
/// the other side.
pub fn evaluate(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            if piece.side() == MAXIMIZING_SIDE {
                piece.value()
            } else {
                -piece.value()
            }
        })
        .sum()
}
