//! Per-piece move strategies.
//!
//! Each [`MoveStrategy`] variant carries only the directions and step
//! limits it needs. Strategies read the board through [`BoardQuery`] and
//! report destinations through a callback, in a fixed direction order.

use crate::BoardQuery;
use chess_core::{Direction, Side, Square};

/// How a piece moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStrategy {
    /// Walks each direction until blocked. Captures the first opponent hit.
    Slide { directions: &'static [Direction] },
    /// Non-capturing advance of one square, or up to two when `double`.
    Step { direction: Direction, double: bool },
    /// Jumps to fixed offsets. Captures in place.
    Leap { offsets: &'static [Direction] },
    /// Moves to the two forward diagonals, only to capture.
    DiagonalCapture { forward: Direction },
    /// A forward [`Step`](MoveStrategy::Step) plus a
    /// [`DiagonalCapture`](MoveStrategy::DiagonalCapture).
    Pawn { forward: Direction, double: bool },
}

impl MoveStrategy {
    pub const ROOK: MoveStrategy = MoveStrategy::Slide {
        directions: &Direction::ORTHOGONALS,
    };
    pub const BISHOP: MoveStrategy = MoveStrategy::Slide {
        directions: &Direction::DIAGONALS,
    };
    pub const QUEEN: MoveStrategy = MoveStrategy::Slide {
        directions: &Direction::ALL,
    };
    pub const KNIGHT: MoveStrategy = MoveStrategy::Leap {
        offsets: &Direction::KNIGHT_JUMPS,
    };
    pub const KING: MoveStrategy = MoveStrategy::Leap {
        offsets: &Direction::ALL,
    };

    /// Reports every legal destination for a `side` piece standing on `from`.
    pub fn legal_moves<Q, F>(&self, board: &Q, side: Side, from: Square, mut emit: F)
    where
        Q: BoardQuery + ?Sized,
        F: FnMut(Square),
    {
        self.visit(board, side, from, &mut emit);
    }

    fn visit<Q, F>(&self, board: &Q, side: Side, from: Square, emit: &mut F)
    where
        Q: BoardQuery + ?Sized,
        F: FnMut(Square),
    {
        match *self {
            MoveStrategy::Slide { directions } => slide(board, side, from, directions, emit),
            MoveStrategy::Step { direction, double } => step(board, from, direction, double, emit),
            MoveStrategy::Leap { offsets } => leap(board, side, from, offsets, emit),
            MoveStrategy::DiagonalCapture { forward } => {
                diagonal_capture(board, side, from, forward, emit)
            }
            MoveStrategy::Pawn { forward, double } => {
                let (advance, capture) = MoveStrategy::pawn_parts(forward, double);
                advance.visit(board, side, from, emit);
                capture.visit(board, side, from, emit);
            }
        }
    }

    /// Splits a pawn into its advancing and capturing strategies.
    pub const fn pawn_parts(forward: Direction, double: bool) -> (MoveStrategy, MoveStrategy) {
        (
            MoveStrategy::Step {
                direction: forward,
                double,
            },
            MoveStrategy::DiagonalCapture { forward },
        )
    }

    /// Collects the legal destinations into a vector.
    pub fn destinations<Q>(&self, board: &Q, side: Side, from: Square) -> Vec<Square>
    where
        Q: BoardQuery + ?Sized,
    {
        let mut out = Vec::new();
        self.legal_moves(board, side, from, |to| out.push(to));
        out
    }
}

fn slide<Q, F>(board: &Q, side: Side, from: Square, directions: &[Direction], emit: &mut F)
where
    Q: BoardQuery + ?Sized,
    F: FnMut(Square),
{
    for &dir in directions {
        let mut cursor = from.offset(dir);
        while let Some(to) = cursor {
            if board.is_empty(to) {
                emit(to);
                cursor = to.offset(dir);
            } else {
                if board.contains_opponent(to, side) {
                    emit(to);
                }
                break;
            }
        }
    }
}

fn step<Q, F>(board: &Q, from: Square, direction: Direction, double: bool, emit: &mut F)
where
    Q: BoardQuery + ?Sized,
    F: FnMut(Square),
{
    let Some(one) = from.offset(direction).filter(|&sq| board.is_empty(sq)) else {
        return;
    };
    emit(one);
    if double {
        if let Some(two) = one.offset(direction).filter(|&sq| board.is_empty(sq)) {
            emit(two);
        }
    }
}

fn leap<Q, F>(board: &Q, side: Side, from: Square, offsets: &[Direction], emit: &mut F)
where
    Q: BoardQuery + ?Sized,
    F: FnMut(Square),
{
    for &offset in offsets {
        if let Some(to) = from.offset(offset) {
            if !board.contains_ally(to, side) {
                emit(to);
            }
        }
    }
}

fn diagonal_capture<Q, F>(board: &Q, side: Side, from: Square, forward: Direction, emit: &mut F)
where
    Q: BoardQuery + ?Sized,
    F: FnMut(Square),
{
    for dc in [-1, 1] {
        if let Some(to) = from.offset(forward.with_column(dc)) {
            if board.contains_opponent(to, side) {
                emit(to);
            }
        }
    }
}
