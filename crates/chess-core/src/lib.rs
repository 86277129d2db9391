//! Core types for the chess engine.
//!
//! This crate provides the value types shared by the engine and its
//! drivers:
//! - [`Side`], [`PieceKind`] and [`Piece`] for piece representation
//! - [`Square`] and [`Direction`] for board coordinates
//! - [`Move`] for move representation
//! - [`Layout`] parsing and printing

mod direction;
mod layout;
mod mov;
mod piece;
mod side;
mod square;

pub use direction::Direction;
pub use layout::{Layout, LayoutError};
pub use mov::{Move, MoveParseError};
pub use piece::{Piece, PieceKind};
pub use side::Side;
pub use square::{Square, SquareParseError};
