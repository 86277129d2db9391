//! Board state, move generation and search for a two-sided chess game.
//!
//! This crate provides:
//! - [`Board`] - 8×8 piece occupancy with the [`BoardQuery`] read capability
//! - [`MoveStrategy`] and [`MoveStrategyFactory`] - per-piece movement rules
//! - [`generate_moves`] - move enumeration in column-major scan order
//! - [`Searcher`] - minimax with alpha-beta pruning and cooperative
//!   cancellation through [`CancelToken`]
//! - [`Game`] - move commit, legality markers, history and events
//!
//! Castling, en passant, promotion and check are not modelled. A side wins
//! by capturing the other king.
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, SearchConfig, Searcher};
//!
//! let mut game = Game::new();
//! game.play("e2".parse().unwrap(), "e4".parse().unwrap()).unwrap();
//!
//! let mut searcher = Searcher::new(SearchConfig::new(2));
//! let reply = game.search(&mut searcher).unwrap().expect("opponent has moves");
//! game.commit(reply).unwrap();
//! println!("{}", game.board());
//! ```

mod board;
mod cancel;
pub mod eval;
mod factory;
mod game;
pub mod movegen;
pub mod search;
pub mod strategy;

pub use board::{Board, BoardQuery, MadeMove};
pub use cancel::CancelToken;
pub use eval::{evaluate, MAXIMIZING_SIDE};
pub use factory::MoveStrategyFactory;
pub use game::{CommitOutcome, Game, GameError, GameEvent, HistoryEntry, TileMarkers};
pub use movegen::{generate_moves, piece_moves, MoveList};
pub use search::{SearchConfig, SearchError, SearchStats, Searcher};
pub use strategy::MoveStrategy;
