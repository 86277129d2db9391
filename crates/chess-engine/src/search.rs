//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search runs in place on the caller's board. Every simulated move is
//! a [`MadeMove`](crate::MadeMove) guard, so the board is restored on every
//! exit path, including cancellation.
//!
//! Scores are material sums from [`evaluate`]: the [`MAXIMIZING_SIDE`]
//! maximizes and the other side minimizes. There is no mate scoring, but a
//! side left without moves below the root scores as a loss: `i32::MIN` for
//! the maximizer and `i32::MAX` for the minimizer.

use crate::eval::{evaluate, MAXIMIZING_SIDE};
use crate::{generate_moves, Board, CancelToken};
use chess_core::{Move, Side};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, trace};

/// How often, in nodes, inner nodes look at the clock.
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// Errors from [`Searcher::select_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The cancel token was signalled or its deadline passed.
    #[error("search cancelled")]
    Cancelled,
}

/// Search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead. Values below 1 are treated as 1.
    pub depth: u8,
    /// Enables alpha-beta cutoffs. Disabling gives the exhaustive minimax.
    pub pruning: bool,
}

impl SearchConfig {
    pub const fn new(depth: u8) -> Self {
        SearchConfig {
            depth,
            pruning: true,
        }
    }

    pub const fn exhaustive(depth: u8) -> Self {
        SearchConfig {
            depth,
            pruning: false,
        }
    }

    /// The depth actually searched.
    pub const fn effective_depth(&self) -> u8 {
        if self.depth == 0 {
            1
        } else {
            self.depth
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Counters from the last completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u64,
    /// Score of the chosen move, or `None` if there were no moves.
    pub best_score: Option<i32>,
    pub elapsed: Duration,
}

/// Search state.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    cancel: CancelToken,
    nodes: u64,
    last_stats: Option<SearchStats>,
}

impl Searcher {
    /// Creates a searcher with a fresh cancel token.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_cancel(config, CancelToken::new())
    }

    /// Creates a searcher that stops when `cancel` does.
    pub fn with_cancel(config: SearchConfig, cancel: CancelToken) -> Self {
        Searcher {
            config,
            cancel,
            nodes: 0,
            last_stats: None,
        }
    }

    /// Replaces the token, typically once per turn with a new deadline.
    pub fn set_cancel_token(&mut self, cancel: CancelToken) {
        self.cancel = cancel;
    }

    /// Stats from the last search that ran to completion.
    pub fn last_stats(&self) -> Option<SearchStats> {
        self.last_stats
    }

    /// Picks the best move for `side`.
    ///
    /// Returns `Ok(None)` if `side` has no moves. On cancellation returns
    /// [`SearchError::Cancelled`] and leaves `board` as it was.
    pub fn select_move(
        &mut self,
        board: &mut Board,
        side: Side,
    ) -> Result<Option<Move>, SearchError> {
        let start = Instant::now();
        self.nodes = 0;
        self.check_root()?;

        let depth = self.config.effective_depth();
        let maximizing = side == MAXIMIZING_SIDE;
        let moves = generate_moves(board, side);

        let mut best: Option<(Move, i32)> = None;
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;

        for &m in moves.as_slice() {
            self.check_root()?;

            let score = {
                let mut made = board.make(m);
                self.minimax(&mut made, depth - 1, alpha, beta, !maximizing)?
            };

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((m, score));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if self.config.pruning && beta <= alpha {
                break;
            }
        }

        let stats = SearchStats {
            depth,
            nodes: self.nodes,
            best_score: best.map(|(_, score)| score),
            elapsed: start.elapsed(),
        };
        debug!(
            %side,
            depth,
            nodes = stats.nodes,
            score = ?stats.best_score,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            best = ?best.map(|(m, _)| m),
            "search finished"
        );
        self.last_stats = Some(stats);

        Ok(best.map(|(m, _)| m))
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32, SearchError> {
        self.nodes += 1;
        self.check_node()?;

        if depth == 0 {
            return Ok(evaluate(board));
        }

        let side = if maximizing {
            MAXIMIZING_SIDE
        } else {
            MAXIMIZING_SIDE.opposite()
        };
        let moves = generate_moves(board, side);

        // A side with no moves keeps its worst score.
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for &m in moves.as_slice() {
            let score = {
                let mut made = board.make(m);
                self.minimax(&mut made, depth - 1, alpha, beta, !maximizing)?
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if self.config.pruning && beta <= alpha {
                break;
            }
        }

        Ok(best)
    }

    fn check_root(&self) -> Result<(), SearchError> {
        if self.cancel.is_cancelled() {
            trace!(nodes = self.nodes, "search cancelled at root");
            return Err(SearchError::Cancelled);
        }
        Ok(())
    }

    fn check_node(&self) -> Result<(), SearchError> {
        let stop = self.cancel.is_signalled()
            || (self.nodes.is_multiple_of(DEADLINE_CHECK_INTERVAL) && self.cancel.is_expired());
        if stop {
            trace!(nodes = self.nodes, "search cancelled");
            return Err(SearchError::Cancelled);
        }
        Ok(())
    }
}
