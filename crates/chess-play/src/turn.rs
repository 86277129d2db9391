//! Engine turns on a blocking worker.
//!
//! The game and searcher are moved into the worker and handed back when
//! it finishes, so the board has a single owner for the whole search.

use chess_core::Move;
use chess_engine::{CancelToken, Game, GameError, SearchError, Searcher};
use std::time::Duration;
use tokio::task::JoinError;

/// How an engine turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineTurn {
    /// The engine committed this move.
    Moved(Move),
    /// The game refused the engine's move and the turn was forfeited.
    Rejected(Move, GameError),
    /// The side had no moves and passed.
    NoMoves,
    /// The budget ran out and the turn was forfeited.
    TimedOut,
}

/// Searches for the side to move and commits the result.
///
/// The search gets `budget` both as the token deadline and as an outer
/// timeout. On either expiry the turn is forfeited and the board is
/// returned as it was.
pub async fn engine_turn(
    game: Game,
    mut searcher: Searcher,
    budget: Duration,
) -> Result<(Game, Searcher, EngineTurn), JoinError> {
    let token = CancelToken::with_budget(budget);
    searcher.set_cancel_token(token.clone());

    let mut task = tokio::task::spawn_blocking(move || {
        let mut game = game;
        let result = game.search(&mut searcher);
        (game, searcher, result)
    });

    let (mut game, searcher, result) = match tokio::time::timeout(budget, &mut task).await {
        Ok(joined) => joined?,
        Err(_) => {
            tracing::debug!(?budget, "turn budget elapsed, cancelling search");
            token.cancel();
            task.await?
        }
    };

    let turn = settle(&mut game, result);
    Ok((game, searcher, turn))
}

/// Applies a search result to the game.
fn settle(game: &mut Game, result: Result<Option<Move>, SearchError>) -> EngineTurn {
    let side = game.to_move();
    let turn = match result {
        Ok(Some(m)) => match game.commit(m) {
            Ok(_) => return EngineTurn::Moved(m),
            Err(e) => {
                tracing::error!(%side, %m, "engine produced a move the game rejected: {}", e);
                EngineTurn::Rejected(m, e)
            }
        },
        Ok(None) => {
            tracing::info!(%side, "no moves available");
            EngineTurn::NoMoves
        }
        Err(SearchError::Cancelled) => {
            tracing::info!(%side, "search cancelled, turn forfeited");
            EngineTurn::TimedOut
        }
    };

    if let Err(e) = game.forfeit_turn() {
        tracing::warn!(%side, "could not forfeit the turn: {}", e);
    }
    turn
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{PieceKind, Side, Square};
    use chess_engine::{Board, GameEvent, SearchConfig};

    #[tokio::test]
    async fn test_engine_commits_a_move() {
        let board = Board::from_layout("4k3/7K/8/8/3P4/8/8/q7").unwrap();
        let game = Game::from_board(board, Side::Opponent);
        let searcher = Searcher::new(SearchConfig::new(2));

        let (mut game, _, turn) = engine_turn(game, searcher, Duration::from_secs(30))
            .await
            .unwrap();

        let EngineTurn::Moved(m) = turn else {
            panic!("expected a move, got {:?}", turn);
        };
        assert_eq!(m.to(), Square::new(3, 3));
        assert_eq!(game.to_move(), Side::Friendly);
        assert_eq!(game.history().len(), 1);
        let captured_pawn = |e: &GameEvent| {
            matches!(e, GameEvent::Captured { piece, .. } if piece.kind() == PieceKind::Pawn)
        };
        assert!(game.drain_events().iter().any(captured_pawn));
    }

    #[tokio::test]
    async fn test_timed_out_turn_is_forfeited() {
        let game = Game::from_board(Board::standard(), Side::Opponent);
        let searcher = Searcher::new(SearchConfig::exhaustive(6));

        let (mut game, _, turn) = engine_turn(game, searcher, Duration::from_millis(20))
            .await
            .unwrap();

        assert_eq!(turn, EngineTurn::TimedOut);
        assert_eq!(game.board(), &Board::standard());
        assert_eq!(game.to_move(), Side::Friendly);
        assert!(game.history().is_empty());
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::TurnForfeited {
                side: Side::Opponent
            }]
        );
    }

    #[tokio::test]
    async fn test_no_moves_passes() {
        let board = Board::from_layout("8/8/8/8/8/8/8/4K3").unwrap();
        let game = Game::from_board(board, Side::Opponent);
        let searcher = Searcher::new(SearchConfig::new(2));

        let (game, _, turn) = engine_turn(game, searcher, Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(turn, EngineTurn::NoMoves);
        assert_eq!(game.to_move(), Side::Friendly);
    }

    #[test]
    fn test_rejected_move_forfeits_once() {
        let mut game = Game::from_board(Board::standard(), Side::Opponent);
        let from = Square::new(4, 0);
        let king = game.board().occupant(from).unwrap();
        let bogus = Move::new(from, Square::new(4, 1), king, false);

        let turn = settle(&mut game, Ok(Some(bogus)));

        assert_eq!(
            turn,
            EngineTurn::Rejected(
                bogus,
                GameError::NotYourPiece {
                    square: from,
                    owner: Side::Friendly
                }
            )
        );
        assert_eq!(game.board(), &Board::standard());
        assert_eq!(game.to_move(), Side::Friendly);
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::TurnForfeited {
                side: Side::Opponent
            }]
        );
    }
}
