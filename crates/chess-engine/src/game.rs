//! Turn-by-turn game management.
//!
//! [`Game`] owns the live [`Board`] and the side to move. It validates and
//! commits moves, keeps the legality markers for a selected piece, records
//! history and queues [`GameEvent`]s for whoever drives the game.

use crate::movegen::{generate_moves, piece_moves};
use crate::{Board, BoardQuery, MoveList, MoveStrategyFactory, SearchError, Searcher};
use chess_core::{Move, Piece, PieceKind, Side, Square};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no piece on {0}")]
    NoPieceAt(Square),

    #[error("the piece on {square} belongs to {owner}")]
    NotYourPiece { square: Square, owner: Side },

    #[error("{piece} on {from} cannot move to {to}")]
    IllegalDestination {
        piece: Piece,
        from: Square,
        to: Square,
    },

    #[error("the game is over")]
    GameOver,
}

/// Something that happened during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// `piece` was taken by `by`. The piece is already deactivated.
    Captured { piece: Piece, by: Side },
    /// A king was taken and `winner` won the game.
    KingCaptured { winner: Side },
    /// A move was committed.
    Moved { side: Side, from: Square, to: Square },
    /// `side` passed its turn without moving.
    TurnForfeited { side: Side },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Captured { piece, by } => write!(f, "{} captured by {}", piece, by),
            GameEvent::KingCaptured { winner } => write!(f, "king captured, {} wins", winner),
            GameEvent::Moved { side, from, to } => write!(f, "{} moved {}-{}", side, from, to),
            GameEvent::TurnForfeited { side } => write!(f, "{} forfeited the turn", side),
        }
    }
}

/// A committed move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub side: Side,
    pub mov: Move,
    /// The piece taken by this move, if any.
    pub captured: Option<Piece>,
}

/// What a successful commit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    pub captured: Option<Piece>,
    /// Set when the capture ended the game.
    pub winner: Option<Side>,
}

/// Per-square "valid destination" flags for the selected piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMarkers {
    marked: [bool; 64],
}

impl TileMarkers {
    pub const fn new() -> Self {
        TileMarkers {
            marked: [false; 64],
        }
    }

    #[inline]
    pub fn is_marked(&self, sq: Square) -> bool {
        self.marked[sq.index()]
    }

    pub fn mark(&mut self, sq: Square) {
        self.marked[sq.index()] = true;
    }

    pub fn clear(&mut self) {
        self.marked = [false; 64];
    }

    /// Marked squares in scan order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::scan().filter(move |&sq| self.is_marked(sq))
    }

    pub fn count(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.marked.contains(&true)
    }
}

impl Default for TileMarkers {
    fn default() -> Self {
        Self::new()
    }
}

/// A game between the friendly side and the opponent.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Side,
    markers: TileMarkers,
    selected: Option<Square>,
    history: Vec<HistoryEntry>,
    events: Vec<GameEvent>,
    winner: Option<Side>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game from the initial setup. The friendly side moves first.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Side::Friendly)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, to_move: Side) -> Self {
        Game {
            board,
            to_move,
            markers: TileMarkers::new(),
            selected: None,
            history: Vec::new(),
            events: Vec::new(),
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// The side that captured the other king, if any.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn markers(&self) -> &TileMarkers {
        &self.markers
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Every move available to the side to move.
    pub fn legal_moves(&self) -> MoveList {
        generate_moves(&self.board, self.to_move)
    }

    /// Takes the queued events in the order they happened.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Selects the piece on `sq` and marks its destinations.
    ///
    /// Any previous selection is cleared first, also when this call fails.
    pub fn select(&mut self, sq: Square) -> Result<&TileMarkers, GameError> {
        self.deselect();
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let piece = self.own_piece_at(sq)?;
        for to in MoveStrategyFactory
            .for_piece(piece)
            .destinations(&self.board, piece.side(), sq)
        {
            self.markers.mark(to);
        }
        self.selected = Some(sq);
        Ok(&self.markers)
    }

    /// Clears the selection and its markers.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.markers.clear();
    }

    /// Runs `searcher` for the side to move on the live board.
    ///
    /// Returns `Ok(None)` once the game is over.
    pub fn search(&mut self, searcher: &mut Searcher) -> Result<Option<Move>, SearchError> {
        if self.is_over() {
            return Ok(None);
        }
        searcher.select_move(&mut self.board, self.to_move)
    }

    /// Commits the move from `from` to `to` for the side to move.
    pub fn play(&mut self, from: Square, to: Square) -> Result<CommitOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let piece = self.own_piece_at(from)?;
        let captures = self.board.contains_opponent(to, piece.side());
        self.commit(Move::new(from, to, piece, captures))
    }

    /// Applies `m` to the live board and passes the turn.
    ///
    /// The move is checked against the board: the origin must hold a piece
    /// of the side to move and the destination must be one its strategy
    /// produces. Capturing a king ends the game.
    pub fn commit(&mut self, m: Move) -> Result<CommitOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let mut piece = self.own_piece_at(m.from())?;
        if piece_moves(&self.board, m.from()).find(m.from(), m.to()).is_none() {
            return Err(GameError::IllegalDestination {
                piece,
                from: m.from(),
                to: m.to(),
            });
        }

        let side = piece.side();
        let captured = self.board.try_capture(m.to(), side);
        if let Some(taken) = captured {
            self.events.push(GameEvent::Captured {
                piece: taken,
                by: side,
            });
            if taken.kind() == PieceKind::King {
                self.winner = Some(side);
                self.events.push(GameEvent::KingCaptured { winner: side });
            }
        }

        self.board.set_occupant(None, m.from());
        let first_move = piece.mark_moved();
        self.board.set_occupant(Some(piece), m.to());

        let committed = Move::new(m.from(), m.to(), piece, captured.is_some());
        self.history.push(HistoryEntry {
            side,
            mov: committed,
            captured,
        });
        self.events.push(GameEvent::Moved {
            side,
            from: m.from(),
            to: m.to(),
        });
        debug!(
            %side,
            mv = %committed,
            captured = ?captured.map(|p| p.kind()),
            first_move,
            "move committed"
        );

        self.deselect();
        self.to_move = side.opposite();

        Ok(CommitOutcome {
            captured,
            winner: self.winner,
        })
    }

    /// Passes the turn without moving.
    pub fn forfeit_turn(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let side = self.to_move;
        self.events.push(GameEvent::TurnForfeited { side });
        debug!(%side, "turn forfeited");
        self.deselect();
        self.to_move = side.opposite();
        Ok(())
    }

    fn own_piece_at(&self, sq: Square) -> Result<Piece, GameError> {
        let piece = self.board.occupant(sq).ok_or(GameError::NoPieceAt(sq))?;
        if piece.side() != self.to_move {
            return Err(GameError::NotYourPiece {
                square: sq,
                owner: piece.side(),
            });
        }
        Ok(piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn game(layout: &str, to_move: Side) -> Game {
        Game::from_board(Board::from_layout(layout).unwrap(), to_move)
    }

    #[test]
    fn new_game_friendly_first() {
        let game = Game::new();
        assert_eq!(game.to_move(), Side::Friendly);
        assert_eq!(game.legal_moves().len(), 20);
        assert!(!game.is_over());
        assert!(game.history().is_empty());
    }

    #[test]
    fn quiet_move_passes_turn() {
        let mut game = Game::new();
        let outcome = game.play(sq("e2"), sq("e4")).unwrap();
        assert_eq!(outcome.captured, None);
        assert_eq!(game.to_move(), Side::Opponent);
        assert!(game.board().is_empty(sq("e2")));
        assert!(game.board().occupant(sq("e4")).unwrap().has_moved());
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::Moved {
                side: Side::Friendly,
                from: sq("e2"),
                to: sq("e4")
            }]
        );
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn pawn_double_step_only_once() {
        let mut game = Game::new();
        game.play(sq("e2"), sq("e3")).unwrap();
        game.play(sq("a7"), sq("a6")).unwrap();
        assert_eq!(
            game.play(sq("e3"), sq("e5")).unwrap_err(),
            GameError::IllegalDestination {
                piece: Piece::new(PieceKind::Pawn, Side::Friendly).moved(),
                from: sq("e3"),
                to: sq("e5"),
            }
        );
        game.play(sq("e3"), sq("e4")).unwrap();
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn capture_emits_events() {
        // Friendly rook d1 takes the opponent knight on d5.
        let mut game = game("4k3/8/8/3n4/8/8/8/3RK3", Side::Friendly);
        let outcome = game.play(sq("d1"), sq("d5")).unwrap();
        let captured = outcome.captured.unwrap();
        assert_eq!(captured.kind(), PieceKind::Knight);
        assert!(!captured.is_active());
        assert_eq!(outcome.winner, None);

        let events = game.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::Captured {
                    piece: captured,
                    by: Side::Friendly
                },
                GameEvent::Moved {
                    side: Side::Friendly,
                    from: sq("d1"),
                    to: sq("d5")
                },
            ]
        );
        assert_eq!(game.history()[0].captured, Some(captured));
        assert!(game.history()[0].mov.captures());
    }

    #[test]
    fn king_capture_ends_the_game() {
        let mut game = game("4k3/8/8/8/8/8/8/4Q3", Side::Friendly);
        let outcome = game.play(sq("e1"), sq("e8")).unwrap();
        assert_eq!(outcome.winner, Some(Side::Friendly));
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Side::Friendly));
        assert!(game
            .drain_events()
            .contains(&GameEvent::KingCaptured {
                winner: Side::Friendly
            }));

        assert_eq!(game.play(sq("e8"), sq("e7")), Err(GameError::GameOver));
        assert_eq!(game.forfeit_turn(), Err(GameError::GameOver));
        let mut searcher = Searcher::new(SearchConfig::new(1));
        assert_eq!(game.search(&mut searcher), Ok(None));
    }

    #[test]
    fn rejects_bad_origins() {
        let mut game = Game::new();
        assert_eq!(
            game.play(sq("e4"), sq("e5")),
            Err(GameError::NoPieceAt(sq("e4")))
        );
        assert_eq!(
            game.play(sq("e7"), sq("e5")),
            Err(GameError::NotYourPiece {
                square: sq("e7"),
                owner: Side::Opponent
            })
        );
        assert_eq!(game.to_move(), Side::Friendly);
    }

    #[test]
    fn rejects_self_capture() {
        let mut game = Game::new();
        let before = game.board().clone();
        assert!(matches!(
            game.play(sq("a1"), sq("a2")),
            Err(GameError::IllegalDestination { .. })
        ));
        assert_eq!(game.board(), &before);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn select_marks_destinations() {
        let mut game = Game::new();
        let markers = game.select(sq("g1")).unwrap();
        assert_eq!(markers.count(), 2);
        assert!(markers.is_marked(sq("f3")));
        assert!(markers.is_marked(sq("h3")));
        assert_eq!(game.selected(), Some(sq("g1")));

        // A new selection replaces the old markers.
        game.select(sq("e2")).unwrap();
        let marked: Vec<Square> = game.markers().squares().collect();
        assert_eq!(marked, vec![sq("e3"), sq("e4")]);

        game.deselect();
        assert!(game.markers().is_empty());
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn failed_selection_clears_markers() {
        let mut game = Game::new();
        game.select(sq("g1")).unwrap();
        assert!(game.select(sq("g8")).is_err());
        assert!(game.markers().is_empty());
    }

    #[test]
    fn commit_clears_markers() {
        let mut game = Game::new();
        game.select(sq("e2")).unwrap();
        game.play(sq("e2"), sq("e4")).unwrap();
        assert!(game.markers().is_empty());
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn forfeit_passes_turn() {
        let mut game = Game::new();
        game.forfeit_turn().unwrap();
        assert_eq!(game.to_move(), Side::Opponent);
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::TurnForfeited {
                side: Side::Friendly
            }]
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn engine_move_commits() {
        let mut game = game("4k3/7K/8/8/3P4/8/8/q7", Side::Opponent);
        let mut searcher = Searcher::new(SearchConfig::new(1));
        let m = game.search(&mut searcher).unwrap().unwrap();
        let outcome = game.commit(m).unwrap();
        assert_eq!(outcome.captured.map(|p| p.kind()), Some(PieceKind::Pawn));
        assert_eq!(game.to_move(), Side::Friendly);
    }

    #[test]
    fn stale_move_is_rejected() {
        let mut game = Game::new();
        let m = game.legal_moves().find(sq("e2"), sq("e4")).unwrap();
        game.commit(m).unwrap();
        game.forfeit_turn().unwrap();
        assert!(matches!(
            game.commit(m),
            Err(GameError::NoPieceAt(_))
        ));
    }

    #[test]
    fn event_display() {
        let event = GameEvent::Captured {
            piece: Piece::new(PieceKind::Queen, Side::Opponent),
            by: Side::Friendly,
        };
        assert_eq!(event.to_string(), "Opponent Queen captured by Friendly");
        assert_eq!(
            GameEvent::KingCaptured {
                winner: Side::Opponent
            }
            .to_string(),
            "king captured, Opponent wins"
        );
    }
}
