//! Text rendering of the game for the terminal.

use chess_core::Square;
use chess_engine::{Game, GameEvent};
use std::fmt::Write;

/// Draws the board with row 8 on top.
///
/// Squares marked for the selected piece show `*` when empty. A marked
/// capture shows the target piece wrapped in brackets.
pub fn board(game: &Game) -> String {
    let markers = game.markers();
    let mut out = String::new();
    for row in (0..8u8).rev() {
        let _ = write!(out, "{} ", row + 1);
        for col in 0..8u8 {
            let sq = Square::new(col, row);
            let piece = game.board().occupant(sq);
            let cell = match (piece, markers.is_marked(sq)) {
                (Some(p), true) => format!("[{}]", p.to_char()),
                (Some(p), false) => format!(" {} ", p.to_char()),
                (None, true) => " * ".to_string(),
                (None, false) => " . ".to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h");
    out
}

/// One line per event.
pub fn events(events: &[GameEvent]) -> String {
    events
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lists moves as coordinate pairs.
pub fn move_list(game: &Game) -> String {
    game.legal_moves()
        .as_slice()
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Side;
    use chess_engine::Board;

    #[test]
    fn test_plain_board() {
        let game = Game::from_board(
            Board::from_layout("4k3/8/8/8/8/8/8/4K3").unwrap(),
            Side::Friendly,
        );
        let text = board(&game);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  .  .  .  .  k  .  .  . ");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h");
    }

    #[test]
    fn test_markers_shown() {
        let mut game = Game::from_board(
            Board::from_layout("8/8/8/8/8/8/3n4/3R4").unwrap(),
            Side::Friendly,
        );
        game.select(Square::new(3, 0)).unwrap();
        let text = board(&game);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[6], "2  .  .  . [n] .  .  .  . ");
        assert_eq!(lines[7], "1  *  *  *  R  *  *  *  * ");
    }

    #[test]
    fn test_move_list() {
        let game = Game::from_board(
            Board::from_layout("8/8/8/8/8/8/8/N7").unwrap(),
            Side::Friendly,
        );
        assert_eq!(move_list(&game), "a1-b3 a1-c2");
    }

    #[test]
    fn test_events() {
        let lines = events(&[
            GameEvent::Moved {
                side: Side::Friendly,
                from: Square::new(4, 1),
                to: Square::new(4, 3),
            },
            GameEvent::TurnForfeited {
                side: Side::Opponent,
            },
        ]);
        assert_eq!(lines, "Friendly moved e2-e4\nOpponent forfeited the turn");
    }
}
