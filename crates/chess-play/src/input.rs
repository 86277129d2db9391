//! Parsing of typed commands.

use chess_core::{Move, MoveParseError, Square};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error(transparent)]
    Move(#[from] MoveParseError),

    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
}

/// A line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `e2e4`: commit a move.
    Play { from: Square, to: Square },
    /// `e2`: select a piece and show its destinations.
    Select(Square),
    /// Clear the selection.
    Deselect,
    /// List every move for the side to move.
    Moves,
    /// Pass the turn.
    Pass,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, InputError> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "moves" | "m" => return Ok(Command::Moves),
            "deselect" | "d" => return Ok(Command::Deselect),
            "pass" => return Ok(Command::Pass),
            "help" | "h" | "?" => return Ok(Command::Help),
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            _ => {}
        }
        if let Ok(sq) = line.parse::<Square>() {
            return Ok(Command::Select(sq));
        }
        match line.len() {
            4 | 5 => {
                let (from, to) = Move::parse_coords(&line.replace('-', ""))?;
                Ok(Command::Play { from, to })
            }
            _ => Err(InputError::Unknown(line.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  e2e4    move a piece (e2-e4 also works)
  e2      show where the piece on e2 can go
  d       clear the selection
  moves   list every move
  pass    skip the turn
  quit    leave the game";
