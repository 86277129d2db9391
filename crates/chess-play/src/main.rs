//! Chess Play - play against the engine in the terminal.
//!
//! Reads typed moves for the human side and runs the engine for the other
//! side on a blocking worker with a per-turn deadline. With `--self-play`
//! the engine plays both sides.

mod config;
mod input;
mod render;
mod turn;

use chess_engine::{Game, GameError, Searcher};
use clap::Parser;
use config::{Overrides, PlayConfig};
use input::{Command, HELP};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use turn::{engine_turn, EngineTurn};

/// Chess Play - play against the engine in the terminal.
#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Play king-capture chess against a minimax engine")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Engine search depth in plies (1-6)
    #[arg(long)]
    depth: Option<u8>,

    /// Time the engine gets per turn in milliseconds
    #[arg(long)]
    budget_ms: Option<u64>,

    /// Let the engine play both sides
    #[arg(long)]
    self_play: bool,

    /// Stop after this many plies
    #[arg(long)]
    max_plies: Option<u32>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            depth: self.depth,
            turn_budget_ms: self.budget_ms,
            self_play: self.self_play,
            max_plies: self.max_plies,
        }
    }
}

/// What the human turn loop decided.
enum HumanTurn {
    Done,
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let path = args.config.clone().unwrap_or_else(PlayConfig::default_path);
    let config = PlayConfig::load(&path)?
        .apply(&args.overrides())
        .validate()?;

    tracing::info!("Starting chess-play");
    tracing::info!("Config: {:?}", path);
    tracing::info!(
        depth = config.depth,
        budget_ms = config.turn_budget_ms,
        self_play = config.self_play,
        "engine settings"
    );

    let mut game = Game::new();
    let mut searcher = Searcher::new(config.search_config());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut plies = 0u32;

    if !config.self_play {
        println!("{}", HELP);
    }

    while !game.is_over() && plies < config.max_plies {
        let side = game.to_move();
        if config.engine_plays(side) {
            let (g, s, turn) = engine_turn(game, searcher, config.turn_budget()).await?;
            game = g;
            searcher = s;
            match turn {
                EngineTurn::Moved(m) => println!("{} plays {}", side, m),
                EngineTurn::Rejected(m, e) => println!("{} tried {} ({}), turn passed", side, m, e),
                EngineTurn::NoMoves => println!("{} has no moves", side),
                EngineTurn::TimedOut => println!("{} ran out of time", side),
            }
        } else {
            println!("\n{}", render::board(&game));
            match human_turn(&mut game, &mut lines).await? {
                HumanTurn::Done => {}
                HumanTurn::Quit => break,
            }
        }

        let events = game.drain_events();
        if !events.is_empty() {
            println!("{}", render::events(&events));
        }
        plies += 1;
    }

    println!("\n{}", render::board(&game));
    match game.winner() {
        Some(winner) => println!("{} wins by capturing the king", winner),
        None if plies >= config.max_plies => println!("Stopped after {} plies", plies),
        None => println!("Game abandoned"),
    }
    tracing::info!(plies, history = game.history().len(), "game finished");

    Ok(())
}

/// Reads commands until the human commits a move, passes or quits.
async fn human_turn<R>(
    game: &mut Game,
    lines: &mut tokio::io::Lines<R>,
) -> anyhow::Result<HumanTurn>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    loop {
        println!("{} to move:", game.to_move());
        let Some(line) = lines.next_line().await? else {
            return Ok(HumanTurn::Quit);
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Play { from, to } => match game.play(from, to) {
                Ok(_) => return Ok(HumanTurn::Done),
                Err(e) => println!("{}", e),
            },
            Command::Select(sq) => match game.select(sq).map(|markers| markers.count()) {
                Ok(0) => println!("the piece on {} cannot move", sq),
                Ok(_) => println!("{}", render::board(game)),
                Err(e) => println!("{}", e),
            },
            Command::Deselect => {
                game.deselect();
                println!("{}", render::board(game));
            }
            Command::Moves => println!("{}", render::move_list(game)),
            Command::Pass => {
                return match game.forfeit_turn() {
                    Ok(()) => Ok(HumanTurn::Done),
                    Err(GameError::GameOver) => Ok(HumanTurn::Quit),
                    Err(e) => Err(e.into()),
                };
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => return Ok(HumanTurn::Quit),
        }
    }
}
