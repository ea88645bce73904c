//! Console game: a human plays against the minimax engine, or against
//! another human when no engine side is given.
//!
//! Enter moves as four characters (`e2e4`). Other commands: `moves`,
//! `reset`, `quit`.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use chess_logic::game_controller::controller::GameController;
use chess_logic::game_controller::events::GameEvent;
use chess_logic::game_state::chess_types::{Move, Player};
use chess_logic::search::minimax::{MinimaxSearch, SearchConfig};
use chess_logic::search::threading::spawn_search;
use chess_logic::utils::render_game_state::{render_position, render_status};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    A,
    B,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::A => Player::A,
            Side::B => Player::B,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Play chess in the terminal")]
struct Args {
    /// Side played by the engine; omit for two human players.
    #[arg(long, value_enum)]
    engine: Option<Side>,

    /// Engine search depth in plies.
    #[arg(long, default_value_t = SearchConfig::default().depth)]
    depth: u8,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let engine_side = args.engine.map(Player::from);
    let search = MinimaxSearch::new(SearchConfig::with_depth(args.depth));

    let mut game = GameController::new();
    let events = game.subscribe();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        for event in events.try_iter() {
            if let GameEvent::PlayerInCheck(player) = event {
                writeln!(stdout, "{player:?} is in check")?;
            }
        }
        writeln!(stdout, "\n{}\n{}", render_position(game.position()), render_status(&game))?;

        if game.state().is_finished() {
            write!(stdout, "new game? (reset/quit) > ")?;
        } else if Some(game.side_to_move()) == engine_side {
            let handle = spawn_search(search.clone(), game.position().clone());
            write!(stdout, "thinking")?;
            stdout.flush()?;
            let outcome = loop {
                if let Some(result) = handle.try_result() {
                    break result;
                }
                write!(stdout, ".")?;
                stdout.flush()?;
                thread::sleep(Duration::from_millis(200));
            };
            writeln!(stdout)?;
            match outcome {
                Ok(outcome) => {
                    writeln!(stdout, "engine plays {}", outcome.best_move)?;
                    if let Err(err) = game.propose_move(outcome.best_move) {
                        writeln!(stdout, "engine move rejected: {err}")?;
                        game.end();
                    }
                }
                Err(err) => {
                    writeln!(stdout, "engine failed: {err}")?;
                    game.end();
                }
            }
            continue;
        } else {
            write!(stdout, "{:?} > ", game.side_to_move())?;
        }
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => return Ok(()),
            "reset" => game.reset(),
            "moves" => {
                let moves: Vec<String> = game.legal_moves().iter().map(Move::to_string).collect();
                writeln!(stdout, "{}", moves.join(" "))?;
            }
            text => match text.parse::<Move>() {
                Ok(mv) => {
                    if let Err(err) = game.propose_move(mv) {
                        writeln!(stdout, "{err}")?;
                    }
                }
                Err(err) => writeln!(stdout, "{err}")?,
            },
        }
    }
}
