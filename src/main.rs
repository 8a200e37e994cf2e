//! Self-play driver: two random players until the game ends.
//!
//! Usage: `cyberchess [seed]`

use std::process::ExitCode;

use cyberchess::board::MemoryNarrator;
use cyberchess::{Game, GameConfig, PlayerKind};

const MAX_PLIES: u32 = 500;

fn main() -> ExitCode {
    let seed = match std::env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        None => None,
        Some(Ok(seed)) => Some(seed),
        Some(Err(err)) => {
            eprintln!("invalid seed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let console = MemoryNarrator::new();
    let mut game = Game::new(GameConfig {
        white: PlayerKind::RandomAi,
        black: PlayerKind::RandomAi,
        seed,
        ..GameConfig::default()
    })
    .with_narrator(console.clone());

    let mut printed = 0;
    for _ in 0..MAX_PLIES {
        if let Err(err) = game.tick() {
            eprintln!("engine error: {err}");
            return ExitCode::FAILURE;
        }
        for line in &game.move_log()[printed..] {
            println!("{line}");
        }
        printed = game.move_log().len();
        for line in console.drain() {
            println!("  {line}");
        }
        if game.outcome().is_some() {
            break;
        }
    }

    println!("{}", game.board());
    match game.outcome() {
        Some(outcome) => println!("{outcome}"),
        None => println!("no result after {MAX_PLIES} plies"),
    }
    ExitCode::SUCCESS
}
