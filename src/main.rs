//! # Hunt the Wumpus Main Entry Point
//!
//! Initializes logging, builds the game engine, and runs a line-based
//! terminal game loop. This driver is the only place that decides
//! process exit; the engine itself never terminates anything.

use clap::Parser;
use log::info;
use std::io::{self, BufRead, Write};
use wumpus::{
    input::{parse_command, parse_direction},
    rendering, Command, Difficulty, GameConfig, GameEngine, PendingAction, TargetedOutcome,
    WumpusResult,
};

/// Command line arguments for Hunt the Wumpus.
#[derive(Parser, Debug)]
#[command(name = "wumpus")]
#[command(about = "A turn-based Hunt the Wumpus game")]
#[command(version)]
struct Args {
    /// Random seed for entity placement (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Difficulty level, varies how restless the Wumpus is
    #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> WumpusResult<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&args.log_level),
    )
    .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Starting Hunt the Wumpus v{} (seed {})", wumpus::VERSION, seed);

    let mut config = GameConfig::new();
    config.apply_difficulty(args.difficulty);
    let mut engine = GameEngine::new(config, seed)?;

    println!("{}", rendering::INSTRUCTIONS);
    println!();

    run_game_loop(&mut engine)
}

/// Reads commands from stdin until the player quits.
fn run_game_loop(engine: &mut GameEngine) -> WumpusResult<()> {
    let stdin = io::stdin();
    let mut pending: Option<PendingAction> = None;

    println!("{}", rendering::room_status(engine)?);
    prompt(pending)?;

    for line in stdin.lock().lines() {
        let line = line?;

        if let Some(action) = pending.take() {
            match parse_direction(line.trim().to_lowercase().as_str()) {
                Some(direction) => {
                    let outcome = engine.resolve_targeted_action(action, direction)?;
                    match outcome {
                        TargetedOutcome::Shot(shot) => {
                            println!("{}", rendering::shoot_message(shot));
                        }
                        TargetedOutcome::Threw(threw) => {
                            println!("{}", rendering::throw_message(threw));
                        }
                    }
                    after_turn(engine)?;
                }
                None => println!("Never mind, then."),
            }
            prompt(pending)?;
            continue;
        }

        let command = parse_command(&line);
        let turn_command = matches!(
            command,
            Some(Command::Move(_))
                | Some(Command::Shoot(_))
                | Some(Command::Throw(_))
                | Some(Command::BeginTargeted(_))
        );
        if engine.state.phase.is_terminal() && turn_command {
            println!("The hunt is over. Type 'new' to play again or 'quit' to leave.");
            prompt(pending)?;
            continue;
        }

        match command {
            Some(Command::Move(direction)) => {
                let events = engine.attempt_move(direction)?;
                for message in rendering::move_messages(&events) {
                    println!("{}", message);
                }
                after_turn(engine)?;
            }
            Some(Command::Shoot(direction)) => {
                let outcome = engine.attempt_shoot(direction)?;
                println!("{}", rendering::shoot_message(outcome));
                after_turn(engine)?;
            }
            Some(Command::Throw(direction)) => {
                let outcome = engine.attempt_throw(direction)?;
                println!("{}", rendering::throw_message(outcome));
            }
            Some(Command::BeginTargeted(kind)) => {
                pending = Some(engine.begin_targeted_action(kind));
                println!("Choose a direction (up/down/left/right):");
            }
            Some(Command::Look) => {
                println!("{}", rendering::room_status(engine)?);
            }
            Some(Command::Dump) => {
                println!("{}", serde_json::to_string_pretty(&engine.state)?);
            }
            Some(Command::Help) => {
                println!("{}", rendering::HELP);
            }
            Some(Command::NewGame) => {
                engine.reset()?;
                println!("A fresh cave swallows you whole.");
                println!("{}", rendering::room_status(engine)?);
            }
            Some(Command::Quit) => {
                println!("You flee the cave. The Wumpus lives on.");
                return Ok(());
            }
            None => {
                println!("Unknown command; type 'help' for the list.");
            }
        }
        prompt(pending)?;
    }

    Ok(())
}

/// Prints the post-turn view: either the game-over banner or the room
/// status for the next decision.
fn after_turn(engine: &GameEngine) -> WumpusResult<()> {
    match rendering::game_over_banner(engine.state.phase) {
        Some(banner) => println!("{}", banner),
        None => println!("{}", rendering::room_status(engine)?),
    }
    Ok(())
}

fn prompt(pending: Option<PendingAction>) -> WumpusResult<()> {
    if pending.is_none() {
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
