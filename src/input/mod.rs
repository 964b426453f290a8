//! # Input Module
//!
//! Text command parsing for the terminal front end.
//!
//! Maps player-typed lines to discrete intents the game loop dispatches
//! into the engine. Parsing never touches game state.

use crate::cave::Direction;
use crate::game::TargetedActionKind;

/// A discrete player intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Walk through an exit
    Move(Direction),
    /// Begin a shoot or throw; the direction comes in a second step
    BeginTargeted(TargetedActionKind),
    /// Shoot an arrow, direction supplied inline ("shoot left")
    Shoot(Direction),
    /// Throw a rock, direction supplied inline ("throw up")
    Throw(Direction),
    /// Re-print what the player can sense from this room
    Look,
    /// Dump the session state as JSON (debugging aid)
    Dump,
    /// Print the command reference
    Help,
    /// Start a fresh game
    NewGame,
    /// Leave the cave the coward's way
    Quit,
}

/// Parses one direction word. Accepts full words and single letters.
pub fn parse_direction(word: &str) -> Option<Direction> {
    match word {
        "up" | "u" | "north" => Some(Direction::Up),
        "down" | "d" | "south" => Some(Direction::Down),
        "left" | "l" | "west" => Some(Direction::Left),
        "right" | "r" | "east" => Some(Direction::Right),
        _ => None,
    }
}

/// Parses one input line into a command.
///
/// Returns `None` for empty lines and anything unrecognized; the caller
/// decides how loudly to complain.
///
/// # Examples
///
/// ```
/// use wumpus::{input::parse_command, Command, Direction};
///
/// assert_eq!(parse_command("up"), Some(Command::Move(Direction::Up)));
/// assert_eq!(parse_command("shoot left"), Some(Command::Shoot(Direction::Left)));
/// assert_eq!(parse_command("xyzzy"), None);
/// ```
pub fn parse_command(line: &str) -> Option<Command> {
    let lowered = line.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let head = words.next()?;
    let tail = words.next();

    match head {
        "shoot" | "s" => match tail {
            Some(word) => parse_direction(word).map(Command::Shoot),
            None => Some(Command::BeginTargeted(TargetedActionKind::ShootArrow)),
        },
        "throw" | "t" => match tail {
            Some(word) => parse_direction(word).map(Command::Throw),
            None => Some(Command::BeginTargeted(TargetedActionKind::ThrowRock)),
        },
        "look" => Some(Command::Look),
        "dump" => Some(Command::Dump),
        "help" | "h" | "?" => Some(Command::Help),
        "new" | "retry" => Some(Command::NewGame),
        "quit" | "q" | "exit" => Some(Command::Quit),
        word => parse_direction(word).map(Command::Move),
    }
}
