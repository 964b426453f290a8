//! # Hunt the Wumpus
//!
//! A turn-based exploration game played on a fixed graph of 20 connected
//! rooms. A hidden predator (the Wumpus), movable hazards (bats), static
//! hazards (pits), and collectible resources (arrows, rocks) are placed
//! pseudo-randomly in rooms. The player moves room to room, may throw a
//! rock to probe an adjacent room, or shoot an arrow to attempt a kill;
//! the Wumpus reacts to player actions with a simple adaptive policy.
//!
//! ## Architecture Overview
//!
//! The crate is split into a pure game-state engine and a thin terminal
//! front end that calls into it:
//!
//! - **Cave**: immutable 20-room topology with four directional exits
//! - **Generation**: constraint-respecting pseudo-random entity placement
//! - **Game**: session state, turn resolution, and the Wumpus policy
//! - **Input/Rendering**: text command parsing and status formatting
//!
//! All session state lives in an explicit [`SessionState`] value owned by
//! the engine; nothing is process-global, so multiple independent sessions
//! and seeded deterministic tests both work.

pub mod cave;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

pub use cave::{CaveGraph, Direction, ExitSet, Room};
pub use game::{
    Difficulty, GameConfig, GameEngine, GamePhase, LossReason, MoveEvent, PendingAction,
    RoomSenses, SessionState, ShootOutcome, TargetedActionKind, TargetedOutcome, ThrowOutcome,
};
pub use generation::EntityPlacer;
pub use input::Command;

/// Core error type for the Wumpus game engine.
#[derive(thiserror::Error, Debug)]
pub enum WumpusError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Room id outside [1, 20]
    #[error("Invalid room id: {0}")]
    InvalidRoom(Room),

    /// Configuration reserves more distinct rooms than the cave holds
    #[error("Placement exhausted: {requested} reserved rooms, {available} available")]
    PlacementExhausted { requested: u32, available: u32 },

    /// Game state is invalid for the requested operation
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Wumpus codebase.
pub type WumpusResult<T> = Result<T, WumpusError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Number of rooms in the cave
    pub const NUM_ROOMS: u8 = 20;

    /// Number of bat swarms placed at session start
    pub const NUM_BATS: u32 = 2;

    /// Number of bottomless pits placed at session start
    pub const NUM_PITS: u32 = 1;

    /// Number of arrow caches placed at session start
    pub const NUM_ARROW_CACHES: u32 = 3;

    /// Number of rock caches placed at session start
    pub const NUM_ROCK_CACHES: u32 = 3;

    /// Arrows in the player's quiver at session start
    pub const STARTING_ARROWS: u32 = 1;

    /// Rocks in the player's pouch at session start
    pub const STARTING_ROCKS: u32 = 2;

    /// Default per-turn chance (out of 100) that the Wumpus wanders
    pub const DEFAULT_AGGRESSION_CHANCE: u8 = 60;
}
