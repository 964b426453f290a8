//! # Game Module
//!
//! Session state, turn resolution, and difficulty configuration.
//!
//! This module contains the mutable core of a game session:
//! - Session state and its lifecycle (fresh per game, discarded on restart)
//! - Outcome vocabulary for move/shoot/throw resolution
//! - The engine driving turn resolution and the Wumpus policy

pub mod actions;
pub mod engine;
pub mod state;

pub use actions::*;
pub use engine::*;
pub use state::*;

use crate::config;
use serde::{Deserialize, Serialize};

/// Difficulty levels. Difficulty varies only the Wumpus aggression
/// chance; population counts are fixed constants by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Per-turn chance (out of 100) that the Wumpus wanders while the
    /// player still has arrows.
    ///
    /// # Examples
    ///
    /// ```
    /// use wumpus::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.aggression_chance(), 30);
    /// assert_eq!(Difficulty::Hard.aggression_chance(), 90);
    /// ```
    pub fn aggression_chance(self) -> u8 {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 60,
            Difficulty::Hard => 90,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

/// Configuration for a game session.
///
/// Specifies hazard/resource population counts, starting inventory, and
/// the difficulty-derived aggression chance. Counts are validated against
/// cave capacity at placement time, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of bat swarms to place
    pub num_bats: u32,
    /// Number of bottomless pits to place
    pub num_pits: u32,
    /// Number of arrow caches to place
    pub num_arrow_caches: u32,
    /// Number of rock caches to place
    pub num_rock_caches: u32,
    /// Arrows in the quiver at session start
    pub starting_arrows: u32,
    /// Rocks in the pouch at session start
    pub starting_rocks: u32,
    /// Per-turn chance (out of 100) the Wumpus wanders while arrows remain
    pub aggression_chance: u8,
    /// Whether the Wumpus moves at all; pinning it makes every turn
    /// deterministic apart from bat relocation
    pub mobile_wumpus: bool,
}

impl GameConfig {
    /// Creates the default configuration: 2 bats, 1 pit, 3 arrow caches,
    /// 3 rock caches, 1 starting arrow, 2 starting rocks, medium
    /// aggression.
    pub fn new() -> Self {
        Self {
            num_bats: config::NUM_BATS,
            num_pits: config::NUM_PITS,
            num_arrow_caches: config::NUM_ARROW_CACHES,
            num_rock_caches: config::NUM_ROCK_CACHES,
            starting_arrows: config::STARTING_ARROWS,
            starting_rocks: config::STARTING_ROCKS,
            aggression_chance: config::DEFAULT_AGGRESSION_CHANCE,
            mobile_wumpus: true,
        }
    }

    /// Sets only the aggression chance from a difficulty level.
    pub fn apply_difficulty(&mut self, level: Difficulty) {
        self.aggression_chance = level.aggression_chance();
    }

    /// Total rooms this configuration reserves during placement,
    /// including the player's and Wumpus's starting rooms. Saturates on
    /// absurd counts so the capacity guard sees a huge number instead of
    /// an overflow panic.
    pub fn reserved_rooms(&self) -> u32 {
        2u32.saturating_add(self.num_bats)
            .saturating_add(self.num_pits)
            .saturating_add(self.num_arrow_caches)
            .saturating_add(self.num_rock_caches)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_counts() {
        let config = GameConfig::new();
        assert_eq!(config.num_bats, 2);
        assert_eq!(config.num_pits, 1);
        assert_eq!(config.num_arrow_caches, 3);
        assert_eq!(config.num_rock_caches, 3);
        assert_eq!(config.starting_arrows, 1);
        assert_eq!(config.starting_rocks, 2);
        assert_eq!(config.reserved_rooms(), 11);
    }

    #[test]
    fn test_apply_difficulty_touches_only_aggression() {
        let mut config = GameConfig::new();
        let baseline = config.clone();
        config.apply_difficulty(Difficulty::Hard);
        assert_eq!(config.aggression_chance, 90);
        assert_eq!(config.num_bats, baseline.num_bats);
        assert_eq!(config.num_pits, baseline.num_pits);
        assert_eq!(config.num_arrow_caches, baseline.num_arrow_caches);
        assert_eq!(config.num_rock_caches, baseline.num_rock_caches);
    }
}
