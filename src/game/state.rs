//! # Session State Module
//!
//! The mutable core of a single game session.
//!
//! A [`SessionState`] is created fresh by the entity placer at "new game"
//! or "retry", mutated turn by turn by the engine, and discarded at game
//! over or restart. No state persists across sessions.

use crate::cave::Room;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Phase of the session state machine. All engine operations apply only
/// while `Exploring`; `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play
    Exploring,
    /// The Wumpus is dead
    Won,
    /// The player is dead
    Lost(LossReason),
}

impl GamePhase {
    /// Whether the session has reached a terminal phase.
    pub fn is_terminal(self) -> bool {
        self != GamePhase::Exploring
    }
}

/// Why a session was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// The player ended a turn in the Wumpus's room
    EatenByWumpus,
    /// The player stepped into a bottomless pit
    FellIntoPit,
}

/// Mutable session state.
///
/// Room sets use `BTreeSet` so iteration order (and therefore debug and
/// JSON output) is deterministic for a given state.
///
/// Placement invariants, established by the entity placer and checked by
/// [`validate`](SessionState::validate):
/// - `player_room` and `wumpus_room` are valid, distinct room ids
/// - no hazard or resource set contains the player's or Wumpus's
///   starting room
/// - the four sets are pairwise disjoint
///
/// The player and Wumpus may come to share a room later through movement;
/// that is exactly what triggers the eaten check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The room the player currently occupies
    pub player_room: Room,
    /// The room the Wumpus currently occupies
    pub wumpus_room: Room,
    /// Arrows remaining in the player's quiver
    pub arrow_count: u32,
    /// Rocks remaining in the player's pouch
    pub rock_count: u32,
    /// Rooms containing bat swarms
    pub bat_rooms: BTreeSet<Room>,
    /// Rooms containing bottomless pits
    pub pit_rooms: BTreeSet<Room>,
    /// Rooms holding an uncollected arrow cache; shrinks as collected
    pub arrow_pickup_rooms: BTreeSet<Room>,
    /// Rooms holding an uncollected rock cache; shrinks as collected
    pub rock_pickup_rooms: BTreeSet<Room>,
    /// Per-turn chance (out of 100) the Wumpus wanders while arrows remain
    pub aggression_chance: u8,
    /// Current phase of the session state machine
    pub phase: GamePhase,
}

impl SessionState {
    /// Whether a room holds any hazard (pit or bats).
    pub fn is_hazard(&self, room: Room) -> bool {
        self.pit_rooms.contains(&room) || self.bat_rooms.contains(&room)
    }

    /// Checks the placement invariants. Meant for the moment right after
    /// placement; later mutation may legitimately break them (the Wumpus
    /// walking into the player's room, for one).
    pub fn validate(&self) -> Result<(), String> {
        if self.player_room == self.wumpus_room {
            return Err("player and Wumpus share a starting room".to_string());
        }

        let sets: [(&str, &BTreeSet<Room>); 4] = [
            ("bat_rooms", &self.bat_rooms),
            ("pit_rooms", &self.pit_rooms),
            ("arrow_pickup_rooms", &self.arrow_pickup_rooms),
            ("rock_pickup_rooms", &self.rock_pickup_rooms),
        ];

        for (name, set) in sets.iter() {
            if set.contains(&self.player_room) {
                return Err(format!("{} contains the player's starting room", name));
            }
            if set.contains(&self.wumpus_room) {
                return Err(format!("{} contains the Wumpus's starting room", name));
            }
        }

        for (i, (name_a, set_a)) in sets.iter().enumerate() {
            for (name_b, set_b) in sets.iter().skip(i + 1) {
                if !set_a.is_disjoint(set_b) {
                    return Err(format!("{} and {} overlap", name_a, name_b));
                }
            }
        }

        Ok(())
    }
}
