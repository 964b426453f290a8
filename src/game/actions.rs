//! # Action Outcomes Module
//!
//! The outcome vocabulary the engine returns to its caller, plus the
//! two-step targeted-action protocol for shoot/throw.
//!
//! Expected user-facing conditions (`NoArrows`, `NoRocks`, `Blocked`) are
//! outcome variants, never errors: running out of ammunition is part of
//! the game, not a failure of the engine.

use crate::cave::Room;
use serde::{Deserialize, Serialize};

/// One event produced while resolving a single `attempt_move` call.
///
/// Several events may co-occur in one turn (a move that lands on bats and
/// then a rock cache yields three), so the engine returns an ordered list
/// rather than a single tag. The order is the documented resolution
/// order: Wumpus collision, pit, bats, arrow pickup, rock pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveEvent {
    /// The player stepped through an exit into a new room
    Moved { to: Room },
    /// No passage in that direction; nothing changed
    Blocked,
    /// The player ended the turn in the Wumpus's room. Terminal.
    Eaten,
    /// The player stepped into a bottomless pit. Terminal.
    FellInPit,
    /// Bats carried the player to a random room
    CarriedByBats { to: Room },
    /// The player collected an arrow cache
    FoundArrow,
    /// The player collected a rock cache
    FoundRock,
    /// The Wumpus died this turn. Part of the outcome vocabulary for
    /// callers; the current rules only kill the Wumpus via
    /// [`ShootOutcome::Hit`]
    WumpusKilled,
}

/// Outcome of a single `attempt_shoot` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShootOutcome {
    /// The arrow flew into the Wumpus's room. Terminal win.
    Hit,
    /// The arrow missed; the Wumpus was alerted and may have moved
    Miss,
    /// The quiver was empty; nothing changed
    NoArrows,
    /// The arrow missed and it was the last one. The player is now
    /// defenseless and the Wumpus begins to hunt. Still `Exploring`.
    OutOfAmmoWarning,
}

/// Outcome of a single `attempt_throw` call. Throws are probes: they
/// classify the target room without mutating any hazard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrowOutcome {
    /// The rock struck something large and angry
    WumpusNear,
    /// Frantic squeaking from the target room
    BatsNear,
    /// The rock fell without ever landing
    PitNear,
    /// A faint clink; empty room (or no passage at all)
    Empty,
    /// The pouch was empty; nothing changed
    NoRocks,
}

/// Kind of action awaiting a direction choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetedActionKind {
    ShootArrow,
    ThrowRock,
}

/// Handle for an action begun but not yet aimed.
///
/// The presentation layer obtains one from `begin_targeted_action`, asks
/// the player for a direction, and feeds both back through
/// `resolve_targeted_action`. No closures over mutable state required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    pub kind: TargetedActionKind,
}

/// Outcome of resolving a pending targeted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetedOutcome {
    Shot(ShootOutcome),
    Threw(ThrowOutcome),
}

/// What the player can sense about neighboring rooms from where they
/// stand: bloodstains for the Wumpus, squeaking for bats, a draft for a
/// pit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoomSenses {
    pub wumpus_near: bool,
    pub bats_near: bool,
    pub pit_near: bool,
}
