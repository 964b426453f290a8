//! # Game Engine Module
//!
//! Turn resolution and the Wumpus movement policy.
//!
//! The engine owns the mutable [`SessionState`] plus the cave, the
//! configuration, and the random stream. Each player intent (move, shoot,
//! throw, reset) is processed to completion, including the Wumpus policy
//! invocation and all room-entry checks, before control returns to the
//! caller. Everything is synchronous and single-threaded.

use crate::cave::{CaveGraph, Direction, Room, ROOM_COUNT};
use crate::game::{
    Difficulty, GameConfig, GamePhase, LossReason, MoveEvent, PendingAction, RoomSenses,
    SessionState, ShootOutcome, TargetedActionKind, TargetedOutcome, ThrowOutcome,
};
use crate::generation::EntityPlacer;
use crate::{WumpusError, WumpusResult};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// One check performed when the player enters a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomCheck {
    WumpusCollision,
    Pit,
    Bats,
    ArrowPickup,
    RockPickup,
}

/// The fixed room-entry resolution order. Death checks short-circuit the
/// rest of the list; the independent checks after a bat relocation are
/// evaluated at the room the bats dropped the player in.
pub const ROOM_ENTRY_CHECKS: [RoomCheck; 5] = [
    RoomCheck::WumpusCollision,
    RoomCheck::Pit,
    RoomCheck::Bats,
    RoomCheck::ArrowPickup,
    RoomCheck::RockPickup,
];

/// The game engine: session state plus the machinery that mutates it.
///
/// # Examples
///
/// ```
/// use wumpus::{GameConfig, GameEngine};
///
/// let engine = GameEngine::new(GameConfig::default(), 12345).unwrap();
/// assert_ne!(engine.state.player_room, engine.state.wumpus_room);
/// ```
#[derive(Debug)]
pub struct GameEngine {
    /// Current session state. Public so tests and the presentation layer
    /// can read it directly; mutate it only through engine operations.
    pub state: SessionState,
    cave: CaveGraph,
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine with the reference cave layout and a seeded
    /// random stream, placing all entities.
    pub fn new(config: GameConfig, seed: u64) -> WumpusResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Creates an engine from an existing random stream, for callers that
    /// want to control exactly what the stream has already produced.
    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> WumpusResult<Self> {
        let cave = CaveGraph::reference();
        let state = EntityPlacer::place(&mut rng, &cave, &config)?;
        info!(
            "new session: player in room {}, difficulty chance {}",
            state.player_room, state.aggression_chance
        );
        Ok(Self {
            state,
            cave,
            config,
            rng,
        })
    }

    /// Discards the session and re-places everything on the same random
    /// stream. Used for "retry" after a game over.
    pub fn reset(&mut self) -> WumpusResult<()> {
        self.state = EntityPlacer::place(&mut self.rng, &self.cave, &self.config)?;
        info!("session reset: player in room {}", self.state.player_room);
        Ok(())
    }

    /// The cave this engine plays on.
    pub fn cave(&self) -> &CaveGraph {
        &self.cave
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Sets the aggression chance from a difficulty level, on both the
    /// config (for future resets) and the live session.
    pub fn apply_difficulty(&mut self, level: Difficulty) {
        self.config.apply_difficulty(level);
        self.state.aggression_chance = self.config.aggression_chance;
    }

    /// Attempts to move the player through an exit.
    ///
    /// A missing exit yields `[Blocked]` with no state change at all; the
    /// Wumpus does not get a turn out of a rejected move. Otherwise the
    /// player steps through, the Wumpus policy runs, and the room-entry
    /// checks resolve in [`ROOM_ENTRY_CHECKS`] order. The returned events
    /// are in resolution order.
    pub fn attempt_move(&mut self, direction: Direction) -> WumpusResult<Vec<MoveEvent>> {
        self.ensure_exploring()?;

        let target = match self.cave.exit(self.state.player_room, direction)? {
            Some(room) => room,
            None => {
                debug!(
                    "move {} from room {} blocked",
                    direction, self.state.player_room
                );
                return Ok(vec![MoveEvent::Blocked]);
            }
        };

        self.state.player_room = target;
        let mut events = vec![MoveEvent::Moved { to: target }];
        self.move_wumpus()?;
        self.resolve_room_entry(&mut events)?;
        Ok(events)
    }

    /// Attempts to shoot an arrow through an exit.
    ///
    /// An empty quiver yields `NoArrows` without touching any state. A
    /// hit transitions to `Won`. A miss alerts the Wumpus (the movement
    /// policy runs immediately); if the miss spent the last arrow the
    /// outcome is `OutOfAmmoWarning` so the caller can warn that the hunt
    /// has turned. The session stays `Exploring` unless the newly
    /// defenseless player had the Wumpus next door: the charge into the
    /// player's room is a loss resolved in this same call, never left as
    /// a shared-room limbo for the next turn to discover.
    pub fn attempt_shoot(&mut self, direction: Direction) -> WumpusResult<ShootOutcome> {
        self.ensure_exploring()?;

        if self.state.arrow_count == 0 {
            return Ok(ShootOutcome::NoArrows);
        }
        self.state.arrow_count -= 1;

        if self.cave.exit(self.state.player_room, direction)? == Some(self.state.wumpus_room) {
            info!("arrow hit: the Wumpus is dead");
            self.state.phase = GamePhase::Won;
            return Ok(ShootOutcome::Hit);
        }

        debug!("arrow missed into {} from {}", direction, self.state.player_room);
        self.move_wumpus()?;

        // A last-arrow miss flips the policy into chase mode, and an
        // adjacent Wumpus charges straight in. That collision resolves
        // now, not on the next turn.
        if self.state.wumpus_room == self.state.player_room {
            info!("the alerted Wumpus charges into room {}", self.state.player_room);
            self.state.phase = GamePhase::Lost(LossReason::EatenByWumpus);
            return Ok(ShootOutcome::OutOfAmmoWarning);
        }

        if self.state.arrow_count == 0 {
            Ok(ShootOutcome::OutOfAmmoWarning)
        } else {
            Ok(ShootOutcome::Miss)
        }
    }

    /// Attempts to throw a rock through an exit, probing what the target
    /// room holds. Costs one rock; mutates nothing else.
    pub fn attempt_throw(&mut self, direction: Direction) -> WumpusResult<ThrowOutcome> {
        self.ensure_exploring()?;

        if self.state.rock_count == 0 {
            return Ok(ThrowOutcome::NoRocks);
        }
        self.state.rock_count -= 1;

        let outcome = match self.cave.exit(self.state.player_room, direction)? {
            Some(room) if room == self.state.wumpus_room => ThrowOutcome::WumpusNear,
            Some(room) if self.state.bat_rooms.contains(&room) => ThrowOutcome::BatsNear,
            Some(room) if self.state.pit_rooms.contains(&room) => ThrowOutcome::PitNear,
            _ => ThrowOutcome::Empty,
        };
        Ok(outcome)
    }

    /// Begins a shoot or throw that still needs a direction. The handle
    /// carries no state beyond the kind; the presentation layer holds it
    /// while prompting the player.
    pub fn begin_targeted_action(&self, kind: TargetedActionKind) -> PendingAction {
        PendingAction { kind }
    }

    /// Resolves a pending targeted action with the chosen direction.
    pub fn resolve_targeted_action(
        &mut self,
        pending: PendingAction,
        direction: Direction,
    ) -> WumpusResult<TargetedOutcome> {
        match pending.kind {
            TargetedActionKind::ShootArrow => {
                Ok(TargetedOutcome::Shot(self.attempt_shoot(direction)?))
            }
            TargetedActionKind::ThrowRock => {
                Ok(TargetedOutcome::Threw(self.attempt_throw(direction)?))
            }
        }
    }

    /// What the player can sense about the rooms adjacent to theirs.
    pub fn senses(&self) -> WumpusResult<RoomSenses> {
        let neighbors = self.cave.neighbors(self.state.player_room)?;
        Ok(RoomSenses {
            wumpus_near: neighbors.contains(&self.state.wumpus_room),
            bats_near: neighbors.iter().any(|r| self.state.bat_rooms.contains(r)),
            pit_near: neighbors.iter().any(|r| self.state.pit_rooms.contains(r)),
        })
    }

    fn ensure_exploring(&self) -> WumpusResult<()> {
        if self.state.phase.is_terminal() {
            Err(WumpusError::InvalidState(
                "session has already ended".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    /// The Wumpus movement policy, invoked after every player move and
    /// after every missed shot.
    ///
    /// While the player still has arrows the Wumpus wanders: with
    /// probability `aggression_chance` out of 100 it moves to a random
    /// neighbor, avoiding the player's room, pits, and bat rooms. Once
    /// the quiver is empty it chases: straight into an adjacent player,
    /// otherwise to the trap-free neighbor whose id is numerically
    /// closest to the player's (first minimal match wins).
    fn move_wumpus(&mut self) -> WumpusResult<()> {
        if !self.config.mobile_wumpus {
            return Ok(());
        }

        let player = self.state.player_room;
        let neighbors = self.cave.neighbors(self.state.wumpus_room)?;

        if self.state.arrow_count > 0 {
            if self.rng.gen_range(1..=100) > u32::from(self.state.aggression_chance) {
                return Ok(());
            }
            let candidates: Vec<Room> = neighbors
                .into_iter()
                .filter(|&room| room != player && !self.state.is_hazard(room))
                .collect();
            if !candidates.is_empty() {
                let choice = candidates[self.rng.gen_range(0..candidates.len())];
                debug!("wumpus wanders {} -> {}", self.state.wumpus_room, choice);
                self.state.wumpus_room = choice;
            }
            return Ok(());
        }

        // Chase mode: the player is defenseless.
        if neighbors.contains(&player) {
            debug!("wumpus charges into room {}", player);
            self.state.wumpus_room = player;
            return Ok(());
        }

        let mut best: Option<(Room, u8)> = None;
        for room in neighbors {
            if self.state.is_hazard(room) {
                continue;
            }
            let diff = room.abs_diff(player);
            if best.map_or(true, |(_, d)| diff < d) {
                best = Some((room, diff));
            }
        }
        if let Some((room, _)) = best {
            debug!("wumpus stalks {} -> {}", self.state.wumpus_room, room);
            self.state.wumpus_room = room;
        }
        Ok(())
    }

    /// Runs the room-entry checks in [`ROOM_ENTRY_CHECKS`] order,
    /// appending an event per triggered check. Death is terminal and
    /// stops the pass.
    fn resolve_room_entry(&mut self, events: &mut Vec<MoveEvent>) -> WumpusResult<()> {
        for check in ROOM_ENTRY_CHECKS {
            let room = self.state.player_room;
            match check {
                RoomCheck::WumpusCollision => {
                    if room == self.state.wumpus_room {
                        info!("player eaten in room {}", room);
                        events.push(MoveEvent::Eaten);
                        self.state.phase = GamePhase::Lost(LossReason::EatenByWumpus);
                        return Ok(());
                    }
                }
                RoomCheck::Pit => {
                    if self.state.pit_rooms.contains(&room) {
                        info!("player fell into the pit in room {}", room);
                        events.push(MoveEvent::FellInPit);
                        self.state.phase = GamePhase::Lost(LossReason::FellIntoPit);
                        return Ok(());
                    }
                }
                RoomCheck::Bats => {
                    if self.state.bat_rooms.contains(&room) {
                        let destination = self.relocate_through_bats()?;
                        events.push(MoveEvent::CarriedByBats { to: destination });
                    }
                }
                RoomCheck::ArrowPickup => {
                    if self.state.arrow_pickup_rooms.remove(&room) {
                        self.state.arrow_count += 1;
                        events.push(MoveEvent::FoundArrow);
                    }
                }
                RoomCheck::RockPickup => {
                    if self.state.rock_pickup_rooms.remove(&room) {
                        self.state.rock_count += 1;
                        events.push(MoveEvent::FoundRock);
                    }
                }
            }
        }
        Ok(())
    }

    /// Bats in the player's room flee to a random other room, then carry
    /// the player to a random room that is not the Wumpus's.
    ///
    /// Relocation happens exactly once per turn, non-recursively: hazards
    /// at the destination are not re-triggered this turn.
    fn relocate_through_bats(&mut self) -> WumpusResult<Room> {
        let player = self.state.player_room;
        self.state.bat_rooms.remove(&player);

        // The roost draw also rejects other swarms' rooms so the swarm
        // count stays constant.
        let new_roost = loop {
            let room = self.rng.gen_range(1..=ROOM_COUNT);
            if room != player && !self.state.bat_rooms.contains(&room) {
                break room;
            }
        };
        self.state.bat_rooms.insert(new_roost);

        let destination = loop {
            let room = self.rng.gen_range(1..=ROOM_COUNT);
            if room != self.state.wumpus_room {
                break room;
            }
        };
        debug!("bats carry the player {} -> {}", player, destination);
        self.state.player_room = destination;
        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine with a hand-built state so tests control every placement.
    fn rigged_engine(mobile_wumpus: bool) -> GameEngine {
        let mut config = GameConfig::new();
        config.mobile_wumpus = mobile_wumpus;
        let mut engine = GameEngine::new(config, 4242).unwrap();
        engine.state = SessionState {
            player_room: 1,
            wumpus_room: 18,
            arrow_count: 1,
            rock_count: 2,
            bat_rooms: Default::default(),
            pit_rooms: Default::default(),
            arrow_pickup_rooms: Default::default(),
            rock_pickup_rooms: Default::default(),
            aggression_chance: 60,
            phase: GamePhase::Exploring,
        };
        engine
    }

    #[test]
    fn test_blocked_move_is_a_no_op() {
        let mut engine = rigged_engine(true);
        engine.state.aggression_chance = 100; // would always wander if given a turn
        engine.state.wumpus_room = 20;

        // Room 1 has no upward passage.
        let events = engine.attempt_move(Direction::Up).unwrap();
        assert_eq!(events, vec![MoveEvent::Blocked]);
        assert_eq!(engine.state.player_room, 1);
        assert_eq!(engine.state.wumpus_room, 20, "rejected move gave the Wumpus a turn");
        assert_eq!(engine.state.phase, GamePhase::Exploring);
    }

    #[test]
    fn test_move_into_empty_room() {
        let mut engine = rigged_engine(false);
        let events = engine.attempt_move(Direction::Down).unwrap();
        assert_eq!(events, vec![MoveEvent::Moved { to: 8 }]);
        assert_eq!(engine.state.player_room, 8);
        assert_eq!(engine.state.phase, GamePhase::Exploring);
    }

    #[test]
    fn test_moving_onto_the_wumpus_is_fatal() {
        let mut engine = rigged_engine(false);
        engine.state.wumpus_room = 8;
        let events = engine.attempt_move(Direction::Down).unwrap();
        assert_eq!(events, vec![MoveEvent::Moved { to: 8 }, MoveEvent::Eaten]);
        assert_eq!(
            engine.state.phase,
            GamePhase::Lost(LossReason::EatenByWumpus)
        );
    }

    #[test]
    fn test_defenseless_player_gets_chased_down() {
        // Player in room 6 steps up into 5; the Wumpus in room 1 sees an
        // adjacent defenseless player and charges.
        let mut engine = rigged_engine(true);
        engine.state.player_room = 6;
        engine.state.wumpus_room = 1;
        engine.state.arrow_count = 0;

        let events = engine.attempt_move(Direction::Up).unwrap();
        assert_eq!(events, vec![MoveEvent::Moved { to: 5 }, MoveEvent::Eaten]);
        assert_eq!(engine.state.wumpus_room, 5);
        assert_eq!(
            engine.state.phase,
            GamePhase::Lost(LossReason::EatenByWumpus)
        );
    }

    #[test]
    fn test_chase_prefers_numerically_closest_room() {
        // Wumpus in 20 (neighbors 13, 16, 19), player in 17, no arrows.
        // 17 is not adjacent, so it closes distance: |13-17|=4, |16-17|=1,
        // |19-17|=2. First minimal match is 16.
        let mut engine = rigged_engine(true);
        engine.state.player_room = 17;
        engine.state.wumpus_room = 20;
        engine.state.arrow_count = 0;
        engine.move_wumpus().unwrap();
        assert_eq!(engine.state.wumpus_room, 16);
    }

    #[test]
    fn test_chase_avoids_traps() {
        let mut engine = rigged_engine(true);
        engine.state.player_room = 17;
        engine.state.wumpus_room = 20;
        engine.state.arrow_count = 0;
        engine.state.pit_rooms.insert(16);
        engine.state.bat_rooms.insert(19);
        engine.move_wumpus().unwrap();
        assert_eq!(engine.state.wumpus_room, 13);
    }

    #[test]
    fn test_pinned_wumpus_never_moves() {
        let mut engine = rigged_engine(false);
        engine.state.player_room = 17;
        engine.state.wumpus_room = 20;
        engine.state.arrow_count = 0;
        engine.move_wumpus().unwrap();
        assert_eq!(engine.state.wumpus_room, 20);
    }

    #[test]
    fn test_zero_aggression_wumpus_stays_while_player_armed() {
        let mut engine = rigged_engine(true);
        engine.state.aggression_chance = 0;
        engine.state.wumpus_room = 20;
        for _ in 0..50 {
            engine.move_wumpus().unwrap();
            assert_eq!(engine.state.wumpus_room, 20);
        }
    }

    #[test]
    fn test_wandering_wumpus_avoids_player_and_traps() {
        let mut engine = rigged_engine(true);
        engine.state.aggression_chance = 100;
        engine.state.player_room = 13;
        engine.state.pit_rooms.insert(16);
        engine.state.bat_rooms.insert(19);
        for _ in 0..50 {
            engine.state.wumpus_room = 20; // neighbors 13, 16, 19 all barred
            engine.move_wumpus().unwrap();
            assert_eq!(engine.state.wumpus_room, 20, "no legal move means stay put");
        }
    }

    #[test]
    fn test_pit_is_fatal() {
        let mut engine = rigged_engine(false);
        engine.state.pit_rooms.insert(8);
        let events = engine.attempt_move(Direction::Down).unwrap();
        assert_eq!(
            events,
            vec![MoveEvent::Moved { to: 8 }, MoveEvent::FellInPit]
        );
        assert_eq!(engine.state.phase, GamePhase::Lost(LossReason::FellIntoPit));
    }

    #[test]
    fn test_bat_relocation_moves_both_parties() {
        let mut engine = rigged_engine(false);
        engine.state.bat_rooms.insert(8);
        let events = engine.attempt_move(Direction::Down).unwrap();

        assert_eq!(events[0], MoveEvent::Moved { to: 8 });
        let destination = match events[1] {
            MoveEvent::CarriedByBats { to } => to,
            other => panic!("expected bats, got {:?}", other),
        };
        assert_eq!(engine.state.player_room, destination);
        assert_ne!(engine.state.player_room, engine.state.wumpus_room);
        assert!(!engine.state.bat_rooms.contains(&8), "bats should flee room 8");
        assert_eq!(engine.state.bat_rooms.len(), 1, "the swarm roosts elsewhere");
        // One relocation per turn: whatever the destination holds, the
        // session survives it.
        assert_eq!(engine.state.phase, GamePhase::Exploring);
    }

    #[test]
    fn test_pickups_collect_and_deplete() {
        let mut engine = rigged_engine(false);
        engine.state.arrow_pickup_rooms.insert(8);
        let events = engine.attempt_move(Direction::Down).unwrap();
        assert_eq!(
            events,
            vec![MoveEvent::Moved { to: 8 }, MoveEvent::FoundArrow]
        );
        assert_eq!(engine.state.arrow_count, 2);
        assert!(engine.state.arrow_pickup_rooms.is_empty());

        // Re-entering the room finds nothing the second time.
        engine.attempt_move(Direction::Up).unwrap();
        let events = engine.attempt_move(Direction::Down).unwrap();
        assert_eq!(events, vec![MoveEvent::Moved { to: 8 }]);
        assert_eq!(engine.state.arrow_count, 2);
    }

    #[test]
    fn test_rock_pickup() {
        let mut engine = rigged_engine(false);
        engine.state.rock_pickup_rooms.insert(5);
        let events = engine.attempt_move(Direction::Right).unwrap();
        assert_eq!(
            events,
            vec![MoveEvent::Moved { to: 5 }, MoveEvent::FoundRock]
        );
        assert_eq!(engine.state.rock_count, 3);
        assert!(engine.state.rock_pickup_rooms.is_empty());
    }

    #[test]
    fn test_shoot_hit_wins() {
        let mut engine = rigged_engine(true);
        engine.state.wumpus_room = 8;
        let outcome = engine.attempt_shoot(Direction::Down).unwrap();
        assert_eq!(outcome, ShootOutcome::Hit);
        assert_eq!(engine.state.phase, GamePhase::Won);
        assert_eq!(engine.state.arrow_count, 0);
    }

    #[test]
    fn test_shoot_without_arrows() {
        let mut engine = rigged_engine(true);
        engine.state.arrow_count = 0;
        let outcome = engine.attempt_shoot(Direction::Down).unwrap();
        assert_eq!(outcome, ShootOutcome::NoArrows);
        assert_eq!(engine.state.arrow_count, 0);
        assert_eq!(engine.state.phase, GamePhase::Exploring);
    }

    #[test]
    fn test_last_arrow_miss_warns() {
        let mut engine = rigged_engine(false);
        engine.state.wumpus_room = 18; // nowhere near room 1's exits
        engine.state.arrow_count = 1;
        let outcome = engine.attempt_shoot(Direction::Down).unwrap();
        assert_eq!(outcome, ShootOutcome::OutOfAmmoWarning);
        assert_eq!(engine.state.arrow_count, 0);
        assert_eq!(engine.state.phase, GamePhase::Exploring);
    }

    #[test]
    fn test_miss_with_spare_arrows() {
        let mut engine = rigged_engine(false);
        engine.state.wumpus_room = 18;
        engine.state.arrow_count = 3;
        let outcome = engine.attempt_shoot(Direction::Left).unwrap();
        assert_eq!(outcome, ShootOutcome::Miss);
        assert_eq!(engine.state.arrow_count, 2);
    }

    #[test]
    fn test_last_arrow_miss_with_wumpus_next_door_is_fatal_now() {
        // Player in room 1, Wumpus in room 8 (adjacent), one arrow shot
        // into the solid wall above. The miss empties the quiver, chase
        // mode kicks in, and the adjacent Wumpus charges. The kill lands
        // in this call; no limbo turn where the two share a room while
        // the session still claims to be live.
        let mut engine = rigged_engine(true);
        engine.state.wumpus_room = 8;
        engine.state.arrow_count = 1;

        let outcome = engine.attempt_shoot(Direction::Up).unwrap();

        assert_eq!(outcome, ShootOutcome::OutOfAmmoWarning);
        assert_eq!(engine.state.wumpus_room, engine.state.player_room);
        assert_eq!(
            engine.state.phase,
            GamePhase::Lost(LossReason::EatenByWumpus)
        );
    }

    #[test]
    fn test_last_arrow_miss_with_wumpus_afar_stays_live() {
        let mut engine = rigged_engine(true);
        engine.state.player_room = 1;
        engine.state.wumpus_room = 18; // no path to room 1 in one step
        engine.state.arrow_count = 1;

        let outcome = engine.attempt_shoot(Direction::Up).unwrap();

        assert_eq!(outcome, ShootOutcome::OutOfAmmoWarning);
        assert_ne!(engine.state.wumpus_room, engine.state.player_room);
        assert_eq!(engine.state.phase, GamePhase::Exploring);
    }

    #[test]
    fn test_shooting_into_a_wall_wastes_the_arrow() {
        let mut engine = rigged_engine(false);
        engine.state.arrow_count = 2;
        let outcome = engine.attempt_shoot(Direction::Up).unwrap();
        assert_eq!(outcome, ShootOutcome::Miss);
        assert_eq!(engine.state.arrow_count, 1);
    }

    #[test]
    fn test_throw_classifies_each_neighbor() {
        let mut engine = rigged_engine(false);
        engine.state.rock_count = 4;
        engine.state.wumpus_room = 8; // down from 1
        engine.state.bat_rooms.insert(2); // left from 1
        engine.state.pit_rooms.insert(5); // right from 1

        assert_eq!(
            engine.attempt_throw(Direction::Down).unwrap(),
            ThrowOutcome::WumpusNear
        );
        assert_eq!(
            engine.attempt_throw(Direction::Left).unwrap(),
            ThrowOutcome::BatsNear
        );
        assert_eq!(
            engine.attempt_throw(Direction::Right).unwrap(),
            ThrowOutcome::PitNear
        );
        assert_eq!(
            engine.attempt_throw(Direction::Up).unwrap(),
            ThrowOutcome::Empty
        );
        assert_eq!(engine.state.rock_count, 0);
    }

    #[test]
    fn test_throw_is_a_pure_probe() {
        let mut engine = rigged_engine(false);
        engine.state.wumpus_room = 8;
        engine.state.bat_rooms.insert(2);
        engine.state.pit_rooms.insert(5);
        let before = engine.state.clone();

        engine.attempt_throw(Direction::Down).unwrap();

        assert_eq!(engine.state.rock_count, before.rock_count - 1);
        assert_eq!(engine.state.player_room, before.player_room);
        assert_eq!(engine.state.wumpus_room, before.wumpus_room);
        assert_eq!(engine.state.bat_rooms, before.bat_rooms);
        assert_eq!(engine.state.pit_rooms, before.pit_rooms);
        assert_eq!(engine.state.arrow_count, before.arrow_count);
        assert_eq!(engine.state.phase, before.phase);
    }

    #[test]
    fn test_throw_without_rocks() {
        let mut engine = rigged_engine(false);
        engine.state.rock_count = 0;
        let outcome = engine.attempt_throw(Direction::Up).unwrap();
        assert_eq!(outcome, ThrowOutcome::NoRocks);
        assert_eq!(engine.state.rock_count, 0);
    }

    #[test]
    fn test_targeted_action_protocol() {
        let mut engine = rigged_engine(false);
        engine.state.wumpus_room = 8;

        let pending = engine.begin_targeted_action(TargetedActionKind::ThrowRock);
        let outcome = engine
            .resolve_targeted_action(pending, Direction::Down)
            .unwrap();
        assert_eq!(outcome, TargetedOutcome::Threw(ThrowOutcome::WumpusNear));

        let pending = engine.begin_targeted_action(TargetedActionKind::ShootArrow);
        let outcome = engine
            .resolve_targeted_action(pending, Direction::Down)
            .unwrap();
        assert_eq!(outcome, TargetedOutcome::Shot(ShootOutcome::Hit));
        assert_eq!(engine.state.phase, GamePhase::Won);
    }

    #[test]
    fn test_senses_report_adjacent_threats() {
        let mut engine = rigged_engine(false);
        engine.state.wumpus_room = 8;
        engine.state.bat_rooms.insert(2);
        engine.state.pit_rooms.insert(5);
        let senses = engine.senses().unwrap();
        assert!(senses.wumpus_near);
        assert!(senses.bats_near);
        assert!(senses.pit_near);

        engine.state.wumpus_room = 18;
        engine.state.bat_rooms.clear();
        engine.state.pit_rooms.clear();
        assert_eq!(engine.senses().unwrap(), RoomSenses::default());
    }

    #[test]
    fn test_terminal_session_rejects_operations() {
        let mut engine = rigged_engine(false);
        engine.state.phase = GamePhase::Won;
        assert!(engine.attempt_move(Direction::Down).is_err());
        assert!(engine.attempt_shoot(Direction::Down).is_err());
        assert!(engine.attempt_throw(Direction::Down).is_err());
    }

    #[test]
    fn test_room_entry_order_is_the_contract() {
        assert_eq!(
            ROOM_ENTRY_CHECKS,
            [
                RoomCheck::WumpusCollision,
                RoomCheck::Pit,
                RoomCheck::Bats,
                RoomCheck::ArrowPickup,
                RoomCheck::RockPickup,
            ]
        );
    }

    #[test]
    fn test_apply_difficulty_updates_live_session() {
        let mut engine = rigged_engine(true);
        engine.apply_difficulty(Difficulty::Hard);
        assert_eq!(engine.state.aggression_chance, 90);
        assert_eq!(engine.config().aggression_chance, 90);
    }

    #[test]
    fn test_reset_produces_a_fresh_valid_session() {
        let mut engine = rigged_engine(true);
        engine.state.phase = GamePhase::Lost(LossReason::FellIntoPit);
        engine.reset().unwrap();
        assert_eq!(engine.state.phase, GamePhase::Exploring);
        assert!(engine.state.validate().is_ok());
        assert_eq!(engine.state.arrow_count, engine.config().starting_arrows);
        assert_eq!(engine.state.rock_count, engine.config().starting_rocks);
    }
}
