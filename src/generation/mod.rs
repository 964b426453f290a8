//! # Generation Module
//!
//! Pseudo-random, constraint-respecting placement of the Wumpus, bats,
//! pits, and resource caches onto distinct, valid rooms.
//!
//! Placement consumes the random stream in a fixed order (player, Wumpus,
//! bats, pits, arrow caches, rock caches), so a given seed always yields
//! the same board. Tests rely on that determinism.

use crate::cave::{CaveGraph, Room, ROOM_COUNT};
use crate::game::{GameConfig, GamePhase, SessionState};
use crate::{WumpusError, WumpusResult};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::BTreeSet;

/// Places all entities for a fresh session.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use wumpus::{CaveGraph, EntityPlacer, GameConfig};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let state = EntityPlacer::place(&mut rng, &CaveGraph::reference(), &GameConfig::default()).unwrap();
/// assert_ne!(state.player_room, state.wumpus_room);
/// ```
pub struct EntityPlacer;

impl EntityPlacer {
    /// Builds a fully populated [`SessionState`].
    ///
    /// The player is drawn uniformly from all rooms; the Wumpus is drawn
    /// with rejection until it differs from the player; every hazard and
    /// cache draw rejects the player's room, the Wumpus's room, and every
    /// room claimed by an earlier placement, so all placement sets come
    /// out pairwise disjoint.
    ///
    /// Fails with [`WumpusError::PlacementExhausted`] before any draw if
    /// the configuration reserves more rooms than the cave holds, which
    /// also guarantees the rejection loops terminate.
    pub fn place(
        rng: &mut StdRng,
        cave: &CaveGraph,
        config: &GameConfig,
    ) -> WumpusResult<SessionState> {
        let requested = config.reserved_rooms();
        if requested > u32::from(ROOM_COUNT) {
            return Err(WumpusError::PlacementExhausted {
                requested,
                available: u32::from(ROOM_COUNT),
            });
        }

        let player_room = rng.gen_range(1..=ROOM_COUNT);

        let mut wumpus_room = rng.gen_range(1..=ROOM_COUNT);
        while wumpus_room == player_room {
            wumpus_room = rng.gen_range(1..=ROOM_COUNT);
        }

        let mut occupied: BTreeSet<Room> = BTreeSet::new();
        let bat_rooms = Self::draw_set(rng, config.num_bats, player_room, wumpus_room, &mut occupied);
        let pit_rooms = Self::draw_set(rng, config.num_pits, player_room, wumpus_room, &mut occupied);
        let arrow_pickup_rooms = Self::draw_set(
            rng,
            config.num_arrow_caches,
            player_room,
            wumpus_room,
            &mut occupied,
        );
        let rock_pickup_rooms = Self::draw_set(
            rng,
            config.num_rock_caches,
            player_room,
            wumpus_room,
            &mut occupied,
        );

        let state = SessionState {
            player_room,
            wumpus_room,
            arrow_count: config.starting_arrows,
            rock_count: config.starting_rocks,
            bat_rooms,
            pit_rooms,
            arrow_pickup_rooms,
            rock_pickup_rooms,
            aggression_chance: config.aggression_chance,
            phase: GamePhase::Exploring,
        };

        Self::validate(&state, cave)?;
        debug!(
            "placed session: player {}, wumpus {}, bats {:?}, pits {:?}",
            state.player_room, state.wumpus_room, state.bat_rooms, state.pit_rooms
        );
        Ok(state)
    }

    /// Draws `count` distinct free rooms by rejection sampling, adding
    /// each to the shared occupancy set as it lands.
    fn draw_set(
        rng: &mut StdRng,
        count: u32,
        player_room: Room,
        wumpus_room: Room,
        occupied: &mut BTreeSet<Room>,
    ) -> BTreeSet<Room> {
        let mut placed = BTreeSet::new();
        for _ in 0..count {
            let room = loop {
                let candidate = rng.gen_range(1..=ROOM_COUNT);
                if candidate != player_room
                    && candidate != wumpus_room
                    && !occupied.contains(&candidate)
                {
                    break candidate;
                }
            };
            occupied.insert(room);
            placed.insert(room);
        }
        placed
    }

    /// Re-checks the placement invariants on a freshly built state.
    fn validate(state: &SessionState, cave: &CaveGraph) -> WumpusResult<()> {
        if !cave.contains(state.player_room) {
            return Err(WumpusError::InvalidRoom(state.player_room));
        }
        if !cave.contains(state.wumpus_room) {
            return Err(WumpusError::InvalidRoom(state.wumpus_room));
        }
        state.validate().map_err(WumpusError::InvalidState)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn place_with_seed(seed: u64) -> SessionState {
        let mut rng = StdRng::seed_from_u64(seed);
        EntityPlacer::place(&mut rng, &CaveGraph::reference(), &GameConfig::default()).unwrap()
    }

    #[test]
    fn test_placement_respects_invariants() {
        for seed in 0..100 {
            let state = place_with_seed(seed);
            assert!(state.validate().is_ok(), "seed {} broke placement", seed);
        }
    }

    #[test]
    fn test_placement_counts_match_config() {
        let config = GameConfig::default();
        let state = place_with_seed(99);
        assert_eq!(state.bat_rooms.len() as u32, config.num_bats);
        assert_eq!(state.pit_rooms.len() as u32, config.num_pits);
        assert_eq!(state.arrow_pickup_rooms.len() as u32, config.num_arrow_caches);
        assert_eq!(state.rock_pickup_rooms.len() as u32, config.num_rock_caches);
        assert_eq!(state.arrow_count, config.starting_arrows);
        assert_eq!(state.rock_count, config.starting_rocks);
        assert_eq!(state.phase, GamePhase::Exploring);
    }

    #[test]
    fn test_same_seed_same_board() {
        assert_eq!(place_with_seed(12345), place_with_seed(12345));
    }

    #[test]
    fn test_different_seeds_eventually_differ() {
        let reference = place_with_seed(0);
        assert!((1..50).any(|seed| place_with_seed(seed) != reference));
    }

    #[test]
    fn test_oversized_config_is_rejected_up_front() {
        let mut config = GameConfig::default();
        config.num_bats = 10;
        config.num_pits = 10;
        let mut rng = StdRng::seed_from_u64(1);
        let result = EntityPlacer::place(&mut rng, &CaveGraph::reference(), &config);
        assert!(matches!(
            result,
            Err(WumpusError::PlacementExhausted {
                requested: 28,
                available: 20
            })
        ));
    }

    #[test]
    fn test_absurd_counts_surface_as_exhaustion_not_overflow() {
        let mut config = GameConfig::default();
        config.num_bats = u32::MAX;
        config.num_rock_caches = u32::MAX;
        let mut rng = StdRng::seed_from_u64(3);
        let result = EntityPlacer::place(&mut rng, &CaveGraph::reference(), &config);
        assert!(matches!(
            result,
            Err(WumpusError::PlacementExhausted { .. })
        ));
    }

    #[test]
    fn test_full_cave_still_places() {
        // 2 + 18 reserved rooms fills the cave exactly.
        let mut config = GameConfig::default();
        config.num_bats = 9;
        config.num_pits = 9;
        config.num_arrow_caches = 0;
        config.num_rock_caches = 0;
        let mut rng = StdRng::seed_from_u64(77);
        let state = EntityPlacer::place(&mut rng, &CaveGraph::reference(), &config).unwrap();
        assert!(state.validate().is_ok());
        assert_eq!(state.bat_rooms.len() + state.pit_rooms.len(), 18);
    }
}
