//! # Cave Module
//!
//! Static cave topology: 20 rooms, each with up to 4 directional exits.
//!
//! The cave is dodecahedron-like: every room connects to exactly 3
//! neighbors, here modeled with one of the four directions unused per
//! room. The topology is fixed at construction and never mutated.

use crate::{WumpusError, WumpusResult};
use serde::{Deserialize, Serialize};

/// A room identifier in `[1, 20]`. Rooms are plain indices into the
/// cave graph, not standalone objects.
pub type Room = u8;

/// Fixed-size ordered tuple of optional neighbors, indexed by [`Direction`].
pub type ExitSet = [Option<Room>; 4];

/// The four directions a room exit can face.
///
/// Doubles as the index into an [`ExitSet`] and as the player-facing
/// choice when moving, shooting, or throwing.
///
/// # Examples
///
/// ```
/// use wumpus::Direction;
///
/// assert_eq!(Direction::Up.index(), 0);
/// assert_eq!(Direction::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in exit-table order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The exit-table index of this direction.
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// The direction at a given exit-table index, if in range.
    pub fn from_index(index: usize) -> Option<Direction> {
        Direction::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// Number of rooms in the cave.
pub const ROOM_COUNT: u8 = 20;

/// Raw exit table: one row per room, columns in [`Direction`] order,
/// 0 meaning "no passage in that direction".
type ExitTable = [[u8; 4]; ROOM_COUNT as usize];

/// The reference layout. Each room has exactly 3 neighbors and every
/// edge is symmetric (if a lists b, b lists a back).
const REFERENCE_LAYOUT: ExitTable = [
    // Up, Down, Left, Right
    [0, 8, 2, 5],    // 1
    [0, 10, 3, 1],   // 2
    [0, 12, 4, 2],   // 3
    [0, 14, 5, 3],   // 4
    [0, 6, 1, 4],    // 5
    [5, 0, 7, 15],   // 6
    [0, 17, 8, 6],   // 7
    [1, 0, 9, 7],    // 8
    [0, 18, 10, 8],  // 9
    [2, 0, 11, 9],   // 10
    [0, 19, 12, 10], // 11
    [3, 0, 13, 11],  // 12
    [0, 20, 14, 12], // 13
    [4, 0, 15, 13],  // 14
    [0, 16, 6, 14],  // 15
    [15, 0, 17, 20], // 16
    [7, 0, 18, 16],  // 17
    [9, 0, 19, 17],  // 18
    [11, 0, 20, 18], // 19
    [13, 0, 16, 19], // 20
];

/// Immutable mapping from room to its four directional exits.
///
/// # Examples
///
/// ```
/// use wumpus::{CaveGraph, Direction};
///
/// let cave = CaveGraph::reference();
/// let exits = cave.exits(1).unwrap();
/// assert_eq!(exits[Direction::Up.index()], None);
/// assert_eq!(exits[Direction::Down.index()], Some(8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaveGraph {
    table: ExitTable,
}

impl CaveGraph {
    /// The reference 20-room dodecahedral layout.
    pub fn reference() -> Self {
        Self {
            table: REFERENCE_LAYOUT,
        }
    }

    /// Builds a cave from a custom exit table, validating the structural
    /// contract: ids in range, no self-loops, symmetric edges, and the
    /// whole graph connected.
    pub fn new(table: ExitTable) -> WumpusResult<Self> {
        let cave = Self { table };
        cave.validate()?;
        Ok(cave)
    }

    /// Returns the exit set for a room.
    pub fn exits(&self, room: Room) -> WumpusResult<ExitSet> {
        let row = self
            .table
            .get(Self::row_index(room)?)
            .ok_or(WumpusError::InvalidRoom(room))?;
        let mut exits = [None; 4];
        for (slot, &id) in exits.iter_mut().zip(row.iter()) {
            if id != 0 {
                *slot = Some(id);
            }
        }
        Ok(exits)
    }

    /// Returns the neighbor through a single exit, if the passage exists.
    pub fn exit(&self, room: Room, direction: Direction) -> WumpusResult<Option<Room>> {
        Ok(self.exits(room)?[direction.index()])
    }

    /// Returns the neighbors of a room in direction order. The order is
    /// load-bearing: chase-mode tie-breaks take the first minimal match.
    pub fn neighbors(&self, room: Room) -> WumpusResult<Vec<Room>> {
        Ok(self.exits(room)?.iter().flatten().copied().collect())
    }

    /// Whether a room id is in range for this cave.
    pub fn contains(&self, room: Room) -> bool {
        (1..=ROOM_COUNT).contains(&room)
    }

    /// Iterator over all room ids, 1 through 20.
    pub fn rooms(&self) -> impl Iterator<Item = Room> {
        1..=ROOM_COUNT
    }

    fn row_index(room: Room) -> WumpusResult<usize> {
        if (1..=ROOM_COUNT).contains(&room) {
            Ok((room - 1) as usize)
        } else {
            Err(WumpusError::InvalidRoom(room))
        }
    }

    /// Checks the structural contract on the exit table.
    fn validate(&self) -> WumpusResult<()> {
        for room in self.rooms() {
            let row = self.table[Self::row_index(room)?];
            for &target in row.iter() {
                if target == 0 {
                    continue;
                }
                if !(1..=ROOM_COUNT).contains(&target) {
                    return Err(WumpusError::InvalidRoom(target));
                }
                if target == room {
                    return Err(WumpusError::InvalidState(format!(
                        "room {} has a self-loop",
                        room
                    )));
                }
                if !self.neighbors(target)?.contains(&room) {
                    return Err(WumpusError::InvalidState(format!(
                        "edge {} -> {} is not symmetric",
                        room, target
                    )));
                }
            }
        }

        if !self.is_connected()? {
            return Err(WumpusError::InvalidState(
                "cave graph is not connected".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether every room is reachable from room 1 via available exits.
    pub fn is_connected(&self) -> WumpusResult<bool> {
        let mut visited = [false; ROOM_COUNT as usize];
        let mut stack = vec![1u8];
        visited[0] = true;
        while let Some(room) = stack.pop() {
            for neighbor in self.neighbors(room)? {
                let idx = (neighbor - 1) as usize;
                if !visited[idx] {
                    visited[idx] = true;
                    stack.push(neighbor);
                }
            }
        }
        Ok(visited.iter().all(|&v| v))
    }
}

impl Default for CaveGraph {
    fn default() -> Self {
        Self::reference()
    }
}
