//! # Rendering Module
//!
//! Pure string rendering of engine state and outcomes for the terminal
//! front end. Nothing here mutates game state or performs I/O, so every
//! function is trivially testable.

use crate::cave::Direction;
use crate::game::{
    GameEngine, GamePhase, LossReason, MoveEvent, RoomSenses, ShootOutcome, ThrowOutcome,
};
use crate::WumpusResult;

/// The instructions screen shown at startup.
pub const INSTRUCTIONS: &str = "\
                     Hunt The Wumpus!
You have been cast into a dark 20 room cave with a fearsome Wumpus.
The cave is shaped like a dodecahedron and the only way out is to kill
the Wumpus. To that end you have a bow and one arrow. You might find
more arrows from unlucky past Wumpus victims in the cave. There are
other dangers too, specifically bats and bottomless pits.

    * If you end up in the same room as the Wumpus you die.
    * If you fall into a bottomless pit you die.
    * If you run out of arrows the Wumpus starts hunting YOU.
    * If you end up in a room with bats they will pick you up
      and deposit you in a random location.

If the Wumpus is nearby you will see bloodstains on the walls. If bats
are nearby you will hear them, and if a bottomless pit is nearby you
will feel the air flowing down it.

Commands: up/down/left/right to move, 'shoot <dir>' to fire an arrow,
'throw <dir>' to probe a room with a rock, 'look' to check your senses,
'new' to restart, 'quit' to give up. Single letters work too.";

/// Short command reference for the `help` command.
pub const HELP: &str = "\
move:  up | down | left | right   (or u/d/l/r)
shoot: shoot <dir>   costs an arrow; hit the Wumpus to win
throw: throw <dir>   costs a rock; listen for what the room holds
look | dump | help | new | quit";

/// The per-room status block: position, inventory, and sense warnings.
pub fn room_status(engine: &GameEngine) -> WumpusResult<String> {
    let state = &engine.state;
    let mut lines = vec![
        format!("POS: {}", state.player_room),
        format!("Arrows: {}", state.arrow_count),
        format!("Rocks: {}", state.rock_count),
        format!("Exits: {}", exits_line(engine)?),
    ];
    lines.extend(sense_lines(engine.senses()?));
    Ok(lines.join("\n"))
}

fn exits_line(engine: &GameEngine) -> WumpusResult<String> {
    let exits = engine.cave().exits(engine.state.player_room)?;
    let open: Vec<String> = Direction::ALL
        .iter()
        .filter(|d| exits[d.index()].is_some())
        .map(|d| d.to_string())
        .collect();
    Ok(open.join(", "))
}

fn sense_lines(senses: RoomSenses) -> Vec<String> {
    let mut lines = Vec::new();
    if senses.wumpus_near {
        lines.push("You see bloodstains on the walls...".to_string());
    }
    if senses.bats_near {
        lines.push("You hear the squeaking of bats nearby".to_string());
    }
    if senses.pit_near {
        lines.push("You feel a draft nearby".to_string());
    }
    lines
}

/// One message line per move event, in resolution order.
pub fn move_messages(events: &[MoveEvent]) -> Vec<String> {
    events
        .iter()
        .map(|event| match event {
            MoveEvent::Moved { to } => format!("You creep into room {}.", to),
            MoveEvent::Blocked => "The cave wall is solid that way.".to_string(),
            MoveEvent::Eaten => "You were eaten by the WUMPUS!!!".to_string(),
            MoveEvent::FellInPit => "You fell into a bottomless pit!!".to_string(),
            MoveEvent::CarriedByBats { to } => format!(
                "Bats pick you up and drop you in room {}!",
                to
            ),
            MoveEvent::FoundArrow => "You have found an arrow!".to_string(),
            MoveEvent::FoundRock => "You have found a rock!".to_string(),
            MoveEvent::WumpusKilled => "The Wumpus is dead!".to_string(),
        })
        .collect()
}

/// Message for a shoot outcome.
pub fn shoot_message(outcome: ShootOutcome) -> &'static str {
    match outcome {
        ShootOutcome::Hit => "Your aim was true and you have killed the Wumpus!",
        ShootOutcome::Miss => "Your arrow sails into the darkness...",
        ShootOutcome::NoArrows => "You have no arrows!",
        ShootOutcome::OutOfAmmoWarning => {
            "Your last arrow sails into the darkness... the Wumpus begins to hunt you!"
        }
    }
}

/// Message for a throw outcome.
pub fn throw_message(outcome: ThrowOutcome) -> &'static str {
    match outcome {
        ThrowOutcome::WumpusNear => "You hear a low growl... the Wumpus is near!",
        ThrowOutcome::BatsNear => "You hear frantic squeaking... bats!",
        ThrowOutcome::PitNear => "You hear the rock fall endlessly... a pit!",
        ThrowOutcome::Empty => "You hear a faint clink. The room is empty.",
        ThrowOutcome::NoRocks => "You have no rocks to throw!",
    }
}

/// The game-over banner, or `None` while the session is still live.
pub fn game_over_banner(phase: GamePhase) -> Option<String> {
    let headline = match phase {
        GamePhase::Exploring => return None,
        GamePhase::Won => "You have slain the Wumpus. The cave is yours!",
        GamePhase::Lost(LossReason::EatenByWumpus) => "You have died: eaten by the Wumpus.",
        GamePhase::Lost(LossReason::FellIntoPit) => "You have died: the pit has no bottom.",
    };
    Some(format!("{}\nType 'new' to play again or 'quit' to leave.", headline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    #[test]
    fn test_room_status_contains_inventory() {
        let engine = GameEngine::new(GameConfig::default(), 7).unwrap();
        let status = room_status(&engine).unwrap();
        assert!(status.contains(&format!("POS: {}", engine.state.player_room)));
        assert!(status.contains("Arrows: 1"));
        assert!(status.contains("Rocks: 2"));
        assert!(status.contains("Exits: "));
    }

    #[test]
    fn test_sense_lines_cover_all_threats() {
        let all = RoomSenses {
            wumpus_near: true,
            bats_near: true,
            pit_near: true,
        };
        assert_eq!(sense_lines(all).len(), 3);
        assert!(sense_lines(RoomSenses::default()).is_empty());
    }

    #[test]
    fn test_move_messages_in_order() {
        let events = vec![
            MoveEvent::Moved { to: 8 },
            MoveEvent::CarriedByBats { to: 3 },
            MoveEvent::FoundArrow,
        ];
        let messages = move_messages(&events);
        assert_eq!(messages.len(), 3);
        assert!(messages[0].contains("room 8"));
        assert!(messages[1].contains("room 3"));
        assert!(messages[2].contains("arrow"));
    }

    #[test]
    fn test_game_over_banner_only_when_over() {
        assert!(game_over_banner(GamePhase::Exploring).is_none());
        assert!(game_over_banner(GamePhase::Won).unwrap().contains("slain"));
        assert!(game_over_banner(GamePhase::Lost(LossReason::FellIntoPit))
            .unwrap()
            .contains("pit"));
    }
}
