//! Movement between rooms: the junction's two-way choice, named exits
//! elsewhere, and lock/key gating.

use log::{debug, info};

use crate::game::errors::GameError;
use crate::game::player::PlayerState;
use crate::game::state::START_ROOM_ID;
use crate::game::types::{ExitLabel, RoomId};
use crate::game::world::World;

/// Result of a movement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub text: String,
    /// Set when the player actually changed rooms.
    pub entered: Option<RoomId>,
}

impl MoveReport {
    fn rejected(text: &str) -> Self {
        Self {
            text: text.to_string(),
            entered: None,
        }
    }
}

/// Text shown after GO, and whether a direction line should be read next.
pub fn begin_move(world: &World, player: &PlayerState) -> Result<(String, bool), GameError> {
    if player.current_room == START_ROOM_ID {
        return Ok((
            "You can go 'upstairs' to the library or 'straight' down the hallway.\n".to_string(),
            true,
        ));
    }
    let room = world.room(player.current_room)?;
    if room.exits.is_empty() {
        return Ok((
            "There seems to be nowhere else to go from here.\n".to_string(),
            false,
        ));
    }
    Ok((
        format!("Possible paths: {}\n", room.exit_labels().join(", ")),
        true,
    ))
}

/// Apply the direction typed at the GO prompt.
pub fn resolve_move(
    world: &mut World,
    player: &mut PlayerState,
    choice: &str,
) -> Result<MoveReport, GameError> {
    let choice = choice.trim().to_lowercase();

    if player.current_room == START_ROOM_ID {
        let destination = match choice.as_str() {
            "upstairs" | "library" => RoomId::Library,
            "straight" | "hallway" => RoomId::Hallway,
            _ => return Ok(MoveReport::rejected("You can't go that way.\n")),
        };
        return enter(world, player, destination, String::new());
    }

    let room = world.room(player.current_room)?;
    let destination = match ExitLabel::parse(&choice).and_then(|label| room.exit(label)) {
        Some(dest) => dest,
        None => {
            debug!("no exit '{}' from {}", choice, player.current_room);
            return Ok(MoveReport::rejected("You can't go that way.\n"));
        }
    };

    let mut text = String::new();
    let target = world.room_mut(destination)?;
    if target.locked {
        if destination == RoomId::Basement && player.has_basement_key {
            target.locked = false;
            info!("basement unlocked with the princess's key");
            text.push_str("You unlock the basement door with the key you found!\n");
        } else {
            return Ok(MoveReport::rejected("It's locked. You can't go there yet.\n"));
        }
    }
    enter(world, player, destination, text)
}

fn enter(
    world: &World,
    player: &mut PlayerState,
    destination: RoomId,
    mut text: String,
) -> Result<MoveReport, GameError> {
    // Describe first so a missing room aborts before the player moves.
    let description = world.describe(destination)?;
    info!("player moved {} -> {}", player.current_room, destination);
    player.current_room = destination;
    text.push_str(&description);
    Ok(MoveReport {
        text,
        entered: Some(destination),
    })
}
