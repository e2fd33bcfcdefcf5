//! The fixed castle layout every new game starts from.

use crate::game::types::{EnemyTemplate, ExitLabel, ItemId, RoomId, RoomRecord, TriggerKey};

/// Where the player wakes up; also the only room with the escape door.
pub const START_ROOM_ID: RoomId = RoomId::EntranceChoice;

pub const DEFAULT_STARTING_HEALTH: i32 = 20;

/// Build the canonical set of castle rooms in their starting state.
pub fn canonical_world_seed() -> Vec<RoomRecord> {
    let mut rooms = Vec::new();

    let library = RoomRecord::new(
        RoomId::Library,
        "You are in a grand library. The walls are lined with dusty books. \
One particular book looks out of place on the shelf.",
    )
    .with_exit(ExitLabel::Downstairs, RoomId::EntranceChoice)
    .with_trigger(TriggerKey::BookInteraction, false);
    rooms.push(library);

    // Stays sealed, with no way in, until the library book is pulled.
    let hidden_room = RoomRecord::new(
        RoomId::HiddenRoom,
        "A secret room, dark and dusty. A faint light shines through a cracked window. \
You see a statue holding a sword in its stone hands.",
    )
    .with_item(ItemId::Sword)
    .with_exit(ExitLabel::Out, RoomId::Library)
    .with_trigger(TriggerKey::StatueAlive, true)
    .locked();
    rooms.push(hidden_room);

    // No exits: movement from here is handled by the junction prompt.
    let entrance = RoomRecord::new(
        START_ROOM_ID,
        "You're back at the spot where you woke up. The main door is locked tight. \
You can still go UPSTAIRS to the library, or STRAIGHT down the hallway.",
    );
    rooms.push(entrance);

    let hallway = RoomRecord::new(
        RoomId::Hallway,
        "A long corridor with doors on each side. You can see signs pointing to the KITCHEN, \
the BALLROOM, or further down ANOTHER HALLWAY.",
    )
    .with_exit(ExitLabel::Kitchen, RoomId::Kitchen)
    .with_exit(ExitLabel::Ballroom, RoomId::Ballroom)
    .with_exit(ExitLabel::Hallway2, RoomId::Hallway2)
    .with_exit(ExitLabel::Back, START_ROOM_ID);
    rooms.push(hallway);

    let kitchen = RoomRecord::new(
        RoomId::Kitchen,
        "A dusty kitchen with old pots and pans scattered around. There might be something to eat here.",
    )
    .with_item(ItemId::Food)
    .with_exit(ExitLabel::Back, RoomId::Hallway);
    rooms.push(kitchen);

    let ballroom = RoomRecord::new(
        RoomId::Ballroom,
        "An ornate ballroom with a grand chandelier. You find a clue scribbled on the wall. \
It reads: 'To reach the key in the dark below, answer the riddle or suffer woe.'",
    )
    .with_exit(ExitLabel::Back, RoomId::Hallway);
    rooms.push(ballroom);

    let hallway2 = RoomRecord::new(
        RoomId::Hallway2,
        "Another hallway with two doors. The signs say BEDROOM and OFFICE. The other doors are locked.",
    )
    .with_exit(ExitLabel::Bedroom, RoomId::Bedroom)
    .with_exit(ExitLabel::Office, RoomId::Office)
    .with_exit(ExitLabel::Back, RoomId::Hallway)
    .with_exit(ExitLabel::Basement, RoomId::Basement);
    rooms.push(hallway2);

    let bedroom = RoomRecord::new(
        RoomId::Bedroom,
        "You enter a lavish bedroom. Inside, you see a figure turned away from you. \
It looks like a princess, but something isn't right...",
    )
    .with_exit(ExitLabel::Back, RoomId::Hallway2)
    .with_enemy(EnemyTemplate::zombie_princess());
    rooms.push(bedroom);

    let office = RoomRecord::new(
        RoomId::Office,
        "A small office cluttered with old papers. There's a DAGGER on the desk and a POTION on a shelf.",
    )
    .with_item(ItemId::Dagger)
    .with_item(ItemId::Potion)
    .with_exit(ExitLabel::Back, RoomId::Hallway2);
    rooms.push(office);

    // Opened by the small key the zombie princess carries.
    let basement = RoomRecord::new(
        RoomId::Basement,
        "A dark, musty basement filled with cobwebs. You sense danger ahead. \
Shadows shift, revealing enemies guarding a final key.",
    )
    .with_item(ItemId::FinalKey)
    .with_exit(ExitLabel::Up, RoomId::Hallway2)
    .with_enemy(EnemyTemplate::basement_creatures())
    .locked();
    rooms.push(basement);

    rooms
}
