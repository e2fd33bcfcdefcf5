//! Read/write access to the castle graph.

use std::collections::HashMap;

use log::{debug, info};

use crate::game::errors::GameError;
use crate::game::state::canonical_world_seed;
use crate::game::types::{ExitLabel, RoomId, RoomRecord, TriggerKey};

/// Owns every room. Topology is fixed apart from the library's secret exit.
#[derive(Debug, Clone)]
pub struct World {
    rooms: HashMap<RoomId, RoomRecord>,
}

impl Default for World {
    fn default() -> Self {
        Self::canonical()
    }
}

impl World {
    pub fn canonical() -> Self {
        Self::from_records(canonical_world_seed())
    }

    pub fn from_records(records: Vec<RoomRecord>) -> Self {
        let rooms = records.into_iter().map(|r| (r.id, r)).collect();
        Self { rooms }
    }

    pub fn room(&self, id: RoomId) -> Result<&RoomRecord, GameError> {
        self.rooms.get(&id).ok_or(GameError::RoomMissing(id))
    }

    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut RoomRecord, GameError> {
        self.rooms.get_mut(&id).ok_or(GameError::RoomMissing(id))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Room description followed by the visible items, one line each.
    pub fn describe(&self, id: RoomId) -> Result<String, GameError> {
        let room = self.room(id)?;
        let mut out = String::new();
        out.push_str(&room.description);
        out.push('\n');
        if !room.items.is_empty() {
            let names: Vec<&str> = room.items.iter().map(|i| i.name()).collect();
            out.push_str(&format!("Items you see here: {}\n", names.join(", ")));
        }
        Ok(out)
    }

    /// Pull the library book: unlock the hidden room and open the secret exit.
    /// Returns false when it was already revealed.
    pub fn reveal_hidden_room(&mut self) -> Result<bool, GameError> {
        // Validate both rooms before mutating either.
        self.room(RoomId::HiddenRoom)?;
        let library = self.room_mut(RoomId::Library)?;
        if library.trigger(TriggerKey::BookInteraction) {
            debug!("hidden room already revealed");
            return Ok(false);
        }
        library.set_trigger(TriggerKey::BookInteraction, true);
        library.add_exit(ExitLabel::Secret, RoomId::HiddenRoom);
        self.room_mut(RoomId::HiddenRoom)?.locked = false;
        info!("hidden room revealed; library gained secret exit");
        Ok(true)
    }
}
