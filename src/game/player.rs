use crate::game::state::{DEFAULT_STARTING_HEALTH, START_ROOM_ID};
use crate::game::types::{ItemId, RoomId};

/// The single player's mutable record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub current_room: RoomId,
    pub inventory: Vec<ItemId>,
    /// Unbounded above; the game ends once it drops to zero or below.
    pub health: i32,
    /// The small key dropped by the zombie princess.
    pub has_basement_key: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_HEALTH)
    }
}

impl PlayerState {
    pub fn new(starting_health: i32) -> Self {
        Self {
            current_room: START_ROOM_ID,
            inventory: Vec::new(),
            health: starting_health,
            has_basement_key: false,
        }
    }

    pub fn has(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    pub fn add_item(&mut self, item: ItemId) {
        self.inventory.push(item);
    }

    /// Removes one copy of the item; returns whether it was held.
    pub fn remove_item(&mut self, item: ItemId) -> bool {
        match self.inventory.iter().position(|i| *i == item) {
            Some(pos) => {
                self.inventory.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Applies a delta and returns the new health.
    pub fn adjust_health(&mut self, delta: i32) -> i32 {
        self.health = self.health.saturating_add(delta);
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn health_line(&self) -> String {
        format!("Your health is now {}.\n", self.health)
    }

    pub fn format_inventory(&self) -> String {
        if self.inventory.is_empty() {
            return "You are carrying nothing.\n".to_string();
        }
        let names: Vec<&str> = self.inventory.iter().map(|i| i.name()).collect();
        format!("You are carrying: {}\n", names.join(", "))
    }
}
