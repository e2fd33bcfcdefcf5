use std::collections::HashMap;
use std::fmt;

/// Every room in the castle. The set is fixed; only room payload changes during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoomId {
    EntranceChoice,
    Library,
    HiddenRoom,
    Hallway,
    Kitchen,
    Ballroom,
    Hallway2,
    Bedroom,
    Office,
    Basement,
}

impl RoomId {
    pub const ALL: [RoomId; 10] = [
        RoomId::EntranceChoice,
        RoomId::Library,
        RoomId::HiddenRoom,
        RoomId::Hallway,
        RoomId::Kitchen,
        RoomId::Ballroom,
        RoomId::Hallway2,
        RoomId::Bedroom,
        RoomId::Office,
        RoomId::Basement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomId::EntranceChoice => "entrance_choice",
            RoomId::Library => "library",
            RoomId::HiddenRoom => "hidden_room",
            RoomId::Hallway => "hallway",
            RoomId::Kitchen => "kitchen",
            RoomId::Ballroom => "ballroom",
            RoomId::Hallway2 => "hallway2",
            RoomId::Bedroom => "bedroom",
            RoomId::Office => "office",
            RoomId::Basement => "basement",
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Items that can lie in a room or sit in the player's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemId {
    Sword,
    Food,
    Dagger,
    Potion,
    FinalKey,
}

impl ItemId {
    pub fn name(self) -> &'static str {
        match self {
            ItemId::Sword => "sword",
            ItemId::Food => "food",
            ItemId::Dagger => "dagger",
            ItemId::Potion => "potion",
            ItemId::FinalKey => "final key",
        }
    }

    /// Resolve a player-typed (already lower-cased) name. Only exact names match,
    /// so a single token like `key` never resolves to the final key.
    pub fn from_name(name: &str) -> Option<ItemId> {
        match name {
            "sword" => Some(ItemId::Sword),
            "food" => Some(ItemId::Food),
            "dagger" => Some(ItemId::Dagger),
            "potion" => Some(ItemId::Potion),
            "final key" => Some(ItemId::FinalKey),
            _ => None,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named edges between rooms, as the player types them at the direction prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitLabel {
    Downstairs,
    Out,
    Kitchen,
    Ballroom,
    Hallway2,
    Back,
    Bedroom,
    Office,
    Basement,
    Up,
    Secret,
}

impl ExitLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExitLabel::Downstairs => "downstairs",
            ExitLabel::Out => "out",
            ExitLabel::Kitchen => "kitchen",
            ExitLabel::Ballroom => "ballroom",
            ExitLabel::Hallway2 => "hallway2",
            ExitLabel::Back => "back",
            ExitLabel::Bedroom => "bedroom",
            ExitLabel::Office => "office",
            ExitLabel::Basement => "basement",
            ExitLabel::Up => "up",
            ExitLabel::Secret => "secret",
        }
    }

    pub fn parse(label: &str) -> Option<ExitLabel> {
        match label {
            "downstairs" => Some(ExitLabel::Downstairs),
            "out" => Some(ExitLabel::Out),
            "kitchen" => Some(ExitLabel::Kitchen),
            "ballroom" => Some(ExitLabel::Ballroom),
            "hallway2" => Some(ExitLabel::Hallway2),
            "back" => Some(ExitLabel::Back),
            "bedroom" => Some(ExitLabel::Bedroom),
            "office" => Some(ExitLabel::Office),
            "basement" => Some(ExitLabel::Basement),
            "up" => Some(ExitLabel::Up),
            "secret" => Some(ExitLabel::Secret),
            _ => None,
        }
    }
}

impl fmt::Display for ExitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-time story flags attached to a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKey {
    /// Library: the out-of-place book has been pulled and the hidden room revealed.
    BookInteraction,
    /// Hidden room: the statue guarding the sword has not been defeated yet.
    StatueAlive,
}

/// Enemy stats. Health only marks presence; combat is scripted per encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub name: String,
    pub health: i32,
    pub damage: i32,
}

impl EnemyTemplate {
    pub fn new(name: &str, health: i32, damage: i32) -> Self {
        Self {
            name: name.to_string(),
            health,
            damage,
        }
    }

    pub fn zombie_princess() -> Self {
        Self::new("zombie princess", 1, 3)
    }

    pub fn basement_creatures() -> Self {
        Self::new("basement creatures", 2, 4)
    }

    /// Spawned lazily when the sword is lifted in the hidden room.
    pub fn statue() -> Self {
        Self::new("statue", 1, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    pub id: RoomId,
    pub description: String,
    pub items: Vec<ItemId>,
    /// Ordered so the direction prompt lists paths the same way every time.
    pub exits: Vec<(ExitLabel, RoomId)>,
    pub locked: bool,
    pub enemy: Option<EnemyTemplate>,
    pub triggers: HashMap<TriggerKey, bool>,
}

impl RoomRecord {
    pub fn new(id: RoomId, description: &str) -> Self {
        Self {
            id,
            description: description.to_string(),
            items: Vec::new(),
            exits: Vec::new(),
            locked: false,
            enemy: None,
            triggers: HashMap::new(),
        }
    }

    pub fn with_exit(mut self, label: ExitLabel, destination: RoomId) -> Self {
        self.add_exit(label, destination);
        self
    }

    pub fn with_item(mut self, item: ItemId) -> Self {
        if !self.items.contains(&item) {
            self.items.push(item);
        }
        self
    }

    pub fn with_enemy(mut self, enemy: EnemyTemplate) -> Self {
        self.enemy = Some(enemy);
        self
    }

    pub fn with_trigger(mut self, key: TriggerKey, value: bool) -> Self {
        self.triggers.insert(key, value);
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn exit(&self, label: ExitLabel) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, dest)| *dest)
    }

    /// Adds an edge, replacing the destination if the label already exists.
    pub fn add_exit(&mut self, label: ExitLabel, destination: RoomId) {
        match self.exits.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = destination,
            None => self.exits.push((label, destination)),
        }
    }

    pub fn exit_labels(&self) -> Vec<&'static str> {
        self.exits.iter().map(|(l, _)| l.as_str()).collect()
    }

    pub fn trigger(&self, key: TriggerKey) -> bool {
        self.triggers.get(&key).copied().unwrap_or(false)
    }

    pub fn set_trigger(&mut self, key: TriggerKey, value: bool) {
        self.triggers.insert(key, value);
    }

    pub fn has_item(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Removes the item if present; returns whether it was there.
    pub fn remove_item(&mut self, item: ItemId) -> bool {
        match self.items.iter().position(|i| *i == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }
}
