//! Item handlers: TAKE, USE and LOOK.

use log::{debug, info};

use crate::game::errors::GameError;
use crate::game::player::PlayerState;
use crate::game::types::{EnemyTemplate, ItemId, RoomId, TriggerKey};
use crate::game::world::World;

/// Result of TAKE. `combat` asks the session to open the fight/flee prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeReport {
    pub text: String,
    pub combat: bool,
}

pub fn take_item(
    world: &mut World,
    player: &mut PlayerState,
    name: &str,
) -> Result<TakeReport, GameError> {
    let room_id = player.current_room;
    let room = world.room_mut(room_id)?;
    let item = match ItemId::from_name(name) {
        Some(item) if room.remove_item(item) => item,
        _ => {
            return Ok(TakeReport {
                text: format!("You can't find {} here.\n", name),
                combat: false,
            })
        }
    };
    player.add_item(item);
    info!("player took {} in {}", item, room_id);

    let mut text = format!("You picked up the {}.\n", item);
    let mut combat = false;

    if room_id == RoomId::HiddenRoom && item == ItemId::Sword && room.trigger(TriggerKey::StatueAlive)
    {
        text.push_str("As you grab the sword, the statue comes to life behind you!\n");
        if room.enemy.is_none() {
            room.enemy = Some(EnemyTemplate::statue());
            info!("statue awakened");
        }
        combat = true;
    }

    // Eaten on pickup; the food entry stays in the inventory afterwards.
    if item == ItemId::Food {
        text.push_str("You eat the food and feel better.\n");
        player.adjust_health(5);
        text.push_str(&player.health_line());
    }

    Ok(TakeReport { text, combat })
}

/// Only the potion does anything; other held items are reported unusable.
pub fn use_item(player: &mut PlayerState, name: &str, target: Option<&str>) -> String {
    let item = match ItemId::from_name(name) {
        Some(item) if player.has(item) => item,
        _ => return "You don't have that item.\n".to_string(),
    };
    if let Some(target) = target {
        debug!("use {} on {} (targets have no effect)", item, target);
    }
    match item {
        ItemId::Potion => {
            player.remove_item(ItemId::Potion);
            player.adjust_health(10);
            info!("potion used, health now {}", player.health);
            format!(
                "You drink the potion and feel refreshed.\n{}",
                player.health_line()
            )
        }
        other => format!("You can't use {} right now.\n", other),
    }
}

pub fn look(
    world: &mut World,
    player: &PlayerState,
    target: Option<&str>,
) -> Result<String, GameError> {
    let room_id = player.current_room;
    let Some(target) = target else {
        return world.describe(room_id);
    };

    if room_id == RoomId::Library && target == "book" {
        return Ok(if world.reveal_hidden_room()? {
            "You pull the strange book. A secret door opens to a hidden room!\n".to_string()
        } else {
            "You've already discovered the hidden room.\n".to_string()
        });
    }

    let room = world.room(room_id)?;
    let visible = ItemId::from_name(target)
        .map(|item| room.has_item(item) || player.has(item))
        .unwrap_or(false);
    if visible {
        Ok(format!("You examine the {}. It's quite interesting!\n", target))
    } else {
        Ok(format!("You don't see a {} here.\n", target))
    }
}
