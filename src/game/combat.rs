//! Scripted one-round encounters.
//!
//! There is no generic combat engine: each guarded room has its own outcome
//! table keyed by the weapon the player carries and whether they fight or
//! flee. Resolution never announces death; the session's win/loss check does
//! that exactly once per turn.

use log::{info, warn};

use crate::game::errors::GameError;
use crate::game::player::PlayerState;
use crate::game::types::{ItemId, RoomId, RoomRecord, TriggerKey};
use crate::game::world::World;

pub const COMBAT_PROMPT: &str = "Do you fight or flee? (fight/flee) > ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encounter {
    /// Hidden room guardian, awake only after the sword is lifted.
    Statue,
    ZombiePrincess,
    BasementCreatures,
}

impl Encounter {
    /// The scripted encounter for a room, if its enemy slot is filled.
    pub fn for_room(room: &RoomRecord) -> Option<Encounter> {
        room.enemy.as_ref()?;
        match room.id {
            RoomId::HiddenRoom if room.trigger(TriggerKey::StatueAlive) => Some(Encounter::Statue),
            RoomId::Bedroom => Some(Encounter::ZombiePrincess),
            RoomId::Basement => Some(Encounter::BasementCreatures),
            _ => None,
        }
    }
}

/// Best weapon the player holds; the sword wins over the dagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weapon {
    Sword,
    Dagger,
    Bare,
}

impl Weapon {
    pub fn best_held(player: &PlayerState) -> Weapon {
        if player.has(ItemId::Sword) {
            Weapon::Sword
        } else if player.has(ItemId::Dagger) {
            Weapon::Dagger
        } else {
            Weapon::Bare
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Fight,
    Flee,
}

impl Choice {
    /// Only the literal word "fight" fights; anything else runs.
    pub fn parse(raw: &str) -> Choice {
        if raw.trim().eq_ignore_ascii_case("fight") {
            Choice::Fight
        } else {
            Choice::Flee
        }
    }
}

/// Announce the enemy in `room_id` if a scripted encounter is waiting there.
pub fn announce(world: &World, room_id: RoomId) -> Result<Option<String>, GameError> {
    let room = world.room(room_id)?;
    let Some(enemy) = room.enemy.as_ref() else {
        return Ok(None);
    };
    if Encounter::for_room(room).is_none() {
        warn!("enemy '{}' in {} has no scripted encounter", enemy.name, room_id);
        return Ok(None);
    }
    Ok(Some(format!("A {} appears!\n", enemy.name)))
}

/// Resolve the encounter in the player's current room with the typed choice.
pub fn resolve_encounter(
    world: &mut World,
    player: &mut PlayerState,
    choice: &str,
) -> Result<String, GameError> {
    let room_id = player.current_room;
    let Some(encounter) = Encounter::for_room(world.room(room_id)?) else {
        return Ok(String::new());
    };
    let choice = Choice::parse(choice);
    let weapon = Weapon::best_held(player);
    info!(
        "encounter {:?} in {}: {:?} with {:?} at health {}",
        encounter, room_id, choice, weapon, player.health
    );
    match encounter {
        Encounter::Statue => statue(world, player, choice),
        Encounter::ZombiePrincess => zombie_princess(world, player, choice, weapon),
        Encounter::BasementCreatures => basement_creatures(world, player, choice, weapon),
    }
}

fn statue(world: &mut World, player: &mut PlayerState, choice: Choice) -> Result<String, GameError> {
    let mut out = String::new();
    let room = world.room_mut(RoomId::HiddenRoom)?;
    match choice {
        Choice::Fight => {
            out.push_str("You fight the statue! You lose 5 health, but you defeat it.\n");
            player.adjust_health(-5);
            out.push_str(&player.health_line());
            room.set_trigger(TriggerKey::StatueAlive, false);
            room.enemy = None;
        }
        Choice::Flee => {
            out.push_str("You flee! The statue strikes you as you escape.\n");
            player.adjust_health(-10);
            out.push_str(&format!(
                "You lose 10 health. Your health is now {}.\n",
                player.health
            ));
            if player.remove_item(ItemId::Sword) {
                // Back on the floor, so the sword is never in two places or none.
                room.items.push(ItemId::Sword);
                out.push_str("In your panic, you drop the sword!\n");
            }
        }
    }
    Ok(out)
}

fn zombie_princess(
    world: &mut World,
    player: &mut PlayerState,
    choice: Choice,
    weapon: Weapon,
) -> Result<String, GameError> {
    let mut out = String::new();
    let room = world.room_mut(RoomId::Bedroom)?;
    if choice == Choice::Flee {
        out.push_str("You flee the bedroom, taking a hit from the zombie princess!\n");
        player.adjust_health(-7);
        out.push_str(&player.health_line());
        return Ok(out);
    }
    match weapon {
        Weapon::Sword => {
            out.push_str("You strike the zombie princess with your sword, defeating her!\n");
            room.enemy = None;
        }
        Weapon::Dagger => {
            out.push_str("You fight the zombie princess with your dagger, but you take damage.\n");
            player.adjust_health(-5);
            out.push_str(&player.health_line());
            room.enemy = None;
        }
        Weapon::Bare => {
            out.push_str("You have no weapon! The princess bites you!\n");
            player.adjust_health(-10);
            out.push_str(&player.health_line());
            if !player.is_dead() {
                out.push_str("You manage to push her away and run!\n");
            }
            return Ok(out);
        }
    }
    if !player.is_dead() {
        out.push_str("You find a small key on her. It might open the basement.\n");
        player.has_basement_key = true;
        info!("player obtained the basement key");
    }
    Ok(out)
}

fn basement_creatures(
    world: &mut World,
    player: &mut PlayerState,
    choice: Choice,
    weapon: Weapon,
) -> Result<String, GameError> {
    let mut out = String::new();
    if choice == Choice::Flee {
        out.push_str("You try to flee from the basement creatures!\n");
        player.adjust_health(-5);
        if player.is_dead() {
            out.push_str("You lose 5 health... it's too much!\n");
        } else {
            out.push_str("You lose 5 health but escape for now.\n");
        }
        out.push_str(&player.health_line());
        return Ok(out);
    }

    let damage = match weapon {
        Weapon::Sword => {
            out.push_str(
                "You fight fiercely with your sword, striking down the basement creatures!\n",
            );
            0
        }
        Weapon::Dagger => {
            out.push_str("You fight with your dagger...\n");
            5
        }
        Weapon::Bare => {
            out.push_str("Fighting barehanded is tough. The creatures lash out!\n");
            10
        }
    };
    player.adjust_health(-damage);

    if player.is_dead() {
        out.push_str(&format!("You take {} damage... it's too much!\n", damage));
        out.push_str(&player.health_line());
        return Ok(out);
    }
    match weapon {
        Weapon::Sword => out.push_str(&format!(
            "You take {} damage. Your health is now {}.\n",
            damage, player.health
        )),
        Weapon::Dagger => {
            out.push_str(&format!("You take {} damage, but manage to prevail.\n", damage));
            out.push_str(&player.health_line());
        }
        Weapon::Bare => {
            out.push_str(&format!("You take {} damage, but somehow prevail.\n", damage));
            out.push_str(&player.health_line());
        }
    }

    let room = world.room_mut(RoomId::Basement)?;
    room.enemy = None;
    if room.remove_item(ItemId::FinalKey) {
        player.add_item(ItemId::FinalKey);
        info!("player picked up the final key");
        out.push_str("You find a final key on the ground and take it!\n");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::EnemyTemplate;

    fn in_room(room: RoomId, health: i32, items: &[ItemId]) -> PlayerState {
        let mut p = PlayerState::new(health);
        p.current_room = room;
        for i in items {
            p.add_item(*i);
        }
        p
    }

    fn world_with_statue() -> World {
        let mut world = World::canonical();
        world.reveal_hidden_room().unwrap();
        let room = world.room_mut(RoomId::HiddenRoom).unwrap();
        room.remove_item(ItemId::Sword);
        room.enemy = Some(EnemyTemplate::statue());
        world
    }

    #[test]
    fn choice_parsing_defaults_to_flee() {
        assert_eq!(Choice::parse(" FIGHT "), Choice::Fight);
        assert_eq!(Choice::parse("run"), Choice::Flee);
        assert_eq!(Choice::parse(""), Choice::Flee);
    }

    #[test]
    fn weapon_preference() {
        assert_eq!(
            Weapon::best_held(&in_room(RoomId::Bedroom, 1, &[ItemId::Dagger, ItemId::Sword])),
            Weapon::Sword
        );
        assert_eq!(
            Weapon::best_held(&in_room(RoomId::Bedroom, 1, &[ItemId::Dagger])),
            Weapon::Dagger
        );
        assert_eq!(Weapon::best_held(&in_room(RoomId::Bedroom, 1, &[])), Weapon::Bare);
    }

    #[test]
    fn statue_encounter_requires_alive_trigger() {
        let mut world = world_with_statue();
        assert_eq!(
            Encounter::for_room(world.room(RoomId::HiddenRoom).unwrap()),
            Some(Encounter::Statue)
        );
        world
            .room_mut(RoomId::HiddenRoom)
            .unwrap()
            .set_trigger(TriggerKey::StatueAlive, false);
        assert_eq!(Encounter::for_room(world.room(RoomId::HiddenRoom).unwrap()), None);
        assert_eq!(announce(&world, RoomId::HiddenRoom).unwrap(), None);
    }

    #[test]
    fn statue_fight_clears_enemy_permanently() {
        let mut world = world_with_statue();
        let mut p = in_room(RoomId::HiddenRoom, 20, &[ItemId::Sword]);
        let out = resolve_encounter(&mut world, &mut p, "fight").unwrap();
        assert!(out.contains("you defeat it"));
        assert_eq!(p.health, 15);
        assert!(p.has(ItemId::Sword));
        let room = world.room(RoomId::HiddenRoom).unwrap();
        assert!(room.enemy.is_none());
        assert!(!room.trigger(TriggerKey::StatueAlive));
    }

    #[test]
    fn statue_flee_drops_sword_back_on_floor() {
        let mut world = world_with_statue();
        let mut p = in_room(RoomId::HiddenRoom, 20, &[ItemId::Sword]);
        let out = resolve_encounter(&mut world, &mut p, "flee").unwrap();
        assert!(out.contains("You lose 10 health. Your health is now 10."));
        assert!(out.contains("you drop the sword"));
        assert!(!p.has(ItemId::Sword));
        let room = world.room(RoomId::HiddenRoom).unwrap();
        assert!(room.has_item(ItemId::Sword));
        assert!(room.enemy.is_some());
        assert!(room.trigger(TriggerKey::StatueAlive));
    }

    #[test]
    fn princess_with_sword_drops_key() {
        let mut world = World::canonical();
        let mut p = in_room(RoomId::Bedroom, 20, &[ItemId::Sword]);
        let out = resolve_encounter(&mut world, &mut p, "fight").unwrap();
        assert!(out.contains("defeating her"));
        assert_eq!(p.health, 20);
        assert!(p.has_basement_key);
        assert!(world.room(RoomId::Bedroom).unwrap().enemy.is_none());
    }

    #[test]
    fn princess_with_dagger_costs_five() {
        let mut world = World::canonical();
        let mut p = in_room(RoomId::Bedroom, 20, &[ItemId::Dagger]);
        resolve_encounter(&mut world, &mut p, "fight").unwrap();
        assert_eq!(p.health, 15);
        assert!(p.has_basement_key);
        assert!(world.room(RoomId::Bedroom).unwrap().enemy.is_none());
    }

    #[test]
    fn princess_with_dagger_fatal_gives_no_key() {
        let mut world = World::canonical();
        let mut p = in_room(RoomId::Bedroom, 5, &[ItemId::Dagger]);
        let out = resolve_encounter(&mut world, &mut p, "fight").unwrap();
        assert_eq!(p.health, 0);
        assert!(!p.has_basement_key);
        assert!(!out.contains("small key"));
        assert!(!out.contains("died"));
    }

    #[test]
    fn princess_bare_handed_survives_encounter() {
        let mut world = World::canonical();
        let mut p = in_room(RoomId::Bedroom, 20, &[]);
        let out = resolve_encounter(&mut world, &mut p, "fight").unwrap();
        assert!(out.ends_with("You manage to push her away and run!\n"));
        assert_eq!(p.health, 10);
        assert!(!p.has_basement_key);
        assert!(world.room(RoomId::Bedroom).unwrap().enemy.is_some());
    }

    #[test]
    fn princess_flee_costs_seven() {
        let mut world = World::canonical();
        let mut p = in_room(RoomId::Bedroom, 20, &[ItemId::Sword]);
        resolve_encounter(&mut world, &mut p, "no thanks").unwrap();
        assert_eq!(p.health, 13);
        assert_eq!(p.current_room, RoomId::Bedroom);
        assert!(world.room(RoomId::Bedroom).unwrap().enemy.is_some());
    }

    #[test]
    fn basement_sword_is_free_and_claims_key() {
        let mut world = World::canonical();
        let mut p = in_room(RoomId::Basement, 20, &[ItemId::Sword]);
        let out = resolve_encounter(&mut world, &mut p, "fight").unwrap();
        assert!(out.contains("You take 0 damage. Your health is now 20."));
        assert!(p.has(ItemId::FinalKey));
        let room = world.room(RoomId::Basement).unwrap();
        assert!(room.enemy.is_none());
        assert!(!room.has_item(ItemId::FinalKey));
    }

    #[test]
    fn basement_dagger_survive_and_die() {
        let mut world = World::canonical();
        let mut p = in_room(RoomId::Basement, 6, &[ItemId::Dagger]);
        let out = resolve_encounter(&mut world, &mut p, "fight").unwrap();
        assert!(out.contains("manage to prevail"));
        assert_eq!(p.health, 1);
        assert!(p.has(ItemId::FinalKey));

        let mut world = World::canonical();
        let mut p = in_room(RoomId::Basement, 5, &[ItemId::Dagger]);
        let out = resolve_encounter(&mut world, &mut p, "fight").unwrap();
        assert!(out.contains("it's too much!"));
        assert!(!p.has(ItemId::FinalKey));
        let room = world.room(RoomId::Basement).unwrap();
        assert!(room.has_item(ItemId::FinalKey));
        assert!(room.enemy.is_some());
    }

    #[test]
    fn basement_bare_handed() {
        let mut world = World::canonical();
        let mut p = in_room(RoomId::Basement, 11, &[]);
        let out = resolve_encounter(&mut world, &mut p, "fight").unwrap();
        assert!(out.contains("somehow prevail"));
        assert_eq!(p.health, 1);
        assert!(p.has(ItemId::FinalKey));

        let mut world = World::canonical();
        let mut p = in_room(RoomId::Basement, 10, &[]);
        resolve_encounter(&mut world, &mut p, "fight").unwrap();
        assert!(p.is_dead());
        assert!(!p.has(ItemId::FinalKey));
    }

    #[test]
    fn basement_flee_always_costs_five() {
        let mut world = World::canonical();
        let mut p = in_room(RoomId::Basement, 20, &[ItemId::Sword]);
        let out = resolve_encounter(&mut world, &mut p, "flee").unwrap();
        assert!(out.contains("escape for now"));
        assert_eq!(p.health, 15);
        assert!(world.room(RoomId::Basement).unwrap().enemy.is_some());
    }

    #[test]
    fn no_encounter_in_quiet_rooms() {
        let mut world = World::canonical();
        let mut p = in_room(RoomId::Kitchen, 20, &[]);
        assert_eq!(resolve_encounter(&mut world, &mut p, "fight").unwrap(), "");
        assert_eq!(announce(&world, RoomId::Kitchen).unwrap(), None);
        assert_eq!(
            announce(&world, RoomId::Bedroom).unwrap().as_deref(),
            Some("A zombie princess appears!\n")
        );
    }
}
