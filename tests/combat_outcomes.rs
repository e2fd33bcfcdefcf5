/// Integration tests for scripted encounters as seen through a session.
mod common;

use castle_escape::game::{ItemId, Phase, Prompt, RoomId, TriggerKey, COMBAT_PROMPT};
use common::{play, ready_session, TO_HALLWAY2, TO_HIDDEN_ROOM};

#[test]
fn taking_sword_wakes_statue_and_forces_combat() {
    let mut session = ready_session();
    play(&mut session, TO_HIDDEN_ROOM);
    assert_eq!(session.player().current_room, RoomId::HiddenRoom);

    let out = session.handle_line("take sword");
    assert!(out.contains("You picked up the sword."));
    assert!(out.contains("the statue comes to life behind you!"));
    assert!(out.ends_with("A statue appears!\n"));
    assert_eq!(session.pending(), Some(Prompt::CombatChoice));
    assert_eq!(session.prompt(), COMBAT_PROMPT);

    let out = session.handle_line("fight");
    assert!(out.contains("you defeat it"));
    assert_eq!(session.player().health, 15);
    let room = session.world().room(RoomId::HiddenRoom).unwrap();
    assert!(room.enemy.is_none());
    assert!(!room.trigger(TriggerKey::StatueAlive));

    // Leaving and coming back does not wake it again.
    let out = play(&mut session, &["go", "out", "go", "secret"]);
    assert!(!out.contains("appears"));
    assert_eq!(session.pending(), None);
}

#[test]
fn fleeing_statue_costs_ten_and_drops_sword() {
    let mut session = ready_session();
    play(&mut session, TO_HIDDEN_ROOM);
    play(&mut session, &["take sword"]);
    let out = session.handle_line("flee");
    assert!(out.contains("You lose 10 health. Your health is now 10."));
    assert!(out.contains("In your panic, you drop the sword!"));
    assert!(!session.player().has(ItemId::Sword));
    let room = session.world().room(RoomId::HiddenRoom).unwrap();
    assert!(room.enemy.is_some());
    assert!(room.has_item(ItemId::Sword));

    // The statue is still awake: picking the sword up again means another fight,
    // not a second statue.
    let out = session.handle_line("take sword");
    assert!(out.ends_with("A statue appears!\n"));
    play(&mut session, &["fight"]);
    assert_eq!(session.player().health, 5);
    assert!(session.player().has(ItemId::Sword));
}

#[test]
fn princess_key_opens_basement_permanently() {
    let mut session = ready_session();
    play(&mut session, TO_HIDDEN_ROOM);
    play(&mut session, &["take sword", "fight", "go", "out", "go", "downstairs"]);
    play(&mut session, TO_HALLWAY2);
    let out = play(&mut session, &["go", "bedroom"]);
    assert!(out.contains("A zombie princess appears!"));
    let out = session.handle_line("fight");
    assert!(out.contains("You find a small key on her."));
    assert!(session.player().has_basement_key);

    let out = play(&mut session, &["go", "back", "go", "basement"]);
    assert!(out.contains("You unlock the basement door with the key you found!"));
    assert!(out.contains("A basement creatures appears!"));
    assert!(!session.world().room(RoomId::Basement).unwrap().locked);

    let out = session.handle_line("flee");
    assert!(out.contains("escape for now"));
    let out = play(&mut session, &["go", "up", "go", "basement"]);
    assert!(!out.contains("unlock"));
    assert!(out.contains("A basement creatures appears!"));
}

#[test]
fn dying_prints_death_message_exactly_once() {
    let mut session = ready_session();
    play(&mut session, TO_HALLWAY2);
    // Bare-handed: the princess bites for 10 and stays put.
    let out = play(&mut session, &["go", "bedroom", "fight"]);
    assert!(out.contains("You manage to push her away and run!"));
    assert_eq!(session.player().health, 10);
    // Fleeing on the next visit costs 7 more.
    play(&mut session, &["go", "back", "go", "bedroom", "flee"]);
    assert_eq!(session.player().health, 3);
    assert!(!session.player().has_basement_key);

    // With the dagger the fight costs 5, which is fatal at 3.
    play(&mut session, &["go", "back", "go", "office", "take dagger", "go", "back"]);
    let out = play(&mut session, &["go", "bedroom", "fight"]);
    assert_eq!(out.matches("You have died!").count(), 1);
    assert!(!out.contains("small key"));
    assert_eq!(session.phase(), Phase::Lost);
    assert_eq!(session.handle_line("look"), "");
}

#[test]
fn basement_dagger_death_is_reported_once() {
    let mut session = ready_session();
    play(&mut session, &["go", "straight", "go", "hallway2", "go", "office"]);
    play(&mut session, &["take dagger", "go", "back"]);
    play(&mut session, &["go", "bedroom", "fight"]);
    assert!(session.player().has_basement_key);
    assert_eq!(session.player().health, 15);

    // Flee twice from the creatures (-5 each), then fight with the dagger at 5.
    let out = play(
        &mut session,
        &["go", "back", "go", "basement", "flee", "go", "up", "go", "basement", "flee"],
    );
    assert_eq!(out.matches("appears!").count(), 2);
    assert_eq!(session.player().health, 5);
    let out = play(&mut session, &["go", "up", "go", "basement", "fight"]);
    assert!(out.contains("You take 5 damage... it's too much!"));
    assert_eq!(out.matches("You have died!").count(), 1);
    assert_eq!(session.phase(), Phase::Lost);
    assert!(!session.player().has(ItemId::FinalKey));
}
