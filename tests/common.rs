//! Shared helpers for driving a game session line by line.

use castle_escape::game::{GameSession, Phase};

/// A session that has already accepted `ready`.
pub fn ready_session() -> GameSession {
    let mut session = GameSession::default();
    session.start();
    session.handle_line("ready");
    assert_eq!(session.phase(), Phase::Playing);
    session
}

/// Feed every line and return the concatenated output.
pub fn play(session: &mut GameSession, lines: &[&str]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&session.handle_line(line));
    }
    out
}

/// Walk from the junction to hallway2.
#[allow(dead_code)]
pub const TO_HALLWAY2: &[&str] = &["go", "straight", "go", "hallway2"];

/// Walk from the junction into the hidden room, revealing it on the way.
#[allow(dead_code)]
pub const TO_HIDDEN_ROOM: &[&str] = &["go", "upstairs", "look book", "go", "secret"];
