use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::config::GameConfig;
use crate::game::combat::{self, COMBAT_PROMPT};
use crate::game::commands::{help_text, normalize, parse_command, GameCommand};
use crate::game::errors::GameError;
use crate::game::inventory;
use crate::game::navigation;
use crate::game::outcome::{self, Outcome};
use crate::game::player::PlayerState;
use crate::game::world::World;
use crate::logutil::escape_log;

/// # Game Session
///
/// Owns the castle [`World`] and the [`PlayerState`] for one play-through and
/// turns input lines into output text.
///
/// ## Lifecycle
///
/// 1. **NotStarted** - created, intro not shown yet
/// 2. **AwaitingReady** - intro shown, waiting for `ready`
/// 3. **Playing** - commands are interpreted against the room graph
/// 4. **Won** / **Lost** / **Quit** - terminal; further input is ignored
///
/// `GO` and combat need a second line (a direction, or fight/flee). While such
/// a line is pending the next input answers it instead of being parsed as a
/// command, and the win/loss check waits until it is answered.
///
/// ```rust
/// use castle_escape::game::{GameSession, Phase};
///
/// let mut session = GameSession::default();
/// session.start();
/// session.handle_line("ready");
/// assert_eq!(session.phase(), Phase::Playing);
/// session.handle_line("quit");
/// assert!(session.is_over());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    world: World,
    player: PlayerState,
    phase: Phase,
    pending: Option<Prompt>,
    show_intro: bool,
    prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    AwaitingReady,
    Playing,
    Won,
    Lost,
    Quit,
}

/// Sub-input the next line will answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Direction,
    CombatChoice,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_world(config, World::canonical())
    }

    pub fn with_world(config: &GameConfig, world: World) -> Self {
        Self {
            world,
            player: PlayerState::new(config.starting_health),
            phase: Phase::NotStarted,
            pending: None,
            show_intro: config.show_intro,
            prompt: config.prompt.clone(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<Prompt> {
        self.pending
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost | Phase::Quit)
    }

    /// Prompt to print before reading the next line.
    pub fn prompt(&self) -> &str {
        match self.pending {
            Some(Prompt::CombatChoice) => COMBAT_PROMPT,
            _ => self.prompt.as_str(),
        }
    }

    /// Show the intro banner and wait for `ready`.
    pub fn start(&mut self) -> String {
        if self.phase != Phase::NotStarted {
            return String::new();
        }
        info!("session started");
        self.phase = Phase::AwaitingReady;
        if self.show_intro {
            intro_text().to_string()
        } else {
            String::new()
        }
    }

    /// End the session when the input stream closes.
    pub fn end_of_input(&mut self) {
        if !self.is_over() {
            info!("input closed in phase {:?}; ending session", self.phase);
            self.phase = Phase::Quit;
            self.pending = None;
        }
    }

    /// Process one line of player input and return the text to show.
    pub fn handle_line(&mut self, raw: &str) -> String {
        debug!(
            "input phase={:?} pending={:?} line={}",
            self.phase,
            self.pending,
            escape_log(raw)
        );
        match self.phase {
            Phase::NotStarted => {
                self.phase = Phase::AwaitingReady;
                self.handle_ready_line(raw)
            }
            Phase::AwaitingReady => self.handle_ready_line(raw),
            Phase::Playing => match self.play_turn(raw) {
                Ok(out) => out,
                Err(e) => {
                    warn!("command aborted: {}", e);
                    self.pending = None;
                    format!("Something went wrong: {}\n", e)
                }
            },
            Phase::Won | Phase::Lost | Phase::Quit => {
                debug!("ignoring input after game over");
                String::new()
            }
        }
    }

    fn handle_ready_line(&mut self, raw: &str) -> String {
        match normalize(raw).as_str() {
            "ready" => {
                let mut out = String::from(
                    "You wake up in an old castle. The main door is locked.\n\
You can go 'UPSTAIRS' to the library, or 'STRAIGHT' down the hallway.\n",
                );
                match self.world.describe(self.player.current_room) {
                    Ok(text) => out.push_str(&text),
                    Err(e) => warn!("cannot describe start room: {}", e),
                }
                self.phase = Phase::Playing;
                info!("player is ready; game on");
                out
            }
            "quit" | "exit" => {
                self.phase = Phase::Quit;
                "Goodbye!\n".to_string()
            }
            _ => "Type 'ready' when you're ready to begin, or 'quit'/'exit' to stop.\n".to_string(),
        }
    }

    fn play_turn(&mut self, raw: &str) -> Result<String, GameError> {
        let mut out = match self.pending.take() {
            Some(Prompt::Direction) => self.answer_direction(raw)?,
            Some(Prompt::CombatChoice) => {
                combat::resolve_encounter(&mut self.world, &mut self.player, raw)?
            }
            None => {
                let command = parse_command(raw);
                debug!("parsed command {:?}", command);
                match command {
                    GameCommand::Empty => return Ok(String::new()),
                    GameCommand::Quit => {
                        info!("player quit");
                        self.phase = Phase::Quit;
                        return Ok("Goodbye!\n".to_string());
                    }
                    other => self.dispatch(other)?,
                }
            }
        };
        if self.pending.is_none() {
            self.finish_turn(&mut out);
        }
        Ok(out)
    }

    fn dispatch(&mut self, command: GameCommand) -> Result<String, GameError> {
        match command {
            GameCommand::Look(target) => {
                inventory::look(&mut self.world, &self.player, target.as_deref())
            }
            GameCommand::Take(name) => {
                let report = inventory::take_item(&mut self.world, &mut self.player, &name)?;
                let mut out = report.text;
                if report.combat {
                    self.open_combat(&mut out)?;
                }
                Ok(out)
            }
            GameCommand::Use { item, target } => Ok(inventory::use_item(
                &mut self.player,
                &item,
                target.as_deref(),
            )),
            GameCommand::Go => {
                let (text, awaiting) = navigation::begin_move(&self.world, &self.player)?;
                if awaiting {
                    self.pending = Some(Prompt::Direction);
                }
                Ok(text)
            }
            GameCommand::Help => Ok(help_text().to_string()),
            GameCommand::Inventory => Ok(self.player.format_inventory()),
            GameCommand::Status => Ok(format!(
                "Health: {}. Location: {}.\n",
                self.player.health, self.player.current_room
            )),
            GameCommand::Incomplete(reply) => Ok(format!("{}\n", reply)),
            GameCommand::Unknown(_) => {
                Ok("Invalid command. Try 'look', 'take', 'use', or 'go'.\n".to_string())
            }
            GameCommand::Quit | GameCommand::Empty => Ok(String::new()),
        }
    }

    fn answer_direction(&mut self, raw: &str) -> Result<String, GameError> {
        let report = navigation::resolve_move(&mut self.world, &mut self.player, raw)?;
        let mut out = report.text;
        if report.entered.is_some() {
            self.open_combat(&mut out)?;
        }
        Ok(out)
    }

    /// Announce the current room's enemy and ask fight or flee.
    fn open_combat(&mut self, out: &mut String) -> Result<(), GameError> {
        if let Some(announcement) = combat::announce(&self.world, self.player.current_room)? {
            out.push_str(&announcement);
            self.pending = Some(Prompt::CombatChoice);
        }
        Ok(())
    }

    /// Runs once per completed turn, so the death message can only appear once.
    fn finish_turn(&mut self, out: &mut String) {
        match outcome::evaluate(&self.player) {
            Some(Outcome::Escaped) => {
                info!("player escaped with health {}", self.player.health);
                out.push_str(Outcome::Escaped.message());
                self.phase = Phase::Won;
            }
            Some(Outcome::Died) => {
                info!("player died in {}", self.player.current_room);
                out.push_str(Outcome::Died.message());
                self.phase = Phase::Lost;
            }
            None => {}
        }
    }
}

pub fn intro_text() -> &'static str {
    "Hello! Welcome to Castle Escape!\n\
Here is how to play the game:\n \
- Type 'take <item>' on ONE line to pick up items, e.g., 'take food'.\n \
- Type 'look <item>' on ONE line to examine items, e.g., 'look book'.\n \
- Type 'use <item>' on ONE line to use an item in your inventory, e.g., 'use potion'.\n \
- Type 'go' or 'move' to see where you can go next.\n \
- Type 'quit' or 'exit' to stop the game.\n\
Are you ready to begin? Type 'ready'.\n"
}

/// Drive a session from a line stream until it ends or the input runs dry.
/// With `echo`, each line read is written back so piped transcripts stay readable.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut output: W,
    echo: bool,
) -> Result<Phase, GameError> {
    output.write_all(session.start().as_bytes())?;
    while !session.is_over() {
        output.write_all(session.prompt().as_bytes())?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            session.end_of_input();
            break;
        }
        if echo {
            writeln!(output, "{}", line.trim_end())?;
        }
        output.write_all(session.handle_line(&line).as_bytes())?;
    }
    output.flush()?;
    Ok(session.phase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{ItemId, RoomId};

    fn playing() -> GameSession {
        let mut s = GameSession::default();
        s.start();
        s.handle_line("ready");
        s
    }

    #[test]
    fn ready_gate() {
        let mut s = GameSession::default();
        assert!(s.start().starts_with("Hello! Welcome to Castle Escape!"));
        assert_eq!(s.phase(), Phase::AwaitingReady);
        let out = s.handle_line("look");
        assert!(out.starts_with("Type 'ready'"));
        let out = s.handle_line("  READY ");
        assert!(out.contains("You wake up in an old castle."));
        assert!(out.contains("You're back at the spot where you woke up."));
        assert_eq!(s.phase(), Phase::Playing);
    }

    #[test]
    fn quit_before_ready() {
        let mut s = GameSession::default();
        s.start();
        assert_eq!(s.handle_line("exit"), "Goodbye!\n");
        assert_eq!(s.phase(), Phase::Quit);
        assert_eq!(s.handle_line("ready"), "");
    }

    #[test]
    fn go_opens_direction_prompt() {
        let mut s = playing();
        let out = s.handle_line("go");
        assert!(out.contains("'upstairs'"));
        assert_eq!(s.pending(), Some(Prompt::Direction));
        // "quit" at the direction prompt is just a bad direction.
        let out = s.handle_line("quit");
        assert_eq!(out, "You can't go that way.\n");
        assert_eq!(s.phase(), Phase::Playing);
        assert_eq!(s.pending(), None);
    }

    #[test]
    fn entering_guarded_room_asks_fight_or_flee() {
        let mut s = playing();
        for line in ["go", "straight", "go", "hallway2", "go"] {
            s.handle_line(line);
        }
        let out = s.handle_line("bedroom");
        assert!(out.ends_with("A zombie princess appears!\n"));
        assert_eq!(s.prompt(), COMBAT_PROMPT);
        s.handle_line("flee");
        assert_eq!(s.player().health, 13);
        assert_eq!(s.prompt(), "> ");
    }

    #[test]
    fn empty_line_is_ignored() {
        let mut s = playing();
        assert_eq!(s.handle_line("   "), "");
        assert_eq!(s.pending(), None);
    }

    #[test]
    fn status_and_inventory_are_read_only() {
        let mut s = playing();
        assert_eq!(
            s.handle_line("status"),
            "Health: 20. Location: entrance_choice.\n"
        );
        assert_eq!(s.handle_line("i"), "You are carrying nothing.\n");
        assert_eq!(s.player().current_room, RoomId::EntranceChoice);
    }

    #[test]
    fn missing_room_aborts_command_without_moving() {
        let records = crate::game::state::canonical_world_seed()
            .into_iter()
            .filter(|r| r.id != RoomId::Hallway)
            .collect();
        let mut s = GameSession::with_world(&GameConfig::default(), World::from_records(records));
        s.start();
        s.handle_line("ready");
        s.handle_line("go");
        let out = s.handle_line("straight");
        assert!(out.starts_with("Something went wrong"));
        assert_eq!(s.player().current_room, RoomId::EntranceChoice);
        assert_eq!(s.phase(), Phase::Playing);
    }

    #[test]
    fn run_session_ends_on_eof() {
        let mut s = GameSession::default();
        let input = std::io::Cursor::new("ready\nlook\n");
        let mut output = Vec::new();
        let phase = run_session(&mut s, input, &mut output, true).unwrap();
        assert_eq!(phase, Phase::Quit);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("> ready\n"));
        assert!(text.contains("The main door is locked tight."));
        assert!(!s.player().has(ItemId::FinalKey));
    }
}
