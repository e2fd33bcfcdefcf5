//! Castle Escape game model.
//!
//! The world is a fixed graph of ten rooms with mutable payload (items, locks,
//! enemies, one-time triggers). A single player walks it, picks things up, and
//! survives scripted encounters until escaping through the main door or dying.

pub mod combat;
pub mod commands;
pub mod errors;
pub mod inventory;
pub mod navigation;
pub mod outcome;
pub mod player;
pub mod session;
pub mod state;
pub mod types;
pub mod world;

pub use combat::{Choice, Encounter, Weapon, COMBAT_PROMPT};
pub use commands::{parse_command, GameCommand};
pub use errors::GameError;
pub use outcome::Outcome;
pub use player::PlayerState;
pub use session::{run_session, GameSession, Phase, Prompt};
pub use state::{canonical_world_seed, DEFAULT_STARTING_HEALTH, START_ROOM_ID};
pub use types::*;
pub use world::World;
