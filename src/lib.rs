//! # Castle Escape - a small text adventure
//!
//! You wake up in an old castle with the main door locked. Explore a fixed
//! set of rooms, pick up what you find, survive a few scripted encounters and
//! carry the final key back to the main door.
//!
//! ## Features
//!
//! - **Line-oriented play**: one command per line over stdin/stdout; `go` and
//!   combat ask a follow-up question on the next line.
//! - **Typed world**: rooms, items, exits and triggers are enums, so the castle
//!   graph is checked at compile time rather than by string lookups.
//! - **Scripted encounters**: each guarded room has its own fight/flee outcome
//!   table keyed by the weapon you carry.
//! - **Optional config**: TOML file for starting health, prompt and logging.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use castle_escape::config::Config;
//! use castle_escape::game::{run_session, GameSession};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("config.toml")?;
//!     let mut session = GameSession::new(&config.game);
//!     let stdin = std::io::stdin();
//!     run_session(&mut session, stdin.lock(), std::io::stdout(), false)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - world graph, player state, commands, combat and the session loop
//! - [`config`] - configuration loading, defaults and validation
//! - [`logutil`] - log-safe rendering of raw player input

pub mod config;
pub mod game;
pub mod logutil;
