//! # Configuration Management Module
//!
//! Optional TOML configuration for the game binary. Every field has a default,
//! so a missing file simply means "play with defaults".
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - starting health, intro banner, prompt text, input echo
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! starting_health = 20
//! show_intro = true
//! prompt = "> "
//! # echo_input = true   # unset: echo only when stdin is not a terminal
//!
//! [logging]
//! level = "warn"
//! # file = "castle-escape.log"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use castle_escape::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("config.toml")?;
//!     println!("Starting health: {}", config.game.starting_health);
//!     Ok(())
//! }
//! ```

use anyhow::{anyhow, bail, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::game::DEFAULT_STARTING_HEALTH;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Health the player wakes up with. Must be positive.
    #[serde(default = "default_starting_health")]
    pub starting_health: i32,
    /// Print the how-to-play banner before asking for `ready`.
    #[serde(default = "default_show_intro")]
    pub show_intro: bool,
    /// Prompt printed before each command line.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Echo each input line back to the output. When unset the binary echoes
    /// only if stdin is not a terminal (scripted play).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub echo_input: Option<bool>,
}

fn default_starting_health() -> i32 {
    DEFAULT_STARTING_HEALTH
}

fn default_show_intro() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: default_starting_health(),
            show_intro: default_show_intro(),
            prompt: default_prompt(),
            echo_input: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append log lines here instead of stderr so they never mix with game text.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown strings fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" | "warning" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => {
                eprintln!("Invalid log level '{}', defaulting to warn", self.level);
                log::LevelFilter::Warn
            }
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!("no config at {}; using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Create a default configuration file
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path.display(), e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.game.starting_health <= 0 {
            bail!(
                "game.starting_health must be positive, got {}",
                self.game.starting_health
            );
        }
        Ok(())
    }
}
