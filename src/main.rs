//! Binary entrypoint for Castle Escape.
//!
//! Commands:
//! - `play` (default) - start a game on stdin/stdout
//! - `init` - write a starter `config.toml`
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use castle_escape::config::Config;
use castle_escape::game::{run_session, GameSession, Phase};

#[derive(Parser)]
#[command(name = "castle-escape")]
#[command(about = "Escape the castle: a small text adventure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (optional; defaults are used when missing)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,
    /// Write a default configuration file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let config = Config::load_or_default(&cli.config)?;
            init_logging(&Some(config.clone()), cli.verbose);
            info!("Starting Castle Escape v{}", env!("CARGO_PKG_VERSION"));

            let echo = config
                .game
                .echo_input
                .unwrap_or_else(|| !atty::is(atty::Stream::Stdin));
            let mut session = GameSession::new(&config.game);
            let stdin = std::io::stdin();
            let phase = run_session(&mut session, stdin.lock(), std::io::stdout(), echo)
                .context("game session failed")?;
            match phase {
                Phase::Won => info!("session over: escaped"),
                Phase::Lost => info!("session over: died"),
                other => info!("session over: {:?}", other),
            }
        }
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config)?;
            println!("Configuration file created at {}", cli.config);
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| c.logging.level_filter())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    let log_file = config.as_ref().and_then(|c| c.logging.file.clone());
    if let Some(file) = log_file {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)
        {
            Ok(f) => {
                // Route records to the file; the console belongs to the game.
                builder.target(env_logger::Target::Pipe(Box::new(f)));
            }
            Err(e) => eprintln!("Cannot open log file {}: {} (logging to stderr)", file, e),
        }
    }
    builder.format(|fmt, record| {
        writeln!(
            fmt,
            "{} [{}] {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            record.level(),
            record.args()
        )
    });
    let _ = builder.try_init();
}
