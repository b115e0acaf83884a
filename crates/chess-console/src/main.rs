//! Console Chess - two players sharing one terminal.
//!
//! Reads settings from `chess.toml`, then alternates turns on stdin/stdout
//! until checkmate or `quit`. Logs go to stderr.

mod command;
mod config;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chess_core::Color;
use chess_engine::{Board, Game};
use clap::Parser;
use config::ConsoleConfig;
use session::Session;
use tracing_subscriber::EnvFilter;

/// Console Chess - play a two-player game in the terminal.
#[derive(Parser)]
#[command(name = "chess-console")]
#[command(about = "Play a two-player chess game in the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value_os_t = ConsoleConfig::default_path())]
    config: PathBuf,

    /// Side that moves first (white or black), overriding the config file
    #[arg(long)]
    first_player: Option<Color>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ConsoleConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(color) = args.first_player {
        config.first_player = color;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(
        config = %args.config.display(),
        first_player = %config.first_player,
        show_captures = config.show_captures,
        "starting chess-console"
    );

    let game = Game::from_board(Board::new(), config.first_player)?;
    let mut session = Session::new(
        game,
        io::stdin().lock(),
        io::stdout().lock(),
        config.show_captures,
    );
    let end = session.run()?;

    tracing::info!(?end, status = ?session.game().status(), "session finished");
    Ok(())
}
