//! Perfect Tic-Tac-Toe - console game against a minimax opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use perfect_tictactoe::Board;
use perfect_tictactoe_cli::{Cli, Command, FirstMover, GameConfig, GameSession, Report};
use std::io;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            first,
            board,
        } => run_play(config, first, board),
        Command::Analyze { board, json } => run_analyze(&board, json),
    }
}

/// Run a console game
#[instrument]
fn run_play(
    config_path: Option<PathBuf>,
    first: Option<FirstMover>,
    board: Option<String>,
) -> Result<()> {
    let config = match &config_path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_first_mover(first);

    let board = match board {
        Some(board) => parse_board(&board)?,
        None => Board::new(),
    };

    info!(first_mover = %config.first_mover(), "Starting console game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = GameSession::with_board(board, &config, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}

/// Print the best move for a position
#[instrument]
fn run_analyze(board: &str, json: bool) -> Result<()> {
    let report = Report::new(parse_board(board)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}

fn parse_board(board: &str) -> Result<Board> {
    board
        .parse::<Board>()
        .with_context(|| format!("Invalid board {:?}", board))
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
