//! Command-line interface for perfect_tictactoe.

use crate::config::FirstMover;
use clap::{Parser, Subcommand};

/// Perfect Tic-Tac-Toe - play against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on the console
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Side that moves first (overrides the config file)
        #[arg(long, value_enum)]
        first: Option<FirstMover>,

        /// Starting position as nine cell digits (0 empty, 1 AI, 2 human)
        #[arg(long)]
        board: Option<String>,
    },

    /// Print the best move for the automated player in a position
    Analyze {
        /// Position as nine cell digits, row-major (e.g. "110 220 000")
        board: String,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}
