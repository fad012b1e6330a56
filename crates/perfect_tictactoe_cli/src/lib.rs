//! Perfect Tic-Tac-Toe console front end
//!
//! Wraps the pure game logic of [`perfect_tictactoe`] in a console game loop,
//! a TOML configuration layer and a position analysis report.
//!
//! # Architecture
//!
//! - **Session**: turn-taking game loop over any reader and writer
//! - **Config**: optional TOML file choosing who moves first
//! - **Analysis**: best-move report for a given position
//! - **CLI**: clap argument surface for the `perfect_tictactoe` binary
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Outcome, Player};
//! use perfect_tictactoe_cli::{GameConfig, GameSession};
//!
//! # fn example() -> anyhow::Result<()> {
//! let board = "110 220 000".parse()?;
//! let mut output = Vec::new();
//! let mut session = GameSession::with_board(board, &GameConfig::default(), &b""[..], &mut output);
//! assert_eq!(session.run()?, Outcome::Won(Player::A));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod analysis;
mod cli;
mod config;
mod session;

// Crate-level exports - Analysis
pub use analysis::Report;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstMover, GameConfig};

// Crate-level exports - Game loop
pub use session::{GameSession, Turn, announcement};
