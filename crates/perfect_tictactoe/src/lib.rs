//! Perfect tic-tac-toe - pure game logic with exhaustive minimax search
//!
//! This library holds everything the console game needs to decide a move.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of cells, moves, and the scoped placement guard
//! - **Outcome**: pure classification of a board as won, drawn or undecided
//! - **Search**: full-depth minimax returning a position's value and best move
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Board, Move, Outcome, Player, best_move, evaluate};
//!
//! let mut board: Board = "110 220 000".parse()?;
//! let mv = best_move(&mut board).expect("board has empty cells");
//! assert_eq!(mv, Move::new(0, 2)?);
//!
//! board.play(mv, Player::A)?;
//! assert_eq!(evaluate(&board), Some(Outcome::Won(Player::A)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod outcome;
mod search;

// Crate-level exports - Board state
pub use board::{Board, Cell, Move, Placement, Player, SIZE};

// Crate-level exports - Errors
pub use error::{BoardParseError, MoveError};

// Crate-level exports - Outcome evaluation
pub use outcome::{Outcome, Score, evaluate, status, winner};

// Crate-level exports - Search engine
pub use search::{Decision, Search, best_move, minimax};
