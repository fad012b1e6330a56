//! Terminal-state detection for tic-tac-toe.
//!
//! The checks are pure functions over a [`Board`]. Win detection always runs
//! before draw detection, since a full board can also hold a winning line.

use crate::board::{Board, Cell, Move, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Minimax score on a symmetric scale from the automated player's view.
pub type Score = i32;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// Game ended in a win.
    #[display("{} wins", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the minimax score of this outcome.
    ///
    /// `PlayerA` wins score +1, draws 0 and `PlayerB` wins -1.
    pub fn score(self) -> Score {
        match self {
            Outcome::Won(Player::A) => 1,
            Outcome::Won(Player::B) => -1,
            Outcome::Draw => 0,
        }
    }
}

/// Winning lines, checked in order: rows, columns, diagonals.
const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::at(0, 0), Move::at(0, 1), Move::at(0, 2)],
    [Move::at(1, 0), Move::at(1, 1), Move::at(1, 2)],
    [Move::at(2, 0), Move::at(2, 1), Move::at(2, 2)],
    // Columns
    [Move::at(0, 0), Move::at(1, 0), Move::at(2, 0)],
    [Move::at(0, 1), Move::at(1, 1), Move::at(2, 1)],
    [Move::at(0, 2), Move::at(1, 2), Move::at(2, 2)],
    // Diagonals
    [Move::at(0, 0), Move::at(1, 1), Move::at(2, 2)],
    [Move::at(0, 2), Move::at(1, 1), Move::at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line found, `None` otherwise.
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.player();
        }
    }
    None
}

/// Classifies the board.
///
/// Returns `None` while the game is undecided: no complete line and at least
/// one empty cell.
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some(player) = winner(board) {
        return Some(Outcome::Won(player));
    }
    if board.is_full() {
        return Some(Outcome::Draw);
    }
    None
}

/// Classifies the board, logging the result.
#[instrument(skip(board), ret)]
pub fn status(board: &Board) -> Option<Outcome> {
    evaluate(board)
}
