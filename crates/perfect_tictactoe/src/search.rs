//! Exhaustive minimax search.
//!
//! Every legal continuation is explored to the end of the game. There is no
//! pruning and no caching; a 3x3 board keeps the full tree small enough
//! (549,946 nodes from the empty board) to search on every move.
//!
//! Positions are explored in place: each speculative mark is applied through
//! [`Board::speculate`], whose guard restores the cell when it leaves
//! scope, so the caller's board is unchanged after every search.

use crate::board::{Board, Move, Player};
use crate::outcome::{Score, evaluate};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// The move chosen for the automated player and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct Decision {
    /// Chosen move.
    #[serde(rename = "move")]
    mv: Move,
    /// Game-theoretic value of the position after the move.
    score: Score,
}

/// Minimax searcher that counts the positions it visits.
#[derive(Debug, Clone, Default)]
pub struct Search {
    nodes: u64,
}

impl Search {
    /// Creates a searcher with a zeroed node counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of positions visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns the minimax value of `board`.
    ///
    /// `maximizing` is true when `PlayerA` moves next. Terminal positions
    /// score +1 for a `PlayerA` win, 0 for a draw and -1 for a `PlayerB` win.
    pub fn value(&mut self, board: &mut Board, maximizing: bool) -> Score {
        self.nodes += 1;

        if let Some(outcome) = evaluate(board) {
            return outcome.score();
        }

        let mover = if maximizing { Player::A } else { Player::B };
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for mv in Move::ALL {
            if !board.is_empty(mv) {
                continue;
            }
            let mut placed = board.speculate(mv, mover);
            let eval = self.value(&mut placed, !maximizing);
            best = if maximizing {
                best.max(eval)
            } else {
                best.min(eval)
            };
        }

        best
    }

    /// Picks the best move for `PlayerA` together with its score.
    ///
    /// Ties keep the earliest move in row-major order. Returns `None` when
    /// the board has no empty cell.
    #[instrument(skip(self, board))]
    pub fn analyze(&mut self, board: &mut Board) -> Option<Decision> {
        let start = self.nodes;
        let mut best: Option<Decision> = None;

        for mv in Move::ALL {
            if !board.is_empty(mv) {
                continue;
            }
            let score = {
                let mut placed = board.speculate(mv, Player::A);
                self.value(&mut placed, false)
            };
            debug!(%mv, score, "Scored candidate");
            if best.is_none_or(|b| score > b.score) {
                best = Some(Decision { mv, score });
            }
        }

        debug!(nodes = self.nodes - start, ?best, "Search complete");
        best
    }
}

/// Returns the minimax value of `board` with a fresh searcher.
#[instrument(skip(board))]
pub fn minimax(board: &mut Board, maximizing: bool) -> Score {
    let mut search = Search::new();
    let score = search.value(board, maximizing);
    debug!(nodes = search.nodes(), score, "Minimax complete");
    score
}

/// Returns the best move for `PlayerA`, or `None` on a full board.
pub fn best_move(board: &mut Board) -> Option<Move> {
    Search::new().analyze(board).map(|decision| decision.mv)
}
