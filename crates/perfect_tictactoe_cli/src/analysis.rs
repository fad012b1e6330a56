//! Position analysis report for the `analyze` command.

use derive_getters::Getters;
use perfect_tictactoe::{Board, Decision, Outcome, Score, Search, status};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// What the search concludes about a position with `PlayerA` to move.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct Report {
    /// Analysed position.
    board: Board,
    /// Outcome if the position is already terminal.
    outcome: Option<Outcome>,
    /// Best move and score otherwise.
    decision: Option<Decision>,
    /// Positions visited by the search.
    nodes: u64,
}

impl Report {
    /// Analyses `board` for the automated player.
    #[instrument(skip(board))]
    pub fn new(mut board: Board) -> Self {
        let outcome = status(&board);
        let mut search = Search::new();
        let decision = match outcome {
            Some(_) => None,
            None => search.analyze(&mut board),
        };
        Self {
            board,
            outcome,
            decision,
            nodes: search.nodes(),
        }
    }
}

fn verdict(score: Score) -> &'static str {
    match score {
        s if s > 0 => "AI wins with best play",
        0 => "draw with best play",
        _ => "AI loses with best play",
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        if let Some(outcome) = self.outcome {
            return writeln!(f, "Game over: {}", outcome);
        }
        if let Some(decision) = &self.decision {
            let mv = decision.mv();
            writeln!(
                f,
                "Best move: row {}, column {} (score {}, {})",
                mv.row() + 1,
                mv.col() + 1,
                decision.score(),
                verdict(*decision.score())
            )?;
        }
        writeln!(f, "Positions searched: {}", self.nodes)
    }
}
