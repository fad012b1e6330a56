//! Console game loop.
//!
//! The session alternates between the automated player and the human until
//! the board reaches a terminal state. Input and output are generic so the
//! loop can be driven from in-memory buffers.

use crate::config::{FirstMover, GameConfig};
use anyhow::{Context, Result, anyhow, bail};
use perfect_tictactoe::{Board, Move, Outcome, Player, Search, status};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The minimax player moves.
    Automated,
    /// The console user moves.
    Human,
}

impl Turn {
    /// Returns the turn that follows this one.
    pub fn next(self) -> Self {
        match self {
            Turn::Automated => Turn::Human,
            Turn::Human => Turn::Automated,
        }
    }
}

impl From<FirstMover> for Turn {
    fn from(first: FirstMover) -> Self {
        match first {
            FirstMover::Ai => Turn::Automated,
            FirstMover::Human => Turn::Human,
        }
    }
}

/// Returns the closing line printed for an outcome.
pub fn announcement(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won(Player::A) => "AI wins!",
        Outcome::Won(Player::B) => "You win!",
        Outcome::Draw => "It's a draw!",
    }
}

/// A single game between the automated player and a human.
#[derive(Debug)]
pub struct GameSession<R, W> {
    board: Board,
    turn: Turn,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Creates a session continuing from an existing position.
    pub fn with_board(board: Board, config: &GameConfig, input: R, output: W) -> Self {
        Self {
            board,
            turn: Turn::from(*config.first_mover()),
            input,
            output,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until the game ends and returns the outcome.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or non-numeric input and on output errors.
    #[instrument(skip(self), fields(first = ?self.turn))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting game");

        if let Some(outcome) = status(&self.board) {
            return self.finish(outcome);
        }

        loop {
            write!(self.output, "{}", self.board)?;

            match self.turn {
                Turn::Automated => self.automated_turn()?,
                Turn::Human => {
                    if !self.human_turn()? {
                        continue;
                    }
                }
            }

            if let Some(outcome) = status(&self.board) {
                return self.finish(outcome);
            }

            self.turn = self.turn.next();
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Result<Outcome> {
        write!(self.output, "{}", self.board)?;
        writeln!(self.output, "{}", announcement(outcome))?;
        self.output.flush()?;
        info!(%outcome, "Game over");
        Ok(outcome)
    }

    #[instrument(skip(self))]
    fn automated_turn(&mut self) -> Result<()> {
        writeln!(self.output, "AI's turn:")?;

        let mut search = Search::new();
        let decision = search
            .analyze(&mut self.board)
            .ok_or_else(|| anyhow!("No empty cell left for the automated player"))?;
        let mv = *decision.mv();
        debug!(%mv, score = decision.score(), nodes = search.nodes(), "Automated move chosen");

        self.board.play(mv, Player::A)?;
        writeln!(
            self.output,
            "AI plays row {}, column {}",
            mv.row() + 1,
            mv.col() + 1
        )?;
        Ok(())
    }

    /// Reads one human move. Returns `false` when the move was rejected.
    #[instrument(skip(self))]
    fn human_turn(&mut self) -> Result<bool> {
        writeln!(self.output, "Your turn:")?;
        let row = self.read_number("Enter row number (1-3): ")?;
        let col = self.read_number("Enter column number (1-3): ")?;

        let placed = Move::from_one_based(row, col).and_then(|mv| self.board.play(mv, Player::B));
        if let Err(e) = placed {
            warn!(error = %e, "Rejected move");
            writeln!(self.output, "Invalid move. Try again.")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn read_number(&mut self, prompt: &str) -> Result<i64> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            bail!("Input ended before the game finished");
        }

        line.trim()
            .parse::<i64>()
            .with_context(|| format!("Invalid number: {:?}", line.trim()))
    }
}
