//! Error types for board manipulation.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error that can occur when building or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row or column lies outside the board.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row, as supplied.
        row: i64,
        /// Requested column, as supplied.
        col: i64,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },
}

/// Board parse error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
