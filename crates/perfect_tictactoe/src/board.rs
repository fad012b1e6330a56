//! Core domain types for tic-tac-toe: players, cells, moves and the board.

use crate::error::{BoardParseError, MoveError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// The automated player (maximizing side).
    #[display("PlayerA")]
    A,
    /// The human player (minimizing side).
    #[display("PlayerB")]
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Returns the cell value this player writes.
    pub fn cell(self) -> Cell {
        match self {
            Player::A => Cell::PlayerA,
            Player::B => Cell::PlayerB,
        }
    }
}

/// A cell on the board, rendered by its numeric identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Cell {
    /// No mark.
    #[default]
    #[display("0")]
    Empty,
    /// Marked by the automated player.
    #[display("1")]
    PlayerA,
    /// Marked by the human player.
    #[display("2")]
    PlayerB,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }

    /// Parses a cell from its numeric identifier.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::PlayerA),
            '2' => Some(Cell::PlayerB),
            _ => None,
        }
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A cell coordinate, always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All nine cells in row-major order.
    pub const ALL: [Move; SIZE * SIZE] = {
        let mut all = [Move::at(0, 0); SIZE * SIZE];
        let mut i = 0;
        while i < SIZE * SIZE {
            all[i] = Move::at(i / SIZE, i % SIZE);
            i += 1;
        }
        all
    };

    /// Creates a move from 0-based coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if either coordinate is outside `0..3`.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfRange {
                row: i64::try_from(row).unwrap_or(i64::MAX),
                col: i64::try_from(col).unwrap_or(i64::MAX),
            });
        }
        Ok(Self::at(row, col))
    }

    /// Creates a move from 1-based coordinates as typed on the console.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] carrying the values as supplied.
    pub fn from_one_based(row: i64, col: i64) -> Result<Self, MoveError> {
        let range = 1..=SIZE as i64;
        if !range.contains(&row) || !range.contains(&col) {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self::at((row - 1) as usize, (col - 1) as usize))
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the 0-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the 0-based column.
    pub fn col(self) -> usize {
        self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given move.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    /// Checks if the cell at the given move is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv).is_empty()
    }

    /// Checks if the board is full (all cells occupied).
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Counts the cells holding the given value.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Returns every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|&mv| self.is_empty(mv))
            .collect()
    }

    /// Places a player's mark permanently.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn play(&mut self, mv: Move, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(mv) {
            return Err(MoveError::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }
        self.cells[mv.row][mv.col] = player.cell();
        Ok(())
    }

    /// Places a player's mark until the returned guard is dropped.
    ///
    /// The guard dereferences to the board, so the speculative position can
    /// be inspected and extended. Dropping it restores whatever the cell
    /// held before.
    pub fn speculate(&mut self, mv: Move, player: Player) -> Placement<'_> {
        let previous = self.get(mv);
        self.cells[mv.row][mv.col] = player.cell();
        Placement {
            board: self,
            mv,
            previous,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "{} | {} | {}", row[0], row[1], row[2])?;
            writeln!(f, "{}", "-".repeat(9))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cell digits in row-major order, ignoring separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for c in s.chars() {
            if c.is_whitespace() || matches!(c, '|' | '/' | '-') {
                continue;
            }
            let cell = Cell::from_digit(c)
                .ok_or_else(|| BoardParseError::new(format!("Unexpected character {c:?}")))?;
            cells.push(cell);
        }

        if cells.len() != SIZE * SIZE {
            return Err(BoardParseError::new(format!(
                "Expected {} cells, found {}",
                SIZE * SIZE,
                cells.len()
            )));
        }

        let mut board = Board::new();
        for (mv, cell) in Move::ALL.into_iter().zip(cells) {
            board.cells[mv.row][mv.col] = cell;
        }
        Ok(board)
    }
}

/// A speculative mark on a board, undone when dropped.
#[must_use = "dropping the placement immediately undoes the move"]
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    mv: Move,
    previous: Cell,
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.mv.row][self.mv.col] = self.previous;
    }
}
