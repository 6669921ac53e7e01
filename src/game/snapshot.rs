//! History entries

use crate::board::{Board, Player};
use crate::rules::{evaluate, Outcome};
use std::fmt;

/// A placed symbol and where it went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub row: u8,
    pub col: u8,
}

/// Rendered column first: `X (col, row)`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.player, self.col, self.row)
    }
}

/// Immutable record of one point in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Snapshot {
    pub board: Board,
    /// Move that produced this board; `None` for the game start
    pub last_move: Option<Move>,
    pub outcome: Outcome,
}

impl Snapshot {
    /// Empty board, no move, no result
    pub const fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
            outcome: Outcome::NoResult,
        }
    }

    /// Snapshot following a move; the outcome is computed from the board
    pub fn after_move(board: Board, mv: Move) -> Self {
        Self {
            outcome: evaluate(&board),
            board,
            last_move: Some(mv),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
