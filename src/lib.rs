//! Tic-tac-toe with move history and time travel
//!
//! A 3x3 game engine that keeps every position played:
//! - X moves on even steps, O on odd steps
//! - Any earlier step can be selected; playing from there discards the
//!   later moves and continues on a new branch
//! - A win freezes the position; nine moves without a winner is a draw
//!
//! # Architecture
//!
//! - [`board`]: Cells, positions and the 3x3 board
//! - [`rules`]: Win detection over the eight lines
//! - [`game`]: History, transitions and display labels
//! - [`config`]: Command-line configuration
//! - [`ui`]: egui front end rendering a `GameState`
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{CellIndex, GameState, Intent, Player};
//!
//! let state = GameState::new();
//! let state = state.dispatch(Intent::ClickCell(CellIndex::new(4).unwrap()));
//! assert_eq!(state.current_step(), 1);
//! assert_eq!(state.next_player(), Player::O);
//!
//! // Back to the start; history keeps both entries
//! let state = state.jump_to(0);
//! assert_eq!(state.len(), 2);
//! assert_eq!(state.status().to_string(), "Next Player: X");
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, CellIndex, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use error::GameError;
pub use game::{GameState, Intent, Move, MoveListEntry, SharedGame, Snapshot, Status};
pub use rules::{evaluate, Outcome, WINNING_LINES};
