//! Game rules for tic-tac-toe
//!
//! Only win detection lives here; move legality (occupancy, game already
//! won) is checked by the game state when a move is applied.

pub mod win;

// Re-exports for convenient access
pub use win::{completes_line, evaluate, Outcome, WINNING_LINES};
