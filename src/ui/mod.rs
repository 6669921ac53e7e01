//! GUI module for the tic-tac-toe game
//!
//! Renders the board and move list from the latest `GameState` using
//! egui/eframe and forwards clicks and key presses as intents.

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
