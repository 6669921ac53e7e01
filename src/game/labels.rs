//! Text shown for the status header and the move list

use std::fmt;

use super::state::GameState;
use crate::board::Player;

/// Header status for the selected step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Player),
    Draw,
    NextPlayer(Player),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(p) => write!(f, "Winner: {}", p),
            Status::Draw => write!(f, "Draw!"),
            Status::NextPlayer(p) => write!(f, "Next Player: {}", p),
        }
    }
}

/// One row of the move list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveListEntry {
    /// History index this entry jumps to
    pub step: usize,
    pub label: String,
    pub is_current: bool,
}

impl GameState {
    pub fn status(&self) -> Status {
        if let Some(winner) = self.current().outcome.winner() {
            Status::Winner(winner)
        } else if self.is_draw() {
            Status::Draw
        } else {
            Status::NextPlayer(self.next_player())
        }
    }

    /// Label for history entry `step`.
    ///
    /// Entry 0 is the game start. Other entries are numbered moves with
    /// the player and `(col, row)` of the move appended.
    pub fn entry_label(&self, step: usize) -> String {
        let is_current = step == self.current_step();
        if step == 0 {
            return if is_current {
                "Game start".to_string()
            } else {
                "Go to game start".to_string()
            };
        }

        let mut label = if is_current {
            format!("Move #{}", step)
        } else {
            format!("Go to move #{}", step)
        };
        if let Some(mv) = self.snapshot(step).and_then(|s| s.last_move) {
            label.push_str(&format!(": {}", mv));
        }
        label
    }

    /// Move list in display order. Computed on read; only the
    /// `ascending` flag is stored.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let entry = |step: usize| MoveListEntry {
            step,
            label: self.entry_label(step),
            is_current: step == self.current_step(),
        };
        if self.is_ascending() {
            (0..self.len()).map(entry).collect()
        } else {
            (0..self.len()).rev().map(entry).collect()
        }
    }

    /// Caption for the sort button
    pub fn sort_label(&self) -> &'static str {
        if self.is_ascending() {
            "Ascending ↓"
        } else {
            "Descending ↑"
        }
    }
}
