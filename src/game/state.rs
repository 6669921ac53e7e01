//! Game state and its transitions
//!
//! `GameState` is a value. Every transition borrows the current state and
//! returns the next one; a rejected intent returns an equal copy. History
//! is an `im::Vector`, so cloning a state and branching off an earlier
//! step share the common prefix instead of copying it.

use im::Vector;
use tracing::{debug, info, instrument, trace};

use super::snapshot::{Move, Snapshot};
use crate::board::{CellIndex, Player, TOTAL_CELLS};
use crate::error::{GameError, Result};

/// User intents forwarded by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A square was clicked
    ClickCell(CellIndex),
    /// A history entry was selected
    JumpTo(usize),
    /// The sort button was pressed
    ToggleSort,
}

/// Full game state: history, selected step and move-list order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vector<Snapshot>,
    current_step: usize,
    ascending: bool,
}

impl GameState {
    /// New game with only the initial snapshot, move list ascending
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// New game with the given move-list order
    pub fn with_order(ascending: bool) -> Self {
        Self {
            history: Vector::unit(Snapshot::initial()),
            current_step: 0,
            ascending,
        }
    }

    /// All snapshots, index 0 is the game start
    #[inline]
    pub fn history(&self) -> &Vector<Snapshot> {
        &self.history
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Never true: the initial snapshot is always present
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    #[inline]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    #[inline]
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Snapshot at the selected step
    #[inline]
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// Snapshot at any step
    pub fn snapshot(&self, step: usize) -> Option<&Snapshot> {
        self.history.get(step)
    }

    /// Player to move, derived from the parity of the current step
    #[inline]
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Nine moves played and nobody won
    #[inline]
    pub fn is_draw(&self) -> bool {
        !self.current().outcome.is_win() && self.current_step == TOTAL_CELLS
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.current().outcome.is_win() || self.is_draw()
    }

    /// Apply one intent
    pub fn dispatch(&self, intent: Intent) -> GameState {
        match intent {
            Intent::ClickCell(idx) => self.apply_move(idx),
            Intent::JumpTo(step) => self.jump_to(step),
            Intent::ToggleSort => self.toggle_sort_order(),
        }
    }

    /// Place the next player's symbol at `idx`.
    ///
    /// Ignored when the current snapshot is already won or the square is
    /// taken. Otherwise everything after the current step is dropped and
    /// the new snapshot becomes the last entry.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn apply_move(&self, idx: CellIndex) -> GameState {
        let current = self.current();

        if current.outcome.is_win() {
            trace!(cell = idx.get(), "move ignored: game already won");
            return self.clone();
        }
        if !current.board.is_empty(idx) {
            trace!(cell = idx.get(), "move ignored: square occupied");
            return self.clone();
        }

        let player = self.next_player();
        let pos = idx.pos();
        let board = current.board.with_move(idx, player);
        let snapshot = Snapshot::after_move(
            board,
            Move {
                player,
                row: pos.row,
                col: pos.col,
            },
        );

        let discarded = self.history.len() - (self.current_step + 1);
        let mut history = self.history.take(self.current_step + 1);
        history.push_back(snapshot);

        let next = GameState {
            current_step: history.len() - 1,
            history,
            ascending: self.ascending,
        };

        debug!(cell = idx.get(), discarded, step = next.current_step, "move applied");
        if let Some(winner) = snapshot.outcome.winner() {
            info!(%winner, line = ?snapshot.outcome.winning_line(), "game won");
        } else if next.is_draw() {
            info!("game drawn");
        }

        next
    }

    /// Select an existing step. History is untouched.
    ///
    /// The caller only offers steps that exist. Out-of-range steps trip a
    /// debug assertion and are clamped to the last entry otherwise; use
    /// [`GameState::try_jump_to`] when the step is not known to be valid.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&self, step: usize) -> GameState {
        debug_assert!(
            step < self.history.len(),
            "jump to step {} but history has {} entries",
            step,
            self.history.len()
        );
        let step = step.min(self.history.len() - 1);
        debug!(to = step, "jump");
        GameState {
            history: self.history.clone(),
            current_step: step,
            ascending: self.ascending,
        }
    }

    /// Checked variant of [`GameState::jump_to`]
    pub fn try_jump_to(&self, step: usize) -> Result<GameState> {
        if step < self.history.len() {
            Ok(self.jump_to(step))
        } else {
            Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            })
        }
    }

    /// Flip the move-list order. Nothing else changes.
    pub fn toggle_sort_order(&self) -> GameState {
        debug!(ascending = !self.ascending, "sort order toggled");
        GameState {
            history: self.history.clone(),
            current_step: self.current_step,
            ascending: !self.ascending,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
