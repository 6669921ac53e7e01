//! Thread-safe holder for hosts that forward intents from several threads

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::state::{GameState, Intent};

/// Latest published state behind a mutex. One intent is read,
/// transformed and published under a single lock.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    pub fn new(state: GameState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    // The guarded value is only ever replaced whole, so a poisoned lock
    // still holds a consistent state.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `intent` and return the newly published state
    pub fn dispatch(&self, intent: Intent) -> GameState {
        let mut guard = self.lock();
        let next = guard.dispatch(intent);
        *guard = next.clone();
        next
    }

    /// Copy of the latest state
    pub fn state(&self) -> GameState {
        self.lock().clone()
    }
}
