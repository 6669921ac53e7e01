//! Game engine: move history, turn order, time travel

mod labels;
mod shared;
mod snapshot;
mod state;

pub use labels::{MoveListEntry, Status};
pub use shared::SharedGame;
pub use snapshot::{Move, Snapshot};
pub use state::{GameState, Intent};
