use thiserror::Error;

/// Bounds violations caught by the checked entry points
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index: {0}")]
    InvalidCell(usize),

    #[error("Step {step} out of range (history has {len} entries)")]
    StepOutOfRange { step: usize, len: usize },
}

/// Convenience Result type for checked game operations
pub type Result<T> = std::result::Result<T, GameError>;
