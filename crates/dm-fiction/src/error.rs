//! Error types for the play layer.

use thiserror::Error;

/// Result type for play-layer operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Unexpected failures while executing a command.
///
/// Ordinary outcomes such as an unknown command or a missing monster are
/// answered with text and never show up here.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The dungeon could not be read or extended.
    #[error("dungeon error: {0}")]
    Dungeon(#[from] dm_core::DungeonError),
}
