use crate::room::RoomId;

/// Alias for `Result<T, DungeonError>`.
pub type DungeonResult<T> = Result<T, DungeonError>;

/// Errors that can occur when reading or extending the dungeon.
///
/// None of these are expected during normal play: an absent monster or an
/// unexplored exit is ordinary game state, not an error.
#[derive(Debug, thiserror::Error)]
pub enum DungeonError {
    /// The requested room ID is not registered in the dungeon.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room name did not have the `room<N>` shape.
    #[error("invalid room name: \"{0}\"")]
    InvalidRoomName(String),

    /// A thread panicked while holding one of the dungeon's locks.
    #[error("{0} lock poisoned")]
    LockPoisoned(&'static str),
}
