//! The play layer of dungeon-mud.
//!
//! Turns raw text from a connection into game actions: commands are parsed
//! into a [`Command`], executed against the shared [`dm_core::Dungeon`] on
//! behalf of a [`Player`], and answered with narrative text. A
//! [`GameSession`] ties one player to one connection and keeps internal
//! failures from ending the session.

/// Error types for the play layer.
pub mod error;
/// Command execution against the dungeon.
pub mod interpreter;
/// Fixed narrative text.
pub mod narrative;
/// Command parsing.
pub mod parser;
/// Per-connection player state.
pub mod player;
/// Per-connection session handling.
pub mod session;

pub use error::{FictionError, FictionResult};
pub use interpreter::{execute, process_command};
pub use parser::{Command, Direction, parse_command};
pub use player::{Ending, Player};
pub use session::{GameSession, Reply, SessionId};
