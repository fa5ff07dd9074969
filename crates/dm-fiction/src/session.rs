//! Per-connection session handling.
//!
//! A [`GameSession`] owns one [`Player`] for the lifetime of a connection
//! and shares the [`Dungeon`] with every other session. It is the boundary
//! where unexpected failures are logged and replaced by a generic reply, so
//! a single bad command never ends the connection.

use std::fmt;
use std::sync::Arc;

use dm_core::Dungeon;
use tracing::{error, info};
use uuid::Uuid;

use crate::interpreter::process_command;
use crate::narrative::{GENERIC_ERROR, GOODBYE, INTRODUCTION};
use crate::player::Player;

/// Words that end the session instead of reaching the interpreter.
const QUIT_WORDS: &[&str] = &["quit", "exit"];

/// Unique identifier for a session, used to correlate log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What the connection should do after sending a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Send the text and wait for the next message.
    Continue(String),
    /// Send the text and close the connection.
    Close(String),
}

impl Reply {
    /// The text to send.
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Close(text) => text.as_str(),
        }
    }

    /// Whether the connection should close after this reply.
    pub fn is_close(&self) -> bool {
        matches!(self, Self::Close(_))
    }
}

/// One connection's game.
pub struct GameSession {
    id: SessionId,
    dungeon: Arc<Dungeon>,
    player: Player,
}

impl GameSession {
    /// Start a session with a fresh player in the dungeon's start room.
    pub fn new(dungeon: Arc<Dungeon>) -> Self {
        let id = SessionId::new();
        let player = Player::new(dungeon.start_room());
        info!(session = %id, location = %player.location, "session started");
        Self {
            id,
            dungeon,
            player,
        }
    }

    /// The session's ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The player's state.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Text to send as soon as the connection opens.
    pub fn introduction(&self) -> &'static str {
        INTRODUCTION
    }

    /// Handle one inbound message.
    pub fn handle(&mut self, input: &str) -> Reply {
        let word = input.trim().to_lowercase();
        if QUIT_WORDS.contains(&word.as_str()) {
            info!(session = %self.id, friends = self.player.friends, "player quit");
            return Reply::Close(GOODBYE.to_string());
        }

        match process_command(&self.dungeon, &mut self.player, input) {
            Ok(text) => Reply::Continue(text),
            Err(e) => {
                error!(session = %self.id, err = %e, input, "command failed");
                Reply::Continue(GENERIC_ERROR.to_string())
            }
        }
    }
}
