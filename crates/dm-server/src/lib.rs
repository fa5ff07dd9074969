//! TCP front end for dungeon-mud.
//!
//! Accepts connections, gives each one a [`dm_fiction::GameSession`], and
//! relays messages strictly request/response against one shared dungeon.

/// Command-line arguments.
pub mod cli;
/// Connection accept loop and per-connection handling.
pub mod server;

pub use cli::Cli;
pub use server::{handle_conn, serve};
