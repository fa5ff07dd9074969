//! Core types for dungeon-mud: monsters, rooms, and the shared dungeon graph.
//!
//! The [`Dungeon`] owns every [`Room`] and is meant to be shared between
//! concurrently running sessions behind an `Arc`. Rooms are addressed by
//! [`RoomId`]; each room guards its own connections and residents, so
//! sessions exploring different rooms never contend on the same lock.

/// Dungeon construction settings.
pub mod config;
/// The shared room graph and procedural generation.
pub mod dungeon;
/// Error types used throughout the crate.
pub mod error;
/// Creatures that inhabit rooms.
pub mod monster;
/// Graph nodes: description, exits, and residents.
pub mod room;

pub use config::DungeonConfig;
pub use dungeon::{Dungeon, Traversal};
pub use error::{DungeonError, DungeonResult};
pub use monster::Monster;
pub use room::{Room, RoomContents, RoomId};
