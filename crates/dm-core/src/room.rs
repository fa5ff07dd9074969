use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use crate::error::{DungeonError, DungeonResult};
use crate::monster::Monster;

/// Identifier of a room registered in a [`Dungeon`](crate::Dungeon).
///
/// IDs are handed out sequentially starting at 1, so ordering by ID is
/// ordering by creation. Displayed as `room<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room{}", self.0)
    }
}

impl FromStr for RoomId {
    type Err = DungeonError;

    fn from_str(s: &str) -> DungeonResult<Self> {
        s.strip_prefix("room")
            .filter(|n| n.bytes().all(|b| b.is_ascii_digit()) && !n.starts_with('0'))
            .and_then(|n| n.parse::<u64>().ok())
            .filter(|n| *n > 0)
            .map(Self)
            .ok_or_else(|| DungeonError::InvalidRoomName(s.to_string()))
    }
}

/// The mutable part of a room: its exits and its residents.
///
/// Only reachable through [`Room::lock`], so every read-modify-write on a
/// room happens inside one critical section.
#[derive(Debug, Clone, Default)]
pub struct RoomContents {
    connections: HashMap<String, RoomId>,
    monsters: Vec<Monster>,
}

impl RoomContents {
    /// The room reached by going `direction`, if that exit exists.
    pub fn connection(&self, direction: &str) -> Option<RoomId> {
        self.connections.get(direction).copied()
    }

    /// Register (or overwrite) the exit for `direction`.
    pub fn connect(&mut self, direction: impl Into<String>, room: RoomId) {
        self.connections.insert(direction.into(), room);
    }

    /// Residents, in arrival order.
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Add a resident.
    pub fn add_monster(&mut self, monster: Monster) {
        self.monsters.push(monster);
    }

    /// Remove the first resident equal to `monster`.
    ///
    /// Returns `false` and leaves the room untouched if there is none.
    pub fn remove_monster(&mut self, monster: &Monster) -> bool {
        if let Some(pos) = self.monsters.iter().position(|m| m == monster) {
            self.monsters.remove(pos);
            true
        } else {
            false
        }
    }

    /// First resident whose name matches `name`, ignoring case.
    pub fn monster_by_name(&self, name: &str) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.is_named(name))
    }
}

/// A node in the dungeon graph.
///
/// The description is fixed at creation; exits and residents live behind a
/// per-room mutex.
#[derive(Debug)]
pub struct Room {
    description: String,
    contents: Mutex<RoomContents>,
}

impl Room {
    /// Create an empty room.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            contents: Mutex::new(RoomContents::default()),
        }
    }

    /// The room's description, exactly as it was created.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Acquire exclusive access to the room's exits and residents.
    pub fn lock(&self) -> DungeonResult<MutexGuard<'_, RoomContents>> {
        self.contents
            .lock()
            .map_err(|_| DungeonError::LockPoisoned("room"))
    }

    /// Register (or overwrite) the exit for `direction`.
    pub fn connect(&self, direction: impl Into<String>, room: RoomId) -> DungeonResult<()> {
        self.lock()?.connect(direction, room);
        Ok(())
    }

    /// The room reached by going `direction`, if that exit exists.
    pub fn connection(&self, direction: &str) -> DungeonResult<Option<RoomId>> {
        Ok(self.lock()?.connection(direction))
    }

    /// Add a resident.
    pub fn add_monster(&self, monster: Monster) -> DungeonResult<()> {
        self.lock()?.add_monster(monster);
        Ok(())
    }

    /// Remove the first resident equal to `monster`; `false` if absent.
    pub fn remove_monster(&self, monster: &Monster) -> DungeonResult<bool> {
        Ok(self.lock()?.remove_monster(monster))
    }

    /// First resident whose name matches `name`, ignoring case.
    pub fn monster_by_name(&self, name: &str) -> DungeonResult<Option<Monster>> {
        Ok(self.lock()?.monster_by_name(name).cloned())
    }

    /// Snapshot of the current residents.
    pub fn monsters(&self) -> DungeonResult<Vec<Monster>> {
        Ok(self.lock()?.monsters().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_id_display_and_parse() {
        assert_eq!(RoomId(3).to_string(), "room3");
        assert_eq!("room12".parse::<RoomId>().unwrap(), RoomId(12));
        assert!("room0".parse::<RoomId>().is_err());
        assert!("hall".parse::<RoomId>().is_err());
        assert!("room".parse::<RoomId>().is_err());
    }

    #[test]
    fn room_names_are_canonical() {
        assert!("room+5".parse::<RoomId>().is_err());
        assert!("room01".parse::<RoomId>().is_err());
        assert!("room-1".parse::<RoomId>().is_err());
        assert!("room 1".parse::<RoomId>().is_err());
        assert_eq!("room10".parse::<RoomId>().unwrap(), RoomId(10));
    }

    #[test]
    fn connect_overwrites_direction() {
        let room = Room::new("A bare room.");
        room.connect("north", RoomId(2)).unwrap();
        room.connect("north", RoomId(5)).unwrap();
        assert_eq!(room.connection("north").unwrap(), Some(RoomId(5)));
        assert_eq!(room.connection("south").unwrap(), None);
    }

    #[test]
    fn any_label_is_a_direction() {
        let room = Room::new("A bare room.");
        room.connect("through the hatch", RoomId(9)).unwrap();
        assert_eq!(
            room.connection("through the hatch").unwrap(),
            Some(RoomId(9))
        );
    }

    #[test]
    fn monster_lookup_is_case_insensitive() {
        let room = Room::new("A bare room.");
        room.add_monster(Monster::goblin()).unwrap();
        assert_eq!(
            room.monster_by_name("gOBLIN").unwrap(),
            Some(Monster::goblin())
        );
        assert_eq!(room.monster_by_name("robot").unwrap(), None);
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let room = Room::new("A bare room.");
        room.add_monster(Monster::new("Goblin", "the first", true))
            .unwrap();
        room.add_monster(Monster::new("goblin", "the second", false))
            .unwrap();
        let found = room.monster_by_name("goblin").unwrap().unwrap();
        assert_eq!(found.description(), "the first");
    }

    #[test]
    fn remove_monster() {
        let room = Room::new("A bare room.");
        room.add_monster(Monster::goblin()).unwrap();
        room.add_monster(Monster::robot()).unwrap();

        assert!(room.remove_monster(&Monster::goblin()).unwrap());
        assert_eq!(room.monsters().unwrap(), vec![Monster::robot()]);

        // Removing again signals absence and leaves the rest alone
        assert!(!room.remove_monster(&Monster::goblin()).unwrap());
        assert_eq!(room.monsters().unwrap(), vec![Monster::robot()]);
    }

    #[test]
    fn description_is_verbatim() {
        let room = Room::new("  Spaces and\nnewlines stay.  ");
        assert_eq!(room.description(), "  Spaces and\nnewlines stay.  ");
    }
}
