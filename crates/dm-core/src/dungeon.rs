//! The shared dungeon graph.
//!
//! A single [`Dungeon`] lives for the whole server process and is shared by
//! every session. Rooms are stored in a concurrent registry keyed by
//! [`RoomId`]; each room carries its own lock. The only multi-lock path is
//! [`Dungeon::traverse`], which always acquires in the order
//! origin room → RNG → registry, and never holds a registry reference while
//! waiting on a room.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{DungeonConfig, clamp_chance};
use crate::error::{DungeonError, DungeonResult};
use crate::monster::Monster;
use crate::room::{Room, RoomId};

/// Direction label wired from every generated room back to its origin.
pub const BACK: &str = "back";

/// Descriptions the generator draws from for new rooms.
pub const ROOM_DESCRIPTIONS: [&str; 10] = [
    "You find yourself in a room filled with computer servers, all blinking and whirring.",
    "This room is eerily quiet, with a single dim light flickering overhead.",
    "You've entered what appears to be a robotics workshop, tools and parts scattered about.",
    "The room is a small, cramped corridor with pipes running along the ceiling, leaking steam.",
    "It looks like a storage room, stacks of metal crates reach the ceiling.",
    "You've stumbled upon what looks like a break area, but there's no one around.",
    "The walls here are lined with large windows showing the vast expanse of space outside.",
    "You enter a control room, with numerous switches and screens, most of which are inactive.",
    "This seems to be a greenhouse, with an array of exotic plants under artificial lights.",
    "The room contains a large, inactive teleportation device, humming with latent energy.",
];

const CHAMBER: &str = "You find yourself in a sleek, metallic chamber with glowing panels on the walls. \
     Wires and pipes run across the ceiling.";
const LABORATORY: &str = "This room looks like a high-tech laboratory, filled with strange gadgets and \
     flickering holographic displays.";
const HANGAR: &str = "You enter a vast, dimly lit hangar. You can see rows of dormant robots and \
     vehicles, covered in dust.";

/// Outcome of following an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    /// Where the exit leads.
    pub room: RoomId,
    /// Whether the room was generated by this traversal.
    pub created: bool,
}

/// The shared, process-lifetime room graph.
pub struct Dungeon {
    rooms: DashMap<RoomId, Arc<Room>>,
    next_id: AtomicU64,
    start: RoomId,
    monster_chance: f64,
    rng: Mutex<StdRng>,
}

impl Dungeon {
    /// Build the starting layout using the configured seed.
    pub fn new(config: DungeonConfig) -> DungeonResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(rng, config)
    }

    /// Build the starting layout with an explicit generator.
    ///
    /// The config's seed is ignored and its population chance is clamped
    /// to 0.0-1.0. Three rooms are created: a chamber
    /// (the start, home to a Goblin) leading north to a laboratory (a
    /// Robot), which leads east to a hangar that gets a normal population
    /// roll.
    pub fn with_rng(rng: StdRng, config: DungeonConfig) -> DungeonResult<Self> {
        let dungeon = Self {
            rooms: DashMap::new(),
            next_id: AtomicU64::new(1),
            start: RoomId(1),
            monster_chance: clamp_chance(config.monster_chance),
            rng: Mutex::new(rng),
        };

        let chamber = Room::new(CHAMBER);
        chamber.add_monster(Monster::goblin())?;
        let laboratory = Room::new(LABORATORY);
        laboratory.add_monster(Monster::robot())?;
        let hangar = Room::new(HANGAR);
        dungeon.populate(&hangar)?;

        let chamber = dungeon.register(chamber);
        let laboratory = dungeon.register(laboratory);
        let hangar = dungeon.register(hangar);

        dungeon.room(chamber)?.connect("north", laboratory)?;
        dungeon.room(laboratory)?.connect("south", chamber)?;
        dungeon.room(laboratory)?.connect("east", hangar)?;
        dungeon.room(hangar)?.connect("west", laboratory)?;

        Ok(dungeon)
    }

    /// The room every new player starts in.
    pub fn start_room(&self) -> RoomId {
        self.start
    }

    /// Look up a registered room.
    pub fn room(&self, id: RoomId) -> DungeonResult<Arc<Room>> {
        self.rooms
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(DungeonError::RoomNotFound(id))
    }

    /// Look up a room by its generated name, e.g. `room2`.
    pub fn get_room(&self, name: &str) -> Option<Arc<Room>> {
        name.parse::<RoomId>().ok().and_then(|id| self.room(id).ok())
    }

    /// Number of registered rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All registered room IDs in creation order.
    pub fn room_ids(&self) -> Vec<RoomId> {
        let mut ids: Vec<RoomId> = self.rooms.iter().map(|entry| *entry.key()).collect();
        ids.sort();
        ids
    }

    /// Follow the exit `direction` from `from`, generating a room if the
    /// exit does not exist yet.
    ///
    /// The check and the generation happen under the origin room's lock, so
    /// concurrent traversals of the same unexplored exit create exactly one
    /// room. A generated room is linked back to its origin under [`BACK`].
    pub fn traverse(&self, from: RoomId, direction: &str) -> DungeonResult<Traversal> {
        let origin = self.room(from)?;
        let mut contents = origin.lock()?;

        if let Some(room) = contents.connection(direction) {
            return Ok(Traversal {
                room,
                created: false,
            });
        }

        let room = self.generate_room()?;
        room.connect(BACK, from)?;
        let id = self.register(room);
        contents.connect(direction, id);

        debug!(from = %from, direction, room = %id, "generated room");
        Ok(Traversal { room: id, created: true })
    }

    /// Create an unregistered room with a random description and population.
    pub fn generate_room(&self) -> DungeonResult<Room> {
        let description = {
            let mut rng = self.rng()?;
            ROOM_DESCRIPTIONS.choose(&mut *rng).copied().unwrap_or(CHAMBER)
        };
        let room = Room::new(description);
        self.populate(&room)?;
        Ok(room)
    }

    /// Give `room` at most one resident drawn from [`Monster::catalog`].
    pub fn populate(&self, room: &Room) -> DungeonResult<()> {
        let monster = {
            let mut rng = self.rng()?;
            if rng.random_bool(self.monster_chance) {
                Monster::catalog().choose(&mut *rng).cloned()
            } else {
                None
            }
        };
        if let Some(monster) = monster {
            room.add_monster(monster)?;
        }
        Ok(())
    }

    /// A uniformly random resident of the room, if it has any.
    pub fn random_monster(&self, id: RoomId) -> DungeonResult<Option<Monster>> {
        let monsters = self.room(id)?.monsters()?;
        let mut rng = self.rng()?;
        Ok(monsters.choose(&mut *rng).cloned())
    }

    fn register(&self, room: Room) -> RoomId {
        let id = RoomId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.rooms.insert(id, Arc::new(room));
        id
    }

    fn rng(&self) -> DungeonResult<MutexGuard<'_, StdRng>> {
        self.rng.lock().map_err(|_| DungeonError::LockPoisoned("rng"))
    }
}
