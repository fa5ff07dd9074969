use std::fmt;

/// A creature living in a room.
///
/// Monsters are values: once created they never change, and two monsters
/// with the same fields are interchangeable. The name doubles as the
/// case-insensitive lookup key within a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    name: String,
    description: String,
    is_hostile: bool,
}

impl Monster {
    /// Create a monster.
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_hostile: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_hostile,
        }
    }

    /// The hostile creature that respects a fighter.
    pub fn goblin() -> Self {
        Self::new("Goblin", "A small, green-skinned creature", true)
    }

    /// The friendly machine that would rather talk.
    pub fn robot() -> Self {
        Self::new("Robot", "A friendly looking robot", false)
    }

    /// Every creature the generator can place in a new room.
    pub fn catalog() -> [Self; 2] {
        [Self::goblin(), Self::robot()]
    }

    /// The monster's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A one-line description of the monster.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the monster is hostile.
    pub fn is_hostile(&self) -> bool {
        self.is_hostile
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.description)
    }
}
