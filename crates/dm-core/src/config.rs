//! Configuration for a dungeon.

/// Settings used when constructing a [`Dungeon`](crate::Dungeon).
#[derive(Debug, Clone)]
pub struct DungeonConfig {
    /// RNG seed for reproducible generation. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Probability (0.0-1.0) that a freshly generated room gets a resident.
    pub monster_chance: f64,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            monster_chance: 0.9,
        }
    }
}

impl DungeonConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the population probability (clamped to 0.0-1.0).
    pub fn with_monster_chance(mut self, chance: f64) -> Self {
        self.monster_chance = clamp_chance(chance);
        self
    }
}

/// Force `chance` into 0.0-1.0, mapping NaN to 0.0.
pub(crate) fn clamp_chance(chance: f64) -> f64 {
    if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    }
}
