use clap::Parser;
use dm_core::DungeonConfig;

/// Command-line arguments for the server.
#[derive(Debug, Parser)]
#[command(
    name = "dungeon-mud",
    about = "Multiplayer text-adventure server",
    version
)]
pub struct Cli {
    /// Host name or address to bind
    #[arg(long, env = "DUNGEON_HOST", default_value = "localhost")]
    pub host: String,

    /// TCP port to listen on
    #[arg(short, long, env = "DUNGEON_PORT", default_value_t = 12345)]
    pub port: u16,

    /// Seed for reproducible room generation (default: random)
    #[arg(long, env = "DUNGEON_SEED")]
    pub seed: Option<u64>,
}

impl Cli {
    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Dungeon settings derived from the arguments.
    pub fn dungeon_config(&self) -> DungeonConfig {
        match self.seed {
            Some(seed) => DungeonConfig::default().with_seed(seed),
            None => DungeonConfig::default(),
        }
    }
}
