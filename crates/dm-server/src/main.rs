//! dungeon-mud server entry point.

use std::sync::Arc;

use clap::Parser;
use dm_core::Dungeon;
use dm_server::{Cli, serve};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let dungeon = Arc::new(Dungeon::new(cli.dungeon_config())?);
    let listener = TcpListener::bind(cli.bind_addr()).await?;

    info!(
        bind = %listener.local_addr()?,
        rooms = dungeon.room_count(),
        seed = ?cli.seed,
        "dungeon server listening"
    );

    serve(listener, dungeon).await;
    Ok(())
}
