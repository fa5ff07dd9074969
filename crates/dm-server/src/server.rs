//! Connection accept loop and per-connection handling.
//!
//! The transport is unframed: each `read` is treated as one command, the
//! way a line-at-a-time client sends them. Replies are written in full
//! before the next read.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dm_core::Dungeon;
use dm_fiction::GameSession;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

/// Largest message read from a client in one go.
pub const MAX_MESSAGE_LEN: usize = 1024;

/// Accept connections forever, one task per connection.
///
/// A failed accept is logged and skipped; a failed connection only ends
/// itself.
pub async fn serve(listener: TcpListener, dungeon: Arc<Dungeon>) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!(err = %e, "error accepting a connection");
                continue;
            }
        };

        let dungeon = Arc::clone(&dungeon);
        tokio::spawn(async move {
            if let Err(e) = handle_conn(stream, peer, dungeon).await {
                warn!(peer = %peer, err = %e, "connection ended with error");
            }
        });
    }
}

/// Run one client's session until it disconnects or quits.
pub async fn handle_conn(
    mut stream: TcpStream,
    peer: SocketAddr,
    dungeon: Arc<Dungeon>,
) -> anyhow::Result<()> {
    let mut session = GameSession::new(dungeon);
    info!(peer = %peer, session = %session.id(), "new connection");

    stream
        .write_all(session.introduction().as_bytes())
        .await
        .context("sending introduction")?;

    let mut buf = [0u8; MAX_MESSAGE_LEN];
    loop {
        let n = stream.read(&mut buf).await.context("reading command")?;
        if n == 0 {
            break;
        }

        let input = std::str::from_utf8(&buf[..n]).context("command is not valid UTF-8")?;
        let reply = session.handle(input);
        stream
            .write_all(reply.text().as_bytes())
            .await
            .context("sending reply")?;

        if reply.is_close() {
            break;
        }
    }

    info!(
        peer = %peer,
        session = %session.id(),
        friends = session.player().friends,
        "connection closed"
    );
    Ok(())
}
