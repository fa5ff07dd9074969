//! End-to-end tests over a real TCP connection.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use dm_core::{Dungeon, DungeonConfig};
use dm_fiction::narrative::{FIGHT_GOBLIN, GOODBYE, INTRODUCTION, NO_COMMAND, UNKNOWN_COMMAND};
use dm_server::serve;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

/// Start a server on an ephemeral port.
async fn spawn_server(seed: u64) -> (SocketAddr, Arc<Dungeon>) {
    let dungeon = Arc::new(Dungeon::new(DungeonConfig::default().with_seed(seed)).unwrap());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, Arc::clone(&dungeon)));
    (addr, dungeon)
}

/// Read one reply: block for the first chunk, then drain whatever follows
/// within a short grace period.
async fn read_reply(stream: &mut TcpStream) -> String {
    let mut out = Vec::new();
    let mut buf = [0u8; 4096];

    let n = stream.read(&mut buf).await.unwrap();
    out.extend_from_slice(&buf[..n]);
    if n == 0 {
        return String::from_utf8(out).unwrap();
    }
    loop {
        match timeout(Duration::from_millis(50), stream.read(&mut buf)).await {
            Ok(Ok(0)) | Err(_) => break,
            Ok(Ok(n)) => out.extend_from_slice(&buf[..n]),
            Ok(Err(e)) => panic!("read failed: {e}"),
        }
    }
    String::from_utf8(out).unwrap()
}

async fn connect(addr: SocketAddr) -> TcpStream {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    assert_eq!(read_reply(&mut stream).await, INTRODUCTION);
    stream
}

async fn exchange(stream: &mut TcpStream, command: &str) -> String {
    stream.write_all(command.as_bytes()).await.unwrap();
    read_reply(stream).await
}

#[tokio::test]
async fn fresh_session_scenario() {
    let (addr, dungeon) = spawn_server(1).await;
    let mut stream = connect(addr).await;

    assert_eq!(
        exchange(&mut stream, "status").await,
        "Current friends count: 0"
    );

    // The start room always holds a Goblin
    assert_eq!(exchange(&mut stream, "fight goblin").await, FIGHT_GOBLIN);
    assert_eq!(
        exchange(&mut stream, "status").await,
        "Current friends count: 1"
    );

    let rooms_before = dungeon.room_count();
    let reply = exchange(&mut stream, "go west").await;
    let lines: Vec<&str> = reply.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "You move west.");
    assert!(
        lines[2] == "The room is quiet... too quiet." || lines[2].starts_with("You encounter a ")
    );
    assert_eq!(dungeon.room_count(), rooms_before + 1);

    assert_eq!(exchange(&mut stream, "look").await, lines[1]);
}

#[tokio::test]
async fn tolerates_whitespace_and_nonsense() {
    let (addr, _dungeon) = spawn_server(2).await;
    let mut stream = connect(addr).await;

    assert_eq!(exchange(&mut stream, "   \n").await, NO_COMMAND);
    assert_eq!(exchange(&mut stream, "status\r\n").await, "Current friends count: 0");
    assert_eq!(exchange(&mut stream, "xyzzy").await, UNKNOWN_COMMAND);
}

#[tokio::test]
async fn quit_closes_connection() {
    let (addr, _dungeon) = spawn_server(3).await;
    let mut stream = connect(addr).await;

    stream.write_all(b"quit").await.unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    assert_eq!(buf, GOODBYE.as_bytes());
}

#[tokio::test]
async fn bad_utf8_only_ends_that_session() {
    let (addr, dungeon) = spawn_server(4).await;
    let mut broken = connect(addr).await;
    let mut healthy = connect(addr).await;

    broken.write_all(&[0xff, 0xfe, 0xfd]).await.unwrap();
    let mut buf = Vec::new();
    let closed = timeout(Duration::from_secs(5), broken.read_to_end(&mut buf)).await;
    assert!(matches!(closed, Ok(Ok(0)) | Ok(Err(_))));

    assert_eq!(exchange(&mut healthy, "fight goblin").await, FIGHT_GOBLIN);
    assert_eq!(dungeon.room_count(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_players_share_new_rooms() {
    let (addr, dungeon) = spawn_server(5).await;
    let rooms_before = dungeon.room_count();

    let mut clients = Vec::new();
    for _ in 0..8 {
        clients.push(connect(addr).await);
    }

    let handles: Vec<_> = clients
        .into_iter()
        .map(|mut stream| {
            tokio::spawn(async move {
                let reply = exchange(&mut stream, "go south").await;
                let description = exchange(&mut stream, "look").await;
                (reply, description)
            })
        })
        .collect();

    let mut descriptions = Vec::new();
    for handle in handles {
        let (reply, description) = handle.await.unwrap();
        assert!(reply.starts_with("You move south.\n"));
        descriptions.push(description);
    }

    assert_eq!(dungeon.room_count(), rooms_before + 1);
    descriptions.dedup();
    assert_eq!(descriptions.len(), 1);
}
