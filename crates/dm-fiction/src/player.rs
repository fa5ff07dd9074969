//! Player state management.

use dm_core::RoomId;

/// Friends count at or below which the bad ending fires.
pub const BAD_ENDING_THRESHOLD: i32 = -3;
/// Friends count at or above which the good ending fires.
pub const GOOD_ENDING_THRESHOLD: i32 = 3;

/// A narrative outcome reached through the friends count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Too many enemies.
    Bad,
    /// Enough friends to found a society.
    Good,
}

/// One connection's avatar.
///
/// Owned by exactly one session. `location` always names a room in the
/// shared dungeon.
#[derive(Debug, Clone)]
pub struct Player {
    /// The room the player is standing in.
    pub location: RoomId,
    /// Friendship score; unbounded, checked against the ending thresholds.
    pub friends: i32,
}

impl Player {
    /// Create a player at `start` with no friends.
    pub fn new(start: RoomId) -> Self {
        Self {
            location: start,
            friends: 0,
        }
    }

    /// Human-readable friends count.
    pub fn status(&self) -> String {
        format!("Current friends count: {}", self.friends)
    }

    /// Gain one friend.
    pub fn befriend(&mut self) {
        self.friends += 1;
    }

    /// Lose one friend.
    pub fn estrange(&mut self) {
        self.friends -= 1;
    }

    /// The ending the current count has reached, if any. Bad wins ties.
    pub fn ending(&self) -> Option<Ending> {
        if self.friends <= BAD_ENDING_THRESHOLD {
            Some(Ending::Bad)
        } else if self.friends >= GOOD_ENDING_THRESHOLD {
            Some(Ending::Good)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_new() {
        let player = Player::new(RoomId(1));
        assert_eq!(player.location, RoomId(1));
        assert_eq!(player.friends, 0);
        assert_eq!(player.status(), "Current friends count: 0");
    }

    #[test]
    fn friends_are_unbounded() {
        let mut player = Player::new(RoomId(1));
        for _ in 0..5 {
            player.estrange();
        }
        assert_eq!(player.friends, -5);
        assert_eq!(player.status(), "Current friends count: -5");
    }

    #[test]
    fn endings_at_thresholds() {
        let mut player = Player::new(RoomId(1));
        player.friends = 2;
        assert_eq!(player.ending(), None);
        player.befriend();
        assert_eq!(player.ending(), Some(Ending::Good));
        player.friends = 10;
        assert_eq!(player.ending(), Some(Ending::Good));

        player.friends = -2;
        assert_eq!(player.ending(), None);
        player.estrange();
        assert_eq!(player.ending(), Some(Ending::Bad));
    }
}
