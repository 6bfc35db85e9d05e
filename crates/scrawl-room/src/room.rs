//! The authoritative state of one game room.

use scrawl_protocol::{ChatEntry, ConnectionId, Player, RoomCode, Scores};

/// One isolated game session.
///
/// A room is born with its creator as the sole player and dies the moment
/// the roster empties — there is no terminal "game over" phase; an active
/// room cycles rounds for as long as anyone remains.
///
/// Field invariants the engine relies on:
/// - `players` holds at most one entry per connection id, in join order
///   (join order is the drawer rotation order).
/// - `started` never reverts to `false`.
/// - `current_drawer_index` is in range whenever the game is started and
///   the roster is non-empty.
/// - `scores` entries are seeded at join and survive a player leaving;
///   they are pruned only by the game-start reset or room destruction.
#[derive(Debug)]
pub struct Room {
    /// The room's broadcast channel key. Immutable for its lifetime.
    pub code: RoomCode,
    /// The connection with exclusive permission to start the game.
    /// Never reassigned, even if the creator disconnects.
    pub creator_id: ConnectionId,
    /// Roster in join order.
    pub players: Vec<Player>,
    /// False in the lobby, true once the creator starts the game.
    pub started: bool,
    /// Index into `players` of the current drawer.
    pub current_drawer_index: usize,
    /// Cached id of `players[current_drawer_index]`.
    pub drawer_id: ConnectionId,
    /// The secret word for the active round. Empty before the game starts.
    pub word: String,
    /// Chat transcript for the current round, oldest first.
    pub chat: Vec<ChatEntry>,
    /// Point totals keyed by connection id.
    pub scores: Scores,
}

impl Room {
    /// Creates a room with the creator seeded as its only player, holding
    /// a zero score and standing in as the initial drawer.
    pub fn new(
        code: RoomCode,
        creator_id: ConnectionId,
        creator_name: &str,
    ) -> Self {
        let mut scores = Scores::new();
        scores.insert(creator_id, 0);
        Self {
            code,
            creator_id,
            players: vec![Player {
                id: creator_id,
                name: creator_name.to_string(),
            }],
            started: false,
            current_drawer_index: 0,
            drawer_id: creator_id,
            word: String::new(),
            chat: Vec::new(),
            scores,
        }
    }

    /// Adds a player, seeding a zero score. Idempotent: re-joining with a
    /// connection id already on the roster changes nothing and returns
    /// `false`.
    pub fn add_player(&mut self, id: ConnectionId, name: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.players.push(Player {
            id,
            name: name.to_string(),
        });
        self.scores.insert(id, 0);
        true
    }

    /// Removes the player with the given connection id, returning the
    /// removed entry. Scores are deliberately left untouched.
    pub fn remove_player(&mut self, id: ConnectionId) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(idx))
    }

    /// Whether the roster holds this connection.
    pub fn contains(&self, id: ConnectionId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// A snapshot of the roster for broadcasting.
    pub fn roster(&self) -> Vec<Player> {
        self.players.clone()
    }
}
