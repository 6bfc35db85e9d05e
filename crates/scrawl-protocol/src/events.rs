//! Event types for Scrawl's wire format.
//!
//! Every message is an adjacently tagged JSON object:
//!
//! ```text
//! { "event": "join_room", "data": { "roomCode": "QX3FA", "playerName": "ada" } }
//! ```
//!
//! Event tags are snake_case; payload fields are camelCase — the shapes
//! browser clients already produce and consume.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use scrawl_transport::ConnectionId;

// ---------------------------------------------------------------------------
// Identity and shared payload types
// ---------------------------------------------------------------------------

/// A short identifier naming one room, used as its broadcast channel key.
///
/// Codes generated by the server are always upper-case alphanumerics.
/// Inbound codes are looked up verbatim — clients are expected to
/// upper-case before sending, matching what the server hands out.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Creates a code from a raw string, normalizing to upper-case.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the code in characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the code is empty (never true for generated codes).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One roster entry: a connection and the display name it joined with.
///
/// Roster order is meaningful — it is the drawer rotation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The transport-assigned identity of this player.
    pub id: ConnectionId,
    /// The display name the player chose when creating/joining.
    pub name: String,
}

/// One chat line: who said it and what they said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEntry {
    /// Display name of the author.
    pub player_name: String,
    /// The message text.
    pub message: String,
}

/// Point totals keyed by connection id.
///
/// `serde_json` renders the integer keys as JSON object keys ("7": 2).
pub type Scores = HashMap<ConnectionId, u32>;

// ---------------------------------------------------------------------------
// Recipient — who should receive an outbound event?
// ---------------------------------------------------------------------------

/// Addresses an outbound event within one room's broadcast channel.
///
/// The room engine returns `(Recipient, ServerEvent)` pairs; the hub
/// turns each pair into actual deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    /// Every connection subscribed to the room.
    All,
    /// One specific connection (secret data: the drawer's word).
    Connection(ConnectionId),
    /// Everyone except the given connection (stroke relay).
    AllExcept(ConnectionId),
}

// ---------------------------------------------------------------------------
// Inbound events (client → server)
// ---------------------------------------------------------------------------

/// Every action a client can send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    /// Open a new room with the sender as its creator.
    CreateRoom { player_name: String },

    /// Join an existing room that has not started yet.
    JoinRoom {
        room_code: RoomCode,
        player_name: String,
    },

    /// Begin the game. Honored only when sent by the room's creator.
    StartGame { room_code: RoomCode },

    /// A canvas stroke action, relayed verbatim to the rest of the room.
    /// The payload is opaque to the server.
    DrawingData {
        room_code: RoomCode,
        data: serde_json::Value,
    },

    /// A guess at the current word.
    Guess {
        room_code: RoomCode,
        player_name: String,
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Outbound events (server → client)
// ---------------------------------------------------------------------------

/// Every notification the server can emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    /// To the creator only: the room exists and you are in it.
    RoomCreated {
        room_code: RoomCode,
        players: Vec<Player>,
        creator_id: ConnectionId,
    },

    /// To the whole room: the roster changed (join or leave).
    RoomUpdated {
        room_code: RoomCode,
        players: Vec<Player>,
        creator_id: ConnectionId,
    },

    /// To the joining connection only: why the join was rejected.
    JoinError { message: String },

    /// To a newly joined connection only: the room's chat transcript,
    /// oldest first.
    ChatHistory(Vec<ChatEntry>),

    /// To the whole room: a round began. The word is deliberately absent.
    GameStarted {
        drawer_id: ConnectionId,
        players: Vec<Player>,
        scores: Scores,
    },

    /// To the drawer only: the secret word for this round.
    YourWord { word: String },

    /// To everyone but the stroke's author: the relayed stroke payload.
    DrawingData(serde_json::Value),

    /// To the whole room: an incorrect guess, shown as chat.
    ChatMessage(ChatEntry),

    /// To the whole room: someone guessed the word.
    CorrectGuess {
        player_name: String,
        word: String,
        scores: Scores,
    },
}

// =========================================================================
// Tests
// =========================================================================
