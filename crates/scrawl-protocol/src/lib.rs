//! Wire protocol for Scrawl.
//!
//! This crate defines the event vocabulary clients and the server speak:
//!
//! - **Events** ([`ClientEvent`], [`ServerEvent`]) — every named action a
//!   client can send and every notification the server can emit.
//! - **Shared wire types** ([`RoomCode`], [`Player`], [`ChatEntry`],
//!   [`Scores`]) — the payload pieces those events carry.
//! - **Routing** ([`Recipient`]) — who inside a room should receive an
//!   outbound event.
//! - **Codec** ([`Codec`], [`JsonCodec`]) — how events become bytes.
//!
//! The protocol layer sits between the transport (raw frames) and the room
//! engine (game state). It knows nothing about connections or rooms — only
//! about the shape of messages.

mod codec;
mod error;
mod events;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use events::{
    ChatEntry, ClientEvent, Player, Recipient, RoomCode, Scores,
    ServerEvent,
};

// The transport assigns connection identity; everything above it reuses
// that id as the player key.
pub use scrawl_transport::ConnectionId;
