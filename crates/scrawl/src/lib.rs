//! # Scrawl
//!
//! Server for a turn-based drawing-and-guessing game: one player draws a
//! secret word, everyone else guesses, a correct guess scores a point and
//! rotates the drawer. Rooms are identified by short shareable codes and
//! live only in memory, only as long as someone is connected to them.
//!
//! This crate is the async shell around [`scrawl_room`]'s pure engine: it
//! accepts WebSocket connections, decodes [`ClientEvent`]s, routes them
//! through the engine under a single lock, and fans the resulting
//! [`ServerEvent`]s out through per-room broadcast channels.
//!
//! ```rust,no_run
//! use scrawl::ScrawlServerBuilder;
//!
//! # async fn run() -> Result<(), scrawl::ScrawlError> {
//! let server = ScrawlServerBuilder::new()
//!     .bind("0.0.0.0:4000")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod handler;
mod hub;
mod router;
mod server;

pub use error::ScrawlError;
pub use server::{DEFAULT_REVEAL_DELAY, ScrawlServer, ScrawlServerBuilder};

pub use scrawl_protocol::{
    ChatEntry, ClientEvent, ConnectionId, Player, RoomCode, Scores,
    ServerEvent,
};
