//! Core room and round orchestration for Scrawl.
//!
//! Everything in this crate is plain synchronous state and logic — no
//! sockets, no locks, no timers. Operations mutate a [`Room`] inside the
//! [`RoomStore`] and return `(Recipient, ServerEvent)` pairs describing
//! what should be delivered to whom; the server crate owns the async
//! shell that actually locks, schedules, and broadcasts.
//!
//! # Key pieces
//!
//! - [`RoomStore`] — sole owner of all live rooms, keyed by code
//! - [`code`] — collision-free short code generation
//! - [`lifecycle`] — create / join / disconnect membership handling
//! - [`rounds`] — game start and drawer rotation
//! - [`guess`] — word comparison and scoring
//! - [`words`] — the fixed drawing vocabulary

pub mod code;
pub mod guess;
pub mod lifecycle;
pub mod rounds;
pub mod words;

mod error;
mod room;
mod store;

pub use error::RoomError;
pub use guess::Verdict;
pub use lifecycle::Departure;
pub use room::Room;
pub use store::RoomStore;
