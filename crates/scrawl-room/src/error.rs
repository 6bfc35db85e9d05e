//! Error types for room operations.

use scrawl_protocol::RoomCode;

/// Errors that can occur while operating on rooms.
///
/// Only [`NotFound`](RoomError::NotFound) and
/// [`AlreadyStarted`](RoomError::AlreadyStarted) ever reach a client (as a
/// `join_error`); everything else degrades to a logged no-op at the router.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// No room exists under this code.
    #[error("room {0} not found")]
    NotFound(RoomCode),

    /// The room's game has already started; late joins are rejected.
    #[error("game in room {0} already started")]
    AlreadyStarted(RoomCode),

    /// A round cannot start because the roster is empty. Reachable only
    /// through the deferred round start racing a final disconnect.
    #[error("room {0} has no players")]
    NoPlayers(RoomCode),
}
