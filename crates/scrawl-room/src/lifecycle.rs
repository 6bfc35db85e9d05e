//! Membership lifecycle: room creation, joins, and disconnects.

use scrawl_protocol::{ConnectionId, Recipient, RoomCode, ServerEvent};

use crate::{Room, RoomError, RoomStore, code};

/// Creates a room with the sender as creator and sole player.
///
/// Returns the new code plus a `room_created` delivery addressed to the
/// creator alone. The caller subscribes the connection to the code's
/// broadcast channel.
pub fn create(
    store: &mut RoomStore,
    conn: ConnectionId,
    player_name: &str,
) -> (RoomCode, Vec<(Recipient, ServerEvent)>) {
    let room_code = code::generate(store);
    let room = Room::new(room_code.clone(), conn, player_name);

    let events = vec![(
        Recipient::Connection(conn),
        ServerEvent::RoomCreated {
            room_code: room_code.clone(),
            players: room.roster(),
            creator_id: conn,
        },
    )];

    tracing::info!(room = %room_code, player = player_name, "room created");
    store.insert(room);
    (room_code, events)
}

/// Joins an existing lobby room.
///
/// Rejects unknown codes and rooms whose game already started — the two
/// errors that surface to clients as `join_error`. A connection already
/// on the roster is re-joined idempotently: the roster and scores are
/// untouched, but the transcript replay and roster broadcast still go
/// out. Returns the `chat_history` delivery for the joiner plus a
/// `room_updated` broadcast for the whole room.
pub fn join(
    store: &mut RoomStore,
    room_code: &RoomCode,
    conn: ConnectionId,
    player_name: &str,
) -> Result<Vec<(Recipient, ServerEvent)>, RoomError> {
    let room = store
        .get_mut(room_code)
        .ok_or_else(|| RoomError::NotFound(room_code.clone()))?;
    if room.started {
        return Err(RoomError::AlreadyStarted(room_code.clone()));
    }

    room.add_player(conn, player_name);
    tracing::info!(room = %room_code, player = player_name, "player joined");

    Ok(vec![
        (
            Recipient::Connection(conn),
            ServerEvent::ChatHistory(room.chat.clone()),
        ),
        (
            Recipient::All,
            ServerEvent::RoomUpdated {
                room_code: room_code.clone(),
                players: room.roster(),
                creator_id: room.creator_id,
            },
        ),
    ])
}

/// The result of removing a disconnected player from one room.
#[derive(Debug)]
pub struct Departure {
    /// The room the player left.
    pub code: RoomCode,
    /// Whether the removal emptied the room and destroyed it.
    pub deleted: bool,
    /// Roster broadcast for the remaining members.
    pub events: Vec<(Recipient, ServerEvent)>,
}

/// Removes a disconnected connection from every room that lists it.
///
/// A connection belongs to at most one room, but the scan checks all of
/// them defensively. Each match removes the single player entry (scores
/// keep their stale entry), broadcasts the updated roster, and destroys
/// the room if nobody remains.
pub fn disconnect(
    store: &mut RoomStore,
    conn: ConnectionId,
) -> Vec<Departure> {
    let mut departures = Vec::new();

    for room_code in store.codes() {
        let Some(room) = store.get_mut(&room_code) else {
            continue;
        };
        let Some(removed) = room.remove_player(conn) else {
            continue;
        };
        tracing::info!(
            room = %room_code,
            player = %removed.name,
            "player left"
        );

        let events = vec![(
            Recipient::All,
            ServerEvent::RoomUpdated {
                room_code: room_code.clone(),
                players: room.roster(),
                creator_id: room.creator_id,
            },
        )];

        let deleted = room.players.is_empty();
        if deleted {
            store.remove(&room_code);
            tracing::info!(room = %room_code, "room deleted (empty)");
        }

        departures.push(Departure {
            code: room_code,
            deleted,
            events,
        });
    }

    departures
}
