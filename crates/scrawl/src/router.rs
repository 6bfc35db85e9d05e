//! The event router: the single dispatch point for inbound events.
//!
//! All mutable game state lives in [`GameState`], which the server wraps
//! in one `Mutex`. Every inbound event locks it, runs to completion, and
//! unlocks — handlers never suspend mid-mutation, so each one is atomic
//! with respect to every other. The lone deferred operation (the reveal
//! pause before the next round) re-enters through
//! [`GameState::advance_round`], which re-resolves the room by code and
//! treats a missing or emptied room as a no-op.

use scrawl_protocol::{ClientEvent, ConnectionId, RoomCode, ServerEvent};
use scrawl_room::{RoomStore, Verdict, guess, lifecycle, rounds};

use crate::hub::{EventSender, Hub};

/// Work the handler must do after releasing the state lock.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FollowUp {
    None,
    /// Start the next round in this room after the reveal pause.
    ScheduleRound(RoomCode),
}

/// The room table plus the broadcast hub — everything a handler mutates.
pub(crate) struct GameState {
    pub(crate) rooms: RoomStore,
    pub(crate) hub: Hub,
}

impl GameState {
    pub(crate) fn new() -> Self {
        Self {
            rooms: RoomStore::new(),
            hub: Hub::new(),
        }
    }

    /// Registers a freshly accepted connection's outbound channel.
    pub(crate) fn connect(
        &mut self,
        conn: ConnectionId,
        sender: EventSender,
    ) {
        self.hub.register(conn, sender);
    }

    /// Dispatches one inbound event from a connection.
    ///
    /// Failures here are local: an unknown room, a non-creator start, or
    /// an empty roster degrade to logged no-ops. Only a rejected join
    /// produces an error event, and only to the joining connection.
    pub(crate) fn route(
        &mut self,
        sender: ConnectionId,
        event: ClientEvent,
    ) -> FollowUp {
        match event {
            ClientEvent::CreateRoom { player_name } => {
                let (code, events) =
                    lifecycle::create(&mut self.rooms, sender, &player_name);
                self.hub.subscribe(sender, code.clone());
                self.hub.dispatch(&code, events);
                FollowUp::None
            }

            ClientEvent::JoinRoom {
                room_code,
                player_name,
            } => {
                match lifecycle::join(
                    &mut self.rooms,
                    &room_code,
                    sender,
                    &player_name,
                ) {
                    Ok(events) => {
                        self.hub.subscribe(sender, room_code.clone());
                        self.hub.dispatch(&room_code, events);
                    }
                    Err(e) => {
                        tracing::debug!(
                            room = %room_code,
                            %sender,
                            error = %e,
                            "join rejected"
                        );
                        self.hub.send_to(
                            sender,
                            ServerEvent::JoinError {
                                message: e.to_string(),
                            },
                        );
                    }
                }
                FollowUp::None
            }

            ClientEvent::StartGame { room_code } => {
                let Some(room) = self.rooms.get_mut(&room_code) else {
                    return FollowUp::None;
                };
                // Creator-only, and only once. Anything else is ignored
                // without an error event.
                if room.creator_id != sender || room.started {
                    tracing::debug!(
                        room = %room_code,
                        %sender,
                        "ignoring start_game"
                    );
                    return FollowUp::None;
                }
                match rounds::begin(room) {
                    Ok(events) => self.hub.dispatch(&room_code, events),
                    Err(e) => tracing::debug!(
                        room = %room_code,
                        error = %e,
                        "start_game skipped"
                    ),
                }
                FollowUp::None
            }

            ClientEvent::DrawingData { room_code, data } => {
                // Relayed verbatim to the rest of the room. No membership
                // or drawer validation — any connection may inject strokes.
                self.hub.publish_except(
                    &room_code,
                    sender,
                    ServerEvent::DrawingData(data),
                );
                FollowUp::None
            }

            ClientEvent::Guess {
                room_code,
                player_name,
                message,
            } => {
                let Some(room) = self.rooms.get_mut(&room_code) else {
                    return FollowUp::None;
                };
                let (verdict, events) =
                    guess::evaluate(room, sender, &player_name, &message);
                self.hub.dispatch(&room_code, events);
                match verdict {
                    Verdict::Correct => FollowUp::ScheduleRound(room_code),
                    Verdict::Incorrect => FollowUp::None,
                }
            }
        }
    }

    /// Handles a transport-level disconnect: drop the connection from the
    /// hub, remove it from every room, and tear down emptied rooms.
    pub(crate) fn connection_closed(&mut self, conn: ConnectionId) {
        self.hub.unregister(conn);
        for departure in lifecycle::disconnect(&mut self.rooms, conn) {
            self.hub.dispatch(&departure.code, departure.events);
            if departure.deleted {
                self.hub.drop_topic(&departure.code);
            }
        }
    }

    /// The deferred round transition, fired after the reveal pause.
    ///
    /// The room is re-resolved by code: anything may have happened since
    /// the correct guess that scheduled this — more guesses, disconnects,
    /// even deletion of the room. A missing or emptied room means there
    /// is nothing to do.
    pub(crate) fn advance_round(&mut self, code: &RoomCode) {
        let Some(room) = self.rooms.get_mut(code) else {
            tracing::debug!(room = %code, "room gone before deferred round start");
            return;
        };
        match rounds::advance(room) {
            Ok(events) => self.hub.dispatch(code, events),
            Err(e) => {
                tracing::debug!(room = %code, error = %e, "deferred round start skipped")
            }
        }
    }
}
