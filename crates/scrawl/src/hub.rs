//! Broadcast hub: topic membership and event fan-out.
//!
//! Each room code is a topic; every connection has one outbound channel.
//! The hub turns the engine's `(Recipient, ServerEvent)` pairs into
//! deliveries on those channels. A connection's channel is FIFO, so all
//! members observe one room's events in the order they were published.

use std::collections::{HashMap, HashSet};

use tokio::sync::mpsc;

use scrawl_protocol::{ConnectionId, Recipient, RoomCode, ServerEvent};

/// Per-connection outbound channel, pumped onto the socket by the
/// connection's writer task.
pub(crate) type EventSender = mpsc::UnboundedSender<ServerEvent>;

/// In-memory publish/subscribe fan-out.
#[derive(Default)]
pub(crate) struct Hub {
    /// Outbound channel per registered connection.
    senders: HashMap<ConnectionId, EventSender>,
    /// Topic membership: which connections hear a room's broadcasts.
    topics: HashMap<RoomCode, HashSet<ConnectionId>>,
}

impl Hub {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a connection's outbound channel.
    pub(crate) fn register(
        &mut self,
        conn: ConnectionId,
        sender: EventSender,
    ) {
        self.senders.insert(conn, sender);
    }

    /// Removes a connection entirely: its channel and every topic
    /// membership. Dropping the sender ends the connection's writer task.
    pub(crate) fn unregister(&mut self, conn: ConnectionId) {
        self.senders.remove(&conn);
        self.topics.retain(|_, members| {
            members.remove(&conn);
            !members.is_empty()
        });
    }

    /// Subscribes a connection to a room's broadcasts.
    pub(crate) fn subscribe(&mut self, conn: ConnectionId, code: RoomCode) {
        self.topics.entry(code).or_default().insert(conn);
    }

    /// Drops a topic outright (its room was destroyed). Publishing to a
    /// missing topic is already a no-op; this just frees the entry.
    pub(crate) fn drop_topic(&mut self, code: &RoomCode) {
        self.topics.remove(code);
    }

    /// Sends an event to one connection. Silently dropped if the
    /// connection is gone — a disconnect can race any broadcast.
    pub(crate) fn send_to(&self, conn: ConnectionId, event: ServerEvent) {
        if let Some(sender) = self.senders.get(&conn) {
            let _ = sender.send(event);
        }
    }

    /// Sends an event to every member of a topic.
    pub(crate) fn publish(&self, code: &RoomCode, event: ServerEvent) {
        self.publish_filtered(code, None, event);
    }

    /// Sends an event to every member of a topic except one.
    pub(crate) fn publish_except(
        &self,
        code: &RoomCode,
        excluded: ConnectionId,
        event: ServerEvent,
    ) {
        self.publish_filtered(code, Some(excluded), event);
    }

    fn publish_filtered(
        &self,
        code: &RoomCode,
        excluded: Option<ConnectionId>,
        event: ServerEvent,
    ) {
        let Some(members) = self.topics.get(code) else {
            return;
        };
        for member in members {
            if Some(*member) == excluded {
                continue;
            }
            self.send_to(*member, event.clone());
        }
    }

    /// Delivers a batch of addressed events within one room's channel.
    pub(crate) fn dispatch(
        &self,
        code: &RoomCode,
        events: Vec<(Recipient, ServerEvent)>,
    ) {
        for (recipient, event) in events {
            match recipient {
                Recipient::All => self.publish(code, event),
                Recipient::Connection(conn) => self.send_to(conn, event),
                Recipient::AllExcept(excluded) => {
                    self.publish_except(code, excluded, event)
                }
            }
        }
    }
}
