//! The process-wide room table.

use std::collections::HashMap;

use scrawl_protocol::RoomCode;

use crate::Room;

/// Owns every live [`Room`], keyed by code.
///
/// Handlers re-fetch their room by code on every invocation rather than
/// holding a `Room` reference across suspension points — after a deferred
/// operation fires, the room may have been mutated or deleted by events
/// that ran in between.
#[derive(Debug, Default)]
pub struct RoomStore {
    rooms: HashMap<RoomCode, Room>,
}

impl RoomStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a room under its own code.
    pub fn insert(&mut self, room: Room) {
        self.rooms.insert(room.code.clone(), room);
    }

    /// Looks up a room by code.
    pub fn get(&self, code: &RoomCode) -> Option<&Room> {
        self.rooms.get(code)
    }

    /// Looks up a room by code for mutation.
    pub fn get_mut(&mut self, code: &RoomCode) -> Option<&mut Room> {
        self.rooms.get_mut(code)
    }

    /// Removes and returns the room under this code.
    pub fn remove(&mut self, code: &RoomCode) -> Option<Room> {
        self.rooms.remove(code)
    }

    /// Whether a room exists under this code.
    pub fn contains(&self, code: &RoomCode) -> bool {
        self.rooms.contains_key(code)
    }

    /// A snapshot of all live codes, for scans that may delete rooms
    /// while iterating.
    pub fn codes(&self) -> Vec<RoomCode> {
        self.rooms.keys().cloned().collect()
    }

    /// Number of live rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether no rooms are live.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
