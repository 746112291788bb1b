//! Room registry: live presence and per-room state.
//!
//! The registry is the single source of truth for which connection is in
//! which room. It hands out one `Arc<Mutex<Room>>` per room; all mutations
//! of a room's participants and note go through that room's own lock, so
//! operations on different rooms never contend. The outer index lock is
//! held only to look up or insert handles, never across a room mutation.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::entity::Room;
use super::value_object::{ConnectionId, RoomId, Username};

/// Result of binding a connection to a room.
///
/// When the join displaces an earlier membership, `displaced` carries the
/// room the connection has to be removed from before the join is announced.
pub struct RoomAssignment {
    pub room: Arc<Mutex<Room>>,
    pub displaced: Option<(RoomId, Arc<Mutex<Room>>)>,
}

#[derive(Default)]
struct RegistryIndex {
    rooms: HashMap<RoomId, Arc<Mutex<Room>>>,
    connections: HashMap<ConnectionId, RoomId>,
}

/// Presence tracker and room directory in one structure.
///
/// A connection is bound to at most one room at a time; [`assign`] enforces
/// this by reporting the previous room so the caller can complete the
/// departure first. The backing maps are never exposed.
///
/// [`assign`]: RoomRegistry::assign
pub struct RoomRegistry {
    index: Mutex<RegistryIndex>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            index: Mutex::new(RegistryIndex::default()),
        }
    }

    /// Get the handle for a room, creating the room on first use.
    pub async fn room(&self, room_id: &RoomId) -> Arc<Mutex<Room>> {
        let mut index = self.index.lock().await;
        Arc::clone(
            index
                .rooms
                .entry(room_id.clone())
                .or_insert_with(|| Arc::new(Mutex::new(Room::new(room_id.clone())))),
        )
    }

    /// Point a connection at a room.
    ///
    /// Returns the new room's handle and, if the connection was bound to a
    /// different room before, that room's handle as well. Re-assigning a
    /// connection to its current room reports nothing displaced.
    pub async fn assign(&self, connection_id: &ConnectionId, room_id: &RoomId) -> RoomAssignment {
        let mut index = self.index.lock().await;
        let room = Arc::clone(
            index
                .rooms
                .entry(room_id.clone())
                .or_insert_with(|| Arc::new(Mutex::new(Room::new(room_id.clone())))),
        );
        let previous = index
            .connections
            .insert(connection_id.clone(), room_id.clone());
        let displaced = match previous {
            Some(prev) if prev != *room_id => {
                index.rooms.get(&prev).cloned().map(|handle| (prev, handle))
            }
            _ => None,
        };
        RoomAssignment { room, displaced }
    }

    /// Drop a connection's room binding.
    ///
    /// Returns the room it was bound to, or `None` if the connection never
    /// joined one (in which case this is a no-op).
    pub async fn release(
        &self,
        connection_id: &ConnectionId,
    ) -> Option<(RoomId, Arc<Mutex<Room>>)> {
        let mut index = self.index.lock().await;
        let room_id = index.connections.remove(connection_id)?;
        let room = index.rooms.get(&room_id).cloned()?;
        Some((room_id, room))
    }

    /// Room a connection is currently bound to, without unbinding it.
    pub async fn room_of(
        &self,
        connection_id: &ConnectionId,
    ) -> Option<(RoomId, Arc<Mutex<Room>>)> {
        let index = self.index.lock().await;
        let room_id = index.connections.get(connection_id)?.clone();
        let room = index.rooms.get(&room_id).cloned()?;
        Some((room_id, room))
    }

    /// Username a live connection registered at join time, looked up across
    /// all rooms. `None` when the connection is not currently joined.
    pub async fn resolve_username(&self, connection_id: &ConnectionId) -> Option<Username> {
        let (_, room) = self.room_of(connection_id).await?;
        let room = room.lock().await;
        room.participant(connection_id).map(|p| p.username.clone())
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::Participant;

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::new(id.to_string())
    }

    fn room_id(id: &str) -> RoomId {
        RoomId::new(id.to_string())
    }

    #[tokio::test]
    async fn test_assign_creates_room_implicitly() {
        // given:
        let registry = RoomRegistry::new();

        // when:
        let assignment = registry.assign(&conn("c1"), &room_id("abc123")).await;

        // then:
        assert!(assignment.displaced.is_none());
        let room = assignment.room.lock().await;
        assert_eq!(room.id.as_str(), "abc123");
        assert!(room.is_empty());
    }

    #[tokio::test]
    async fn test_assign_same_room_twice_displaces_nothing() {
        // given:
        let registry = RoomRegistry::new();
        registry.assign(&conn("c1"), &room_id("abc123")).await;

        // when:
        let assignment = registry.assign(&conn("c1"), &room_id("abc123")).await;

        // then:
        assert!(assignment.displaced.is_none());
    }

    #[tokio::test]
    async fn test_assign_to_new_room_reports_old_room() {
        // Test case: joining a second room without leaving the first
        // surfaces the old room so the caller can complete the departure.
        // given:
        let registry = RoomRegistry::new();
        registry.assign(&conn("c1"), &room_id("old")).await;

        // when:
        let assignment = registry.assign(&conn("c1"), &room_id("new")).await;

        // then:
        let (displaced_id, _) = assignment.displaced.expect("old room should be reported");
        assert_eq!(displaced_id.as_str(), "old");
        let (current, _) = registry.room_of(&conn("c1")).await.unwrap();
        assert_eq!(current.as_str(), "new");
    }

    #[tokio::test]
    async fn test_release_unbinds_connection() {
        // given:
        let registry = RoomRegistry::new();
        registry.assign(&conn("c1"), &room_id("abc123")).await;

        // when:
        let released = registry.release(&conn("c1")).await;

        // then:
        let (released_id, _) = released.unwrap();
        assert_eq!(released_id.as_str(), "abc123");
        assert!(registry.room_of(&conn("c1")).await.is_none());
    }

    #[tokio::test]
    async fn test_release_without_join_is_none() {
        // given:
        let registry = RoomRegistry::new();

        // when:
        let released = registry.release(&conn("never-joined")).await;

        // then:
        assert!(released.is_none());
    }

    #[tokio::test]
    async fn test_room_survives_with_zero_participants() {
        // given:
        let registry = RoomRegistry::new();
        let assignment = registry.assign(&conn("c1"), &room_id("abc123")).await;
        assignment.room.lock().await.set_note(
            "hello".to_string(),
            crate::domain::Timestamp::new(1000),
        );
        registry.release(&conn("c1")).await;

        // when:
        let room = registry.room(&room_id("abc123")).await;

        // then: the room entry and its note are still there
        let room = room.lock().await;
        assert!(room.is_empty());
        assert_eq!(room.note().unwrap().content, "hello");
    }

    #[tokio::test]
    async fn test_resolve_username_of_joined_connection() {
        // given:
        let registry = RoomRegistry::new();
        let assignment = registry.assign(&conn("c1"), &room_id("abc123")).await;
        assignment.room.lock().await.add_participant(Participant::new(
            conn("c1"),
            Username::new("alice".to_string()),
        ));

        // when / then:
        assert_eq!(
            registry.resolve_username(&conn("c1")).await,
            Some(Username::new("alice".to_string()))
        );
        assert!(registry.resolve_username(&conn("ghost")).await.is_none());
    }
}
