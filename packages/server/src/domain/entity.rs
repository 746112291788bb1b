//! Domain entities: participants, notes, chat messages and rooms.

use std::collections::HashMap;

use super::value_object::{ConnectionId, RoomId, Timestamp, Username};

/// The binding of a live connection to a username within a room.
///
/// Exactly one participant record exists per live connection; rejoining
/// replaces the record rather than duplicating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ConnectionId,
    pub username: Username,
}

impl Participant {
    pub fn new(id: ConnectionId, username: Username) -> Self {
        Self { id, username }
    }
}

/// The shared text document of a room. Last-write-wins: the most recent
/// update fully replaces prior content, no merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub content: String,
    pub last_edited: Timestamp,
}

impl Note {
    pub fn new(content: String, last_edited: Timestamp) -> Self {
        Self {
            content,
            last_edited,
        }
    }
}

/// A chat message, immutable once created.
///
/// `recipient_username` is resolved from presence at send time and frozen;
/// it is not updated if the recipient later leaves or changes username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub room_id: RoomId,
    pub sender_id: ConnectionId,
    pub sender_username: Username,
    pub message: String,
    pub timestamp: Timestamp,
    pub is_private: bool,
    pub recipient_id: Option<ConnectionId>,
    pub recipient_username: Option<Username>,
}

/// One room: its current participants and its note.
///
/// A room with zero participants is kept around; its note survives until
/// the server shuts down.
#[derive(Debug)]
pub struct Room {
    pub id: RoomId,
    participants: HashMap<ConnectionId, Participant>,
    order: Vec<ConnectionId>,
    note: Option<Note>,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            participants: HashMap::new(),
            order: Vec::new(),
            note: None,
        }
    }

    /// Add a participant, replacing any existing record for the same
    /// connection. A connection is never listed twice.
    pub fn add_participant(&mut self, participant: Participant) {
        let id = participant.id.clone();
        if self.participants.insert(id.clone(), participant).is_none() {
            self.order.push(id);
        }
    }

    /// Remove a participant by connection id. Removing an id that is not
    /// present is a no-op, not an error.
    pub fn remove_participant(&mut self, connection_id: &ConnectionId) -> Option<Participant> {
        let removed = self.participants.remove(connection_id)?;
        self.order.retain(|id| id != connection_id);
        Some(removed)
    }

    pub fn participant(&self, connection_id: &ConnectionId) -> Option<&Participant> {
        self.participants.get(connection_id)
    }

    /// Current participants in join order.
    pub fn roster(&self) -> Vec<Participant> {
        self.order
            .iter()
            .filter_map(|id| self.participants.get(id).cloned())
            .collect()
    }

    /// Connection ids of all current participants, the fan-out target set.
    pub fn member_ids(&self) -> Vec<ConnectionId> {
        self.order.clone()
    }

    pub fn member_count(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Write-through note update. The new content fully replaces the old;
    /// returns the resulting note for broadcasting and persistence.
    pub fn set_note(&mut self, content: String, last_edited: Timestamp) -> Note {
        let note = Note::new(content, last_edited);
        self.note = Some(note.clone());
        note
    }

    pub fn note(&self) -> Option<&Note> {
        self.note.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(RoomId::new("abc123".to_string()))
    }

    fn participant(id: &str, name: &str) -> Participant {
        Participant::new(
            ConnectionId::new(id.to_string()),
            Username::new(name.to_string()),
        )
    }

    #[test]
    fn test_add_participant_keeps_join_order() {
        // given:
        let mut room = room();

        // when:
        room.add_participant(participant("c1", "alice"));
        room.add_participant(participant("c2", "bob"));
        room.add_participant(participant("c3", "charlie"));

        // then:
        let roster = room.roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].username.as_str(), "alice");
        assert_eq!(roster[1].username.as_str(), "bob");
        assert_eq!(roster[2].username.as_str(), "charlie");
    }

    #[test]
    fn test_add_participant_twice_replaces_record() {
        // Test case: rejoining with the same connection never produces two
        // participant records.
        // given:
        let mut room = room();
        room.add_participant(participant("c1", "alice"));

        // when:
        room.add_participant(participant("c1", "alicia"));

        // then:
        assert_eq!(room.member_count(), 1);
        let roster = room.roster();
        assert_eq!(roster[0].username.as_str(), "alicia");
    }

    #[test]
    fn test_remove_participant_success() {
        // given:
        let mut room = room();
        room.add_participant(participant("c1", "alice"));
        room.add_participant(participant("c2", "bob"));

        // when:
        let removed = room.remove_participant(&ConnectionId::new("c1".to_string()));

        // then:
        assert_eq!(removed.unwrap().username.as_str(), "alice");
        assert_eq!(room.member_count(), 1);
        assert!(
            !room
                .member_ids()
                .contains(&ConnectionId::new("c1".to_string()))
        );
    }

    #[test]
    fn test_remove_nonexistent_participant_is_noop() {
        // given:
        let mut room = room();

        // when:
        let removed = room.remove_participant(&ConnectionId::new("ghost".to_string()));

        // then:
        assert!(removed.is_none());
        assert!(room.is_empty());
    }

    #[test]
    fn test_set_note_is_last_write_wins() {
        // given:
        let mut room = room();
        room.set_note("hello".to_string(), Timestamp::new(1000));

        // when:
        room.set_note("hello world".to_string(), Timestamp::new(2000));

        // then:
        let note = room.note().unwrap();
        assert_eq!(note.content, "hello world");
        assert_eq!(note.last_edited, Timestamp::new(2000));
    }

    #[test]
    fn test_room_without_note() {
        assert!(room().note().is_none());
    }
}
