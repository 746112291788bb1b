//! WebSocket event DTOs.
//!
//! Every event is a JSON object tagged by `type`, with camelCase fields.
//! Inbound parsing is best-effort: optional fields default when absent, and
//! an event that fails to parse is logged and dropped by the handler rather
//! than answered with a validation error.

use serde::{Deserialize, Serialize};

/// Inbound client events.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    #[serde(rename = "join-room")]
    JoinRoom(JoinRoomPayload),

    #[serde(rename = "note-update")]
    NoteUpdate(NoteUpdatePayload),

    #[serde(rename = "chat-message")]
    ChatMessage(ChatMessagePayload),

    /// Explicit-leave form of the departure flow; transport disconnect is
    /// the implicit form.
    #[serde(rename = "leave-room")]
    LeaveRoom,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomPayload {
    pub room_id: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdatePayload {
    pub room_id: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessagePayload {
    pub room_id: String,
    /// Sender id as the client knows it (the id echoed back from
    /// `user-joined`). Carried into the stored message verbatim.
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub recipient_id: Option<String>,
}

/// Outbound server events.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum ServerEvent {
    #[serde(rename = "user-joined", rename_all = "camelCase")]
    UserJoined {
        user_id: String,
        username: String,
        timestamp: i64,
    },

    /// Roster of a room. Sent to a joiner (without the joiner itself) and,
    /// after a departure, to every remaining member (full list).
    #[serde(rename = "room-users", rename_all = "camelCase")]
    RoomUsers { users: Vec<RoomUser> },

    #[serde(rename = "note-updated", rename_all = "camelCase")]
    NoteUpdated { content: String, last_edited: i64 },

    #[serde(rename = "new-chat-message", rename_all = "camelCase")]
    NewChatMessage {
        room_id: String,
        sender_id: String,
        sender_username: String,
        message: String,
        timestamp: i64,
        is_private: bool,
        recipient_id: Option<String>,
        recipient_username: Option<String>,
    },

    #[serde(rename = "user-left", rename_all = "camelCase")]
    UserLeft {
        user_id: String,
        username: String,
        timestamp: i64,
    },

    #[serde(rename = "error")]
    Error { message: String },
}

impl ServerEvent {
    /// Serialize for the wire. Server events are plain data structures;
    /// serialization cannot fail.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("Failed to serialize server event")
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomUser {
    pub user_id: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_join_room_event() {
        // given:
        let json = r#"{"type":"join-room","roomId":"abc123","username":"alice"}"#;

        // when:
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then:
        match event {
            ClientEvent::JoinRoom(payload) => {
                assert_eq!(payload.room_id, "abc123");
                assert_eq!(payload.username, "alice");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_join_room_without_username_defaults_to_empty() {
        // Missing optional fields are treated as absent, not rejected.
        // given:
        let json = r#"{"type":"join-room","roomId":"abc123"}"#;

        // when:
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then:
        match event {
            ClientEvent::JoinRoom(payload) => assert_eq!(payload.username, ""),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_chat_message_event_with_defaults() {
        // given:
        let json = r#"{"type":"chat-message","roomId":"abc123","message":"hi"}"#;

        // when:
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then:
        match event {
            ClientEvent::ChatMessage(payload) => {
                assert_eq!(payload.message, "hi");
                assert!(!payload.is_private);
                assert!(payload.recipient_id.is_none());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_leave_room_event() {
        // given:
        let json = r#"{"type":"leave-room"}"#;

        // when:
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then:
        assert!(matches!(event, ClientEvent::LeaveRoom));
    }

    #[test]
    fn test_parse_unknown_event_type_fails() {
        // given:
        let json = r#"{"type":"shutdown-server"}"#;

        // when:
        let result = serde_json::from_str::<ClientEvent>(json);

        // then:
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_user_joined_uses_camel_case_and_type_tag() {
        // given:
        let event = ServerEvent::UserJoined {
            user_id: "c1".to_string(),
            username: "alice".to_string(),
            timestamp: 1000,
        };

        // when:
        let json = event.to_json();

        // then:
        assert!(json.contains(r#""type":"user-joined""#));
        assert!(json.contains(r#""userId":"c1""#));
        assert!(json.contains(r#""timestamp":1000"#));
    }

    #[test]
    fn test_serialize_note_updated_renames_last_edited() {
        // given:
        let event = ServerEvent::NoteUpdated {
            content: "hello".to_string(),
            last_edited: 2000,
        };

        // when:
        let json = event.to_json();

        // then:
        assert!(json.contains(r#""type":"note-updated""#));
        assert!(json.contains(r#""lastEdited":2000"#));
    }

    #[test]
    fn test_serialize_private_chat_message_carries_recipient() {
        // given:
        let event = ServerEvent::NewChatMessage {
            room_id: "abc123".to_string(),
            sender_id: "c1".to_string(),
            sender_username: "alice".to_string(),
            message: "psst".to_string(),
            timestamp: 3000,
            is_private: true,
            recipient_id: Some("c2".to_string()),
            recipient_username: Some("bob".to_string()),
        };

        // when:
        let json = event.to_json();

        // then:
        assert!(json.contains(r#""isPrivate":true"#));
        assert!(json.contains(r#""recipientId":"c2""#));
        assert!(json.contains(r#""recipientUsername":"bob""#));
    }
}
