//! Conversion logic between domain entities and DTOs.

use noteroom_shared::time::timestamp_to_rfc3339;

use crate::domain::entity;
use crate::infrastructure::dto::http;
use crate::infrastructure::dto::websocket as dto;

// ========================================
// Domain Entity → WebSocket DTO
// ========================================

impl From<&entity::Participant> for dto::RoomUser {
    fn from(participant: &entity::Participant) -> Self {
        Self {
            user_id: participant.id.as_str().to_string(),
            username: participant.username.as_str().to_string(),
        }
    }
}

impl From<&entity::ChatMessage> for dto::ServerEvent {
    fn from(message: &entity::ChatMessage) -> Self {
        dto::ServerEvent::NewChatMessage {
            room_id: message.room_id.as_str().to_string(),
            sender_id: message.sender_id.as_str().to_string(),
            sender_username: message.sender_username.as_str().to_string(),
            message: message.message.clone(),
            timestamp: message.timestamp.value(),
            is_private: message.is_private,
            recipient_id: message.recipient_id.as_ref().map(|id| id.as_str().to_string()),
            recipient_username: message
                .recipient_username
                .as_ref()
                .map(|name| name.as_str().to_string()),
        }
    }
}

// ========================================
// Domain Entity → HTTP DTO
// ========================================

impl From<entity::Note> for http::NoteDto {
    fn from(note: entity::Note) -> Self {
        Self {
            content: note.content,
            last_edited: timestamp_to_rfc3339(note.last_edited.value()),
        }
    }
}

impl From<entity::ChatMessage> for http::ChatHistoryEntryDto {
    fn from(message: entity::ChatMessage) -> Self {
        Self {
            room_id: message.room_id.into_string(),
            sender_id: message.sender_id.into_string(),
            sender_username: message.sender_username.into_string(),
            message: message.message,
            timestamp: timestamp_to_rfc3339(message.timestamp.value()),
            is_private: message.is_private,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, RoomId, Timestamp, Username};

    fn public_message() -> entity::ChatMessage {
        entity::ChatMessage {
            room_id: RoomId::new("abc123".to_string()),
            sender_id: ConnectionId::new("c1".to_string()),
            sender_username: Username::new("alice".to_string()),
            message: "hello everyone".to_string(),
            timestamp: Timestamp::new(1672531200000),
            is_private: false,
            recipient_id: None,
            recipient_username: None,
        }
    }

    #[test]
    fn test_participant_to_room_user() {
        // given:
        let participant = entity::Participant::new(
            ConnectionId::new("c1".to_string()),
            Username::new("alice".to_string()),
        );

        // when:
        let room_user: dto::RoomUser = (&participant).into();

        // then:
        assert_eq!(room_user.user_id, "c1");
        assert_eq!(room_user.username, "alice");
    }

    #[test]
    fn test_chat_message_to_server_event() {
        // given:
        let message = public_message();

        // when:
        let event: dto::ServerEvent = (&message).into();

        // then:
        match event {
            dto::ServerEvent::NewChatMessage {
                room_id,
                sender_id,
                sender_username,
                is_private,
                recipient_username,
                ..
            } => {
                assert_eq!(room_id, "abc123");
                assert_eq!(sender_id, "c1");
                assert_eq!(sender_username, "alice");
                assert!(!is_private);
                assert!(recipient_username.is_none());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_note_to_http_dto_renders_rfc3339() {
        // given:
        let note = entity::Note::new("hello".to_string(), Timestamp::new(1672531200000));

        // when:
        let dto: http::NoteDto = note.into();

        // then:
        assert_eq!(dto.content, "hello");
        assert!(dto.last_edited.starts_with("2023-01-01T00:00:00"));
    }

    #[test]
    fn test_chat_message_to_history_entry() {
        // given:
        let message = public_message();

        // when:
        let entry: http::ChatHistoryEntryDto = message.into();

        // then:
        assert_eq!(entry.sender_username, "alice");
        assert!(!entry.is_private);
        assert!(entry.timestamp.starts_with("2023-01-01T00:00:00"));
    }
}
