//! HTTP API response DTOs.
//!
//! Timestamps are rendered as RFC 3339 strings at this boundary; the
//! WebSocket events carry raw milliseconds instead.

use serde::Serialize;

/// Response body of `GET /api/notes/{room_id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    pub content: String,
    pub last_edited: String,
}

/// One entry in the response of `GET /api/chat/{room_id}`.
///
/// History is public-only, so no recipient fields appear here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryEntryDto {
    pub room_id: String,
    pub sender_id: String,
    pub sender_username: String,
    pub message: String,
    pub timestamp: String,
    pub is_private: bool,
}
