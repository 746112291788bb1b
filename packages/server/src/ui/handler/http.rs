//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::domain::RoomId;
use crate::infrastructure::dto::http::{ChatHistoryEntryDto, NoteDto};
use crate::ui::state::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get the persisted note of a room
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<NoteDto>, StatusCode> {
    match state.get_note_usecase.execute(RoomId::new(room_id)).await {
        Ok(note) => Ok(Json(note.into())),
        Err(e) => {
            tracing::error!("Failed to fetch note: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get the public chat history of a room
pub async fn get_chat_history(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<ChatHistoryEntryDto>>, StatusCode> {
    match state
        .get_chat_history_usecase
        .execute(RoomId::new(room_id))
        .await
    {
        Ok(messages) => Ok(Json(
            messages.into_iter().map(ChatHistoryEntryDto::from).collect(),
        )),
        Err(e) => {
            tracing::error!("Failed to fetch chat history: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
