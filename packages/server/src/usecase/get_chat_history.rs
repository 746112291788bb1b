//! UseCase: chat history retrieval for the REST layer.
//!
//! History is asymmetric with live delivery: live delivery includes
//! private messages (to their two parties), history never does.

use std::sync::Arc;

use crate::domain::{ChatMessage, ChatMessageRepository, RepositoryError, RoomId};

/// Number of history entries served per room.
const HISTORY_LIMIT: usize = 50;

pub struct GetChatHistoryUseCase {
    chat_repository: Arc<dyn ChatMessageRepository>,
}

impl GetChatHistoryUseCase {
    pub fn new(chat_repository: Arc<dyn ChatMessageRepository>) -> Self {
        Self { chat_repository }
    }

    /// The most recent 50 public messages of a room, oldest first.
    pub async fn execute(&self, room_id: RoomId) -> Result<Vec<ChatMessage>, RepositoryError> {
        self.chat_repository
            .recent_public(&room_id, HISTORY_LIMIT)
            .await
    }
}
