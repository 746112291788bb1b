//! In-memory ChatMessageRepository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, ChatMessageRepository, RepositoryError, RoomId};

/// Chat history per room, in arrival order.
pub struct InMemoryChatMessageRepository {
    messages: Mutex<HashMap<RoomId, Vec<ChatMessage>>>,
}

impl InMemoryChatMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryChatMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatMessageRepository for InMemoryChatMessageRepository {
    async fn save(&self, message: ChatMessage) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages
            .entry(message.room_id.clone())
            .or_default()
            .push(message);
        Ok(())
    }

    async fn recent_public(
        &self,
        room_id: &RoomId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        let messages = self.messages.lock().await;
        let mut public: Vec<ChatMessage> = messages
            .get(room_id)
            .map(|room_messages| {
                room_messages
                    .iter()
                    .filter(|m| !m.is_private)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        public.sort_by_key(|m| m.timestamp);

        // Most recent `limit`, still in ascending order
        if public.len() > limit {
            public.drain(..public.len() - limit);
        }
        Ok(public)
    }
}
