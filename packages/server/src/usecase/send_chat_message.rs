//! UseCase: chat message routing.
//!
//! Public messages fan out to the sender's room; private messages go to
//! exactly the sender and the addressed connection. Either way the message
//! is handed to the durable store in the background, and delivery never
//! waits for that write.

use std::sync::Arc;

use noteroom_shared::time::get_timestamp;

use crate::domain::{
    ChatMessage, ChatMessageRepository, ConnectionId, MessagePushError, MessagePusher, RoomId,
    RoomRegistry, Timestamp, Username,
};
use crate::infrastructure::dto::websocket::{ChatMessagePayload, ServerEvent};

pub struct SendChatMessageUseCase {
    registry: Arc<RoomRegistry>,
    chat_repository: Arc<dyn ChatMessageRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl SendChatMessageUseCase {
    pub fn new(
        registry: Arc<RoomRegistry>,
        chat_repository: Arc<dyn ChatMessageRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            registry,
            chat_repository,
            message_pusher,
        }
    }

    /// Route one chat message from `origin`.
    ///
    /// Senders validate before emitting; messages that are empty after
    /// trimming are dropped here anyway, silently. A private message whose
    /// recipient is no longer connected still reaches the sender and still
    /// gets stored, with no recipient username and no error surfaced.
    pub async fn execute(&self, origin: ConnectionId, payload: ChatMessagePayload) {
        if payload.message.trim().is_empty() {
            tracing::warn!(
                "Dropping empty chat message from connection '{}'",
                origin.as_str()
            );
            return;
        }

        let room_id = RoomId::new(payload.room_id);
        let is_private = payload.is_private;
        let recipient_id = payload.recipient_id.map(ConnectionId::new);

        // Resolve the recipient's username now and freeze it on the
        // message; it is not updated if the recipient later leaves or
        // renames.
        let recipient_username = match &recipient_id {
            Some(id) => self.registry.resolve_username(id).await,
            None => None,
        };

        let message = ChatMessage {
            room_id: room_id.clone(),
            sender_id: ConnectionId::new(payload.user_id),
            sender_username: Username::new(payload.username),
            message: payload.message,
            timestamp: Timestamp::new(get_timestamp()),
            is_private,
            recipient_id: recipient_id.clone(),
            recipient_username,
        };

        let event = ServerEvent::from(&message).to_json();

        self.spawn_save(origin.clone(), message);

        if is_private {
            if let Some(recipient) = recipient_id {
                self.deliver_private(&origin, &recipient, &event).await;
                return;
            }
            // A private flag without a recipient falls back to room-wide
            // delivery (observed behavior).
        }

        let room = self.registry.room(&room_id).await;
        let targets = room.lock().await.member_ids();
        if let Err(e) = self.message_pusher.broadcast(targets, &event).await {
            tracing::warn!(
                "Failed to broadcast chat message in room '{}': {}",
                room_id.as_str(),
                e
            );
        }
    }

    /// Private delivery: the sender's connection and the addressed one,
    /// nobody else. An unresolved recipient is skipped without an error
    /// event.
    async fn deliver_private(&self, origin: &ConnectionId, recipient: &ConnectionId, event: &str) {
        if let Err(e) = self.message_pusher.push_to(origin, event).await {
            tracing::warn!(
                "Failed to deliver private message to sender '{}': {}",
                origin.as_str(),
                e
            );
        }
        match self.message_pusher.push_to(recipient, event).await {
            Ok(()) => {}
            Err(MessagePushError::ClientNotFound(id)) => {
                tracing::debug!("Private message recipient '{}' is not connected", id);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to deliver private message to '{}': {}",
                    recipient.as_str(),
                    e
                );
            }
        }
    }

    /// Detached durable write. Failure is reported to the sender only;
    /// the message was already delivered in-room regardless.
    fn spawn_save(&self, origin: ConnectionId, message: ChatMessage) {
        let repository = Arc::clone(&self.chat_repository);
        let message_pusher = Arc::clone(&self.message_pusher);
        tokio::spawn(async move {
            if let Err(e) = repository.save(message).await {
                tracing::warn!("Failed to persist chat message: {}", e);
                let error = ServerEvent::Error {
                    message: "Failed to send message".to_string(),
                }
                .to_json();
                if let Err(push_err) = message_pusher.push_to(&origin, &error).await {
                    tracing::debug!(
                        "Could not report persistence failure to '{}': {}",
                        origin.as_str(),
                        push_err
                    );
                }
            }
        });
    }
}
