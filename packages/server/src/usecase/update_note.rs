//! UseCase: note update.
//!
//! The latency/durability trade-off lives here: the room sees every update
//! immediately, the durable store catches up in the background. When a
//! durable write fails, only the originating connection is told; the
//! content the room already received is not retracted.

use std::sync::Arc;

use noteroom_shared::time::get_timestamp;

use crate::domain::{
    ConnectionId, MessagePusher, Note, NoteRepository, RoomId, RoomRegistry, Timestamp,
};
use crate::infrastructure::dto::websocket::ServerEvent;

pub struct UpdateNoteUseCase {
    registry: Arc<RoomRegistry>,
    note_repository: Arc<dyn NoteRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl UpdateNoteUseCase {
    pub fn new(
        registry: Arc<RoomRegistry>,
        note_repository: Arc<dyn NoteRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            registry,
            note_repository,
            message_pusher,
        }
    }

    /// Write the new content through to the room's note, issue the durable
    /// upsert, and broadcast `note-updated` to everyone in the room.
    ///
    /// Every update is an independent broadcast and an independent durable
    /// write; there is no coalescing. The write is detached and never
    /// awaited here.
    pub async fn execute(&self, origin: ConnectionId, room_id: RoomId, content: String) {
        let now = Timestamp::new(get_timestamp());
        let room = self.registry.room(&room_id).await;

        // Apply and fan out under the room's lock, so broadcasts leave in
        // the same order the updates were applied.
        let mut room = room.lock().await;
        let note = room.set_note(content, now);

        self.spawn_upsert(origin, room_id.clone(), note.clone());

        let payload = ServerEvent::NoteUpdated {
            content: note.content,
            last_edited: note.last_edited.value(),
        }
        .to_json();
        if let Err(e) = self
            .message_pusher
            .broadcast(room.member_ids(), &payload)
            .await
        {
            tracing::warn!(
                "Failed to broadcast note-updated for room '{}': {}",
                room_id.as_str(),
                e
            );
        }
    }

    /// Detached durable write. Failure is reported to the originating
    /// connection only.
    fn spawn_upsert(&self, origin: ConnectionId, room_id: RoomId, note: Note) {
        let repository = Arc::clone(&self.note_repository);
        let message_pusher = Arc::clone(&self.message_pusher);
        tokio::spawn(async move {
            if let Err(e) = repository.upsert(room_id.clone(), note).await {
                tracing::warn!(
                    "Failed to persist note for room '{}': {}",
                    room_id.as_str(),
                    e
                );
                let error = ServerEvent::Error {
                    message: "Failed to update note".to_string(),
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
