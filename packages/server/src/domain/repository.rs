//! Repository trait definitions.
//!
//! Interfaces to the durable store for notes and chat history. The core
//! calls them from detached tasks and never blocks room delivery on their
//! completion; the in-memory state stays authoritative for real-time reads
//! regardless of what these calls do.

use async_trait::async_trait;

use super::entity::{ChatMessage, Note};
use super::error::RepositoryError;
use super::value_object::RoomId;

/// Durable store for the one logical note per room.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Idempotent upsert keyed by room id. The last write to complete
    /// determines the stored value.
    async fn upsert(&self, room_id: RoomId, note: Note) -> Result<(), RepositoryError>;

    /// Fetch the persisted note, `None` when nothing was saved yet.
    async fn find(&self, room_id: &RoomId) -> Result<Option<Note>, RepositoryError>;
}

/// Durable store for chat history.
#[async_trait]
pub trait ChatMessageRepository: Send + Sync {
    async fn save(&self, message: ChatMessage) -> Result<(), RepositoryError>;

    /// The most recent `limit` non-private messages of a room, in
    /// timestamp-ascending order. Private messages never appear in history.
    async fn recent_public(
        &self,
        room_id: &RoomId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, RepositoryError>;
}
