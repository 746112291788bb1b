//! In-memory NoteRepository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Note, NoteRepository, RepositoryError, RoomId};

/// One note per room, kept in a HashMap.
pub struct InMemoryNoteRepository {
    notes: Mutex<HashMap<RoomId, Note>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self {
            notes: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn upsert(&self, room_id: RoomId, note: Note) -> Result<(), RepositoryError> {
        let mut notes = self.notes.lock().await;
        notes.insert(room_id, note);
        Ok(())
    }

    async fn find(&self, room_id: &RoomId) -> Result<Option<Note>, RepositoryError> {
        let notes = self.notes.lock().await;
        Ok(notes.get(room_id).cloned())
    }
}
