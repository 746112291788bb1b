//! UseCase: note retrieval for the REST layer.

use std::sync::Arc;

use noteroom_shared::time::get_timestamp;

use crate::domain::{Note, NoteRepository, RepositoryError, RoomId, Timestamp};

pub struct GetNoteUseCase {
    note_repository: Arc<dyn NoteRepository>,
}

impl GetNoteUseCase {
    pub fn new(note_repository: Arc<dyn NoteRepository>) -> Self {
        Self { note_repository }
    }

    /// Fetch the persisted note of a room. A room that never saved a note
    /// reads as an empty note stamped with the current time.
    pub async fn execute(&self, room_id: RoomId) -> Result<Note, RepositoryError> {
        let found = self.note_repository.find(&room_id).await?;
        Ok(found
            .unwrap_or_else(|| Note::new(String::new(), Timestamp::new(get_timestamp()))))
    }
}
