//! Repository implementations.

mod inmemory;

pub use inmemory::{InMemoryChatMessageRepository, InMemoryNoteRepository};
