//! Real-time session coordination engine for collaborative notes.
//!
//! Participants join named rooms over WebSocket, edit one shared note per
//! room (last-write-wins) and exchange public or private chat messages.
//! State changes fan out to room members immediately; durable writes run
//! in the background and never gate delivery.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
