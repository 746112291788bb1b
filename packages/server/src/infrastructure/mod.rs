//! Infrastructure layer.
//!
//! Concrete implementations of the domain interfaces (WebSocket delivery,
//! in-memory storage) and the wire-format DTOs.

pub mod dto;
pub mod message_pusher;
pub mod repository;
