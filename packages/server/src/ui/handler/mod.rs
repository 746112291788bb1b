//! Endpoint handlers.

mod http;
mod websocket;

pub use http::{get_chat_history, get_note, health_check};
pub use websocket::websocket_handler;
