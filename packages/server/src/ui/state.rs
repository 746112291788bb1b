//! Shared application state.

use std::sync::Arc;

use crate::domain::MessagePusher;
use crate::usecase::{
    GetChatHistoryUseCase, GetNoteUseCase, JoinRoomUseCase, LeaveRoomUseCase,
    SendChatMessageUseCase, UpdateNoteUseCase,
};

/// State handed to every handler.
pub struct AppState {
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    pub update_note_usecase: Arc<UpdateNoteUseCase>,
    pub send_chat_message_usecase: Arc<SendChatMessageUseCase>,
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    pub get_note_usecase: Arc<GetNoteUseCase>,
    pub get_chat_history_usecase: Arc<GetChatHistoryUseCase>,
    /// Needed directly by the WebSocket handler to register and remove
    /// delivery channels on connect/disconnect.
    pub message_pusher: Arc<dyn MessagePusher>,
}
