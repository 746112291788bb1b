//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::domain::MessagePusher;
use crate::usecase::{
    GetChatHistoryUseCase, GetNoteUseCase, JoinRoomUseCase, LeaveRoomUseCase,
    SendChatMessageUseCase, UpdateNoteUseCase,
};

use super::{
    handler::{get_chat_history, get_note, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Collaborative notes coordination server.
///
/// Wraps the wired usecases and runs the axum application: one WebSocket
/// endpoint for the real-time session, plus the REST endpoints for note and
/// chat-history retrieval.
pub struct Server {
    join_room_usecase: Arc<JoinRoomUseCase>,
    update_note_usecase: Arc<UpdateNoteUseCase>,
    send_chat_message_usecase: Arc<SendChatMessageUseCase>,
    leave_room_usecase: Arc<LeaveRoomUseCase>,
    get_note_usecase: Arc<GetNoteUseCase>,
    get_chat_history_usecase: Arc<GetChatHistoryUseCase>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl Server {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        join_room_usecase: Arc<JoinRoomUseCase>,
        update_note_usecase: Arc<UpdateNoteUseCase>,
        send_chat_message_usecase: Arc<SendChatMessageUseCase>,
        leave_room_usecase: Arc<LeaveRoomUseCase>,
        get_note_usecase: Arc<GetNoteUseCase>,
        get_chat_history_usecase: Arc<GetChatHistoryUseCase>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            join_room_usecase,
            update_note_usecase,
            send_chat_message_usecase,
            leave_room_usecase,
            get_note_usecase,
            get_chat_history_usecase,
            message_pusher,
        }
    }

    /// Run the coordination server until a shutdown signal arrives.
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified
    /// address or if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            join_room_usecase: self.join_room_usecase,
            update_note_usecase: self.update_note_usecase,
            send_chat_message_usecase: self.send_chat_message_usecase,
            leave_room_usecase: self.leave_room_usecase,
            get_note_usecase: self.get_note_usecase,
            get_chat_history_usecase: self.get_chat_history_usecase,
            message_pusher: self.message_pusher,
        });

        let app = Router::new()
            // WebSocket endpoint
            .route("/ws", get(websocket_handler))
            // HTTP endpoints
            .route("/api/health", get(health_check))
            .route("/api/notes/{room_id}", get(get_note))
            .route("/api/chat/{room_id}", get(get_chat_history))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!(
            "Coordination server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
