//! WebSocket connection handler.
//!
//! Connection lifecycle: upgrading registers a delivery channel only — no
//! domain state exists until the client sends `join-room`. The transport
//! closing (gracefully or not) is the one and only cleanup trigger; it runs
//! the same departure flow as an explicit leave.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::domain::{ConnectionId, RoomId, Username};
use crate::infrastructure::dto::websocket::ClientEvent;
use crate::ui::state::AppState;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them
/// to the WebSocket sender.
///
/// This is the outbound half of a connection: events routed to this client
/// by the usecases arrive on `rx` and are written to the socket here.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    tracing::info!("Connection '{}' established", connection_id.as_str());

    // Create and register this connection's delivery channel
    let (tx, rx) = mpsc::unbounded_channel();
    state
        .message_pusher
        .register_client(connection_id.clone(), tx)
        .await;

    let (sender, mut receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender);

    let recv_state = Arc::clone(&state);
    let recv_connection_id = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!(
                        "WebSocket error on connection '{}': {}",
                        recv_connection_id.as_str(),
                        e
                    );
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    dispatch(&recv_state, &recv_connection_id, &text).await;
                }
                Message::Close(_) => {
                    tracing::info!(
                        "Connection '{}' requested close",
                        recv_connection_id.as_str()
                    );
                    break;
                }
                // Ping/pong is handled by the WebSocket protocol itself
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // The transport is gone: implicit leave, then drop the channel
    state.leave_room_usecase.execute(connection_id.clone()).await;
    state.message_pusher.unregister_client(&connection_id).await;
    tracing::info!("Connection '{}' closed", connection_id.as_str());
}

/// Parse one inbound event and hand it to its usecase.
///
/// Parsing is best-effort: an event that is not valid JSON or has an
/// unknown type is logged and dropped, never answered with an error event.
async fn dispatch(state: &Arc<AppState>, connection_id: &ConnectionId, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(
                "Dropping unparseable event from '{}': {}",
                connection_id.as_str(),
                e
            );
            return;
        }
    };

    match event {
        ClientEvent::JoinRoom(payload) => {
            state
                .join_room_usecase
                .execute(
                    connection_id.clone(),
                    RoomId::new(payload.room_id),
                    Username::new(payload.username),
                )
                .await;
        }
        ClientEvent::NoteUpdate(payload) => {
            state
                .update_note_usecase
                .execute(
                    connection_id.clone(),
                    RoomId::new(payload.room_id),
                    payload.content,
                )
                .await;
        }
        ClientEvent::ChatMessage(payload) => {
            state
                .send_chat_message_usecase
                .execute(connection_id.clone(), payload)
                .await;
        }
        ClientEvent::LeaveRoom => {
            state.leave_room_usecase.execute(connection_id.clone()).await;
        }
    }
}
