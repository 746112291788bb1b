//! Real-time collaborative notes server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin noteroom-server
//! cargo run --bin noteroom-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;

use noteroom_server::{
    domain::RoomRegistry,
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryChatMessageRepository, InMemoryNoteRepository},
    },
    ui::Server,
    usecase::{
        GetChatHistoryUseCase, GetNoteUseCase, JoinRoomUseCase, LeaveRoomUseCase,
        SendChatMessageUseCase, UpdateNoteUseCase,
    },
};
use noteroom_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "noteroom-server")]
#[command(about = "Real-time collaborative notes server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "5000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger("info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repositories
    // 2. MessagePusher
    // 3. RoomRegistry
    // 4. UseCases
    // 5. Server

    // 1. Create repositories (in-memory stand-ins for the durable store)
    let note_repository = Arc::new(InMemoryNoteRepository::new());
    let chat_repository = Arc::new(InMemoryChatMessageRepository::new());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create the room registry (live presence and per-room state)
    let registry = Arc::new(RoomRegistry::new());

    // 4. Create UseCases
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let update_note_usecase = Arc::new(UpdateNoteUseCase::new(
        registry.clone(),
        note_repository.clone(),
        message_pusher.clone(),
    ));
    let send_chat_message_usecase = Arc::new(SendChatMessageUseCase::new(
        registry.clone(),
        chat_repository.clone(),
        message_pusher.clone(),
    ));
    let leave_room_usecase = Arc::new(LeaveRoomUseCase::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let get_note_usecase = Arc::new(GetNoteUseCase::new(note_repository.clone()));
    let get_chat_history_usecase = Arc::new(GetChatHistoryUseCase::new(chat_repository.clone()));

    // 5. Create and run the server
    let server = Server::new(
        join_room_usecase,
        update_note_usecase,
        send_chat_message_usecase,
        leave_room_usecase,
        get_note_usecase,
        get_chat_history_usecase,
        message_pusher,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
