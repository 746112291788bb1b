//! UseCase layer: one struct per operation.
//!
//! UseCases own each event flow end to end: they mutate live room state
//! through the registry, compute the delivery set, and hand outbound
//! events to the MessagePusher. Durable writes are issued as detached
//! tasks and never gate in-room delivery.

mod get_chat_history;
mod get_note;
mod join_room;
mod leave_room;
mod send_chat_message;
mod update_note;

pub use get_chat_history::GetChatHistoryUseCase;
pub use get_note::GetNoteUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use send_chat_message::SendChatMessageUseCase;
pub use update_note::UpdateNoteUseCase;
