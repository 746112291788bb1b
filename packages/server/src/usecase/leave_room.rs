//! UseCase: participant departure.
//!
//! Covers both the explicit `leave-room` event and the implicit leave on
//! transport disconnect; the two paths are identical once the connection's
//! room binding is released.

use std::sync::Arc;

use tokio::sync::Mutex;

use noteroom_shared::time::get_timestamp;

use crate::domain::{ConnectionId, MessagePusher, Room, RoomRegistry, Timestamp};
use crate::infrastructure::dto::websocket::{RoomUser, ServerEvent};

pub struct LeaveRoomUseCase {
    registry: Arc<RoomRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl LeaveRoomUseCase {
    pub fn new(registry: Arc<RoomRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// Remove the connection from whatever room it is in and notify the
    /// remaining members. A connection that never joined a room is a
    /// no-op, not an error.
    pub async fn execute(&self, connection_id: ConnectionId) {
        let Some((room_id, room)) = self.registry.release(&connection_id).await else {
            tracing::debug!(
                "Connection '{}' disconnected without joining a room",
                connection_id.as_str()
            );
            return;
        };

        if announce_departure(self.message_pusher.as_ref(), &room, &connection_id).await {
            tracing::info!(
                "Connection '{}' left room '{}'",
                connection_id.as_str(),
                room_id.as_str()
            );
        }
    }
}

/// Remove `connection_id` from `room`, tell the remaining members who left,
/// and push them a refreshed roster.
///
/// The refreshed roster is the full remaining list (no self-exclusion);
/// only the roster a joiner receives excludes the receiver. Returns whether
/// a participant record was actually removed.
pub(crate) async fn announce_departure(
    message_pusher: &dyn MessagePusher,
    room: &Arc<Mutex<Room>>,
    connection_id: &ConnectionId,
) -> bool {
    let mut room = room.lock().await;
    let Some(participant) = room.remove_participant(connection_id) else {
        return false;
    };
    let now = Timestamp::new(get_timestamp());
    let remaining = room.member_ids();

    let left = ServerEvent::UserLeft {
        user_id: participant.id.as_str().to_string(),
        username: participant.username.as_str().to_string(),
        timestamp: now.value(),
    }
    .to_json();
    if let Err(e) = message_pusher.broadcast(remaining.clone(), &left).await {
        tracing::warn!("Failed to broadcast user-left: {}", e);
    }

    let roster = ServerEvent::RoomUsers {
        users: room.roster().iter().map(RoomUser::from).collect(),
    }
    .to_json();
    if let Err(e) = message_pusher.broadcast(remaining, &roster).await {
        tracing::warn!("Failed to broadcast refreshed roster: {}", e);
    }

    true
}
