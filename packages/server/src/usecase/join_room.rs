//! UseCase: room join.

use std::sync::Arc;

use noteroom_shared::time::get_timestamp;

use crate::domain::{
    ConnectionId, MessagePusher, Participant, RoomId, RoomRegistry, Timestamp, Username,
};
use crate::infrastructure::dto::websocket::{RoomUser, ServerEvent};

use super::leave_room::announce_departure;

pub struct JoinRoomUseCase {
    registry: Arc<RoomRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    pub fn new(registry: Arc<RoomRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// Register the connection in the room, announce it room-wide
    /// (including to the joiner), and send the joiner the current roster
    /// of everyone else.
    ///
    /// A connection can only be in one room: joining while still in
    /// another room completes the departure from the old room first, so no
    /// stale membership entry is left behind. Rejoining the same room
    /// replaces the participant record in place.
    pub async fn execute(&self, connection_id: ConnectionId, room_id: RoomId, username: Username) {
        let assignment = self.registry.assign(&connection_id, &room_id).await;

        if let Some((old_room_id, old_room)) = assignment.displaced {
            if announce_departure(self.message_pusher.as_ref(), &old_room, &connection_id).await {
                tracing::info!(
                    "Connection '{}' migrated from room '{}' to '{}'",
                    connection_id.as_str(),
                    old_room_id.as_str(),
                    room_id.as_str()
                );
            }
        }

        let now = Timestamp::new(get_timestamp());
        let mut room = assignment.room.lock().await;
        room.add_participant(Participant::new(connection_id.clone(), username.clone()));

        // Room-wide announcement, joiner included
        let joined = ServerEvent::UserJoined {
            user_id: connection_id.as_str().to_string(),
            username: username.as_str().to_string(),
            timestamp: now.value(),
        }
        .to_json();
        if let Err(e) = self
            .message_pusher
            .broadcast(room.member_ids(), &joined)
            .await
        {
            tracing::warn!("Failed to broadcast user-joined: {}", e);
        }

        // Roster for the joiner only, without the joiner itself
        let users: Vec<RoomUser> = room
            .roster()
            .iter()
            .filter(|p| p.id != connection_id)
            .map(RoomUser::from)
            .collect();
        let roster = ServerEvent::RoomUsers { users }.to_json();
        if let Err(e) = self.message_pusher.push_to(&connection_id, &roster).await {
            tracing::warn!(
                "Failed to send roster to '{}': {}",
                connection_id.as_str(),
                e
            );
        }

        tracing::info!(
            "Connection '{}' joined room '{}' as '{}'",
            connection_id.as_str(),
            room_id.as_str(),
            username.as_str()
        );
    }
}
