//! MessagePusher trait definition.
//!
//! The interface the domain requires for outbound delivery. Sending is
//! fire-and-forget per target: a push enqueues onto the target connection's
//! channel and never waits for the socket, so a slow or dead connection
//! cannot stall delivery to others.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::MessagePushError;
use super::value_object::ConnectionId;

/// Per-connection delivery channel, created by the transport layer at
/// upgrade time.
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register a connection's delivery channel.
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// Remove a connection's delivery channel.
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// Deliver to a single connection. Fails with
    /// [`MessagePushError::ClientNotFound`] when the connection is gone.
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError>;

    /// Deliver to a set of connections. Individual failures are tolerated;
    /// targets that are gone are skipped.
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
