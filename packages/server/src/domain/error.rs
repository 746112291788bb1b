//! Domain error types.

use thiserror::Error;

/// Failure of the durable store. Never fatal: persistence errors are
/// reported to the originating connection only and never interrupt in-room
/// delivery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Failure to deliver to a connection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessagePushError {
    #[error("client '{0}' not found")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}
