//! Value objects of the coordination domain.
//!
//! Identifiers are opaque strings: connection ids are minted by the
//! transport layer, room ids and usernames are chosen by clients. The
//! server carries them verbatim and does not validate or authenticate them.

use uuid::Uuid;

/// Identity of one live connection, assigned at WebSocket upgrade time.
///
/// Clients echo connection ids back in chat events (`userId`,
/// `recipientId`); those echoes are wrapped as-is, so an id that no longer
/// maps to a live connection simply resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Wrap a raw id received on the wire.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Mint a fresh id for a newly upgraded connection.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Client-chosen room identifier.
///
/// Rooms exist implicitly the moment any participant joins; there is no
/// server-side creation step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Client-supplied display name. Not unique, not authenticated, and may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
