//! Shared utilities for the noteroom workspace.
//!
//! Cross-cutting concerns used by the server (and any future client):
//! timestamp handling and logging setup.

pub mod logger;
pub mod time;
