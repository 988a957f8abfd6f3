//! Domain errors.
//!
//! These never reach the user as failures: the chat session turns them into
//! ignored input. They exist so the domain can say precisely why.

use thiserror::Error;

/// Invalid user input for a value object
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("username is empty")]
    EmptyUsername,

    #[error("message body is empty")]
    EmptyMessage,
}

/// Chat room state transitions that are not allowed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("local user has not joined the room")]
    NotJoined,

    #[error("local user already joined as '{0}'")]
    AlreadyJoined(String),

    #[error("room is closed")]
    Closed,
}
