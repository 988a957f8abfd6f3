//! Chat message value objects.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::ValidationError;

/// Longest accepted username; longer input is cut to this many characters.
pub const MAX_USERNAME_CHARS: usize = 20;

/// Longest accepted message body; longer input is cut to this many characters.
pub const MAX_BODY_CHARS: usize = 500;

fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// Unique message identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Name the local user chose when joining a room
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Username(String);

impl Username {
    /// Trim and validate a username.
    ///
    /// Blank input is rejected; input longer than [`MAX_USERNAME_CHARS`] is cut.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        Ok(Self(truncate_chars(trimmed, MAX_USERNAME_CHARS)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text of a message typed by the local user
///
/// Kept as entered up to [`MAX_BODY_CHARS`]; only the emptiness check looks
/// at the trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody(String);

impl MessageBody {
    /// Cut to the length limit, then reject text that is blank after the cut.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let body = truncate_chars(raw, MAX_BODY_CHARS);
        if body.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(Self(body))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Room announcements such as the welcome line
    System,
    /// Typed by the local user
    Local,
    /// Generated by the synthetic activity timer
    Simulated,
}

/// A single entry of a room's history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub author: String,
    pub body: String,
    pub sent_at: Timestamp,
    /// Name of the city the room is bound to
    pub city: String,
    pub kind: MessageKind,
}

impl ChatMessage {
    pub fn new(
        kind: MessageKind,
        author: impl Into<String>,
        body: impl Into<String>,
        city: impl Into<String>,
        sent_at: Timestamp,
    ) -> Self {
        Self {
            id: MessageId::generate(),
            author: author.into(),
            body: body.into(),
            sent_at,
            city: city.into(),
            kind,
        }
    }
}
