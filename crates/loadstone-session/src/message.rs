//! User-visible sort messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Informational note.
    Note,
    /// Something the user should look at.
    Warning,
    /// Something the user must fix.
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Note => f.write_str("note"),
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A user-visible message accumulated on a snapshot.
///
/// The sorter clears the accumulated messages only after a successful sort;
/// a failed sort leaves them untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The message severity.
    kind: MessageKind,
    /// The message text.
    text: String,
}

impl Message {
    /// Creates a message with the given severity.
    #[must_use]
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Creates an informational note.
    #[must_use]
    pub fn note(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Note, text)
    }

    /// Creates a warning.
    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Warning, text)
    }

    /// Creates an error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, text)
    }

    /// Returns the message severity.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
