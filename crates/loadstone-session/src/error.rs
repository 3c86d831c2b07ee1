//! Error types for snapshot construction.

use thiserror::Error;

/// Errors raised while building a plugin snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// Two records share a name under case-insensitive comparison.
    #[error("plugin '{name}' is already present in the snapshot")]
    DuplicatePlugin {
        /// The colliding plugin name.
        name: String,
    },

    /// The reader failed to produce a record for a plugin file.
    #[error("failed to read plugin '{name}': {message}")]
    ReadFailed {
        /// The plugin being read.
        name: String,
        /// Description of the failure.
        message: String,
    },
}

impl SessionError {
    /// Creates a new `DuplicatePlugin` error.
    #[must_use]
    pub fn duplicate_plugin(name: impl Into<String>) -> Self {
        Self::DuplicatePlugin { name: name.into() }
    }

    /// Creates a new `ReadFailed` error.
    #[must_use]
    pub fn read_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReadFailed {
            name: name.into(),
            message: message.into(),
        }
    }
}
