//! Error types for metadata validation.

use thiserror::Error;

/// Errors raised when a metadata record is malformed.
///
/// Validation runs before graph construction; a failed record aborts the
/// sort without touching collaborator state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MetadataError {
    /// A record names the plugin itself in one of its file lists.
    #[error("metadata for '{plugin}' references the plugin itself in its {field} list")]
    SelfReference {
        /// The plugin the record belongs to.
        plugin: String,
        /// The offending list field.
        field: &'static str,
    },

    /// A declared priority falls outside the accepted range.
    #[error("metadata for '{plugin}' declares priority {value}, outside -{limit}..={limit}")]
    PriorityOutOfRange {
        /// The plugin the record belongs to.
        plugin: String,
        /// The declared priority.
        value: i32,
        /// The accepted magnitude.
        limit: i32,
    },
}

impl MetadataError {
    /// Creates a new `SelfReference` error.
    #[must_use]
    pub fn self_reference(plugin: impl Into<String>, field: &'static str) -> Self {
        Self::SelfReference {
            plugin: plugin.into(),
            field,
        }
    }

    /// Creates a new `PriorityOutOfRange` error.
    #[must_use]
    pub fn priority_out_of_range(plugin: impl Into<String>, value: i32, limit: i32) -> Self {
        Self::PriorityOutOfRange {
            plugin: plugin.into(),
            value,
            limit,
        }
    }
}
