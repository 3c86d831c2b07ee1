//! Error types for sort operations.

use thiserror::Error;

use loadstone_metadata::MetadataError;

/// Errors returned by a sort.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SortError {
    /// The constraint set is unsatisfiable; carries one offending cycle as
    /// an ordered list of plugin names.
    #[error("cyclic interaction between plugins: {}", .cycle.join(" -> "))]
    Cycle {
        /// The plugins forming the cycle, in edge order.
        cycle: Vec<String>,
    },

    /// A metadata record was malformed; detected before graph construction.
    #[error("invalid metadata: {0}")]
    InvalidMetadata(#[from] MetadataError),
}

impl SortError {
    /// Creates a new `Cycle` error.
    #[must_use]
    pub fn cycle(cycle: Vec<String>) -> Self {
        Self::Cycle { cycle }
    }

    /// Returns the offending cycle when this is a cycle error.
    #[must_use]
    pub fn cycle_path(&self) -> Option<&[String]> {
        match self {
            Self::Cycle { cycle } => Some(cycle),
            Self::InvalidMetadata(_) => None,
        }
    }
}
