//! Constraint graph edges.

use std::fmt;

/// The constraint class that produced an edge.
///
/// Classes are added to the graph in declaration order; the first four are
/// hard constraints present before priority propagation, the last two are
/// derived afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeClass {
    /// A master-flagged plugin precedes every non-master plugin.
    MasterFlag,
    /// The target names the source in its file header masters.
    HeaderMaster,
    /// The target's metadata loads it after the source (including group
    /// membership).
    LoadAfter,
    /// The target's metadata requires the source.
    Requirement,
    /// The source's effective priority is lower than the target's.
    Priority,
    /// Record-overlap tie-break from the heavier overrider to the lighter.
    Overlap,
}

impl fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MasterFlag => "master_flag",
            Self::HeaderMaster => "header_master",
            Self::LoadAfter => "load_after",
            Self::Requirement => "requirement",
            Self::Priority => "priority",
            Self::Overlap => "overlap",
        };
        f.write_str(label)
    }
}

/// A directed ordering constraint: the source loads before the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    /// Index of the plugin that loads first.
    source: usize,
    /// Index of the plugin that loads after it.
    target: usize,
    /// The constraint class that produced the edge.
    class: EdgeClass,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub(crate) const fn new(source: usize, target: usize, class: EdgeClass) -> Self {
        Self {
            source,
            target,
            class,
        }
    }

    /// Returns the index of the plugin that loads first.
    #[must_use]
    pub(crate) const fn source(&self) -> usize {
        self.source
    }

    /// Returns the index of the plugin that loads after the source.
    #[must_use]
    pub(crate) const fn target(&self) -> usize {
        self.target
    }

    /// Returns the constraint class that produced the edge.
    #[must_use]
    pub(crate) const fn class(&self) -> EdgeClass {
        self.class
    }
}
