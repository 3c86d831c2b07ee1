//! Sort orchestration.

use tracing::{debug, info};

use loadstone_metadata::Locale;
use loadstone_session::PluginSnapshot;

use crate::builder;
use crate::error::SortError;
use crate::overlap;
use crate::priority;
use crate::topo;

/// Tracing target for sort orchestration.
const SORTER_TARGET: &str = "loadstone_sort::sorter";

/// Computes a total load order for a plugin snapshot.
///
/// The sorter holds no state between calls; the graph it builds lives only
/// for the duration of one [`sort`](Self::sort). A failed sort leaves the
/// snapshot — including its accumulated messages — exactly as it found it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PluginSorter;

impl PluginSorter {
    /// Creates a sorter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Sorts the snapshot's plugins into a total load order.
    ///
    /// On success the snapshot's accumulated messages are cleared (the sort
    /// supersedes diagnostics from earlier runs) and the order is returned
    /// with names in canonical case. An empty snapshot sorts to an empty
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidMetadata`] when a merged metadata record
    /// is malformed, and [`SortError::Cycle`] when the constraints admit no
    /// ordering. In both cases the snapshot's messages are preserved.
    pub fn sort(
        &self,
        snapshot: &mut PluginSnapshot,
        locale: Locale,
    ) -> Result<Vec<String>, SortError> {
        info!(
            target: SORTER_TARGET,
            plugins = snapshot.len(),
            locale = %locale,
            "sorting plugins"
        );
        let order = {
            let mut graph = builder::build_graph(snapshot, locale)?;
            priority::propagate_priorities(&mut graph);
            priority::add_priority_edges(&mut graph);
            overlap::add_overlap_edges(&mut graph);
            debug!(
                target: SORTER_TARGET,
                vertices = graph.vertex_count(),
                edges = graph.edge_count(),
                "constraint graph complete"
            );
            let order = topo::linearise(&graph)?;
            order
                .into_iter()
                .map(|vertex| graph.vertex(vertex).record().name().to_owned())
                .collect::<Vec<_>>()
        };
        // Only a completed sort may discard previously accumulated messages.
        snapshot.clear_messages();
        debug!(target: SORTER_TARGET, plugins = order.len(), "sort complete");
        Ok(order)
    }
}
