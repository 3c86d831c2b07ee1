//! Record-overlap tie-break edges (class 6).

use tracing::debug;

use crate::edge::EdgeClass;
use crate::graph::SortGraph;

/// Tracing target for overlap analysis.
const OVERLAP_TARGET: &str = "loadstone_sort::overlap";

/// Adds tie-break edges between overlapping plugins the graph does not
/// already order.
///
/// For each overlapping unordered pair with no path in either direction, the
/// plugin overriding more records loads first; on equal counts the
/// lexicographically smaller folded name wins. Pairs are visited in folded
/// name order, so the edge set is deterministic even though earlier edges
/// can satisfy later pairs' reachability checks.
pub(crate) fn add_overlap_edges(graph: &mut SortGraph<'_>) {
    let order = graph.name_sorted_indices();
    let mut added = 0_usize;
    for (position, &first) in order.iter().enumerate() {
        for &second in &order[position + 1..] {
            let first_record = graph.vertex(first).record();
            let second_record = graph.vertex(second).record();
            if !first_record.overlaps_with(second_record) {
                continue;
            }
            if graph.path_exists(first, second) || graph.path_exists(second, first) {
                continue;
            }
            let (source, target) =
                if second_record.override_count() > first_record.override_count() {
                    (second, first)
                } else {
                    // Larger count wins; on a tie `first` sorts earlier by
                    // name and loads first.
                    (first, second)
                };
            if graph.add_edge(source, target, EdgeClass::Overlap) {
                added += 1;
                debug!(
                    target: OVERLAP_TARGET,
                    before = graph.vertex(source).record().name(),
                    after = graph.vertex(target).record().name(),
                    "added overlap tie-break edge"
                );
            }
        }
    }
    debug!(target: OVERLAP_TARGET, edges = added, "overlap analysis complete");
}
