//! Effective-priority propagation and priority edges (class 5).

use std::collections::VecDeque;

use tracing::debug;

use crate::edge::EdgeClass;
use crate::graph::SortGraph;

/// Tracing target for priority handling.
const PRIORITY_TARGET: &str = "loadstone_sort::priority";

/// Runs the inheritance fixpoint over the hard edges.
///
/// A plugin's effective priority is raised to the largest *positive*
/// effective priority among its ancestors; the global flag rides along with
/// the contributing value. Zero and negative priorities do not propagate: a
/// negative priority marks a plugin that loads early, and the zero defaults
/// of its masters must not erase it through the master-flag edges.
///
/// Worklist propagation is order-independent: the update is a monotone max,
/// so the fixpoint is unique however vertices are visited.
pub(crate) fn propagate_priorities(graph: &mut SortGraph<'_>) {
    let vertex_count = graph.vertex_count();
    let mut queued = vec![false; vertex_count];
    let mut queue: VecDeque<usize> = VecDeque::new();
    for vertex in 0..vertex_count {
        if graph.vertex(vertex).priority() > 0 {
            queued[vertex] = true;
            queue.push_back(vertex);
        }
    }

    while let Some(source) = queue.pop_front() {
        queued[source] = false;
        let priority = graph.vertex(source).priority();
        let is_global = graph.vertex(source).is_priority_global();
        if priority <= 0 {
            continue;
        }
        let successors: Vec<usize> = graph.out_neighbours(source).to_vec();
        for target in successors {
            let current = graph.vertex(target).priority();
            let current_global = graph.vertex(target).is_priority_global();
            let raised = priority > current;
            let widened = priority == current && is_global && !current_global;
            if !raised && !widened {
                continue;
            }
            graph
                .vertex_mut(target)
                .raise_priority(priority.max(current), is_global || current_global);
            debug!(
                target: PRIORITY_TARGET,
                plugin = graph.vertex(target).record().name(),
                from = graph.vertex(source).record().name(),
                priority,
                "inherited priority"
            );
            if !queued[target] {
                queued[target] = true;
                queue.push_back(target);
            }
        }
    }
}

/// Adds ordering edges between plugins whose effective priorities differ.
///
/// Master and non-master plugins never receive priority edges against each
/// other; the master-flag edges already order the classes, and a cross-class
/// edge could only contradict them. For same-class pairs an edge runs from
/// the lower effective priority to the higher when either priority is global
/// or the pair overlaps by record.
pub(crate) fn add_priority_edges(graph: &mut SortGraph<'_>) {
    let order = graph.name_sorted_indices();
    let mut added = 0_usize;
    for (position, &first) in order.iter().enumerate() {
        for &second in &order[position + 1..] {
            if graph.vertex(first).is_master() != graph.vertex(second).is_master() {
                continue;
            }
            let first_priority = graph.vertex(first).priority();
            let second_priority = graph.vertex(second).priority();
            if first_priority == second_priority {
                continue;
            }
            let applies = graph.vertex(first).is_priority_global()
                || graph.vertex(second).is_priority_global()
                || graph
                    .vertex(first)
                    .record()
                    .overlaps_with(graph.vertex(second).record());
            if !applies {
                continue;
            }
            let (source, target) = if first_priority < second_priority {
                (first, second)
            } else {
                (second, first)
            };
            if graph.add_edge(source, target, EdgeClass::Priority) {
                added += 1;
            }
        }
    }
    debug!(target: PRIORITY_TARGET, edges = added, "added priority edges");
}
