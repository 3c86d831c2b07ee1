//! Cycle-checked linearization.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::SortError;
use crate::graph::SortGraph;

/// Ordering key for ready vertices, most significant field first:
/// masters before non-masters, higher effective priority first, earlier
/// current load-order position first, folded name as the backstop.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ReadyKey {
    /// `false` for masters so they sort first.
    regular: bool,
    /// Negated effective priority; smaller means higher priority.
    negated_priority: i64,
    /// Current load-order position.
    position: usize,
    /// Folded plugin name.
    folded_name: String,
    /// The vertex the key belongs to.
    vertex: usize,
}

fn ready_key(graph: &SortGraph<'_>, vertex: usize) -> ReadyKey {
    let entry = graph.vertex(vertex);
    ReadyKey {
        regular: !entry.is_master(),
        negated_priority: -i64::from(entry.priority()),
        position: entry.position(),
        folded_name: entry.folded_name().to_owned(),
        vertex,
    }
}

/// Kahn-style linearization over the completed graph.
///
/// # Errors
///
/// Returns [`SortError::Cycle`] when the graph cannot be linearized,
/// carrying one recovered cycle as plugin names.
pub(crate) fn linearise(graph: &SortGraph<'_>) -> Result<Vec<usize>, SortError> {
    let vertex_count = graph.vertex_count();
    let mut in_degree = graph.in_degrees();
    let mut ready: BinaryHeap<Reverse<ReadyKey>> = (0..vertex_count)
        .filter(|&vertex| in_degree[vertex] == 0)
        .map(|vertex| Reverse(ready_key(graph, vertex)))
        .collect();

    let mut order = Vec::with_capacity(vertex_count);
    while let Some(Reverse(key)) = ready.pop() {
        let vertex = key.vertex;
        order.push(vertex);
        for &next in graph.out_neighbours(vertex) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push(Reverse(ready_key(graph, next)));
            }
        }
    }

    if order.len() == vertex_count {
        Ok(order)
    } else {
        Err(SortError::cycle(recover_cycle(graph, &in_degree)))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    OnPath,
    Done,
}

/// Recovers one cycle from the vertices the linearization could not emit.
///
/// Every stuck vertex still has an incoming edge from another stuck vertex,
/// so the stuck subgraph contains at least one cycle; a depth-first walk
/// from each stuck vertex in position order finds the first back edge.
fn recover_cycle(graph: &SortGraph<'_>, in_degree: &[usize]) -> Vec<String> {
    let stuck: Vec<bool> = in_degree.iter().map(|&degree| degree > 0).collect();
    let mut state = vec![VisitState::Unvisited; graph.vertex_count()];
    let mut path = Vec::new();
    for vertex in 0..graph.vertex_count() {
        if stuck[vertex] && state[vertex] == VisitState::Unvisited {
            if let Some(cycle) = walk(graph, vertex, &stuck, &mut state, &mut path) {
                return cycle;
            }
        }
    }
    Vec::new()
}

fn walk(
    graph: &SortGraph<'_>,
    vertex: usize,
    stuck: &[bool],
    state: &mut [VisitState],
    path: &mut Vec<usize>,
) -> Option<Vec<String>> {
    state[vertex] = VisitState::OnPath;
    path.push(vertex);
    for &next in graph.out_neighbours(vertex) {
        if !stuck[next] {
            continue;
        }
        match state[next] {
            VisitState::OnPath => {
                let start = path.iter().position(|&entry| entry == next).unwrap_or(0);
                return Some(
                    path[start..]
                        .iter()
                        .map(|&entry| graph.vertex(entry).record().name().to_owned())
                        .collect(),
                );
            }
            VisitState::Unvisited => {
                if let Some(cycle) = walk(graph, next, stuck, state, path) {
                    return Some(cycle);
                }
            }
            VisitState::Done => {}
        }
    }
    path.pop();
    state[vertex] = VisitState::Done;
    None
}
