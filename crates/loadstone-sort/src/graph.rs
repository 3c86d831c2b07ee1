//! The per-sort constraint graph.
//!
//! Vertices are snapshot indices into a dense table built once per sort;
//! each vertex borrows its [`PluginRecord`] and owns the merged metadata and
//! the effective-priority slot. The graph lives for the duration of one sort
//! call and is discarded afterwards.

use std::collections::{HashMap, VecDeque};

use loadstone_metadata::{Locale, PluginMetadata, fold_name};
use loadstone_session::{PluginRecord, PluginSnapshot};

use crate::edge::{Edge, EdgeClass};

/// A plugin vertex: the borrowed record plus per-sort derived state.
#[derive(Debug)]
pub(crate) struct Vertex<'a> {
    /// The snapshot record.
    record: &'a PluginRecord,
    /// Folded name, computed once.
    folded_name: String,
    /// Merged masterlist/userlist metadata.
    metadata: PluginMetadata,
    /// Position in the current load order.
    position: usize,
    /// Effective priority; starts at the declared value.
    priority: i32,
    /// Whether the effective priority is global.
    priority_is_global: bool,
}

impl<'a> Vertex<'a> {
    /// Returns the snapshot record.
    #[must_use]
    pub(crate) const fn record(&self) -> &'a PluginRecord {
        self.record
    }

    /// Returns the folded plugin name.
    #[must_use]
    pub(crate) fn folded_name(&self) -> &str {
        &self.folded_name
    }

    /// Returns the merged metadata.
    #[must_use]
    pub(crate) const fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    /// Returns the current load-order position.
    #[must_use]
    pub(crate) const fn position(&self) -> usize {
        self.position
    }

    /// Returns the effective priority.
    #[must_use]
    pub(crate) const fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns whether the effective priority is global.
    #[must_use]
    pub(crate) const fn is_priority_global(&self) -> bool {
        self.priority_is_global
    }

    /// Raises the effective priority. Monotone: propagation never lowers it.
    pub(crate) fn raise_priority(&mut self, priority: i32, is_global: bool) {
        self.priority = priority;
        self.priority_is_global = is_global;
    }

    /// Returns whether the plugin is flagged as a master file.
    #[must_use]
    pub(crate) const fn is_master(&self) -> bool {
        self.record.is_master()
    }
}

/// The constraint graph for one sort call.
#[derive(Debug)]
pub(crate) struct SortGraph<'a> {
    /// Vertices in load order.
    vertices: Vec<Vertex<'a>>,
    /// All edges, in insertion order.
    edges: Vec<Edge>,
    /// Out-neighbour adjacency lists, parallel to `vertices`.
    out: Vec<Vec<usize>>,
    /// Folded name to vertex index.
    index: HashMap<String, usize>,
}

impl<'a> SortGraph<'a> {
    /// Builds the vertex table from a snapshot, merging metadata per plugin.
    ///
    /// No edges are present yet; the builder adds them in class order.
    #[must_use]
    pub(crate) fn from_snapshot(snapshot: &'a PluginSnapshot, locale: Locale) -> Self {
        let mut vertices = Vec::with_capacity(snapshot.len());
        let mut index = HashMap::with_capacity(snapshot.len());
        for (position, record) in snapshot.plugins().iter().enumerate() {
            let metadata = snapshot.effective_metadata(record.name());
            let folded_name = locale.fold(record.name());
            index.insert(folded_name.clone(), position);
            vertices.push(Vertex {
                record,
                folded_name,
                priority: metadata.priority(),
                priority_is_global: metadata.is_priority_global(),
                metadata,
                position,
            });
        }
        let out = vec![Vec::new(); vertices.len()];
        Self {
            vertices,
            edges: Vec::new(),
            out,
            index,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub(crate) fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertex at `index`.
    #[must_use]
    pub(crate) fn vertex(&self, index: usize) -> &Vertex<'a> {
        &self.vertices[index]
    }

    /// Returns the vertex at `index` for modification.
    pub(crate) fn vertex_mut(&mut self, index: usize) -> &mut Vertex<'a> {
        &mut self.vertices[index]
    }

    /// Returns all vertices in load order.
    #[must_use]
    pub(crate) fn vertices(&self) -> &[Vertex<'a>] {
        &self.vertices
    }

    /// Returns all edges in insertion order.
    #[must_use]
    pub(crate) fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the index of the named plugin, folding the name first.
    #[must_use]
    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(&fold_name(name)).copied()
    }

    /// Returns vertex indices ordered by folded name.
    #[must_use]
    pub(crate) fn name_sorted_indices(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.vertices.len()).collect();
        order.sort_by(|&a, &b| self.vertices[a].folded_name.cmp(&self.vertices[b].folded_name));
        order
    }

    /// Returns the out-neighbours of `vertex`.
    #[must_use]
    pub(crate) fn out_neighbours(&self, vertex: usize) -> &[usize] {
        &self.out[vertex]
    }

    /// Adds an edge unless one already links `source` to `target`.
    ///
    /// Self-edges are never added. Returns whether an edge was inserted.
    pub(crate) fn add_edge(&mut self, source: usize, target: usize, class: EdgeClass) -> bool {
        if source == target || self.has_edge(source, target) {
            return false;
        }
        self.out[source].push(target);
        self.edges.push(Edge::new(source, target, class));
        true
    }

    /// Returns whether an edge links `source` directly to `target`.
    #[must_use]
    pub(crate) fn has_edge(&self, source: usize, target: usize) -> bool {
        self.out[source].contains(&target)
    }

    /// Returns whether `target` is reachable from `source`.
    ///
    /// Breadth-first; vertex counts are small enough that a per-query search
    /// beats maintaining a transitive closure.
    #[must_use]
    pub(crate) fn path_exists(&self, source: usize, target: usize) -> bool {
        if source == target {
            return true;
        }
        let mut visited = vec![false; self.vertices.len()];
        visited[source] = true;
        let mut queue = VecDeque::from([source]);
        while let Some(vertex) = queue.pop_front() {
            for &next in &self.out[vertex] {
                if next == target {
                    return true;
                }
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Returns the in-degree of every vertex.
    #[must_use]
    pub(crate) fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertices.len()];
        for targets in &self.out {
            for &target in targets {
                degrees[target] += 1;
            }
        }
        degrees
    }
}
