//! Hard-constraint edge construction (classes 1–4).

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use loadstone_metadata::{FileRef, Locale, PluginMetadata, fold_name};
use loadstone_session::PluginSnapshot;

use crate::edge::EdgeClass;
use crate::error::SortError;
use crate::graph::SortGraph;

/// Tracing target for graph construction.
const BUILDER_TARGET: &str = "loadstone_sort::builder";

/// Builds the graph with its hard edges from a snapshot.
///
/// Metadata is merged and validated first; the four hard edge classes are
/// then added in their fixed order, iterating plugins by folded name and
/// per-plugin lists in declared order.
///
/// # Errors
///
/// Returns [`SortError::InvalidMetadata`] when a merged record is malformed.
pub(crate) fn build_graph(
    snapshot: &PluginSnapshot,
    locale: Locale,
) -> Result<SortGraph<'_>, SortError> {
    let mut graph = SortGraph::from_snapshot(snapshot, locale);
    for vertex in graph.vertices() {
        vertex.metadata().validate()?;
    }

    add_master_flag_edges(&mut graph);
    add_header_master_edges(&mut graph);
    add_load_after_edges(&mut graph);
    add_group_edges(&mut graph, snapshot);
    add_requirement_edges(&mut graph);
    debug!(
        target: BUILDER_TARGET,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "hard-constraint graph built"
    );
    Ok(graph)
}

/// Class 1: every master-flagged plugin precedes every non-master plugin.
fn add_master_flag_edges(graph: &mut SortGraph<'_>) {
    let order = graph.name_sorted_indices();
    let masters: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&vertex| graph.vertex(vertex).is_master())
        .collect();
    let regulars: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&vertex| !graph.vertex(vertex).is_master())
        .collect();
    for &master in &masters {
        for &regular in &regulars {
            graph.add_edge(master, regular, EdgeClass::MasterFlag);
        }
    }
}

/// Class 2: a plugin loads after every present plugin its header names.
fn add_header_master_edges(graph: &mut SortGraph<'_>) {
    for plugin in graph.name_sorted_indices() {
        let masters: Vec<String> = graph.vertex(plugin).record().masters().to_vec();
        for master in masters {
            match graph.index_of(&master) {
                Some(source) => {
                    graph.add_edge(source, plugin, EdgeClass::HeaderMaster);
                }
                None => debug!(
                    target: BUILDER_TARGET,
                    plugin = graph.vertex(plugin).record().name(),
                    master = master.as_str(),
                    "header master not present; skipping edge"
                ),
            }
        }
    }
}

/// Class 3: metadata `load_after` entries.
fn add_load_after_edges(graph: &mut SortGraph<'_>) {
    add_file_list_edges(graph, EdgeClass::LoadAfter, |vertex_files| {
        vertex_files.load_after().to_vec()
    });
}

/// Class 4: metadata requirements; same ordering effect as `load_after`.
fn add_requirement_edges(graph: &mut SortGraph<'_>) {
    add_file_list_edges(graph, EdgeClass::Requirement, |vertex_files| {
        vertex_files.requirements().to_vec()
    });
}

/// Adds one edge per present referenced plugin, in declared order.
fn add_file_list_edges(
    graph: &mut SortGraph<'_>,
    class: EdgeClass,
    files: impl Fn(&PluginMetadata) -> Vec<FileRef>,
) {
    for plugin in graph.name_sorted_indices() {
        let references = files(graph.vertex(plugin).metadata());
        for reference in references {
            match graph.index_of(reference.name()) {
                Some(source) => {
                    graph.add_edge(source, plugin, class);
                }
                None => debug!(
                    target: BUILDER_TARGET,
                    plugin = graph.vertex(plugin).record().name(),
                    reference = reference.name(),
                    %class,
                    "referenced plugin not present; skipping edge"
                ),
            }
        }
    }
}

/// Class 3, group form: a plugin loads after every present member of every
/// group transitively before its own.
fn add_group_edges(graph: &mut SortGraph<'_>, snapshot: &PluginSnapshot) {
    let order = graph.name_sorted_indices();
    for &plugin in &order {
        let Some(group) = graph.vertex(plugin).metadata().group().map(fold_name) else {
            continue;
        };
        let predecessors = groups_before(snapshot, &group);
        if predecessors.is_empty() {
            continue;
        }
        for &member in &order {
            if member == plugin {
                continue;
            }
            let in_predecessor_group = graph
                .vertex(member)
                .metadata()
                .group()
                .is_some_and(|name| predecessors.contains(&fold_name(name)));
            if in_predecessor_group {
                graph.add_edge(member, plugin, EdgeClass::LoadAfter);
            }
        }
    }
}

/// Returns the folded names of every group transitively `after`-reachable
/// from `group`. Missing definitions end the walk silently.
fn groups_before(snapshot: &PluginSnapshot, group: &str) -> HashSet<String> {
    let mut before = HashSet::new();
    let mut queue = VecDeque::new();
    match snapshot.group_definition(group) {
        Some(definition) => {
            queue.extend(definition.after().iter().map(|name| fold_name(name)));
        }
        None => debug!(
            target: BUILDER_TARGET,
            group,
            "group has no definition; skipping group edges"
        ),
    }
    while let Some(name) = queue.pop_front() {
        if !before.insert(name.clone()) {
            continue;
        }
        if let Some(definition) = snapshot.group_definition(&name) {
            queue.extend(definition.after().iter().map(|after| fold_name(after)));
        }
    }
    before
}
