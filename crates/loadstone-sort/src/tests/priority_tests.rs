//! Tests for priority propagation and priority edges.

use loadstone_metadata::{FileRef, Locale, PluginMetadata};
use loadstone_session::PluginRecord;

use crate::builder::build_graph;
use crate::edge::EdgeClass;
use crate::graph::SortGraph;
use crate::priority::{add_priority_edges, propagate_priorities};
use crate::tests::support::{ids, snapshot_of};

fn effective_priority(graph: &SortGraph<'_>, name: &str) -> (i32, bool) {
    let vertex = graph.index_of(name).expect("vertex");
    (
        graph.vertex(vertex).priority(),
        graph.vertex(vertex).is_priority_global(),
    )
}

fn priority_edges(graph: &SortGraph<'_>) -> Vec<(String, String)> {
    graph
        .edges()
        .iter()
        .filter(|edge| edge.class() == EdgeClass::Priority)
        .map(|edge| {
            (
                graph.vertex(edge.source()).record().name().to_owned(),
                graph.vertex(edge.target()).record().name().to_owned(),
            )
        })
        .collect()
}

#[test]
fn positive_priorities_inherit_transitively() {
    let mut snapshot = snapshot_of([
        PluginRecord::new("M.esm").with_master_flag(true),
        PluginRecord::new("A.esp"),
        PluginRecord::new("B.esp"),
        PluginRecord::new("C.esp"),
    ]);
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("A.esp").with_priority(2));
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("B.esp").with_load_after([FileRef::new("A.esp")]));
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("C.esp").with_load_after([FileRef::new("B.esp")]));

    let mut graph = build_graph(&snapshot, Locale::English).expect("valid metadata");
    propagate_priorities(&mut graph);

    assert_eq!(effective_priority(&graph, "A.esp"), (2, false));
    assert_eq!(effective_priority(&graph, "B.esp"), (2, false));
    assert_eq!(effective_priority(&graph, "C.esp"), (2, false));
    // The master's default 0 never overrides an inherited value.
    assert_eq!(effective_priority(&graph, "M.esm"), (0, false));
}

#[test]
fn negative_priorities_survive_master_defaults() {
    let mut snapshot = snapshot_of([
        PluginRecord::new("M.esm").with_master_flag(true),
        PluginRecord::new("P.esp"),
    ]);
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("P.esp").with_global_priority(-100_000));

    let mut graph = build_graph(&snapshot, Locale::English).expect("valid metadata");
    propagate_priorities(&mut graph);

    // The master-flag edge from M.esm carries priority 0, which must not
    // erase the declared negative value.
    assert_eq!(effective_priority(&graph, "P.esp"), (-100_000, true));
}

#[test]
fn global_flag_rides_with_the_inherited_value() {
    let mut snapshot = snapshot_of([PluginRecord::new("A.esp"), PluginRecord::new("B.esp")]);
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("A.esp").with_global_priority(2));
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("B.esp").with_load_after([FileRef::new("A.esp")]));

    let mut graph = build_graph(&snapshot, Locale::English).expect("valid metadata");
    propagate_priorities(&mut graph);

    assert_eq!(effective_priority(&graph, "B.esp"), (2, true));
}

#[test]
fn non_global_priorities_only_order_overlapping_plugins() {
    let mut snapshot = snapshot_of([
        PluginRecord::new("A.esp").with_form_ids(ids([1, 2])),
        PluginRecord::new("B.esp").with_form_ids(ids([3])),
        PluginRecord::new("C.esp").with_form_ids(ids([2, 9])),
    ]);
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("A.esp").with_priority(5));

    let mut graph = build_graph(&snapshot, Locale::English).expect("valid metadata");
    propagate_priorities(&mut graph);
    add_priority_edges(&mut graph);

    // A overlaps C (record 2) but not B.
    assert_eq!(
        priority_edges(&graph),
        [("C.esp".to_owned(), "A.esp".to_owned())]
    );
}

#[test]
fn a_single_global_priority_orders_the_whole_class() {
    let mut snapshot = snapshot_of([PluginRecord::new("A.esp"), PluginRecord::new("B.esp")]);
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("B.esp").with_global_priority(1));

    let mut graph = build_graph(&snapshot, Locale::English).expect("valid metadata");
    propagate_priorities(&mut graph);
    add_priority_edges(&mut graph);

    // Lower effective priority loads first.
    assert_eq!(
        priority_edges(&graph),
        [("A.esp".to_owned(), "B.esp".to_owned())]
    );
}

#[test]
fn masters_and_regulars_never_receive_priority_edges() {
    let mut snapshot = snapshot_of([
        PluginRecord::new("M.esm").with_master_flag(true),
        PluginRecord::new("P.esp"),
    ]);
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("P.esp").with_global_priority(-100_000));

    let mut graph = build_graph(&snapshot, Locale::English).expect("valid metadata");
    propagate_priorities(&mut graph);
    add_priority_edges(&mut graph);

    // A cross-class edge would contradict the master-flag edge and force a
    // cycle; only the master-flag edge may exist.
    assert!(priority_edges(&graph).is_empty());
}

#[test]
fn equal_effective_priorities_add_no_edge() {
    let mut snapshot = snapshot_of([PluginRecord::new("A.esp"), PluginRecord::new("B.esp")]);
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("A.esp").with_global_priority(3));
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("B.esp").with_global_priority(3));

    let mut graph = build_graph(&snapshot, Locale::English).expect("valid metadata");
    propagate_priorities(&mut graph);
    add_priority_edges(&mut graph);

    assert!(priority_edges(&graph).is_empty());
}
