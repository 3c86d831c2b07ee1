//! Tests for overlap tie-break edges.

use loadstone_metadata::{FileRef, Locale, PluginMetadata};
use loadstone_session::PluginRecord;

use crate::builder::build_graph;
use crate::edge::EdgeClass;
use crate::graph::SortGraph;
use crate::overlap::add_overlap_edges;
use crate::tests::support::{ids, snapshot_of};

fn overlap_edges(graph: &SortGraph<'_>) -> Vec<(String, String)> {
    graph
        .edges()
        .iter()
        .filter(|edge| edge.class() == EdgeClass::Overlap)
        .map(|edge| {
            (
                graph.vertex(edge.source()).record().name().to_owned(),
                graph.vertex(edge.target()).record().name().to_owned(),
            )
        })
        .collect()
}

#[test]
fn heavier_overrider_loads_first() {
    // Name order would put Early.esp first; the override count must win.
    let snapshot = snapshot_of([
        PluginRecord::new("Early.esp").with_form_ids(ids([1])),
        PluginRecord::new("Later.esp").with_form_ids(ids([1, 2, 3])),
    ]);
    let mut graph = build_graph(&snapshot, Locale::English).expect("valid metadata");
    add_overlap_edges(&mut graph);

    assert_eq!(
        overlap_edges(&graph),
        [("Later.esp".to_owned(), "Early.esp".to_owned())]
    );
}

#[test]
fn equal_override_counts_fall_back_to_name_order() {
    // Load order deliberately opposes name order: the folded-name tie-break
    // decides, so Alpha.esp loads first despite arriving second.
    let snapshot = snapshot_of([
        PluginRecord::new("Beta.esp").with_form_ids(ids([1, 2])),
        PluginRecord::new("Alpha.esp").with_form_ids(ids([1, 2])),
    ]);
    let mut graph = build_graph(&snapshot, Locale::English).expect("valid metadata");
    add_overlap_edges(&mut graph);

    assert_eq!(
        overlap_edges(&graph),
        [("Alpha.esp".to_owned(), "Beta.esp".to_owned())]
    );
}

#[test]
fn pairs_already_ordered_get_no_edge() {
    let mut snapshot = snapshot_of([
        PluginRecord::new("A.esp").with_form_ids(ids([1])),
        PluginRecord::new("B.esp").with_form_ids(ids([1])),
    ]);
    snapshot
        .userlist_mut()
        .add_plugin(PluginMetadata::new("B.esp").with_load_after([FileRef::new("A.esp")]));

    let mut graph = build_graph(&snapshot, Locale::English).expect("valid metadata");
    add_overlap_edges(&mut graph);

    assert!(overlap_edges(&graph).is_empty());
}

#[test]
fn disjoint_record_sets_get_no_edge() {
    let snapshot = snapshot_of([
        PluginRecord::new("A.esp").with_form_ids(ids([1])),
        PluginRecord::new("B.esp").with_form_ids(ids([2])),
    ]);
    let mut graph = build_graph(&snapshot, Locale::English).expect("valid metadata");
    add_overlap_edges(&mut graph);

    assert!(overlap_edges(&graph).is_empty());
}
