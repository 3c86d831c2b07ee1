//! Tests for [`MetadataList`].

use crate::{FileRef, GroupDefinition, MetadataList, PluginMetadata};

#[test]
fn lookup_is_case_insensitive() {
    let mut list = MetadataList::new();
    list.add_plugin(PluginMetadata::new("Blank.esp").with_priority(1));

    let found = list.plugin("BLANK.ESP").expect("record present");
    assert_eq!(found.name(), "Blank.esp");
    assert_eq!(found.priority(), 1);
    assert!(list.plugin("Other.esp").is_none());
}

#[test]
fn adding_twice_merges_records() {
    let mut list = MetadataList::new();
    list.add_plugin(PluginMetadata::new("Blank.esp").with_load_after([FileRef::new("A.esp")]));
    list.add_plugin(
        PluginMetadata::new("blank.esp")
            .with_priority(7)
            .with_load_after([FileRef::new("B.esp")]),
    );

    assert_eq!(list.plugin_count(), 1);
    let merged = list.plugin("Blank.esp").expect("record present");
    assert_eq!(merged.priority(), 7);
    let names: Vec<&str> = merged.load_after().iter().map(FileRef::name).collect();
    assert_eq!(names, ["A.esp", "B.esp"]);
}

#[test]
fn groups_are_stored_and_replaced() {
    let mut list = MetadataList::new();
    list.add_group(GroupDefinition::new("Late").with_after(["Early"]));
    list.add_group(GroupDefinition::new("late").with_after(["Middle"]));

    let group = list.group("LATE").expect("group present");
    assert_eq!(group.after(), ["Middle"]);
    assert_eq!(list.groups().count(), 1);
}

#[test]
fn empty_list_reports_empty() {
    let list = MetadataList::new();
    assert!(list.is_empty());
    assert_eq!(list.plugin_count(), 0);
}
