//! Tests for the concurrent snapshot loader.

use std::collections::{HashMap, HashSet};

use rstest::rstest;

use loadstone_metadata::fold_name;

use crate::loader::partition_by_size;
use crate::{FormId, PluginEntry, PluginReader, PluginRecord, SessionError, load_snapshot};

/// A reader backed by prepared records, with an optional failure set.
struct StubReader {
    records: HashMap<String, PluginRecord>,
    failing: HashSet<String>,
}

impl StubReader {
    fn new(records: impl IntoIterator<Item = PluginRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.folded_name(), record))
                .collect(),
            failing: HashSet::new(),
        }
    }

    fn failing_on(mut self, name: &str) -> Self {
        self.failing.insert(fold_name(name));
        self
    }
}

impl PluginReader for StubReader {
    fn read_plugin(
        &self,
        entry: &PluginEntry,
        headers_only: bool,
    ) -> Result<PluginRecord, SessionError> {
        let key = fold_name(entry.name());
        if self.failing.contains(&key) {
            return Err(SessionError::read_failed(entry.name(), "corrupt header"));
        }
        let record = self
            .records
            .get(&key)
            .cloned()
            .ok_or_else(|| SessionError::read_failed(entry.name(), "file not found"))?;
        if headers_only {
            Ok(record.with_form_ids(std::iter::empty()))
        } else {
            Ok(record)
        }
    }
}

fn entry(name: &str, file_size: u64) -> PluginEntry {
    PluginEntry::new(name, format!("/data/{name}"), file_size)
}

fn ids(raw: impl IntoIterator<Item = u32>) -> Vec<FormId> {
    raw.into_iter().map(FormId::new).collect()
}

#[test]
fn empty_entry_list_yields_empty_snapshot() {
    let reader = StubReader::new([]);
    let snapshot = load_snapshot(&reader, &[], false).expect("load");
    assert!(snapshot.is_empty());
}

#[test]
fn snapshot_order_follows_entries_not_file_sizes() {
    let reader = StubReader::new([
        PluginRecord::new("Skyrim.esm").with_master_flag(true),
        PluginRecord::new("Blank.esm").with_master_flag(true),
        PluginRecord::new("Blank.esp").with_form_ids(ids([1, 2])),
    ]);
    // Sizes deliberately reversed relative to load order.
    let entries = [
        entry("Skyrim.esm", 10),
        entry("Blank.esm", 300),
        entry("Blank.esp", 20),
    ];

    let snapshot = load_snapshot(&reader, &entries, false).expect("load");
    let names: Vec<&str> = snapshot.plugins().iter().map(PluginRecord::name).collect();
    assert_eq!(names, ["Skyrim.esm", "Blank.esm", "Blank.esp"]);
    assert_eq!(snapshot.position("Blank.esp"), Some(2));
}

#[test]
fn headers_only_load_strips_form_ids() {
    let reader = StubReader::new([PluginRecord::new("Blank.esp").with_form_ids(ids([1, 2, 3]))]);
    let entries = [entry("Blank.esp", 50)];

    let snapshot = load_snapshot(&reader, &entries, true).expect("load");
    let record = snapshot.plugin("Blank.esp").expect("record present");
    assert_eq!(record.override_count(), 0);
}

#[test]
fn first_failure_in_entry_order_wins() {
    let reader = StubReader::new([
        PluginRecord::new("First.esp"),
        PluginRecord::new("Second.esp"),
        PluginRecord::new("Third.esp"),
    ])
    .failing_on("Third.esp")
    .failing_on("Second.esp");
    let entries = [
        entry("First.esp", 1),
        entry("Second.esp", 2),
        entry("Third.esp", 3),
    ];

    let error = load_snapshot(&reader, &entries, false).expect_err("failure");
    assert_eq!(error, SessionError::read_failed("Second.esp", "corrupt header"));
}

#[test]
fn duplicate_entries_are_rejected() {
    let reader = StubReader::new([PluginRecord::new("Blank.esp")]);
    let entries = [entry("Blank.esp", 1), entry("BLANK.ESP", 2)];

    let error = load_snapshot(&reader, &entries, false).expect_err("collision");
    assert!(matches!(error, SessionError::DuplicatePlugin { .. }));
}

#[test]
fn partitioning_deals_size_sorted_entries_round_robin() {
    let entries = [
        entry("big.esp", 30),
        entry("small.esp", 10),
        entry("medium.esp", 20),
    ];

    let groups = partition_by_size(&entries, 2);
    let names: Vec<Vec<&str>> = groups
        .iter()
        .map(|group| group.iter().map(|entry| entry.name()).collect())
        .collect();
    assert_eq!(names, [vec!["small.esp", "big.esp"], vec!["medium.esp"]]);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(8)]
fn partitioning_covers_every_entry(#[case] worker_count: usize) {
    let entries: Vec<PluginEntry> = (0_u64..5)
        .map(|index| entry(&format!("p{index}.esp"), index))
        .collect();
    let groups = partition_by_size(&entries, worker_count);
    assert_eq!(groups.len(), worker_count);
    let total: usize = groups.iter().map(Vec::len).sum();
    assert_eq!(total, 5);
}
