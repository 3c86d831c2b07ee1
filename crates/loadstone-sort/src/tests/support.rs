//! Shared helpers for sorter unit tests.

use loadstone_session::{FormId, PluginRecord, PluginSnapshot};

pub(super) fn ids(raw: impl IntoIterator<Item = u32>) -> Vec<FormId> {
    raw.into_iter().map(FormId::new).collect()
}

pub(super) fn snapshot_of(records: impl IntoIterator<Item = PluginRecord>) -> PluginSnapshot {
    let mut snapshot = PluginSnapshot::new();
    for record in records {
        snapshot.insert(record).expect("unique fixture names");
    }
    snapshot
}
