//! Concurrent construction of a plugin snapshot.
//!
//! Plugin files parse independently, so the loader spreads them across
//! worker threads: entries are ordered by file size and dealt round-robin so
//! each worker receives a comparable share of the bytes. Parsed records land
//! in a shared map under a mutex; once every worker has joined, the records
//! are frozen into a [`PluginSnapshot`] in the original entry order, which
//! restores full determinism at the sort boundary.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};
use std::thread;

use camino::Utf8PathBuf;
use tracing::{debug, info};

use loadstone_metadata::fold_name;

use crate::error::SessionError;
use crate::plugin::PluginRecord;
use crate::snapshot::PluginSnapshot;

/// Tracing target for loader operations.
const LOADER_TARGET: &str = "loadstone_session::loader";

/// A plugin file awaiting parsing.
///
/// Entries are supplied in current load-order sequence; the frozen snapshot
/// preserves that sequence regardless of parse completion order.
#[derive(Debug, Clone)]
pub struct PluginEntry {
    /// Canonical plugin name.
    name: String,
    /// Path to the plugin file.
    path: Utf8PathBuf,
    /// File size in bytes, used to balance worker load.
    file_size: u64,
}

impl PluginEntry {
    /// Creates an entry for the named plugin file.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<Utf8PathBuf>, file_size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            file_size,
        }
    }

    /// Returns the plugin name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the path to the plugin file.
    #[must_use]
    pub const fn path(&self) -> &Utf8PathBuf {
        &self.path
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn file_size(&self) -> u64 {
        self.file_size
    }
}

/// The parser seam: turns a plugin file into a [`PluginRecord`].
///
/// Implementations are called concurrently from loader workers. A
/// header-only read produces a record with an empty form identifier set.
pub trait PluginReader: Sync {
    /// Reads the plugin described by `entry`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be parsed; the loader aborts
    /// with the first failure in entry order.
    fn read_plugin(
        &self,
        entry: &PluginEntry,
        headers_only: bool,
    ) -> Result<PluginRecord, SessionError>;
}

/// Parses `entries` in parallel and freezes them into a snapshot.
///
/// The snapshot's record order is the entry order, not the parse completion
/// order. The returned snapshot carries empty metadata lists; callers
/// populate the masterlist and userlist afterwards.
///
/// # Errors
///
/// Returns the first reader failure in entry order, or a
/// [`SessionError::DuplicatePlugin`] when two entries fold to the same name.
pub fn load_snapshot<R: PluginReader>(
    reader: &R,
    entries: &[PluginEntry],
    headers_only: bool,
) -> Result<PluginSnapshot, SessionError> {
    if entries.is_empty() {
        return Ok(PluginSnapshot::new());
    }

    let worker_count = worker_count(entries.len());
    let groups = partition_by_size(entries, worker_count);
    info!(
        target: LOADER_TARGET,
        plugins = entries.len(),
        workers = worker_count,
        headers_only,
        "loading plugin snapshot"
    );

    // Reserved up front so concurrent inserts never rehash mid-load.
    let records: Mutex<HashMap<String, PluginRecord>> =
        Mutex::new(HashMap::with_capacity(entries.len()));
    let failures: Mutex<HashMap<String, SessionError>> = Mutex::new(HashMap::new());

    thread::scope(|scope| {
        for group in &groups {
            let records = &records;
            let failures = &failures;
            scope.spawn(move || {
                for &entry in group {
                    debug!(target: LOADER_TARGET, plugin = entry.name(), "parsing plugin");
                    match reader.read_plugin(entry, headers_only) {
                        Ok(record) => {
                            records
                                .lock()
                                .unwrap_or_else(PoisonError::into_inner)
                                .insert(fold_name(entry.name()), record);
                        }
                        Err(error) => {
                            failures
                                .lock()
                                .unwrap_or_else(PoisonError::into_inner)
                                .insert(fold_name(entry.name()), error);
                        }
                    }
                }
            });
        }
    });

    let failures = failures.into_inner().unwrap_or_else(PoisonError::into_inner);
    if !failures.is_empty() {
        for entry in entries {
            if let Some(error) = failures.get(&fold_name(entry.name())) {
                return Err(error.clone());
            }
        }
    }

    let mut records = records.into_inner().unwrap_or_else(PoisonError::into_inner);
    let mut snapshot = PluginSnapshot::new();
    for entry in entries {
        match records.remove(&fold_name(entry.name())) {
            Some(record) => snapshot.insert(record)?,
            // A second entry folding to an already-frozen name.
            None => return Err(SessionError::duplicate_plugin(entry.name())),
        }
    }
    Ok(snapshot)
}

/// Returns how many workers to use for `plugin_count` plugins.
fn worker_count(plugin_count: usize) -> usize {
    thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(plugin_count)
        .max(1)
}

/// Deals entries round-robin over a file-size-sorted order.
///
/// The sort is stable, so same-sized entries keep their load-order sequence.
pub(crate) fn partition_by_size(
    entries: &[PluginEntry],
    worker_count: usize,
) -> Vec<Vec<&PluginEntry>> {
    let mut by_size: Vec<&PluginEntry> = entries.iter().collect();
    by_size.sort_by_key(|entry| entry.file_size());

    let mut groups: Vec<Vec<&PluginEntry>> = vec![Vec::new(); worker_count];
    for (position, entry) in by_size.into_iter().enumerate() {
        groups[position % worker_count].push(entry);
    }
    groups
}
