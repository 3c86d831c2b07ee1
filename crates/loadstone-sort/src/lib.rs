//! Load-order computation for plugin snapshots.
//!
//! [`PluginSorter`] turns a frozen
//! [`PluginSnapshot`](loadstone_session::PluginSnapshot) into a total load
//! order, or fails with a [`SortError`] naming a constraint cycle. The sort
//! proceeds in fixed stages:
//!
//! 1. merge userlist metadata over masterlist metadata and validate it;
//! 2. build the hard-constraint graph (master flags, header masters,
//!    metadata `load_after` and group edges, requirements);
//! 3. propagate effective priorities to a fixpoint along the hard edges;
//! 4. add priority edges between plugins whose effective priorities differ;
//! 5. add record-overlap tie-break edges where no ordering exists yet;
//! 6. linearize with a deterministic ready-queue tie-break.
//!
//! Two sorts of byte-identical snapshots produce byte-identical orders.
//!
//! # Example
//!
//! ```
//! use loadstone_metadata::Locale;
//! use loadstone_session::{PluginRecord, PluginSnapshot};
//! use loadstone_sort::PluginSorter;
//!
//! let mut snapshot = PluginSnapshot::new();
//! snapshot.insert(PluginRecord::new("Skyrim.esm").with_master_flag(true))?;
//! snapshot.insert(PluginRecord::new("Blank.esp"))?;
//!
//! let order = PluginSorter::new().sort(&mut snapshot, Locale::English)?;
//! assert_eq!(order, ["Skyrim.esm", "Blank.esp"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod edge;
mod error;
mod graph;
mod overlap;
mod priority;
mod sorter;
mod topo;

pub use error::SortError;
pub use sorter::PluginSorter;

#[cfg(test)]
mod tests;
