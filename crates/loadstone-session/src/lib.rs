//! Plugin records and the sort snapshot for the Loadstone sorter.
//!
//! A sort runs against a frozen [`PluginSnapshot`]: a dense, load-ordered
//! collection of [`PluginRecord`]s plus the masterlist/userlist metadata and
//! the user-visible message list. Snapshots are produced by the concurrent
//! [`load_snapshot`] loader, which parses plugin files through the
//! [`PluginReader`] seam in parallel and restores determinism when the
//! snapshot is frozen.
//!
//! # Core types
//!
//! - [`PluginRecord`] and [`FormId`] — one parsed plugin and its record set
//! - [`PluginSnapshot`] — the frozen collection a sort runs against
//! - [`Message`] and [`MessageKind`] — user-visible diagnostics
//! - [`PluginReader`] and [`PluginEntry`] — the parser seam
//!
//! # Example
//!
//! ```
//! use loadstone_session::{PluginRecord, PluginSnapshot};
//!
//! let mut snapshot = PluginSnapshot::new();
//! snapshot.insert(PluginRecord::new("Skyrim.esm").with_master_flag(true))?;
//! assert!(snapshot.plugin("skyrim.esm").is_some());
//! # Ok::<(), loadstone_session::SessionError>(())
//! ```

mod error;
mod loader;
mod message;
mod plugin;
mod snapshot;

pub use error::SessionError;
pub use loader::{PluginEntry, PluginReader, load_snapshot};
pub use message::{Message, MessageKind};
pub use plugin::{FormId, PluginRecord};
pub use snapshot::PluginSnapshot;

#[cfg(test)]
mod tests;
