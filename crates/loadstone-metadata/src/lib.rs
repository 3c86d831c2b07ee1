//! Plugin metadata model for the Loadstone sorter.
//!
//! This crate provides the canonical metadata types shared by the snapshot
//! and sorting crates: file references, per-plugin metadata records, the
//! masterlist/userlist collections they live in, group definitions, and the
//! locale identifiers used for name folding.
//!
//! Metadata comes from two curated sources: a community masterlist and a
//! per-user userlist. Both are [`MetadataList`]s; the effective record for a
//! plugin overlays the userlist entry onto the masterlist entry field by
//! field (see [`PluginMetadata::merged_with`]).
//!
//! # Core types
//!
//! - [`FileRef`] — a case-insensitive reference to another plugin file
//! - [`PluginMetadata`] — one plugin's ordering metadata
//! - [`MetadataList`] — a named collection of plugin records and groups
//! - [`GroupDefinition`] — a load-after relationship between plugin groups
//! - [`Locale`] — interface language identifiers
//!
//! # Example
//!
//! ```
//! use loadstone_metadata::{FileRef, PluginMetadata};
//!
//! let masterlist = PluginMetadata::new("Blank.esp").with_priority(10);
//! let userlist = PluginMetadata::new("Blank.esp")
//!     .with_load_after([FileRef::new("Other.esp")]);
//!
//! let merged = masterlist.merged_with(&userlist);
//! assert_eq!(merged.priority(), 10);
//! assert_eq!(merged.load_after().len(), 1);
//! ```

mod error;
mod file_ref;
mod group;
mod list;
mod locale;
mod plugin_metadata;

pub use error::MetadataError;
pub use file_ref::FileRef;
pub use group::GroupDefinition;
pub use list::MetadataList;
pub use locale::{Locale, fold_name};
pub use plugin_metadata::{PRIORITY_LIMIT, PluginMetadata};

#[cfg(test)]
mod tests;
