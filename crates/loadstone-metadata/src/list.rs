//! Masterlist and userlist collections.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::group::GroupDefinition;
use crate::locale::fold_name;
use crate::plugin_metadata::PluginMetadata;

/// A curated collection of plugin metadata records and group definitions.
///
/// Both the community masterlist and the per-user userlist are
/// `MetadataList`s; lookups are case-insensitive. Adding a record for a
/// plugin that already has one merges the two by the overlay rules of
/// [`PluginMetadata::merged_with`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataList {
    /// Plugin records keyed by folded name.
    plugins: HashMap<String, PluginMetadata>,
    /// Group definitions keyed by folded name.
    groups: HashMap<String, GroupDefinition>,
}

impl MetadataList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plugin record, merging with any existing record for the same
    /// plugin.
    pub fn add_plugin(&mut self, metadata: PluginMetadata) {
        let key = metadata.folded_name();
        match self.plugins.remove(&key) {
            Some(existing) => {
                self.plugins.insert(key, existing.merged_with(&metadata));
            }
            None => {
                self.plugins.insert(key, metadata);
            }
        }
    }

    /// Returns the record for the named plugin, if any.
    #[must_use]
    pub fn plugin(&self, name: &str) -> Option<&PluginMetadata> {
        self.plugins.get(&fold_name(name))
    }

    /// Returns an iterator over all plugin records.
    pub fn plugins(&self) -> impl Iterator<Item = &PluginMetadata> {
        self.plugins.values()
    }

    /// Returns the number of plugin records.
    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Adds a group definition, replacing any existing definition with the
    /// same name.
    pub fn add_group(&mut self, group: GroupDefinition) {
        self.groups.insert(group.folded_name(), group);
    }

    /// Returns the definition of the named group, if any.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&GroupDefinition> {
        self.groups.get(&fold_name(name))
    }

    /// Returns an iterator over all group definitions.
    pub fn groups(&self) -> impl Iterator<Item = &GroupDefinition> {
        self.groups.values()
    }

    /// Returns whether the list holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty() && self.groups.is_empty()
    }
}
