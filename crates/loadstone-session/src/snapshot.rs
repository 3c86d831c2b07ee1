//! The frozen plugin snapshot a sort runs against.

use std::collections::HashMap;

use loadstone_metadata::{GroupDefinition, MetadataList, PluginMetadata, fold_name};

use crate::error::SessionError;
use crate::message::Message;
use crate::plugin::PluginRecord;

/// The complete input to one sort: plugin records in current load order,
/// the masterlist and userlist, and the accumulated message list.
///
/// Records are stored densely; a record's index is its position in the
/// current load order and the sorter's stability anchor. Name lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct PluginSnapshot {
    /// Records in current load order.
    plugins: Vec<PluginRecord>,
    /// Folded name to index.
    index: HashMap<String, usize>,
    /// Community-curated metadata.
    masterlist: MetadataList,
    /// User-authored metadata overriding the masterlist.
    userlist: MetadataList,
    /// Accumulated user-visible messages.
    messages: Vec<Message>,
}

impl PluginSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, assigning it the next load-order position.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DuplicatePlugin`] when a record with the same
    /// folded name is already present.
    pub fn insert(&mut self, record: PluginRecord) -> Result<(), SessionError> {
        let key = record.folded_name();
        if self.index.contains_key(&key) {
            return Err(SessionError::duplicate_plugin(record.name()));
        }
        self.index.insert(key, self.plugins.len());
        self.plugins.push(record);
        Ok(())
    }

    /// Returns the records in current load order.
    #[must_use]
    pub fn plugins(&self) -> &[PluginRecord] {
        &self.plugins
    }

    /// Returns the named record, if present.
    #[must_use]
    pub fn plugin(&self, name: &str) -> Option<&PluginRecord> {
        self.position(name).map(|position| &self.plugins[position])
    }

    /// Returns the named record's load-order position, if present.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&fold_name(name)).copied()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns whether the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Returns the masterlist.
    #[must_use]
    pub const fn masterlist(&self) -> &MetadataList {
        &self.masterlist
    }

    /// Returns the masterlist for modification.
    pub fn masterlist_mut(&mut self) -> &mut MetadataList {
        &mut self.masterlist
    }

    /// Returns the userlist.
    #[must_use]
    pub const fn userlist(&self) -> &MetadataList {
        &self.userlist
    }

    /// Returns the userlist for modification.
    pub fn userlist_mut(&mut self) -> &mut MetadataList {
        &mut self.userlist
    }

    /// Returns the effective metadata for the named plugin.
    ///
    /// Starts from an empty record carrying the canonical name, overlays the
    /// masterlist entry, then the userlist entry, so userlist fields win
    /// field by field.
    #[must_use]
    pub fn effective_metadata(&self, name: &str) -> PluginMetadata {
        let mut merged = PluginMetadata::new(name);
        if let Some(masterlist) = self.masterlist.plugin(name) {
            merged = merged.merged_with(masterlist);
        }
        if let Some(userlist) = self.userlist.plugin(name) {
            merged = merged.merged_with(userlist);
        }
        merged
    }

    /// Returns the effective definition of the named group.
    ///
    /// A userlist definition replaces a masterlist definition wholesale.
    #[must_use]
    pub fn group_definition(&self, name: &str) -> Option<&GroupDefinition> {
        self.userlist
            .group(name)
            .or_else(|| self.masterlist.group(name))
    }

    /// Returns the accumulated messages.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Appends a user-visible message.
    pub fn append_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Discards all accumulated messages.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}
