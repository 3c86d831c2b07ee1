//! Parsed plugin records and their record identities.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use loadstone_metadata::fold_name;

/// Identifier of a data record defined or overridden by a plugin.
///
/// The raw value has already been normalised against the owning plugin's
/// master table by the parser, so equal `FormId`s across two plugins name
/// the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FormId(u32);

impl FormId {
    /// Creates a form identifier from its normalised raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// One parsed plugin: its header facts and the records it touches.
///
/// Records are immutable once inserted into a snapshot. A header-only parse
/// produces a record with an empty form identifier set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginRecord {
    /// Canonical plugin name.
    name: String,
    /// Whether the plugin is flagged as a master file.
    is_master: bool,
    /// Header master names, in declared order.
    masters: Vec<String>,
    /// Records this plugin defines or overrides.
    form_ids: BTreeSet<FormId>,
}

impl PluginRecord {
    /// Creates a record for the named plugin with no masters or records.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_master: false,
            masters: Vec::new(),
            form_ids: BTreeSet::new(),
        }
    }

    /// Sets the master-file flag.
    #[must_use]
    pub const fn with_master_flag(mut self, is_master: bool) -> Self {
        self.is_master = is_master;
        self
    }

    /// Sets the header master names.
    #[must_use]
    pub fn with_masters<I, S>(mut self, masters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.masters = masters.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the form identifiers this plugin touches.
    #[must_use]
    pub fn with_form_ids(mut self, form_ids: impl IntoIterator<Item = FormId>) -> Self {
        self.form_ids = form_ids.into_iter().collect();
        self
    }

    /// Returns the plugin name in canonical case.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the folded plugin name.
    #[must_use]
    pub fn folded_name(&self) -> String {
        fold_name(&self.name)
    }

    /// Returns whether the plugin is flagged as a master file.
    #[must_use]
    pub const fn is_master(&self) -> bool {
        self.is_master
    }

    /// Returns the header master names in declared order.
    #[must_use]
    pub fn masters(&self) -> &[String] {
        &self.masters
    }

    /// Returns the form identifiers this plugin touches.
    #[must_use]
    pub const fn form_ids(&self) -> &BTreeSet<FormId> {
        &self.form_ids
    }

    /// Returns the number of records this plugin defines or overrides.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.form_ids.len()
    }

    /// Returns whether the two plugins touch at least one common record.
    ///
    /// Probes the smaller set against the larger; the sets themselves are
    /// never materialised elsewhere.
    #[must_use]
    pub fn overlaps_with(&self, other: &Self) -> bool {
        let (small, large) = if self.form_ids.len() <= other.form_ids.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.form_ids.iter().any(|id| large.form_ids.contains(id))
    }
}
