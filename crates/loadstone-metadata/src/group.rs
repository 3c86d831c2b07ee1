//! Plugin group definitions.

use serde::{Deserialize, Serialize};

use crate::locale::fold_name;

/// A named group of plugins and the groups it loads after.
///
/// Group membership is declared per plugin via
/// [`PluginMetadata::group`](crate::PluginMetadata::group); the definition
/// only carries the inter-group ordering. A plugin in a group loads after
/// every present member of every group reachable through `after`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDefinition {
    /// The group name.
    name: String,
    /// Names of groups whose members load before this group's members.
    #[serde(default)]
    after: Vec<String>,
}

impl GroupDefinition {
    /// Creates a definition for the named group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            after: Vec::new(),
        }
    }

    /// Sets the groups this group loads after.
    #[must_use]
    pub fn with_after<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.after = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the group name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the folded group name.
    #[must_use]
    pub fn folded_name(&self) -> String {
        fold_name(&self.name)
    }

    /// Returns the groups this group loads after, in declared order.
    #[must_use]
    pub fn after(&self) -> &[String] {
        &self.after
    }
}
