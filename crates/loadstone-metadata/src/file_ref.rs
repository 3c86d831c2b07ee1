//! References to plugin files within metadata records.

use serde::{Deserialize, Serialize};

use crate::locale::fold_name;

/// A reference to a plugin file in a metadata list.
///
/// References carry an optional display name (shown to users in place of the
/// file name) and an optional condition string evaluated by the metadata
/// source. Two references are equal when their names fold to the same
/// string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRef {
    /// The referenced file name.
    name: String,
    /// Optional name to display instead of the file name.
    display: Option<String>,
    /// Optional condition guarding the reference.
    condition: Option<String>,
}

impl FileRef {
    /// Creates a reference to the named plugin file.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display: None,
            condition: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Sets the condition string.
    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Returns the referenced file name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display name, falling back to the file name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.name)
    }

    /// Returns the condition string, if any.
    #[must_use]
    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }

    /// Returns the folded form of the referenced name.
    #[must_use]
    pub fn folded_name(&self) -> String {
        fold_name(&self.name)
    }

    /// Returns whether this reference names `plugin`, case-insensitively.
    #[must_use]
    pub fn names(&self, plugin: &str) -> bool {
        self.folded_name() == fold_name(plugin)
    }
}

impl PartialEq for FileRef {
    fn eq(&self, other: &Self) -> bool {
        self.folded_name() == other.folded_name()
    }
}

impl Eq for FileRef {}
