//! Per-plugin metadata records and the userlist-over-masterlist overlay.

use serde::{Deserialize, Serialize};

use crate::error::MetadataError;
use crate::file_ref::FileRef;
use crate::locale::fold_name;

/// Largest priority magnitude accepted from a metadata source.
pub const PRIORITY_LIMIT: i32 = 1_000_000;

/// One plugin's ordering metadata, as declared by a masterlist or userlist.
///
/// Scalar fields (priority, its global flag, the group) participate in
/// merging only when declared; the explicit-priority marker records whether
/// the priority was written by the source or is the default. File lists are
/// merged by union, preserving declared order.
///
/// # Example
///
/// ```
/// use loadstone_metadata::PluginMetadata;
///
/// let metadata = PluginMetadata::new("Blank.esp").with_global_priority(-100);
/// assert_eq!(metadata.priority(), -100);
/// assert!(metadata.is_priority_global());
/// assert!(metadata.has_explicit_priority());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// The plugin the record applies to.
    name: String,
    /// Plugins this plugin must load after, when present.
    #[serde(default)]
    load_after: Vec<FileRef>,
    /// Plugins this plugin requires; same ordering effect as `load_after`.
    #[serde(default)]
    requirements: Vec<FileRef>,
    /// Plugins this plugin cannot be used alongside.
    #[serde(default)]
    incompatibilities: Vec<FileRef>,
    /// Declared priority; 0 unless explicitly set.
    #[serde(default)]
    priority: i32,
    /// Whether the priority orders against all plugins of the same class
    /// rather than only overlapping ones.
    #[serde(default)]
    priority_is_global: bool,
    /// Whether the priority was declared rather than defaulted.
    #[serde(default)]
    priority_is_explicit: bool,
    /// Optional group this plugin belongs to.
    #[serde(default)]
    group: Option<String>,
}

impl PluginMetadata {
    /// Creates an empty record for the named plugin.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            load_after: Vec::new(),
            requirements: Vec::new(),
            incompatibilities: Vec::new(),
            priority: 0,
            priority_is_global: false,
            priority_is_explicit: false,
            group: None,
        }
    }

    /// Sets the plugins this plugin loads after.
    #[must_use]
    pub fn with_load_after(mut self, files: impl IntoIterator<Item = FileRef>) -> Self {
        self.load_after = files.into_iter().collect();
        self
    }

    /// Sets the plugins this plugin requires.
    #[must_use]
    pub fn with_requirements(mut self, files: impl IntoIterator<Item = FileRef>) -> Self {
        self.requirements = files.into_iter().collect();
        self
    }

    /// Sets the plugins this plugin is incompatible with.
    #[must_use]
    pub fn with_incompatibilities(mut self, files: impl IntoIterator<Item = FileRef>) -> Self {
        self.incompatibilities = files.into_iter().collect();
        self
    }

    /// Declares a non-global priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self.priority_is_global = false;
        self.priority_is_explicit = true;
        self
    }

    /// Declares a global priority.
    #[must_use]
    pub const fn with_global_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self.priority_is_global = true;
        self.priority_is_explicit = true;
        self
    }

    /// Assigns this plugin to a group.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Returns the plugin name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the folded plugin name.
    #[must_use]
    pub fn folded_name(&self) -> String {
        fold_name(&self.name)
    }

    /// Returns the `load_after` references in declared order.
    #[must_use]
    pub fn load_after(&self) -> &[FileRef] {
        &self.load_after
    }

    /// Returns the requirement references in declared order.
    #[must_use]
    pub fn requirements(&self) -> &[FileRef] {
        &self.requirements
    }

    /// Returns the incompatibility references in declared order.
    #[must_use]
    pub fn incompatibilities(&self) -> &[FileRef] {
        &self.incompatibilities
    }

    /// Returns the declared priority, defaulting to 0.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns whether the priority is global.
    #[must_use]
    pub const fn is_priority_global(&self) -> bool {
        self.priority_is_global
    }

    /// Returns whether the priority was declared by the source.
    #[must_use]
    pub const fn has_explicit_priority(&self) -> bool {
        self.priority_is_explicit
    }

    /// Returns the group name, if any.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Returns whether the record carries nothing beyond its name.
    #[must_use]
    pub fn is_name_only(&self) -> bool {
        self.load_after.is_empty()
            && self.requirements.is_empty()
            && self.incompatibilities.is_empty()
            && !self.priority_is_explicit
            && self.group.is_none()
    }

    /// Checks the record for malformed content.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::SelfReference`] when a file list names the
    /// plugin itself, and [`MetadataError::PriorityOutOfRange`] when the
    /// declared priority exceeds [`PRIORITY_LIMIT`] in magnitude.
    pub fn validate(&self) -> Result<(), MetadataError> {
        let lists = [
            ("load_after", &self.load_after),
            ("requirements", &self.requirements),
            ("incompatibilities", &self.incompatibilities),
        ];
        for (field, files) in lists {
            if files.iter().any(|file| file.names(&self.name)) {
                return Err(MetadataError::self_reference(&self.name, field));
            }
        }
        if self.priority < -PRIORITY_LIMIT || self.priority > PRIORITY_LIMIT {
            return Err(MetadataError::priority_out_of_range(
                &self.name,
                self.priority,
                PRIORITY_LIMIT,
            ));
        }
        Ok(())
    }

    /// Overlays `overlay` onto this record and returns the merged result.
    ///
    /// Scalars are replaced only when the overlay declares them; file lists
    /// are unioned with this record's entries first, de-duplicated
    /// case-insensitively.
    #[must_use]
    pub fn merged_with(&self, overlay: &Self) -> Self {
        let mut merged = self.clone();
        if overlay.priority_is_explicit {
            merged.priority = overlay.priority;
            merged.priority_is_global = overlay.priority_is_global;
            merged.priority_is_explicit = true;
        }
        if overlay.group.is_some() {
            merged.group.clone_from(&overlay.group);
        }
        union_into(&mut merged.load_after, &overlay.load_after);
        union_into(&mut merged.requirements, &overlay.requirements);
        union_into(&mut merged.incompatibilities, &overlay.incompatibilities);
        merged
    }
}

/// Appends the members of `extra` that are not already present.
fn union_into(existing: &mut Vec<FileRef>, extra: &[FileRef]) {
    for file in extra {
        if !existing.contains(file) {
            existing.push(file.clone());
        }
    }
}
