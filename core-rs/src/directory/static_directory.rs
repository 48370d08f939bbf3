//! Static in-memory directory
//!
//! Membership file format (JSON, or YAML by extension):
//! ```yaml
//! john.doe:
//!   - developers
//!   - testers
//! jane.smith:
//!   - administrators
//! ```

use super::{DirectoryAdapter, GroupSet};
use crate::errors::{BlastError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Directory backed by a fixed identity -> groups map
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    memberships: HashMap<String, GroupSet>,
}

impl StaticDirectory {
    /// Empty directory: every identity has no groups
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample memberships used when no directory file is supplied
    pub fn builtin() -> Self {
        Self::new()
            .with_member("john.doe", "developers")
            .with_member("john.doe", "testers")
            .with_member("jane.smith", "administrators")
    }

    /// Add `identity` to `group` (builder style)
    pub fn with_member(mut self, identity: impl Into<String>, group: impl Into<String>) -> Self {
        self.add_member(identity, group);
        self
    }

    pub fn add_member(&mut self, identity: impl Into<String>, group: impl Into<String>) {
        self.memberships
            .entry(identity.into())
            .or_default()
            .insert(group);
    }

    pub fn from_map(memberships: HashMap<String, GroupSet>) -> Self {
        StaticDirectory { memberships }
    }

    /// Load memberships from a JSON or YAML file
    ///
    /// # Errors
    /// - `ConfigurationNotFound` if the file does not exist
    /// - `Directory` if the content is not an identity -> [group] mapping
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BlastError::ConfigurationNotFound(
                path.to_string_lossy().to_string(),
            ));
        }

        let content = fs::read_to_string(path)?;

        let memberships: HashMap<String, GroupSet> = if is_yaml_path(path) {
            serde_yaml::from_str(&content).map_err(|e| {
                BlastError::Directory(format!("Invalid membership YAML in {}: {}", path.display(), e))
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                BlastError::Directory(format!("Invalid membership JSON in {}: {}", path.display(), e))
            })?
        };

        Ok(Self::from_map(memberships))
    }

    /// Number of identities with at least one recorded membership
    pub fn len(&self) -> usize {
        self.memberships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memberships.is_empty()
    }
}

impl DirectoryAdapter for StaticDirectory {
    fn groups_of(&self, identity: &str) -> Result<GroupSet> {
        Ok(self.memberships.get(identity).cloned().unwrap_or_default())
    }
}

pub(crate) fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()),
        Some(ref ext) if ext == "yaml" || ext == "yml"
    )
}
