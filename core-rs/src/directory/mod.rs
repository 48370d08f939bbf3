//! Directory adapter module
//!
//! Answers "which groups does this identity belong to?".
//! Implementations include:
//! - StaticDirectory (in-memory map, optionally loaded from a file)
//! - Future: LdapDirectory, ScimDirectory, cloud IAM backends

pub mod static_directory;

pub use static_directory::StaticDirectory;

use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Group memberships of one identity
///
/// Behaves as a set (no duplicate names) but keeps the order in which the
/// directory supplied the groups, so resolution walks them deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct GroupSet {
    groups: Vec<String>,
}

impl GroupSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group, ignoring names already present
    ///
    /// Returns true if the group was not yet a member.
    pub fn insert(&mut self, group: impl Into<String>) -> bool {
        let group = group.into();
        if self.contains(&group) {
            return false;
        }
        self.groups.push(group);
        true
    }

    pub fn contains(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl From<Vec<String>> for GroupSet {
    fn from(groups: Vec<String>) -> Self {
        groups.into_iter().collect()
    }
}

impl From<GroupSet> for Vec<String> {
    fn from(set: GroupSet) -> Self {
        set.groups
    }
}

impl<S: Into<String>> FromIterator<S> for GroupSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = GroupSet::new();
        for group in iter {
            set.insert(group);
        }
        set
    }
}

/// Directory adapter trait
///
/// The only contract the access resolver depends on. Backends must:
/// - return an empty set for unknown identities (never an error)
/// - have no side effects visible to the engine
///
/// Errors are reserved for backend failures (unreachable server, bad
/// credentials). The resolver turns them into a per-resource fault.
pub trait DirectoryAdapter: Send + Sync {
    /// Group memberships of `identity`
    fn groups_of(&self, identity: &str) -> Result<GroupSet>;
}

impl<D: DirectoryAdapter + ?Sized> DirectoryAdapter for &D {
    fn groups_of(&self, identity: &str) -> Result<GroupSet> {
        (**self).groups_of(identity)
    }
}

impl<D: DirectoryAdapter + ?Sized> DirectoryAdapter for Box<D> {
    fn groups_of(&self, identity: &str) -> Result<GroupSet> {
        (**self).groups_of(identity)
    }
}
