//! Access resolver
//!
//! Decides whether an identity reaches a resource, and by which grant path.
//! Resolution order:
//! 1. direct grant held by the identity (the directory is not consulted)
//! 2. grant held by one of the identity's groups, in directory order
//! 3. denied
//!
//! The resolver never logs; it returns an [`AccessDecision`] and lets the
//! caller decide how to report it.

use super::permissions::{Grant, PermissionTable};
use crate::directory::{DirectoryAdapter, GroupSet};
use crate::errors::{BlastError, Result};
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How access to a resource was obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "via", rename_all = "lowercase")]
pub enum GrantPath {
    Direct { grant: Grant },
    Group { group: String, grant: Grant },
    Denied,
}

impl fmt::Display for GrantPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrantPath::Direct { grant } => write!(f, "direct {}", grant),
            GrantPath::Group { group, grant } => write!(f, "{} via group {}", grant, group),
            GrantPath::Denied => write!(f, "denied"),
        }
    }
}

/// Audit record of one resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    pub identity: String,
    pub resource: String,
    pub path: GrantPath,
}

impl AccessDecision {
    pub fn granted(&self) -> bool {
        !matches!(self.path, GrantPath::Denied)
    }
}

/// Resolver bound to one identity, permission table and directory
///
/// The identity's groups are fetched from the directory at most once, on the
/// first resource that has no direct grant, and reused afterwards. A failed
/// lookup is remembered too, so every later group-dependent resource reports
/// the same fault.
pub struct AccessResolver<'a, D: DirectoryAdapter + ?Sized> {
    identity: &'a str,
    permissions: &'a PermissionTable,
    directory: &'a D,
    groups: OnceCell<std::result::Result<GroupSet, String>>,
}

impl<'a, D: DirectoryAdapter + ?Sized> AccessResolver<'a, D> {
    pub fn new(identity: &'a str, permissions: &'a PermissionTable, directory: &'a D) -> Self {
        AccessResolver {
            identity,
            permissions,
            directory,
            groups: OnceCell::new(),
        }
    }

    pub fn identity(&self) -> &str {
        self.identity
    }

    /// Resolve access of the bound identity to `resource`
    ///
    /// # Errors
    /// `ResolutionFault` if the directory lookup fails. Missing principals,
    /// missing resources and empty tables are plain denials, not errors.
    pub fn can_access(&self, resource: &str) -> Result<AccessDecision> {
        let decision = |path| AccessDecision {
            identity: self.identity.to_string(),
            resource: resource.to_string(),
            path,
        };

        if let Some(grant) = self.permissions.identity_grant(self.identity, resource) {
            return Ok(decision(GrantPath::Direct { grant }));
        }

        let groups = self
            .groups()
            .map_err(|reason| BlastError::ResolutionFault {
                resource: resource.to_string(),
                reason: reason.to_string(),
            })?;

        for group in groups.iter() {
            if let Some(grant) = self.permissions.group_grant(group, resource) {
                return Ok(decision(GrantPath::Group {
                    group: group.to_string(),
                    grant,
                }));
            }
        }

        Ok(decision(GrantPath::Denied))
    }

    fn groups(&self) -> std::result::Result<&GroupSet, &str> {
        self.groups
            .get_or_init(|| {
                self.directory
                    .groups_of(self.identity)
                    .map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(String::as_str)
    }
}

/// One-shot form of [`AccessResolver::can_access`]
pub fn can_access<D: DirectoryAdapter + ?Sized>(
    identity: &str,
    resource: &str,
    permissions: &PermissionTable,
    directory: &D,
) -> Result<AccessDecision> {
    AccessResolver::new(identity, permissions, directory).can_access(resource)
}
