//! Permission table
//!
//! Principal keys may carry a namespace tag so identities and groups with the
//! same name never collide:
//! - `user:<name>` applies to the identity `<name>` only
//! - `group:<name>` applies to the group `<name>` only
//! - an untagged `<name>` applies to both
//!
//! A key written exactly as a principal's name always applies to it, so an
//! opaque identity literally named `user:bob` still finds its own grants.

use crate::errors::{BlastError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt;

const IDENTITY_TAG: &str = "user:";
const GROUP_TAG: &str = "group:";

/// Access level a principal holds on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grant {
    Read,
    Write,
    /// Any unrecognized value; never grants access
    None,
}

impl Grant {
    /// Parse a grant string; only exact `read` / `write` are recognized
    pub fn parse(value: &str) -> Self {
        match value {
            "read" => Grant::Read,
            "write" => Grant::Write,
            _ => Grant::None,
        }
    }

    /// Non-string values (numbers, null, nested objects) are `None`
    pub fn from_value(value: &JsonValue) -> Self {
        value.as_str().map(Grant::parse).unwrap_or(Grant::None)
    }

    pub fn grants_access(self) -> bool {
        matches!(self, Grant::Read | Grant::Write)
    }
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grant::Read => write!(f, "read"),
            Grant::Write => write!(f, "write"),
            Grant::None => write!(f, "none"),
        }
    }
}

/// Principal -> (resource -> grant)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionTable {
    // Keyed by the principal key exactly as written in configuration
    entries: HashMap<String, HashMap<String, Grant>>,
}

impl PermissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a grant; `principal` may carry a `user:` / `group:` tag
    pub fn insert(&mut self, principal: &str, resource: impl Into<String>, grant: Grant) {
        self.entries
            .entry(principal.to_string())
            .or_default()
            .insert(resource.into(), grant);
    }

    /// Builder-style `insert`
    pub fn with_grant(mut self, principal: &str, resource: impl Into<String>, grant: Grant) -> Self {
        self.insert(principal, resource, grant);
        self
    }

    /// Build from the `permissions` field of a configuration document
    ///
    /// # Errors
    /// `Validation` if the field is not a mapping of mappings.
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        let principals = value.as_object().ok_or_else(|| {
            BlastError::Validation(format!(
                "Permissions must be a mapping in the configuration file, got {}",
                json_type_name(value)
            ))
        })?;

        let mut table = PermissionTable::new();
        for (principal, grants) in principals {
            let grants = grants.as_object().ok_or_else(|| {
                BlastError::Validation(format!(
                    "Permissions for '{}' must be a mapping of resource to grant, got {}",
                    principal,
                    json_type_name(grants)
                ))
            })?;
            for (resource, grant) in grants {
                table.insert(principal, resource.clone(), Grant::from_value(grant));
            }
        }

        Ok(table)
    }

    /// Access-granting level the identity holds directly on `resource`
    pub fn identity_grant(&self, identity: &str, resource: &str) -> Option<Grant> {
        self.effective_grant(IDENTITY_TAG, identity, resource)
    }

    /// Access-granting level the group holds on `resource`
    pub fn group_grant(&self, group: &str, resource: &str) -> Option<Grant> {
        self.effective_grant(GROUP_TAG, group, resource)
    }

    // Tagged key first, then the key equal to the name itself (untagged, or
    // a name that happens to start with a tag). Only access-granting levels
    // are returned.
    fn effective_grant(&self, tag: &str, name: &str, resource: &str) -> Option<Grant> {
        let tagged = format!("{}{}", tag, name);
        let found = [tagged.as_str(), name]
            .into_iter()
            .filter_map(|key| self.entries.get(key))
            .filter_map(|grants| grants.get(resource).copied())
            .find(|grant| grant.grants_access());
        found
    }

    /// Number of principals with at least one entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a sequence",
        JsonValue::Object(_) => "a mapping",
    }
}
