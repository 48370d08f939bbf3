/**
 * config.rs
 * Loader for assessment configuration documents (JSON, or YAML by extension)
 *
 * Format:
 * ```json
 * {
 *   "resources": ["/data/sensitive.txt", "/config/database.yml"],
 *   "permissions": {
 *     "john.doe": { "/data/sensitive.txt": "read" },
 *     "group:administrators": { "/config/database.yml": "write" }
 *   },
 *   "criticality": { "/data/sensitive.txt": "high" }
 * }
 * ```
 *
 * All three fields are optional and default to empty.
 */

use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::access::permissions::json_type_name;
use crate::access::PermissionTable;
use crate::directory::static_directory::is_yaml_path;
use crate::errors::{BlastError, Result};
use crate::ranking::CriticalityTable;

/// Validated assessment inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentConfig {
    /// Candidate resources, in input order
    pub resources: Vec<String>,
    pub permissions: PermissionTable,
    pub criticality: CriticalityTable,
}

impl AssessmentConfig {
    /// Read and parse a configuration document without validating its fields
    ///
    /// # Errors
    /// - `ConfigurationNotFound` if `path` does not exist
    /// - `ConfigurationMalformed` if the content does not parse, or is not a mapping
    pub fn load_document<P: AsRef<Path>>(path: P) -> Result<JsonValue> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BlastError::ConfigurationNotFound(
                path.to_string_lossy().to_string(),
            ));
        }

        let content = fs::read_to_string(path)?;

        let document: JsonValue = if is_yaml_path(path) {
            serde_yaml::from_str(&content).map_err(|e| {
                BlastError::ConfigurationMalformed(format!(
                    "Invalid YAML in configuration file {}: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                BlastError::ConfigurationMalformed(format!(
                    "Invalid JSON in configuration file {}: {}",
                    path.display(),
                    e
                ))
            })?
        };

        if !document.is_object() {
            return Err(BlastError::ConfigurationMalformed(format!(
                "Configuration file {} must contain a mapping, got {}",
                path.display(),
                json_type_name(&document)
            )));
        }

        Ok(document)
    }

    /// Load and validate a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let document = Self::load_document(path)?;
        Self::from_value(&document)
    }

    /// Validate field shapes of a parsed document
    ///
    /// Ensures:
    /// - `resources` is a sequence of strings
    /// - `permissions` is a mapping of principal to (resource -> grant) mapping
    /// - `criticality` is a mapping of resource to high / medium / low
    ///
    /// Absent (or null) fields default to empty.
    pub fn from_value(document: &JsonValue) -> Result<Self> {
        let fields = document.as_object().ok_or_else(|| {
            BlastError::ConfigurationMalformed(format!(
                "Configuration must be a mapping, got {}",
                json_type_name(document)
            ))
        })?;

        let present = |name: &str| fields.get(name).filter(|v| !v.is_null());

        let resources = match present("resources") {
            Some(value) => parse_resources(value)?,
            None => Vec::new(),
        };

        let permissions = match present("permissions") {
            Some(value) => PermissionTable::from_value(value)?,
            None => PermissionTable::new(),
        };

        let criticality = match present("criticality") {
            Some(value) => CriticalityTable::from_value(value)?,
            None => CriticalityTable::new(),
        };

        Ok(AssessmentConfig {
            resources,
            permissions,
            criticality,
        })
    }

    /// Resources listed more than once, each reported once in first-seen order
    pub fn duplicate_resources(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.resources
            .iter()
            .map(String::as_str)
            .filter(|r| !seen.insert(*r) && reported.insert(*r))
            .collect()
    }
}

fn parse_resources(value: &JsonValue) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        BlastError::Validation(format!(
            "Resources must be a list in the configuration file, got {}",
            json_type_name(value)
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                BlastError::Validation(format!(
                    "Resource #{} must be a string, got {}",
                    index,
                    json_type_name(item)
                ))
            })
        })
        .collect()
}
