//! Criticality labels and the resource -> criticality table

use crate::access::permissions::json_type_name;
use crate::errors::{BlastError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Importance of a resource; ordered by severity (`High` is greatest)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    High,
    Medium,
    #[default]
    Low,
}

impl Criticality {
    /// Numeric severity: high=3, medium=2, low=1
    pub fn severity(self) -> u8 {
        match self {
            Criticality::High => 3,
            Criticality::Medium => 2,
            Criticality::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Criticality::High => "high",
            Criticality::Medium => "medium",
            Criticality::Low => "low",
        }
    }
}

impl PartialOrd for Criticality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Criticality {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl FromStr for Criticality {
    type Err = BlastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Criticality::High),
            "medium" => Ok(Criticality::Medium),
            "low" => Ok(Criticality::Low),
            _ => Err(BlastError::Validation(format!(
                "Invalid criticality '{}': expected high, medium or low",
                s
            ))),
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource -> criticality; absent resources are `low`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriticalityTable {
    labels: HashMap<String, Criticality>,
}

impl CriticalityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, resource: impl Into<String>, criticality: Criticality) {
        self.labels.insert(resource.into(), criticality);
    }

    pub fn with_label(mut self, resource: impl Into<String>, criticality: Criticality) -> Self {
        self.insert(resource, criticality);
        self
    }

    /// Criticality of `resource`, defaulting to `low`
    pub fn criticality_of(&self, resource: &str) -> Criticality {
        self.labels.get(resource).copied().unwrap_or_default()
    }

    /// Build from the `criticality` field of a configuration document
    ///
    /// # Errors
    /// `Validation` if the field is not a mapping of resource to label, or a
    /// label is not one of high, medium, low.
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        let labels = value.as_object().ok_or_else(|| {
            BlastError::Validation(format!(
                "Criticality must be a mapping in the configuration file, got {}",
                json_type_name(value)
            ))
        })?;

        let mut table = CriticalityTable::new();
        for (resource, label) in labels {
            let label = label.as_str().ok_or_else(|| {
                BlastError::Validation(format!(
                    "Criticality of '{}' must be a string, got {}",
                    resource,
                    json_type_name(label)
                ))
            })?;
            let criticality = label.parse::<Criticality>().map_err(|e| {
                BlastError::Validation(format!("Resource '{}': {}", resource, e))
            })?;
            table.insert(resource.clone(), criticality);
        }

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
