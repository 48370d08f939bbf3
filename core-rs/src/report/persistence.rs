//! Report persistence
//!
//! The persisted form is an ordered sequence of `{resource, criticality}`
//! records. JSON by default, YAML when the path ends in `.yaml` / `.yml`.
//! Loading a persisted report reproduces the same ordered sequence.

use crate::directory::static_directory::is_yaml_path;
use crate::errors::{BlastError, Result};
use crate::ranking::ImpactReport;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Rendering / serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Persistence format implied by a file extension
    pub fn for_path(path: &Path) -> Self {
        if is_yaml_path(path) {
            OutputFormat::Yaml
        } else {
            OutputFormat::Json
        }
    }
}

impl FromStr for OutputFormat {
    type Err = BlastError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(BlastError::Validation(format!(
                "Unknown format '{}'. Use: table, json, or yaml",
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl ImpactReport {
    /// Serialize as JSON (pretty) or YAML; `Table` is not a serialization
    pub fn serialize_as(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            OutputFormat::Table => Err(BlastError::Validation(
                "Table format cannot be persisted; use json or yaml".to_string(),
            )),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Write the report to `path`
    ///
    /// # Errors
    /// `PersistenceFault` on serialization or write failure. Callers treat it
    /// as a warning: the assessment itself already succeeded.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self
            .serialize_as(OutputFormat::for_path(path))
            .map_err(|e| BlastError::PersistenceFault(format!("Failed to serialize report: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            BlastError::PersistenceFault(format!(
                "Failed to save results to {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Read a report persisted by [`ImpactReport::save`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        match OutputFormat::for_path(path) {
            OutputFormat::Yaml => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }
}
