//! Assessment orchestrator
//!
//! Entry point of the engine. Validates the configuration document, then
//! composes directory, access resolver and impact ranker into one pass over
//! the resource list. Configuration errors abort before any resolution work;
//! per-resource faults are logged and excluded from the report.
//!
//! # Example
//!
//! ```rust
//! use blast_radius::assessment::assess;
//! use blast_radius::directory::StaticDirectory;
//! use serde_json::json;
//!
//! let config = json!({
//!     "resources": ["R"],
//!     "permissions": {"alice": {"R": "read"}}
//! });
//! let assessment = assess("alice", &config, &StaticDirectory::new()).unwrap();
//! assert_eq!(assessment.report.resources(), vec!["R"]);
//! ```

use crate::config::AssessmentConfig;
use crate::directory::DirectoryAdapter;
use crate::errors::Result;
use crate::ranking::{rank, ImpactReport, ResourceOutcome};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Knobs for one assessment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssessmentOptions {
    /// Keep only the first occurrence of a resource listed more than once
    pub deduplicate: bool,
}

/// Result of assessing one identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub identity: String,
    pub report: ImpactReport,
    /// Per-resource outcomes, in the order resources were processed
    pub outcomes: Vec<ResourceOutcome>,
}

impl Assessment {
    /// Resources dropped because their resolution faulted
    pub fn excluded(&self) -> impl Iterator<Item = &ResourceOutcome> {
        self.outcomes.iter().filter(|o| o.is_excluded())
    }

    pub fn is_complete(&self) -> bool {
        self.excluded().next().is_none()
    }
}

/// Orchestrator bound to a directory backend
pub struct Assessor<D: DirectoryAdapter> {
    directory: D,
    options: AssessmentOptions,
}

impl<D: DirectoryAdapter> Assessor<D> {
    pub fn new(directory: D) -> Self {
        Assessor {
            directory,
            options: AssessmentOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AssessmentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Validate a raw configuration document and assess `identity` against it
    ///
    /// # Errors
    /// `ConfigurationMalformed` / `Validation` for wrong-shaped documents.
    pub fn assess(&self, identity: &str, document: &JsonValue) -> Result<Assessment> {
        let config = AssessmentConfig::from_value(document)?;
        self.assess_config(identity, &config)
    }

    /// Assess `identity` against an already validated configuration
    pub fn assess_config(&self, identity: &str, config: &AssessmentConfig) -> Result<Assessment> {
        let duplicates = config.duplicate_resources();
        if !duplicates.is_empty() {
            warn!(
                duplicates = ?duplicates,
                deduplicate = self.options.deduplicate,
                "Resource list contains duplicates"
            );
        }

        let resources: Vec<&str> = if self.options.deduplicate {
            let mut seen = HashSet::new();
            config
                .resources
                .iter()
                .map(String::as_str)
                .filter(|r| seen.insert(*r))
                .collect()
        } else {
            config.resources.iter().map(String::as_str).collect()
        };

        info!(
            identity,
            resources = resources.len(),
            principals = config.permissions.len(),
            "Assessing blast radius"
        );

        let ranking = rank(
            identity,
            &resources[..],
            &config.permissions,
            &config.criticality,
            &self.directory,
        );

        for outcome in &ranking.outcomes {
            match outcome {
                ResourceOutcome::Reachable {
                    decision,
                    criticality,
                } => info!(
                    identity,
                    resource = %decision.resource,
                    path = %decision.path,
                    criticality = %criticality,
                    "Access granted"
                ),
                ResourceOutcome::Unreachable { decision } => {
                    debug!(identity, resource = %decision.resource, "No access")
                }
                ResourceOutcome::Excluded { resource, reason } => warn!(
                    identity,
                    resource = %resource,
                    reason = %reason,
                    "Resolution fault, resource excluded from report"
                ),
            }
        }

        info!(
            identity,
            reachable = ranking.report.len(),
            excluded = ranking.excluded().count(),
            "Assessment complete"
        );

        Ok(Assessment {
            identity: identity.to_string(),
            report: ranking.report,
            outcomes: ranking.outcomes,
        })
    }
}

/// One-shot assessment with default options
pub fn assess<D: DirectoryAdapter + ?Sized>(
    identity: &str,
    document: &JsonValue,
    directory: &D,
) -> Result<Assessment> {
    Assessor::new(directory).assess(identity, document)
}
