//! Error types for the blast radius estimator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlastError {
    #[error("Configuration file not found: {0}")]
    ConfigurationNotFound(String),

    #[error("Malformed configuration: {0}")]
    ConfigurationMalformed(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resolution fault on {resource}: {reason}")]
    ResolutionFault { resource: String, reason: String },

    #[error("Persistence fault: {0}")]
    PersistenceFault(String),

    #[error("Directory error: {0}")]
    Directory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BlastError {
    /// Whether this error aborts an assessment before any resolution work.
    ///
    /// Resolution and persistence faults are contained by their callers.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            BlastError::ResolutionFault { .. } | BlastError::PersistenceFault(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BlastError>;
