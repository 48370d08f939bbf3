//! # Blast Radius - compromised identity impact estimator
//!
//! Given an identity, a list of resources, a permission table (direct and
//! group grants) and per-resource criticality labels, computes which resources
//! the identity can reach and ranks them by criticality.
//!
//! ## Core Principle
//!
//! **Static and label-based**: nothing is discovered at runtime. Resources,
//! grants and criticality come from configuration; group memberships come from
//! a [`DirectoryAdapter`].
//!
//! ## Architecture
//!
//! ```text
//!  config + identity
//!        │
//!        ▼
//! ┌──────────────┐     ┌────────────────┐     ┌───────────────────┐
//! │  Assessor    │────▶│ Impact Ranker  │────▶│ Access Resolver   │
//! │ (validation) │     │ (stable sort)  │     │ (direct, groups)  │
//! └──────────────┘     └────────────────┘     └─────────┬─────────┘
//!        │                                              ▼
//!        ▼                                    ┌───────────────────┐
//!   ImpactReport ──▶ report (table / json)    │ DirectoryAdapter  │
//!                                             └───────────────────┘
//! ```

pub mod errors;
pub mod directory;
pub mod access;
pub mod ranking;
pub mod config;
pub mod assessment;
pub mod report;

pub use errors::{BlastError, Result};
pub use directory::{DirectoryAdapter, GroupSet, StaticDirectory};
pub use access::{can_access, AccessDecision, AccessResolver, Grant, GrantPath, PermissionTable};
pub use ranking::{rank, Criticality, CriticalityTable, ImpactEntry, ImpactReport, Ranking, ResourceOutcome};
pub use config::AssessmentConfig;
pub use assessment::{assess, Assessment, AssessmentOptions, Assessor};
pub use report::{render_audit, render_report, OutputFormat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration file used when none is given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
