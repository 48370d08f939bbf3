//! Impact ranker
//!
//! Walks the resource list in order, resolves access for each resource,
//! attaches criticality to the reachable ones and sorts the result.
//! A fault on one resource is recorded as an excluded outcome; the remaining
//! resources are still ranked.

use super::criticality::{Criticality, CriticalityTable};
use super::impact::{ImpactEntry, ImpactReport};
use crate::access::{AccessDecision, AccessResolver, PermissionTable};
use crate::directory::DirectoryAdapter;
use crate::errors::BlastError;
use serde::{Deserialize, Serialize};

/// What happened to one input resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ResourceOutcome {
    Reachable {
        decision: AccessDecision,
        criticality: Criticality,
    },
    Unreachable {
        decision: AccessDecision,
    },
    Excluded {
        resource: String,
        reason: String,
    },
}

impl ResourceOutcome {
    pub fn resource(&self) -> &str {
        match self {
            ResourceOutcome::Reachable { decision, .. } => &decision.resource,
            ResourceOutcome::Unreachable { decision } => &decision.resource,
            ResourceOutcome::Excluded { resource, .. } => resource,
        }
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, ResourceOutcome::Excluded { .. })
    }
}

/// Ranked report plus the per-resource audit trail, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub report: ImpactReport,
    pub outcomes: Vec<ResourceOutcome>,
}

impl Ranking {
    pub fn excluded(&self) -> impl Iterator<Item = &ResourceOutcome> {
        self.outcomes.iter().filter(|o| o.is_excluded())
    }
}

/// Rank the resources `identity` can reach
///
/// Resources are processed in input order without deduplication. The
/// identity's group memberships are looked up once and shared by every
/// resource of the run.
pub fn rank<S, D>(
    identity: &str,
    resources: &[S],
    permissions: &PermissionTable,
    criticality: &CriticalityTable,
    directory: &D,
) -> Ranking
where
    S: AsRef<str>,
    D: DirectoryAdapter + ?Sized,
{
    let resolver = AccessResolver::new(identity, permissions, directory);
    let mut reachable = Vec::new();
    let mut outcomes = Vec::with_capacity(resources.len());

    for resource in resources {
        let resource = resource.as_ref();

        let outcome = match resolver.can_access(resource) {
            Ok(decision) if decision.granted() => {
                let level = criticality.criticality_of(resource);
                reachable.push(ImpactEntry::new(resource, level));
                ResourceOutcome::Reachable {
                    decision,
                    criticality: level,
                }
            }
            Ok(decision) => ResourceOutcome::Unreachable { decision },
            Err(BlastError::ResolutionFault { reason, .. }) => ResourceOutcome::Excluded {
                resource: resource.to_string(),
                reason,
            },
            Err(e) => ResourceOutcome::Excluded {
                resource: resource.to_string(),
                reason: e.to_string(),
            },
        };

        outcomes.push(outcome);
    }

    Ranking {
        report: ImpactReport::ranked(reachable),
        outcomes,
    }
}
