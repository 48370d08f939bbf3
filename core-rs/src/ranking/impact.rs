//! Impact report types

use super::criticality::Criticality;
use serde::{Deserialize, Serialize};

/// One reachable resource and its criticality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactEntry {
    pub resource: String,
    pub criticality: Criticality,
}

impl ImpactEntry {
    pub fn new(resource: impl Into<String>, criticality: Criticality) -> Self {
        ImpactEntry {
            resource: resource.into(),
            criticality,
        }
    }
}

/// Reachable resources ordered by descending criticality
///
/// Serializes as a plain sequence of `{resource, criticality}` records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactReport {
    entries: Vec<ImpactEntry>,
}

impl ImpactReport {
    /// Wrap entries that are already in report order
    pub fn new(entries: Vec<ImpactEntry>) -> Self {
        ImpactReport { entries }
    }

    /// Sort entries into report order
    ///
    /// Descending severity; the sort is stable, so entries of equal
    /// criticality keep their input order.
    pub fn ranked(mut entries: Vec<ImpactEntry>) -> Self {
        entries.sort_by(|a, b| b.criticality.cmp(&a.criticality));
        ImpactReport { entries }
    }

    pub fn entries(&self) -> &[ImpactEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImpactEntry> {
        self.entries.iter()
    }

    pub fn resources(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.resource.as_str()).collect()
    }

    /// Number of entries at the given criticality
    pub fn count(&self, criticality: Criticality) -> usize {
        self.entries
            .iter()
            .filter(|e| e.criticality == criticality)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<ImpactEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a ImpactReport {
    type Item = &'a ImpactEntry;
    type IntoIter = std::slice::Iter<'a, ImpactEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
