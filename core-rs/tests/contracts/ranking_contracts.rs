// Ranking Contract Tests
//
// These tests verify INVARIANTS of the impact report ordering.
// Responders read reports top-down; ordering is part of the output contract.

use blast_radius::{
    assess, AssessmentConfig, Assessor, Criticality, CriticalityTable, ImpactReport,
    StaticDirectory,
};
use proptest::prelude::*;
use serde_json::json;

fn criticality_strategy() -> impl Strategy<Value = Criticality> {
    prop_oneof![
        Just(Criticality::High),
        Just(Criticality::Medium),
        Just(Criticality::Low),
    ]
}

/// WHY: Severity ordering is fixed at high > medium > low
/// REASON: Report consumers sort and filter on these levels
/// BREAKS: Highest-impact targets would not be listed first
#[test]
fn severity_order_is_high_medium_low() {
    let mut levels = vec![Criticality::Low, Criticality::High, Criticality::Medium];
    levels.sort();
    assert_eq!(levels, vec![Criticality::Low, Criticality::Medium, Criticality::High]);
}

/// WHY: Unlabelled reachable resources are `low`
/// REASON: Missing labels must neither hide a resource nor inflate its severity
/// BREAKS: Partially labelled inventories would produce wrong rankings
#[test]
fn unlabelled_resource_is_low() {
    let config = json!({
        "resources": ["unlabelled"],
        "permissions": {"alice": {"unlabelled": "write"}},
        "criticality": {"other": "high"}
    });

    let assessment = assess("alice", &config, &StaticDirectory::new()).unwrap();
    assert_eq!(assessment.report.entries()[0].criticality, Criticality::Low);
}

/// WHY: Inputs are read-only for the whole assessment
/// REASON: The same configuration is reused across identities
/// BREAKS: Results would depend on which identity was assessed first
#[test]
fn assessment_leaves_configuration_untouched() {
    let config = AssessmentConfig::from_value(&json!({
        "resources": ["A", "B"],
        "permissions": {"alice": {"A": "read"}, "ops": {"B": "write"}},
        "criticality": {"A": "high"}
    }))
    .unwrap();
    let snapshot = config.clone();

    let assessor = Assessor::new(StaticDirectory::new().with_member("bob", "ops"));
    assessor.assess_config("alice", &config).unwrap();
    assessor.assess_config("bob", &config).unwrap();

    assert_eq!(config, snapshot);
}

proptest! {
    /// Report is sorted by descending severity; equal severities keep input order
    #[test]
    fn report_order_is_stable_by_severity(
        levels in prop::collection::vec(criticality_strategy(), 0..24),
    ) {
        let resources: Vec<String> = (0..levels.len()).map(|i| format!("res-{:02}", i)).collect();

        let mut permissions = serde_json::Map::new();
        let mut criticality = serde_json::Map::new();
        for (resource, level) in resources.iter().zip(&levels) {
            permissions.insert(resource.clone(), json!("read"));
            criticality.insert(resource.clone(), json!(level.as_str()));
        }

        let config = json!({
            "resources": resources,
            "permissions": {"alice": permissions},
            "criticality": criticality
        });
        let report = assess("alice", &config, &StaticDirectory::new()).unwrap().report;

        prop_assert_eq!(report.len(), levels.len());

        let mut expected: Vec<(Criticality, String)> =
            levels.iter().copied().zip(resources.iter().cloned()).collect();
        expected.sort_by(|a, b| b.0.cmp(&a.0));
        let expected: Vec<&str> = expected.iter().map(|(_, r)| r.as_str()).collect();

        prop_assert_eq!(report.resources(), expected);
    }

    /// Persisting then reloading a report yields the identical sequence
    #[test]
    fn persisted_report_reloads_identically(
        levels in prop::collection::vec(criticality_strategy(), 0..8),
    ) {
        let table = levels
            .iter()
            .enumerate()
            .fold(CriticalityTable::new(), |t, (i, l)| t.with_label(format!("r{}", i), *l));
        let entries = (0..levels.len())
            .map(|i| {
                let resource = format!("r{}", i);
                let level = table.criticality_of(&resource);
                blast_radius::ImpactEntry::new(resource, level)
            })
            .collect();
        let report = ImpactReport::ranked(entries);

        let json = report.serialize_as(blast_radius::OutputFormat::Json).unwrap();
        prop_assert_eq!(ImpactReport::from_json_str(&json).unwrap(), report.clone());

        let yaml = report.serialize_as(blast_radius::OutputFormat::Yaml).unwrap();
        prop_assert_eq!(ImpactReport::from_yaml_str(&yaml).unwrap(), report);
    }
}
