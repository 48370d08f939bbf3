//! Console tables for impact reports and access audits

use crate::assessment::Assessment;
use crate::ranking::{Criticality, ImpactReport, ResourceOutcome};
use colored::{ColoredString, Colorize};

pub const REPORT_TITLE: &str = "Potential Impact of Compromised Identity";

/// Render the two-column (resource, criticality) report table
///
/// Column widths follow the longest resource name. `styled` enables ANSI
/// colors; pass false when writing to a pipe or file.
pub fn render_report(identity: &str, report: &ImpactReport, styled: bool) -> String {
    let mut out = String::new();
    let title = format!("{} ({})", REPORT_TITLE, identity);
    out.push_str(&format!("\n{}\n", paint(&title, styled, |s| s.bold())));

    if report.is_empty() {
        out.push_str(&format!("No reachable resources found for '{}'.\n", identity));
        return out;
    }

    let width = column_width(report.iter().map(|e| e.resource.as_str()), "RESOURCE");

    out.push_str(&format!("\n{:<width$} {:<12}\n", "RESOURCE", "CRITICALITY", width = width));
    out.push_str(&format!("{}\n", "-".repeat(width + 13)));

    for entry in report {
        let resource = format!("{:<width$}", entry.resource, width = width);
        out.push_str(&format!(
            "{} {}\n",
            paint(&resource, styled, |s| s.cyan()),
            paint_criticality(entry.criticality, styled)
        ));
    }

    out.push_str(&format!(
        "\nTotal: {} resource(s) (high: {}, medium: {}, low: {})\n",
        report.len(),
        report.count(Criticality::High),
        report.count(Criticality::Medium),
        report.count(Criticality::Low)
    ));

    out
}

/// Render how every input resource was resolved, in input order
pub fn render_audit(assessment: &Assessment, styled: bool) -> String {
    let mut out = String::new();

    if assessment.outcomes.is_empty() {
        out.push_str("No resources were assessed.\n");
        return out;
    }

    let width = column_width(assessment.outcomes.iter().map(|o| o.resource()), "RESOURCE");

    out.push_str(&format!("\n{:<width$} {}\n", "RESOURCE", "ACCESS", width = width));
    out.push_str(&format!("{}\n", "-".repeat(width + 30)));

    for outcome in &assessment.outcomes {
        let resource = format!("{:<width$}", outcome.resource(), width = width);
        let access = match outcome {
            ResourceOutcome::Reachable { decision, .. } => {
                paint(&decision.path.to_string(), styled, |s| s.green())
            }
            ResourceOutcome::Unreachable { decision } => {
                paint(&decision.path.to_string(), styled, |s| s.dimmed())
            }
            ResourceOutcome::Excluded { reason, .. } => {
                paint(&format!("excluded: {}", reason), styled, |s| s.yellow())
            }
        };
        out.push_str(&format!("{} {}\n", resource, access));
    }

    out
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}

fn paint_criticality(criticality: Criticality, styled: bool) -> String {
    paint(criticality.as_str(), styled, |s| match criticality {
        Criticality::High => s.red().bold(),
        Criticality::Medium => s.magenta(),
        Criticality::Low => s.normal(),
    })
}

fn paint(text: &str, styled: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if styled {
        style(text).to_string()
    } else {
        text.to_string()
    }
}
