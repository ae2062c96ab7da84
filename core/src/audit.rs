//! # Audit
//!
//! Wires the [`ScanParser`], the [`classify`] step and the [`Report`] together for a
//! single scan against a single registry snapshot.

use apsentry_common::config::TrailingBlock;
use tracing::debug;

use crate::classifier::classify;
use crate::parser::{ParseStats, ScanParser};
use crate::registry::Registry;
use crate::report::Report;

/// Output of one run.
#[derive(Debug, Clone)]
pub struct Audit {
    pub report: Report,
    pub parse: ParseStats,
}

/// Classifies every access point of a scan.
///
/// Runs synchronously on the calling thread and owns no state beyond the returned
/// [`Audit`], so separate runs never share anything.
pub fn audit<I, S>(registry: &Registry, lines: I, trailing: TrailingBlock) -> Audit
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = ScanParser::new(lines, trailing);
    let mut report = Report::new();

    for ap in parser.by_ref() {
        let finding = classify(ap, registry);
        debug!(rule = finding.rule, severity = %finding.severity, "{}", finding.title);
        report.record(finding);
    }

    let parse = parser.stats();
    debug!(
        "Parsed {} access points, skipped {} lines",
        parse.blocks, parse.skipped
    );

    Audit { report, parse }
}

pub fn audit_str(registry: &Registry, scan: &str, trailing: TrailingBlock) -> Audit {
    audit(registry, scan.lines(), trailing)
}
