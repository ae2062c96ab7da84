use apsentry_common::finding::{Family, Finding, Severity};
use serde::Serialize;

/// Findings of one run, bucketed by severity in scan order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Report {
    pub high: Vec<Finding>,
    pub medium: Vec<Finding>,
    pub low: Vec<Finding>,
    pub info: Vec<Finding>,
    pub authorized: usize,
    pub known: usize,
    pub new: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, finding: Finding) {
        match finding.family() {
            Family::Authorized => self.authorized += 1,
            Family::Known => self.known += 1,
            Family::New => self.new += 1,
        }

        let bucket = match finding.severity {
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
            Severity::Info => &mut self.info,
        };
        bucket.push(finding);
    }

    pub fn bucket(&self, severity: Severity) -> &[Finding] {
        match severity {
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
            Severity::Low => &self.low,
            Severity::Info => &self.info,
        }
    }

    /// All findings, most severe bucket first.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        Severity::ALL
            .into_iter()
            .flat_map(move |severity| self.bucket(severity).iter())
    }

    /// Number of access points processed.
    pub fn total(&self) -> usize {
        self.authorized + self.known + self.new
    }

    /// `true` when nothing needs an operator's attention.
    pub fn is_clean(&self) -> bool {
        self.high.is_empty() && self.medium.is_empty()
    }
}

impl Extend<Finding> for Report {
    fn extend<T: IntoIterator<Item = Finding>>(&mut self, iter: T) {
        for finding in iter {
            self.record(finding);
        }
    }
}
