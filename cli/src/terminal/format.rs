use apsentry_common::finding::{Finding, Severity};
use apsentry_common::vendors::VendorRepository;
use colored::*;

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => colors::HIGH,
        Severity::Medium => colors::MEDIUM,
        Severity::Low => colors::LOW,
        Severity::Info => colors::INFO,
    }
}

pub fn ssid_to_value(ssid: &str) -> ColoredString {
    if ssid.is_empty() {
        "<hidden>".italic().color(colors::SEPARATOR)
    } else {
        ssid.color(colors::SSID)
    }
}

/// Tree lines shown under the title of a finding.
pub fn finding_to_details(finding: &Finding, vendors: Option<&dyn VendorRepository>) -> Vec<Detail> {
    let ap = &finding.access_point;
    let mut details: Vec<Detail> = vec![
        ("Rule".to_string(), finding.rule.to_string().color(colors::ACCENT)),
        ("BSSID".to_string(), ap.bssid.color(colors::BSSID)),
        ("SSID".to_string(), ssid_to_value(&ap.ssid)),
    ];

    if let Some(freq) = ap.frequency {
        details.push(("Freq".to_string(), format!("{freq} MHz").normal()));
    }

    if let Some(seen) = &ap.last_seen {
        details.push(("Seen".to_string(), seen.normal()));
    }

    if let Some(vendor) = vendors.and_then(|repo| repo.get_vendor(&ap.bssid)) {
        details.push(("Vendor".to_string(), vendor.color(colors::VENDOR)));
    }

    details
}
