//! # Findings
//!
//! The outcome of classifying one [`AccessPoint`] against the registry.

use std::fmt;

use serde::Serialize;

use crate::network::access_point::AccessPoint;

/// Triage bucket of a finding, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::High, Severity::Medium, Severity::Low, Severity::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which run counter a finding is accounted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Authorized,
    Known,
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Authorized BSSID broadcasting the SSID it is registered with.
    AuthorizedExpected,
    /// Authorized BSSID broadcasting a different protected SSID.
    AuthorizedSsidMismatch,
    /// Authorized BSSID broadcasting an SSID missing from the registry.
    AuthorizedUnknownSsid,
    /// Known BSSID broadcasting the SSID it is registered with.
    KnownExpected,
    /// Known BSSID broadcasting an SSID missing from the registry.
    KnownUnknownSsid,
    /// Known BSSID whose SSID is protected by an authorized entry.
    KnownBroadcastingProtected,
    /// Unregistered BSSID broadcasting a protected SSID.
    RogueProtectedSsid,
    /// Unregistered BSSID broadcasting an unregistered SSID.
    UnknownAp,
    /// Nothing else matched.
    Undefined,
}

impl Category {
    pub fn family(&self) -> Family {
        match self {
            Category::AuthorizedExpected
            | Category::AuthorizedSsidMismatch
            | Category::AuthorizedUnknownSsid => Family::Authorized,
            Category::KnownExpected
            | Category::KnownUnknownSsid
            | Category::KnownBroadcastingProtected => Family::Known,
            Category::RogueProtectedSsid | Category::UnknownAp | Category::Undefined => Family::New,
        }
    }

    /// Operator facing title, with the BSSID and SSID embedded verbatim.
    pub fn title(&self, bssid: &str, ssid: &str) -> String {
        match self {
            Category::AuthorizedExpected => {
                format!("Authorized AP {bssid} broadcasting expected SSID '{ssid}'")
            }
            Category::AuthorizedSsidMismatch => {
                format!("Authorized AP {bssid} broadcasting protected SSID '{ssid}' it is not registered with")
            }
            Category::AuthorizedUnknownSsid => {
                format!("Authorized AP {bssid} broadcasting unknown SSID '{ssid}'")
            }
            Category::KnownExpected => {
                format!("Known AP {bssid} broadcasting expected SSID '{ssid}'")
            }
            Category::KnownUnknownSsid => {
                format!("Known AP {bssid} broadcasting unknown SSID '{ssid}'")
            }
            Category::KnownBroadcastingProtected => {
                format!("Known AP {bssid} broadcasting protected SSID '{ssid}'")
            }
            Category::RogueProtectedSsid => {
                format!("Unauthorized AP {bssid} broadcasting protected SSID '{ssid}'")
            }
            Category::UnknownAp => {
                format!("Unknown AP {bssid} broadcasting unknown SSID '{ssid}'")
            }
            Category::Undefined => {
                format!("Combination of AP {bssid} and SSID '{ssid}' is not defined")
            }
        }
    }
}

/// One classified access point. Created once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Position of the matching rule in the classifier table, starting at 1.
    pub rule: u8,
    pub category: Category,
    pub severity: Severity,
    pub title: String,
    pub access_point: AccessPoint,
}

impl Finding {
    pub fn new(rule: u8, category: Category, severity: Severity, access_point: AccessPoint) -> Self {
        let title = category.title(&access_point.bssid, &access_point.ssid);
        Self {
            rule,
            category,
            severity,
            title,
            access_point,
        }
    }

    pub fn family(&self) -> Family {
        self.category.family()
    }
}
