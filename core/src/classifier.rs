//! # Classifier
//!
//! Decides what an observed access point means for the site, given the [`Registry`].
//!
//! The rules live in an ordered table and the first one that matches wins. Later rules
//! are written assuming the earlier ones did not match, so the order is part of the
//! contract. When nothing matches, [`UNDEFINED`] applies, which makes the classifier
//! total: every access point yields exactly one [`Finding`].
//!
//! All comparisons are exact, case-sensitive string equality on the captured values.

use apsentry_common::finding::{Category, Finding, Severity};
use apsentry_common::network::access_point::AccessPoint;

use crate::registry::{ProtectionLevel, Registry};

/// What the registry says about one observation.
struct Subject<'a> {
    ssid: &'a str,
    /// SSID registered for the BSSID in `[authorized]`.
    authorized: Option<&'a str>,
    /// SSID registered for the BSSID in `[known]`.
    known: Option<&'a str>,
    /// Protection level of the observed SSID, `None` when unregistered.
    level: Option<ProtectionLevel>,
}

impl<'a> Subject<'a> {
    fn new(ap: &'a AccessPoint, registry: &'a Registry) -> Self {
        Self {
            ssid: &ap.ssid,
            authorized: registry.authorized(&ap.bssid),
            known: registry.known(&ap.bssid),
            level: registry.protection(&ap.ssid),
        }
    }

    fn is_protected(&self) -> bool {
        self.level == Some(ProtectionLevel::Protected)
    }

    fn is_unregistered(&self) -> bool {
        self.level.is_none()
    }
}

struct Rule {
    category: Category,
    severity: Severity,
    applies: fn(&Subject<'_>) -> bool,
}

static RULES: [Rule; 8] = [
    Rule {
        category: Category::AuthorizedExpected,
        severity: Severity::Info,
        applies: authorized_expected,
    },
    Rule {
        category: Category::AuthorizedSsidMismatch,
        severity: Severity::Low,
        applies: authorized_ssid_mismatch,
    },
    Rule {
        category: Category::AuthorizedUnknownSsid,
        severity: Severity::Low,
        applies: authorized_unknown_ssid,
    },
    Rule {
        category: Category::KnownExpected,
        severity: Severity::Info,
        applies: known_expected,
    },
    Rule {
        category: Category::KnownUnknownSsid,
        severity: Severity::Low,
        applies: known_unknown_ssid,
    },
    Rule {
        category: Category::KnownBroadcastingProtected,
        severity: Severity::High,
        applies: known_broadcasting_protected,
    },
    Rule {
        category: Category::RogueProtectedSsid,
        severity: Severity::High,
        applies: rogue_protected_ssid,
    },
    Rule {
        category: Category::UnknownAp,
        severity: Severity::Medium,
        applies: unknown_ap,
    },
];

/// Catch-all, numbered right after the table.
static UNDEFINED: Rule = Rule {
    category: Category::Undefined,
    severity: Severity::Medium,
    applies: always,
};

fn always(_: &Subject<'_>) -> bool {
    true
}

fn authorized_expected(s: &Subject<'_>) -> bool {
    s.authorized == Some(s.ssid) && s.is_protected()
}

fn authorized_ssid_mismatch(s: &Subject<'_>) -> bool {
    s.authorized.is_some_and(|stored| stored != s.ssid) && s.is_protected()
}

fn authorized_unknown_ssid(s: &Subject<'_>) -> bool {
    s.authorized.is_some() && s.is_unregistered()
}

fn known_expected(s: &Subject<'_>) -> bool {
    s.known == Some(s.ssid) && s.level == Some(ProtectionLevel::KnownOnly)
}

fn known_unknown_ssid(s: &Subject<'_>) -> bool {
    s.known.is_some() && s.is_unregistered()
}

/// A known device pairing with an SSID that an authorized entry made protected.
fn known_broadcasting_protected(s: &Subject<'_>) -> bool {
    s.known == Some(s.ssid) && s.is_protected()
}

fn rogue_protected_ssid(s: &Subject<'_>) -> bool {
    s.is_protected() && s.authorized != Some(s.ssid)
}

fn unknown_ap(s: &Subject<'_>) -> bool {
    s.is_unregistered() && s.authorized.is_none() && s.known.is_none()
}

/// Classifies one access point. Pure: the same inputs always give the same finding.
pub fn classify(ap: AccessPoint, registry: &Registry) -> Finding {
    let (number, rule) = {
        let subject = Subject::new(&ap, registry);
        RULES
            .iter()
            .zip(1u8..)
            .find(|(rule, _)| (rule.applies)(&subject))
            .map(|(rule, number)| (number, rule))
            .unwrap_or((RULES.len() as u8 + 1, &UNDEFINED))
    };

    Finding::new(number, rule.category, rule.severity, ap)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
