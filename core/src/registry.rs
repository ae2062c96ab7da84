//! # Device Registry
//!
//! Company-controlled (`[authorized]`) and recognised (`[known]`) access points, plus the
//! protection level of every SSID they broadcast.
//!
//! The registry is read from an INI-like text:
//!
//! ```text
//! # headquarters
//! [authorized]
//! 00:11:22:33:44:55=CorpNet
//!
//! [known]
//! 66:77:88:99:aa:bb=GuestNet
//! ```
//!
//! Within a mapping the first line for a BSSID wins. The two mappings are independent, so a
//! BSSID may be both authorized and known. The protection level of an SSID is fixed by the
//! section of the first entry line naming it, across the whole load.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use apsentry_common::error::{MalformedLine, SourceError, SourceKind};
use regex::Regex;
use tracing::{debug, info, warn};

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\[\]\s]+)\]$").expect("valid section pattern"));

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9A-Fa-f:]+)=(.*)$").expect("valid entry pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Authorized,
    Known,
}

impl Section {
    fn from_header(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("authorized") {
            Some(Section::Authorized)
        } else if name.eq_ignore_ascii_case("known") {
            Some(Section::Known)
        } else {
            None
        }
    }

    fn protection(&self) -> ProtectionLevel {
        match self {
            Section::Authorized => ProtectionLevel::Protected,
            Section::Known => ProtectionLevel::KnownOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtectionLevel {
    /// Only authorized BSSIDs may broadcast it.
    Protected = 1,
    /// Broadcast by recognised, non company-controlled devices.
    KnownOnly = 2,
}

/// Result of a single [`Registry::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    /// Inserted, but the BSSID is also listed in the other section.
    CrossListed,
    /// The BSSID is already in this section; the stored SSID is kept.
    Duplicate,
}

/// Diagnostics gathered while loading a registry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadStats {
    /// Non-blank, non-comment lines, headers included.
    pub content_lines: usize,
    /// Entries stored, cross-listed ones included.
    pub inserted: usize,
    pub duplicates: usize,
    /// BSSIDs stored in both sections.
    pub cross_listed: usize,
    pub malformed: Vec<MalformedLine>,
}

#[derive(Debug, Default, Clone)]
pub struct Registry {
    authorized: HashMap<String, String>,
    known: HashMap<String, String>,
    protection: HashMap<String, ProtectionLevel>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a registry from an in-memory text. Never fails: bad lines end up in
    /// [`LoadStats::malformed`].
    pub fn load_str(text: &str) -> (Self, LoadStats) {
        let mut loader = Loader::default();
        for (idx, line) in text.lines().enumerate() {
            loader.feed(idx + 1, line);
        }
        loader.finish()
    }

    /// Loads a registry from any buffered reader.
    pub fn load_reader<R: BufRead>(reader: R) -> Result<(Self, LoadStats), SourceError> {
        let mut loader = Loader::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| SourceError::ReadFailed {
                kind: SourceKind::Registry,
                source,
            })?;
            loader.feed(idx + 1, &line);
        }
        Ok(loader.finish())
    }

    pub fn load_file(path: impl AsRef<Path>) -> Result<(Self, LoadStats), SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::SourceUnavailable {
            kind: SourceKind::Registry,
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Reading registry from {}", path.display());
        Self::load_reader(BufReader::new(file))
    }

    /// Adds `bssid=ssid` to `section`.
    ///
    /// The SSID gets the section's protection level unless it already has one, even when
    /// the BSSID itself is a duplicate.
    pub fn insert(&mut self, section: Section, bssid: &str, ssid: &str) -> Insertion {
        self.protection
            .entry(ssid.to_owned())
            .or_insert_with(|| section.protection());

        let (target, other) = match section {
            Section::Authorized => (&mut self.authorized, &self.known),
            Section::Known => (&mut self.known, &self.authorized),
        };

        if target.contains_key(bssid) {
            return Insertion::Duplicate;
        }
        target.insert(bssid.to_owned(), ssid.to_owned());

        if other.contains_key(bssid) {
            Insertion::CrossListed
        } else {
            Insertion::Inserted
        }
    }

    /// SSID registered for an authorized BSSID.
    pub fn authorized(&self, bssid: &str) -> Option<&str> {
        self.authorized.get(bssid).map(String::as_str)
    }

    /// SSID registered for a known BSSID.
    pub fn known(&self, bssid: &str) -> Option<&str> {
        self.known.get(bssid).map(String::as_str)
    }

    /// `None` means the SSID is unregistered.
    pub fn protection(&self, ssid: &str) -> Option<ProtectionLevel> {
        self.protection.get(ssid).copied()
    }

    pub fn len_authorized(&self) -> usize {
        self.authorized.len()
    }

    pub fn len_known(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authorized.is_empty() && self.known.is_empty()
    }
}

/// Line-by-line registry builder. The active section starts as `[authorized]`.
struct Loader {
    registry: Registry,
    section: Section,
    stats: LoadStats,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            registry: Registry::new(),
            section: Section::Authorized,
            stats: LoadStats::default(),
        }
    }
}

impl Loader {
    fn feed(&mut self, line_no: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }
        self.stats.content_lines += 1;

        if let Some(caps) = SECTION_RE.captures(line) {
            if let Some(section) = Section::from_header(&caps[1]) {
                self.section = section;
                return;
            }
        } else if let Some(caps) = ENTRY_RE.captures(line) {
            self.entry(line_no, &caps[1], &caps[2]);
            return;
        }

        warn!("Registry line {line_no} is malformed: {line}");
        self.stats.malformed.push(MalformedLine {
            line: line_no,
            content: line.to_owned(),
        });
    }

    fn entry(&mut self, line_no: usize, bssid: &str, ssid: &str) {
        match self.registry.insert(self.section, bssid, ssid) {
            Insertion::Inserted => self.stats.inserted += 1,
            Insertion::CrossListed => {
                warn!("Registry line {line_no}: {bssid} is listed as both authorized and known");
                self.stats.inserted += 1;
                self.stats.cross_listed += 1;
            }
            Insertion::Duplicate => {
                debug!("Registry line {line_no}: {bssid} already listed, keeping first entry");
                self.stats.duplicates += 1;
            }
        }
    }

    fn finish(self) -> (Registry, LoadStats) {
        info!(
            "Registry holds {} authorized and {} known access points",
            self.registry.len_authorized(),
            self.registry.len_known()
        );
        (self.registry, self.stats)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn entries_before_any_header_are_authorized() {
        let (registry, stats) = Registry::load_str("aa:11=CorpNet\n");
        assert_eq!(registry.authorized("aa:11"), Some("CorpNet"));
        assert_eq!(registry.protection("CorpNet"), Some(ProtectionLevel::Protected));
        assert_eq!(stats.inserted, 1);
    }

    #[test]
    fn section_headers_are_case_insensitive() {
        let text = "[KNOWN]\nbb:22=GuestNet\n[Authorized]\naa:11=CorpNet\n";
        let (registry, stats) = Registry::load_str(text);
        assert_eq!(registry.known("bb:22"), Some("GuestNet"));
        assert_eq!(registry.authorized("aa:11"), Some("CorpNet"));
        assert_eq!(registry.protection("GuestNet"), Some(ProtectionLevel::KnownOnly));
        assert_eq!(stats.content_lines, 4);
        assert_eq!(stats.inserted, 2);
        assert!(stats.malformed.is_empty());
    }

    #[test]
    fn comments_and_blank_lines_are_not_counted() {
        let text = "# site A\n\n   # indented comment\n[authorized]\n\naa:11=CorpNet\n";
        let (_, stats) = Registry::load_str(text);
        assert_eq!(stats.content_lines, 2);
        assert_eq!(stats.inserted, 1);
    }

    #[test]
    fn first_entry_for_a_bssid_wins_within_a_section() {
        let text = "[authorized]\naa:11=CorpNet\naa:11=OtherNet\n";
        let (registry, stats) = Registry::load_str(text);
        assert_eq!(registry.authorized("aa:11"), Some("CorpNet"));
        assert_eq!(stats.inserted, 1);
        assert_eq!(stats.duplicates, 1);
        // The ignored mapping still registers its SSID.
        assert_eq!(registry.protection("OtherNet"), Some(ProtectionLevel::Protected));
    }

    #[test]
    fn bssid_authorized_first_is_also_added_to_known() {
        let text = "[authorized]\naa:bb=CorpNet\n[known]\naa:bb=GuestNet\n";
        let (registry, stats) = Registry::load_str(text);
        assert_eq!(registry.authorized("aa:bb"), Some("CorpNet"));
        assert_eq!(registry.known("aa:bb"), Some("GuestNet"));
        assert_eq!(registry.protection("GuestNet"), Some(ProtectionLevel::KnownOnly));
        assert_eq!(stats.cross_listed, 1);
        assert_eq!(stats.inserted, 2);
    }

    #[test]
    fn bssid_known_first_is_still_authorized() {
        let text = "[known]\naa:bb=GuestNet\n[authorized]\naa:bb=CorpNet\n";
        let (registry, stats) = Registry::load_str(text);
        assert_eq!(registry.known("aa:bb"), Some("GuestNet"));
        assert_eq!(registry.authorized("aa:bb"), Some("CorpNet"));
        assert_eq!(registry.protection("CorpNet"), Some(ProtectionLevel::Protected));
        assert_eq!(stats.cross_listed, 1);
        assert_eq!(stats.inserted, 2);
    }

    #[test]
    fn ssid_protection_is_fixed_by_first_section() {
        let text = "[authorized]\naa:01=CorpNet\n[known]\nbb:02=CorpNet\n";
        let (registry, stats) = Registry::load_str(text);
        assert!(stats.malformed.is_empty());
        assert_eq!(registry.protection("CorpNet"), Some(ProtectionLevel::Protected));
        assert_eq!(registry.known("bb:02"), Some("CorpNet"));

        let text = "[known]\nbb:02=Lobby\n[authorized]\naa:01=Lobby\n";
        let (registry, stats) = Registry::load_str(text);
        assert!(stats.malformed.is_empty());
        assert_eq!(registry.protection("Lobby"), Some(ProtectionLevel::KnownOnly));
        assert_eq!(registry.authorized("aa:01"), Some("Lobby"));
    }

    #[test]
    fn malformed_line_is_recorded_and_load_continues() {
        let text = "[authorized]\nnot-a-valid-line\naa:11=CorpNet\n";
        let (registry, stats) = Registry::load_str(text);
        assert_eq!(
            stats.malformed,
            vec![MalformedLine {
                line: 2,
                content: "not-a-valid-line".to_string()
            }]
        );
        assert_eq!(stats.content_lines, 3);
        assert_eq!(registry.authorized("aa:11"), Some("CorpNet"));
    }

    #[test]
    fn unknown_section_is_malformed_and_keeps_active_section() {
        let text = "[known]\n[guests]\nbb:22=GuestNet\n";
        let (registry, stats) = Registry::load_str(text);
        assert_eq!(stats.malformed.len(), 1);
        assert_eq!(stats.malformed[0].line, 2);
        assert_eq!(registry.known("bb:22"), Some("GuestNet"));
    }

    #[test]
    fn non_hex_bssid_is_malformed() {
        let (registry, stats) = Registry::load_str("zz:11=CorpNet\n");
        assert!(registry.is_empty());
        assert_eq!(stats.malformed.len(), 1);
    }

    #[test]
    fn empty_ssid_is_a_valid_entry() {
        let (registry, stats) = Registry::load_str("[known]\ncc:33=\n");
        assert_eq!(registry.known("cc:33"), Some(""));
        assert_eq!(registry.protection(""), Some(ProtectionLevel::KnownOnly));
        assert_eq!(stats.inserted, 1);
    }

    #[test]
    fn ssid_keeps_inner_whitespace_and_case() {
        let (registry, _) = Registry::load_str("AA:11= Corp Net\r\n");
        assert_eq!(registry.authorized("AA:11"), Some(" Corp Net"));
        assert_eq!(registry.authorized("aa:11"), None);
    }

    #[test]
    fn load_file_reads_registry_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[authorized]\naa:11=CorpNet\n[known]\nbb:22=GuestNet").unwrap();

        let (registry, stats) = Registry::load_file(file.path()).unwrap();
        assert_eq!(registry.len_authorized(), 1);
        assert_eq!(registry.len_known(), 1);
        assert_eq!(stats.inserted, 2);
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ini");

        let err = Registry::load_file(&path).unwrap_err();
        assert!(matches!(
            err,
            SourceError::SourceUnavailable { kind: SourceKind::Registry, .. }
        ));
    }
}
