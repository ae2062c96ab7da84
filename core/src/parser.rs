//! # Scan Parser
//!
//! Turns the text dump of a wireless scan (as printed by `iw dev <iface> scan`) into
//! [`AccessPoint`] observations:
//!
//! ```text
//! BSS 00:11:22:33:44:55(on wlan0) -- associated
//!         freq: 2412
//!         last seen: 340 ms ago
//!         SSID: CorpNet
//! ```
//!
//! A block is opened by a `BSS <bssid>(` line and closed by the next one. What happens to
//! the block still open at the end of the input is decided by [`TrailingBlock`].

use std::sync::LazyLock;

use apsentry_common::config::TrailingBlock;
use apsentry_common::network::access_point::AccessPoint;
use regex::Regex;
use tracing::trace;

static BSS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^BSS ([^\s(]+)\(").expect("valid BSS pattern"));

static SSID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*SSID: (.*)$").expect("valid SSID pattern"));

static LAST_SEEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*last seen: (.*)$").expect("valid last seen pattern"));

static FREQ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*freq: (\d+)").expect("valid freq pattern"));

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines that matched no pattern, or a field pattern outside of a block.
    pub skipped: usize,
    /// Observations handed out.
    pub blocks: usize,
}

#[derive(Debug)]
enum State {
    Outside,
    InBlock(AccessPoint),
    Finished,
}

/// Single-pass iterator over the access points of a scan dump.
pub struct ScanParser<I> {
    lines: I,
    state: State,
    trailing: TrailingBlock,
    stats: ParseStats,
}

impl<I, S> ScanParser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I, trailing: TrailingBlock) -> Self {
        Self {
            lines,
            state: State::Outside,
            trailing,
            stats: ParseStats::default(),
        }
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    /// Applies one line to the open block. Returns the block it closed, if any.
    fn consume(&mut self, line: &str) -> Option<AccessPoint> {
        if let Some(caps) = BSS_RE.captures(line) {
            let next = State::InBlock(AccessPoint::new(&caps[1]));
            return match std::mem::replace(&mut self.state, next) {
                State::InBlock(done) => Some(done),
                _ => None,
            };
        }

        let State::InBlock(ap) = &mut self.state else {
            self.stats.skipped += 1;
            return None;
        };

        if let Some(caps) = SSID_RE.captures(line) {
            ap.ssid = caps[1].to_string();
        } else if let Some(caps) = LAST_SEEN_RE.captures(line) {
            ap.last_seen = Some(caps[1].to_string());
        } else if let Some(freq) = FREQ_RE
            .captures(line)
            .and_then(|caps| caps[1].parse::<u32>().ok())
        {
            ap.frequency = Some(freq);
        } else {
            self.stats.skipped += 1;
        }
        None
    }

    fn emit(&mut self, ap: AccessPoint) -> Option<AccessPoint> {
        self.stats.blocks += 1;
        trace!("Parsed block for {}", ap.bssid);
        Some(ap)
    }
}

impl<I, S> Iterator for ScanParser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = AccessPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Finished) {
            return None;
        }

        while let Some(line) = self.lines.next() {
            if let Some(done) = self.consume(line.as_ref()) {
                return self.emit(done);
            }
        }

        match std::mem::replace(&mut self.state, State::Finished) {
            State::InBlock(last) if self.trailing == TrailingBlock::Emit => self.emit(last),
            State::InBlock(last) => {
                trace!("Dropping trailing block for {}", last.bssid);
                None
            }
            _ => None,
        }
    }
}

/// Convenience over an in-memory scan dump.
pub fn parse_str(text: &str, trailing: TrailingBlock) -> ScanParser<std::str::Lines<'_>> {
    ScanParser::new(text.lines(), trailing)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
