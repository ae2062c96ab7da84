use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain the text of a registry or of a scan.
///
/// Fatal to the load that hit it, but always handed back to the caller.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{kind} source {} is unavailable: {source}", path.display())]
    SourceUnavailable {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{kind} source could not be read: {source}")]
    ReadFailed {
        kind: SourceKind,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::SourceUnavailable { kind, .. } | Self::ReadFailed { kind, .. } => *kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Registry,
    Scan,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Registry => write!(f, "registry"),
            SourceKind::Scan => write!(f, "scan"),
        }
    }
}

/// A registry line that is neither a comment, a section header nor a `BSSID=SSID` entry.
///
/// Recorded and reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed line {line}: {content:?}")]
pub struct MalformedLine {
    /// 1-based position in the source.
    pub line: usize,
    pub content: String,
}
