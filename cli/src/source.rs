//! # Scan Sources
//!
//! Where the text of a wireless scan comes from. The engine only ever sees the text;
//! obtaining it (and giving up on it) is the job of the sources below.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, anyhow, ensure};
use apsentry_common::error::{SourceError, SourceKind};
use async_trait::async_trait;
use tokio::process::Command;

#[async_trait]
pub trait ScanSource: Send + Sync {
    /// Human readable origin of the scan, used in progress messages.
    fn describe(&self) -> String;

    /// Produces the complete scan dump.
    async fn capture(&self) -> anyhow::Result<String>;
}

/// A scan dump saved to disk earlier.
pub struct CaptureFile {
    path: PathBuf,
}

impl CaptureFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScanSource for CaptureFile {
    fn describe(&self) -> String {
        format!("capture file {}", self.path.display())
    }

    async fn capture(&self) -> anyhow::Result<String> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::SourceUnavailable {
                kind: SourceKind::Scan,
                path: self.path.clone(),
                source,
            })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// A live scan, run as an external command and bounded by a timeout.
pub struct ScanCommand {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ScanCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// `iw dev <interface> scan`, which usually needs root.
    pub fn iw(interface: &str, timeout: Duration) -> Self {
        let args = ["dev", interface, "scan"].map(String::from).to_vec();
        Self::new("iw", args, timeout)
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

#[async_trait]
impl ScanSource for ScanCommand {
    fn describe(&self) -> String {
        format!("`{}`", self.command_line())
    }

    async fn capture(&self) -> anyhow::Result<String> {
        let run = Command::new(&self.program)
            .args(&self.args)
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| {
                anyhow!(
                    "{} did not finish within {}s",
                    self.describe(),
                    self.timeout.as_secs_f64()
                )
            })?
            .with_context(|| format!("failed to run {}", self.describe()))?;

        ensure!(
            output.status.success(),
            "{} exited with {}: {}",
            self.describe(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
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
