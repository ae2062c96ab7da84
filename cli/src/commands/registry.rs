use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use apsentry_common::config::Config;
use apsentry_core::registry::{LoadStats, Registry};
use colored::*;
use tracing::warn;

use crate::terminal::{colors, print};

pub fn registry(path: &Path, cfg: &Config) -> anyhow::Result<ExitCode> {
    let (registry, stats) = Registry::load_file(path)
        .with_context(|| format!("loading registry {}", path.display()))?;

    print::header("registry", cfg.quiet);
    print::GLOBAL_KEY_WIDTH.set(12);
    print::aligned_line("Authorized", registry.len_authorized().to_string());
    print::aligned_line("Known", registry.len_known().to_string());
    print::aligned_line("Lines", stats.content_lines.to_string());
    print::aligned_line("Inserted", stats.inserted.to_string());
    print::aligned_line("Duplicates", stats.duplicates.to_string());
    print::aligned_line("Cross-listed", count_value(stats.cross_listed));
    print::aligned_line("Malformed", count_value(stats.malformed.len()));

    for malformed in &stats.malformed {
        print::print_status(format!(
            "line {}: {}",
            malformed.line.to_string().color(colors::ACCENT),
            malformed.content
        ));
    }

    Ok(ExitCode::SUCCESS)
}

fn count_value(count: usize) -> ColoredString {
    if count == 0 {
        count.to_string().color(colors::TEXT_DEFAULT)
    } else {
        count.to_string().color(colors::HIGH).bold()
    }
}

/// Summarises load problems the registry loader already logged line by line.
pub fn warn_about_load(stats: &LoadStats) {
    if !stats.malformed.is_empty() {
        warn!("{} registry lines were ignored as malformed", stats.malformed.len());
    }
    if stats.cross_listed > 0 {
        warn!(
            "{} BSSIDs are both authorized and known, authorized rules take precedence",
            stats.cross_listed
        );
    }
}
