use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Context;
use apsentry_common::config::Config;
use apsentry_common::finding::Severity;
use apsentry_common::success;
use apsentry_common::vendors::VendorRepository;
use apsentry_core::audit::{Audit, audit_str};
use apsentry_core::registry::Registry;
use apsentry_core::vendors::MacOuiRepo;
use colored::*;
use tracing::{debug, warn};

use crate::commands::AuditArgs;
use crate::commands::registry::warn_about_load;
use crate::mprint;
use crate::source::{CaptureFile, ScanCommand, ScanSource};
use crate::terminal::{colors, format, print, spinner};

/// Exit status when at least one high severity finding was reported.
const EXIT_HIGH_FINDINGS: u8 = 2;

pub async fn audit(args: AuditArgs, cfg: &Config) -> anyhow::Result<ExitCode> {
    let (registry, stats) = Registry::load_file(&args.registry)
        .with_context(|| format!("loading registry {}", args.registry.display()))?;
    warn_about_load(&stats);
    if registry.is_empty() {
        warn!("Registry is empty, every access point will be reported as new");
    }

    let source: Box<dyn ScanSource> = match (args.source.capture, args.source.interface) {
        (Some(path), _) => Box::new(CaptureFile::new(path)),
        (None, Some(interface)) => {
            Box::new(ScanCommand::iw(&interface, Duration::from_secs(args.timeout)))
        }
        (None, None) => anyhow::bail!("no scan source given"),
    };

    let start_time: Instant = Instant::now();
    let scan: String = capture(source.as_ref(), cfg).await?;
    let audit: Audit = audit_str(&registry, &scan, cfg.trailing_block);
    debug!("{} lines of the scan were not recognised", audit.parse.skipped);

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&audit.report)?);
    } else {
        audit_ends(&audit, start_time.elapsed(), cfg);
    }

    if audit.report.high.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_HIGH_FINDINGS))
    }
}

async fn capture(source: &dyn ScanSource, cfg: &Config) -> anyhow::Result<String> {
    let visible: bool = cfg.quiet == 0 && !cfg.json;
    let pb = spinner::start_spinner(format!("Reading scan from {}", source.describe()), visible);
    let result = source.capture().await;
    pb.finish_and_clear();
    result
}

fn audit_ends(audit: &Audit, total_time: Duration, cfg: &Config) {
    let report = &audit.report;
    if report.total() == 0 {
        print::header("ZERO ACCESS POINTS DETECTED", cfg.quiet);
        print::no_results();
        return;
    }

    if cfg.quiet < 2 {
        let vendors: Option<MacOuiRepo> = cfg.vendors.then_some(MacOuiRepo);
        let vendors: Option<&dyn VendorRepository> =
            vendors.as_ref().map(|repo| repo as &dyn VendorRepository);
        for severity in Severity::ALL {
            print_bucket(audit, severity, vendors, cfg);
        }
    }

    print_summary(audit, total_time, cfg);
}

fn print_bucket(
    audit: &Audit,
    severity: Severity,
    vendors: Option<&dyn VendorRepository>,
    cfg: &Config,
) {
    let findings = audit.report.bucket(severity);
    if findings.is_empty() {
        return;
    }

    print::header(&format!("{severity} ({})", findings.len()), cfg.quiet);
    for (idx, finding) in findings.iter().enumerate() {
        let title: ColoredString = finding.title.color(format::severity_color(severity));
        print::tree_head(idx, &title);
        print::as_tree_one_level(format::finding_to_details(finding, vendors));
        if idx + 1 != findings.len() {
            mprint!();
        }
    }
}

fn print_summary(audit: &Audit, total_time: Duration, cfg: &Config) {
    let report = &audit.report;
    let total: ColoredString = format!("{} access points", report.total()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString = &format!("Audit Complete: {total} classified in {total_time}")
        .color(colors::TEXT_DEFAULT);

    let counters: String = format!(
        "{} authorized, {} known, {} new, {} high severity",
        report.authorized,
        report.known,
        report.new,
        report.high.len().to_string().color(colors::HIGH).bold()
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
            print::centerln(&counters);
            print::end_of_program();
        }
        _ => {
            mprint!();
            success!("{}", output);
            success!("{}", counters);
        }
    }
}
