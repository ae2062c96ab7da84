pub mod audit;
pub mod registry;

use std::path::PathBuf;

use apsentry_common::config::{Config, TrailingBlock};
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "apsentry")]
#[command(about = "Detects rogue wireless access points.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less (-q hides banners and headers, -qq only prints the summary)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Print more diagnostics (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify the access points of a scan against a registry
    #[command(alias = "a")]
    Audit(AuditArgs),
    /// Load a registry and report what it contains
    #[command(alias = "r")]
    Registry { path: PathBuf },
}

#[derive(Args)]
pub struct AuditArgs {
    /// Registry of authorized and known access points
    #[arg(short, long)]
    pub registry: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Seconds to wait for a live scan
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Drop the last block of the scan; only a following BSS line closes a block
    #[arg(long)]
    pub legacy_trailing: bool,

    /// Write the report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Look up the vendor of every reported BSSID
    #[arg(long)]
    pub vendors: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Read a saved scan dump
    #[arg(short = 'f', long)]
    pub capture: Option<PathBuf>,

    /// Run a live scan on this wireless interface
    #[arg(short, long)]
    pub interface: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let mut cfg = Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            ..Config::default()
        };

        if let Commands::Audit(args) = &self.command {
            cfg.json = args.json;
            cfg.vendors = args.vendors;
            if args.legacy_trailing {
                cfg.trailing_block = TrailingBlock::Drop;
            }
        }

        cfg
    }
}
