mod commands;
mod source;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, audit, registry};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(commands.verbose, cfg.quiet, cfg.json);
    print::banner(cfg.no_banner || cfg.json, cfg.quiet);

    match commands.command {
        Commands::Audit(args) => {
            print::header("starting audit", cfg.quiet);
            audit::audit(args, &cfg).await
        }
        Commands::Registry { path } => registry::registry(&path, &cfg),
    }
}
