use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod project;
mod workflow;

use cli::{Command, RootArgs};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Init(args) => workflow::run_init(&args),
        Command::Generate(args) => workflow::run_generate(&args),
        Command::Validate(args) => workflow::run_validate(&args),
        Command::Doctor(args) => workflow::run_doctor(&args),
        Command::Presets(args) => workflow::run_presets(&args),
    }
}

/// Logs go to stderr so `generate` and `--json` output stay machine-readable.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
