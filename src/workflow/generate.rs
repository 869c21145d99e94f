use super::SynthContext;
use crate::cli::GenerateArgs;
use anyhow::Result;
use sqlc_wizard::yaml;
use std::io::Write;

/// Print the synthesized config to stdout without touching the disk.
pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let ctx = SynthContext::load(&args.synth)?;
    let text = yaml::to_yaml(&ctx.config)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
