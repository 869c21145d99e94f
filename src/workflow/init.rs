//! Workflow init step.
//!
//! Init is the only step that writes: sqlc.yaml always, starter SQL files on
//! request. Nothing is written unless synthesis and validation both pass.
use super::SynthContext;
use crate::cli::InitArgs;
use crate::project::{display_path, ensure_project_root};
use anyhow::{anyhow, Result};
use sqlc_wizard::starter;
use sqlc_wizard::yaml::{self, CONFIG_FILE_NAME};

/// Run the init step and write `sqlc.yaml` under the project root.
pub fn run_init(args: &InitArgs) -> Result<()> {
    let ctx = SynthContext::load(&args.synth)?;
    let root = ensure_project_root(&args.dir, true)?;
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.is_file() && !args.force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        ));
    }

    yaml::write_config(&config_path, &ctx.config)?;
    eprintln!("wrote {}", display_path(&config_path, Some(&root)));

    if args.starter_files {
        let written = starter::write_starter_files(&root, &ctx.input, args.force)?;
        for path in &written {
            eprintln!("wrote {}", display_path(path, Some(&root)));
        }
    }
    if ctx.validation.has_warnings() {
        eprintln!(
            "{} (archetype {}): {} warning(s)",
            CONFIG_FILE_NAME,
            ctx.archetype,
            ctx.validation.warnings.len()
        );
    }
    Ok(())
}
