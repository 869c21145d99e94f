use crate::cli::PresetsArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use sqlc_wizard::presets;

#[derive(Serialize)]
struct PresetSummary {
    archetype: &'static str,
    description: &'static str,
    engine: String,
    package: String,
    base_dir: String,
    features: &'static [&'static str],
}

/// List the archetype presets as text or JSON.
pub fn run_presets(args: &PresetsArgs) -> Result<()> {
    let summaries: Vec<PresetSummary> = presets::list()
        .map(|preset| {
            let defaults = preset.defaults();
            PresetSummary {
                archetype: preset.name(),
                description: preset.description(),
                engine: defaults.database.engine.to_string(),
                package: defaults.package.name,
                base_dir: defaults.output.base_dir,
                features: preset.feature_tags(),
            }
        })
        .collect();

    if args.json {
        let text = serde_json::to_string_pretty(&summaries).context("serialize presets")?;
        println!("{text}");
        return Ok(());
    }
    for summary in &summaries {
        println!(
            "{:<13} {:<10} {}",
            summary.archetype, summary.engine, summary.description
        );
        if !summary.features.is_empty() {
            println!("{:<13} features: {}", "", summary.features.join(", "));
        }
    }
    Ok(())
}
