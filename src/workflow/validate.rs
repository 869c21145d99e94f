//! Workflow validate step.
//!
//! Validation loads an existing sqlc.yaml and reports findings without
//! rewriting it.
use super::report_findings;
use crate::cli::ValidateArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use sqlc_wizard::validate::{validate, Finding};
use sqlc_wizard::yaml::load_config;
use sqlc_wizard::ConfigError;

#[derive(Serialize)]
struct ValidateReport<'a> {
    config: String,
    valid: bool,
    errors: &'a [Finding],
    warnings: &'a [Finding],
}

/// Run the validate step; fails when the config has errors.
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let result = validate(Some(&config));
    tracing::info!(
        path = %args.config.display(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated config"
    );

    if args.json {
        let report = ValidateReport {
            config: args.config.display().to_string(),
            valid: result.is_valid(),
            errors: &result.errors,
            warnings: &result.warnings,
        };
        let text = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{text}");
    } else {
        report_findings(&result);
        if result.is_valid() {
            println!("{}: ok", args.config.display());
        }
    }

    if !result.is_valid() {
        return Err(ConfigError::ValidationFailed(result).into());
    }
    Ok(())
}
