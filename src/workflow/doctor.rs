//! Workflow doctor step.
//!
//! Doctor goes one step past validate: it checks that the directories the
//! config names exist on disk and that an `sqlc` binary is on PATH.
use super::report_findings;
use crate::cli::DoctorArgs;
use crate::project::config_base_dir;
use anyhow::{anyhow, Result};
use sqlc_wizard::document::Config;
use sqlc_wizard::validate::{validate, Finding, ValidationResult};
use sqlc_wizard::yaml::load_config;
use std::path::Path;

/// Run the doctor step; missing directories are errors, a missing binary is not.
pub fn run_doctor(args: &DoctorArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let mut result = validate(Some(&config));
    check_directories(&config, &config_base_dir(&args.config), &mut result);
    check_sqlc_binary(&mut result);

    report_findings(&result);
    if !result.is_valid() {
        return Err(anyhow!(
            "doctor found {} problem(s) in {}",
            result.errors.len(),
            args.config.display()
        ));
    }
    println!("{}: ok", args.config.display());
    Ok(())
}

fn check_directories(config: &Config, base: &Path, result: &mut ValidationResult) {
    for (idx, section) in config.sql.iter().enumerate() {
        for (label, paths) in [("queries", &section.queries), ("schema", &section.schema)] {
            for (pos, entry) in paths.iter().enumerate() {
                if entry.trim().is_empty() {
                    continue;
                }
                let path = base.join(entry);
                if !path.exists() {
                    result.errors.push(Finding::new(
                        format!("sql[{idx}].{label}[{pos}]"),
                        format!("{} does not exist", path.display()),
                    ));
                }
            }
        }
    }
}

fn check_sqlc_binary(result: &mut ValidationResult) {
    match which::which("sqlc") {
        Ok(path) => tracing::info!(path = %path.display(), "found sqlc"),
        Err(_) => result.warnings.push(Finding::new(
            "sqlc",
            "sqlc binary not found on PATH; install it to generate code",
        )),
    }
}
