use crate::cli::SynthArgs;
use anyhow::{Context, Result};
use sqlc_wizard::document::Config;
use sqlc_wizard::input::{InputRecord, Overrides};
use sqlc_wizard::presets;
use sqlc_wizard::synth;
use sqlc_wizard::types::Archetype;
use sqlc_wizard::validate::{validate, ValidationResult};
use sqlc_wizard::ConfigError;
use std::fs;
use std::path::Path;

/// A synthesized and validated config plus the input record it came from.
pub(crate) struct SynthContext {
    pub(crate) archetype: Archetype,
    pub(crate) input: InputRecord,
    pub(crate) config: Config,
    pub(crate) validation: ValidationResult,
}

impl SynthContext {
    /// Run the pipeline for `args`, failing when the document has errors.
    pub(crate) fn load(args: &SynthArgs) -> Result<Self> {
        let overrides = load_overrides(args)?;
        let archetype = args.archetype;
        let input = synth::resolve_input(archetype, &overrides)?;
        let preset = presets::preset(archetype)?;
        let config = synth::build_config(&input, preset);
        let validation = validate(Some(&config));
        report_findings(&validation);
        if !validation.is_valid() {
            return Err(ConfigError::ValidationFailed(validation).into());
        }
        tracing::info!(
            archetype = %archetype,
            engine = %input.database.engine,
            warnings = validation.warnings.len(),
            "synthesized config"
        );
        Ok(Self {
            archetype,
            input,
            config,
            validation,
        })
    }
}

fn load_overrides(args: &SynthArgs) -> Result<Overrides> {
    let flags = Overrides::from(args.overrides.clone());
    let Some(path) = args.answers.as_deref() else {
        return Ok(flags);
    };
    Ok(load_answers(path)?.layered(flags))
}

fn load_answers(path: &Path) -> Result<Overrides> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    if text.trim().is_empty() {
        return Ok(Overrides::default());
    }
    let answers: Overrides =
        serde_yaml::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded answers file");
    Ok(answers)
}

/// Print findings to stderr, warnings first.
pub(crate) fn report_findings(result: &ValidationResult) {
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }
    for error in &result.errors {
        eprintln!("error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OverrideArgs;

    fn synth_args(archetype: Archetype, answers: Option<&Path>) -> SynthArgs {
        SynthArgs {
            archetype,
            answers: answers.map(Path::to_path_buf),
            overrides: OverrideArgs::default(),
        }
    }

    #[test]
    fn answers_file_is_layered_under_flags() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("answers.yaml");
        fs::write(&path, "project_name: shop\npackage_name: store\nengine: mysql\n")
            .expect("write answers");

        let mut args = synth_args(Archetype::Microservice, Some(&path));
        args.overrides.package_name = Some("orders".to_string());
        let ctx = SynthContext::load(&args).expect("load");
        assert_eq!(ctx.input.project.name, "shop");
        assert_eq!(ctx.input.package.name, "orders");
        assert_eq!(ctx.config.sql[0].engine, "mysql");
        assert_eq!(ctx.archetype, Archetype::Microservice);
    }

    #[test]
    fn unknown_answer_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("answers.yaml");
        fs::write(&path, "project: shop\n").expect("write answers");
        let err = SynthContext::load(&synth_args(Archetype::Hobby, Some(&path)))
            .err()
            .expect("unknown key");
        assert!(format!("{err:#}").contains("answers.yaml"));
    }

    #[test]
    fn empty_answers_file_means_no_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("answers.yaml");
        fs::write(&path, "\n").expect("write answers");
        let ctx = SynthContext::load(&synth_args(Archetype::Hobby, Some(&path))).expect("load");
        assert_eq!(ctx.config.sql[0].name, "app");
    }

    #[test]
    fn input_check_failures_surface_as_validation_errors() {
        let mut args = synth_args(Archetype::Hobby, None);
        args.overrides.project_name = Some("x".to_string());
        let err = SynthContext::load(&args).err().expect("short name");
        let config_err = err.downcast_ref::<ConfigError>().expect("config error");
        assert_eq!(config_err.kind(), sqlc_wizard::ErrorKind::ValidationFailed);
    }
}
