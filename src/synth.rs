//! Synthesis pipeline: preset defaults + overrides -> config document.
//!
//! Order is fixed: preset defaults, then overrides, then derived fields, then
//! input checks, then document assembly. Nothing here touches the disk, so a
//! cancelled run simply drops the result.
use crate::document::{Config, Database, Gen, GoGen, SqlSection, CONFIG_VERSION};
use crate::engine;
use crate::error::ConfigError;
use crate::input::{InputRecord, Overrides};
use crate::paths::PathOrList;
use crate::presets::{self, Preset};
use crate::rules;
use crate::types::{Archetype, Engine};

/// Resolve the input record for `archetype` with `overrides` applied.
pub fn resolve_input(
    archetype: Archetype,
    overrides: &Overrides,
) -> Result<InputRecord, ConfigError> {
    let preset = presets::preset(archetype)?;
    let mut record = preset.defaults();
    overrides.apply(&mut record)?;
    derive_fields(&mut record, preset);

    let check = record.check();
    if !check.is_valid() {
        return Err(ConfigError::ValidationFailed(check));
    }
    tracing::debug!(
        archetype = %archetype,
        engine = %record.database.engine,
        base_dir = %record.output.base_dir,
        "resolved input record"
    );
    Ok(record)
}

/// Run the full pipeline for `archetype`.
pub fn synthesize(archetype: Archetype, overrides: &Overrides) -> Result<Config, ConfigError> {
    let record = resolve_input(archetype, overrides)?;
    let preset = presets::preset(archetype)?;
    Ok(build_config(&record, preset))
}

/// Same as [`synthesize`], for a raw archetype tag.
pub fn synthesize_tag(tag: &str, overrides: &Overrides) -> Result<Config, ConfigError> {
    let preset = presets::preset_by_tag(tag)?;
    synthesize(preset.archetype(), overrides)
}

fn derive_fields(record: &mut InputRecord, preset: &Preset) {
    if record.project.name.trim().is_empty() {
        record.project.name = preset.fallback_name().to_string();
    }
    record.project.name = record.project.name.trim().to_string();

    if record.output.base_dir.trim().is_empty() {
        record.output.base_dir = preset.default_base_dir().to_string();
    }
    let base = record.output.base_dir.trim().trim_end_matches('/').to_string();
    if record.output.queries_dir.trim().is_empty() {
        record.output.queries_dir = format!("{base}/queries");
    }
    if record.output.schema_dir.trim().is_empty() {
        record.output.schema_dir = format!("{base}/schema");
    }
    record.output.base_dir = base;

    if record.database.pgx && record.database.engine != Engine::Postgresql {
        tracing::warn!(
            engine = %record.database.engine,
            "pgx is only supported on postgresql; using database/sql"
        );
        record.database.pgx = false;
    }
}

fn resolved_build_tags(record: &InputRecord) -> String {
    let mut tags = record
        .package
        .build_tags
        .as_deref()
        .map(str::trim)
        .filter(|tags| !tags.is_empty())
        .unwrap_or_else(|| engine::build_tags(record.database.engine))
        .to_string();
    if record.database.pgx && !tags.split(',').any(|tag| tag.trim() == "pgx") {
        tags.push_str(",pgx");
    }
    tags
}

/// Assemble the config document for an already-resolved record.
pub fn build_config(record: &InputRecord, preset: &Preset) -> Config {
    let db = &record.database;
    let emit = &record.emit;

    let go = GoGen {
        package: record.package.name.clone(),
        out: record.output.base_dir.clone(),
        sql_package: engine::driver_hint(db.engine, db.pgx).to_string(),
        build_tags: resolved_build_tags(record),
        emit_json_tags: emit.json_tags,
        emit_prepared_queries: emit.prepared_queries,
        emit_interface: emit.interface,
        emit_empty_slices: emit.empty_slices,
        emit_result_struct_pointers: emit.result_pointers,
        emit_params_struct_pointers: emit.params_pointers,
        emit_enum_valid_method: emit.enum_valid_method,
        emit_all_enum_values: emit.all_enum_values,
        json_tags_case_style: emit.json_tags_case_style.map(|style| style.as_str().to_string()),
        overrides: engine::type_overrides(db.engine, &db.flags),
        rename: preset.rename_map(),
        ..GoGen::default()
    };

    let database = (!db.url.trim().is_empty() || db.flags.managed).then(|| Database {
        uri: db.url.trim().to_string(),
        managed: db.flags.managed,
    });

    let section = SqlSection {
        name: record.project.name.clone(),
        engine: db.engine.as_str().to_string(),
        queries: PathOrList::single(record.output.queries_dir.clone()),
        schema: PathOrList::single(record.output.schema_dir.clone()),
        database,
        gen: Gen {
            go: Some(go),
            json: None,
        },
        strict_function_checks: record.validation.strict_functions,
        strict_order_by: record.validation.strict_order_by,
        codegen: Vec::new(),
        rules: rules::safety_rules(&record.safety),
    };
    tracing::debug!(
        section = %section.name,
        rules = section.rules.len(),
        "assembled sql section"
    );

    Config {
        version: CONFIG_VERSION.to_string(),
        cloud: None,
        sql: vec![section],
        rules: Vec::new(),
    }
}

#[cfg(test)]
#[path = "synth_tests.rs"]
mod tests;
