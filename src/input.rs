//! The input record fed to the synthesis pipeline, and caller overrides.
//!
//! Presets produce a complete [`InputRecord`]; callers layer an [`Overrides`]
//! record on top. Empty strings and absent fields leave the preset value.
use crate::error::ConfigError;
use crate::types::{json_case_style_from, Archetype, Engine, JsonCaseStyle};
use crate::validate::{Finding, ValidationResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Component, Path};
use std::sync::OnceLock;

pub const PROJECT_NAME_MIN_CHARS: usize = 2;
pub const PROJECT_NAME_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputRecord {
    pub project: ProjectIdentity,
    pub package: PackageIdentity,
    pub database: DatabaseSelection,
    pub output: OutputPaths,
    pub emit: EmitOptions,
    pub validation: StrictChecks,
    pub safety: SafetyToggles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIdentity {
    pub name: String,
    pub archetype: Archetype,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageIdentity {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub import_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_tags: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSelection {
    pub engine: Engine,
    /// Connection URL or a placeholder such as `${DATABASE_URL}`.
    pub url: String,
    pub flags: DatabaseFlags,
    /// Use the pgx/v5 driver (PostgreSQL only).
    pub pgx: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatabaseFlags {
    pub managed: bool,
    pub uuids: bool,
    pub json: bool,
    pub arrays: bool,
    pub full_text: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    pub base_dir: String,
    pub queries_dir: String,
    pub schema_dir: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmitOptions {
    pub json_tags: bool,
    pub prepared_queries: bool,
    pub interface: bool,
    pub empty_slices: bool,
    pub result_pointers: bool,
    pub params_pointers: bool,
    pub enum_valid_method: bool,
    pub all_enum_values: bool,
    pub json_tags_case_style: Option<JsonCaseStyle>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StrictChecks {
    pub strict_functions: bool,
    pub strict_order_by: bool,
}

/// Safety toggles, in rule catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SafetyToggles {
    pub no_select_star: bool,
    pub require_where: bool,
    pub no_drop_table: bool,
    pub no_truncate: bool,
    pub require_limit: bool,
}

impl SafetyToggles {
    pub const ALL_ON: SafetyToggles = SafetyToggles {
        no_select_star: true,
        require_where: true,
        no_drop_table: true,
        no_truncate: true,
        require_limit: true,
    };

    pub const OFF: SafetyToggles = SafetyToggles {
        no_select_star: false,
        require_where: false,
        no_drop_table: false,
        no_truncate: false,
        require_limit: false,
    };
}

impl InputRecord {
    /// Structural checks on a resolved record: name bounds, package identifier,
    /// relative and pairwise distinct output paths.
    pub fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        let name_chars = self.project.name.trim().chars().count();
        if !(PROJECT_NAME_MIN_CHARS..=PROJECT_NAME_MAX_CHARS).contains(&name_chars) {
            result.errors.push(Finding::new(
                "project.name",
                format!(
                    "project name must be {PROJECT_NAME_MIN_CHARS}-{PROJECT_NAME_MAX_CHARS} characters (got {name_chars})"
                ),
            ));
        }

        let package = self.package.name.trim();
        if package.is_empty() {
            result
                .errors
                .push(Finding::new("package.name", "package name is required"));
        } else if !is_go_package_name(package) {
            result.errors.push(Finding::new(
                "package.name",
                format!("{package:?} is not a valid Go package name"),
            ));
        }

        if self.database.url.trim().is_empty() {
            result.errors.push(Finding::new(
                "database.url",
                "database URL or placeholder is required",
            ));
        }

        let dirs = [
            ("output.base_dir", self.output.base_dir.as_str()),
            ("output.queries_dir", self.output.queries_dir.as_str()),
            ("output.schema_dir", self.output.schema_dir.as_str()),
        ];
        let mut seen = BTreeSet::new();
        for (field, dir) in dirs {
            let dir = dir.trim();
            if dir.is_empty() {
                result
                    .errors
                    .push(Finding::new(field, "output path must not be empty"));
                continue;
            }
            if !is_contained_relative(dir) {
                result.errors.push(Finding::new(
                    field,
                    format!("{dir:?} must be a relative path without '..'"),
                ));
            }
            if !seen.insert(normalize_dir(dir)) {
                result.errors.push(Finding::new(
                    field,
                    format!("{dir:?} duplicates another output path"),
                ));
            }
        }

        result
    }
}

pub(crate) fn is_go_package_name(name: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

pub(crate) fn is_contained_relative(dir: &str) -> bool {
    let path = Path::new(dir);
    !path.is_absolute()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

pub(crate) fn normalize_dir(dir: &str) -> String {
    dir.trim()
        .trim_start_matches("./")
        .trim_end_matches('/')
        .to_string()
}

/// Caller-supplied overrides. Every field is optional; `None` and blank
/// strings keep the preset value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Overrides {
    pub project_name: Option<String>,
    pub package_name: Option<String>,
    pub import_path: Option<String>,
    pub build_tags: Option<String>,

    pub engine: Option<Engine>,
    pub database_url: Option<String>,
    pub managed: Option<bool>,
    pub uuids: Option<bool>,
    pub json: Option<bool>,
    pub arrays: Option<bool>,
    pub full_text: Option<bool>,
    pub pgx: Option<bool>,

    pub base_dir: Option<String>,
    pub queries_dir: Option<String>,
    pub schema_dir: Option<String>,

    pub emit_json_tags: Option<bool>,
    pub emit_prepared_queries: Option<bool>,
    pub emit_interface: Option<bool>,
    pub emit_empty_slices: Option<bool>,
    pub emit_result_struct_pointers: Option<bool>,
    pub emit_params_struct_pointers: Option<bool>,
    pub emit_enum_valid_method: Option<bool>,
    pub emit_all_enum_values: Option<bool>,
    pub json_tags_case_style: Option<String>,

    pub strict_function_checks: Option<bool>,
    pub strict_order_by: Option<bool>,

    pub no_select_star: Option<bool>,
    pub require_where: Option<bool>,
    pub no_drop_table: Option<bool>,
    pub no_truncate: Option<bool>,
    pub require_limit: Option<bool>,
}

macro_rules! layer_fields {
    ($base:ident, $top:ident; $($field:ident),* $(,)?) => {
        Overrides {
            $($field: $top.$field.or($base.$field),)*
        }
    };
}

impl Overrides {
    /// Layer `top` over `self`; fields set in `top` win.
    pub fn layered(self, top: Overrides) -> Overrides {
        let base = self;
        layer_fields!(base, top;
            project_name, package_name, import_path, build_tags,
            engine, database_url, managed, uuids, json, arrays, full_text, pgx,
            base_dir, queries_dir, schema_dir,
            emit_json_tags, emit_prepared_queries, emit_interface, emit_empty_slices,
            emit_result_struct_pointers, emit_params_struct_pointers,
            emit_enum_valid_method, emit_all_enum_values, json_tags_case_style,
            strict_function_checks, strict_order_by,
            no_select_star, require_where, no_drop_table, no_truncate, require_limit,
        )
    }

    /// Overlay these overrides onto `record`, field by field.
    pub fn apply(&self, record: &mut InputRecord) -> Result<(), ConfigError> {
        overlay_string(&mut record.project.name, &self.project_name);
        overlay_string(&mut record.package.name, &self.package_name);
        overlay_string(&mut record.package.import_path, &self.import_path);
        if let Some(tags) = non_blank(&self.build_tags) {
            record.package.build_tags = Some(tags.to_string());
        }

        if let Some(engine) = self.engine {
            record.database.engine = engine;
        }
        overlay_string(&mut record.database.url, &self.database_url);
        let flags = &mut record.database.flags;
        overlay_bool(&mut flags.managed, self.managed);
        overlay_bool(&mut flags.uuids, self.uuids);
        overlay_bool(&mut flags.json, self.json);
        overlay_bool(&mut flags.arrays, self.arrays);
        overlay_bool(&mut flags.full_text, self.full_text);
        overlay_bool(&mut record.database.pgx, self.pgx);

        overlay_string(&mut record.output.base_dir, &self.base_dir);
        overlay_string(&mut record.output.queries_dir, &self.queries_dir);
        overlay_string(&mut record.output.schema_dir, &self.schema_dir);

        let emit = &mut record.emit;
        overlay_bool(&mut emit.json_tags, self.emit_json_tags);
        overlay_bool(&mut emit.prepared_queries, self.emit_prepared_queries);
        overlay_bool(&mut emit.interface, self.emit_interface);
        overlay_bool(&mut emit.empty_slices, self.emit_empty_slices);
        overlay_bool(&mut emit.result_pointers, self.emit_result_struct_pointers);
        overlay_bool(&mut emit.params_pointers, self.emit_params_struct_pointers);
        overlay_bool(&mut emit.enum_valid_method, self.emit_enum_valid_method);
        overlay_bool(&mut emit.all_enum_values, self.emit_all_enum_values);
        if let Some(style) = non_blank(&self.json_tags_case_style) {
            emit.json_tags_case_style = Some(json_case_style_from(style)?);
        }

        overlay_bool(
            &mut record.validation.strict_functions,
            self.strict_function_checks,
        );
        overlay_bool(&mut record.validation.strict_order_by, self.strict_order_by);

        let safety = &mut record.safety;
        overlay_bool(&mut safety.no_select_star, self.no_select_star);
        overlay_bool(&mut safety.require_where, self.require_where);
        overlay_bool(&mut safety.no_drop_table, self.no_drop_table);
        overlay_bool(&mut safety.no_truncate, self.no_truncate);
        overlay_bool(&mut safety.require_limit, self.require_limit);
        Ok(())
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn overlay_string(target: &mut String, value: &Option<String>) {
    if let Some(value) = non_blank(value) {
        *target = value.to_string();
    }
}

fn overlay_bool(target: &mut bool, value: Option<bool>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
