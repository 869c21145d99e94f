//! Structural and cross-field checks on a config document.
//!
//! Findings are split into errors, which block writing the file, and
//! warnings, which only advise. Validation is pure.
use crate::document::{Config, GoGen, SqlSection, SUPPORTED_VERSIONS};
use crate::engine::PGX_V5;
use crate::input::is_go_package_name;
use crate::types::{is_valid_engine, is_valid_json_case_style, Engine};
use serde::Serialize;
use std::fmt;

/// One finding, addressed by a dotted field path such as `sql[0].gen.go.package`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub field: String,
    pub message: String,
}

impl Finding {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Finding::new(field, message));
    }

    fn warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Finding::new(field, message));
    }
}

pub fn validate(config: Option<&Config>) -> ValidationResult {
    let mut result = ValidationResult::default();
    let Some(config) = config else {
        result.error("config", "configuration cannot be nil");
        return result;
    };

    let version = config.version.trim();
    if version.is_empty() {
        result.error("version", "version is required");
    } else if !SUPPORTED_VERSIONS.contains(&version) {
        result.error(
            "version",
            format!("unsupported version {version:?} (expected \"1\" or \"2\")"),
        );
    }

    if config.sql.is_empty() {
        result.error("sql", "at least one sql section is required");
    }
    for (idx, section) in config.sql.iter().enumerate() {
        validate_section(&format!("sql[{idx}]"), section, &mut result);
    }

    result
}

fn validate_section(prefix: &str, section: &SqlSection, result: &mut ValidationResult) {
    if !is_valid_engine(&section.engine) {
        result.error(
            format!("{prefix}.engine"),
            format!(
                "engine {:?} must be one of postgresql, mysql, sqlite",
                section.engine
            ),
        );
    }
    if section.queries.is_empty() {
        result.error(format!("{prefix}.queries"), "queries path is required");
    }
    if section.schema.is_empty() {
        result.error(format!("{prefix}.schema"), "schema path is required");
    }
    if section.gen.is_empty() && section.codegen.is_empty() {
        result.error(
            format!("{prefix}.gen"),
            "at least one language generator is required",
        );
    }
    if let Some(go) = section.gen.go.as_ref() {
        validate_go(&format!("{prefix}.gen.go"), &section.engine, go, result);
    }
}

fn validate_go(prefix: &str, engine: &str, go: &GoGen, result: &mut ValidationResult) {
    let package = go.package.trim();
    if package.is_empty() {
        result.error(format!("{prefix}.package"), "package name is required");
    } else if !is_go_package_name(package) {
        result.warning(
            format!("{prefix}.package"),
            format!("{package:?} is not a conventional Go package name"),
        );
    }
    if go.out.trim().is_empty() {
        result.error(format!("{prefix}.out"), "output directory is required");
    }
    if let Some(style) = go.json_tags_case_style.as_deref() {
        if !is_valid_json_case_style(style) {
            result.error(
                format!("{prefix}.json_tags_case_style"),
                format!("{style:?} must be one of camel, pascal, snake"),
            );
        }
    }
    if go.sql_package.starts_with("pgx") && engine != Engine::Postgresql.as_str() {
        result.error(
            format!("{prefix}.sql_package"),
            format!("{PGX_V5} requires engine postgresql (got {engine:?})"),
        );
    }

    if !go.emit_interface {
        result.warning(
            format!("{prefix}.emit_interface"),
            "consider enabling emit_interface to generate a Querier interface for mocking",
        );
    }
    if !go.emit_prepared_queries {
        result.warning(
            format!("{prefix}.emit_prepared_queries"),
            "consider enabling emit_prepared_queries for better performance",
        );
    }
    if !go.emit_json_tags {
        result.warning(
            format!("{prefix}.emit_json_tags"),
            "consider enabling emit_json_tags for API serialization",
        );
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
