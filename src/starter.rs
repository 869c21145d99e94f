//! Starter schema and query files.
//!
//! Templates are picked by engine and written under the resolved queries and
//! schema directories, which must stay inside the project root.
use crate::error::ConfigError;
use crate::input::{is_contained_relative, InputRecord};
use crate::templates;
use crate::types::Engine;
use std::fs;
use std::path::{Path, PathBuf};

pub const QUERIES_FILE_NAME: &str = "users.sql";
pub const SCHEMA_FILE_NAME: &str = "001_users_table.sql";

/// Starter templates for one engine.
pub struct StarterTemplates {
    pub queries: &'static str,
    pub schema: &'static str,
}

pub fn templates_for(engine: Engine) -> StarterTemplates {
    match engine {
        Engine::Postgresql => StarterTemplates {
            queries: templates::POSTGRESQL_USERS_SQL,
            schema: templates::POSTGRESQL_USERS_TABLE_SQL,
        },
        Engine::Mysql => StarterTemplates {
            queries: templates::MYSQL_USERS_SQL,
            schema: templates::MYSQL_USERS_TABLE_SQL,
        },
        Engine::Sqlite => StarterTemplates {
            queries: templates::SQLITE_USERS_SQL,
            schema: templates::SQLITE_USERS_TABLE_SQL,
        },
    }
}

/// Join `dir` onto the absolute `root`, refusing absolute or escaping paths.
pub fn resolve_under(root: &Path, field: &str, dir: &str) -> Result<PathBuf, ConfigError> {
    let trimmed = dir.trim();
    if trimmed.is_empty() || !is_contained_relative(trimmed) {
        return Err(ConfigError::invalid_path(field, dir));
    }
    if !root.is_absolute() {
        return Err(ConfigError::invalid_path("root", root.display().to_string()));
    }
    Ok(root.join(trimmed))
}

/// Write the starter query and schema files. Existing files are kept unless
/// `force` is set. Returns the paths actually written.
pub fn write_starter_files(
    root: &Path,
    input: &InputRecord,
    force: bool,
) -> Result<Vec<PathBuf>, ConfigError> {
    let templates = templates_for(input.database.engine);
    let queries_dir = resolve_under(root, "output.queries_dir", &input.output.queries_dir)?;
    let schema_dir = resolve_under(root, "output.schema_dir", &input.output.schema_dir)?;

    let mut written = Vec::new();
    for (path, contents) in [
        (queries_dir.join(QUERIES_FILE_NAME), templates.queries),
        (schema_dir.join(SCHEMA_FILE_NAME), templates.schema),
    ] {
        if path.is_file() && !force {
            tracing::info!(path = %path.display(), "starter file exists; skipping");
            continue;
        }
        write_file(&path, contents)?;
        written.push(path);
    }
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| ConfigError::file_write(parent, err))?;
    }
    fs::write(path, contents.as_bytes()).map_err(|err| ConfigError::file_write(path, err))?;
    tracing::info!(path = %path.display(), "wrote starter file");
    Ok(())
}
