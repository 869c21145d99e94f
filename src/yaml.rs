//! YAML emission and parsing for `sqlc.yaml`.
//!
//! Emission relies on the document model for key order and omission rules;
//! maps are `BTreeMap`s so their keys come out sorted. Writes go through a
//! temp file in the target directory and are renamed into place.
use crate::document::Config;
use crate::error::ConfigError;
use crate::paths::PathOrList;
use std::fs;
use std::io::Write;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "sqlc.yaml";

pub fn to_yaml(config: &Config) -> Result<String, ConfigError> {
    let text = serde_yaml::to_string(config).map_err(ConfigError::ConfigSerializeFailed)?;
    Ok(indent_sequences(&quote_version(&normalize_text(&text))))
}

/// The emitter single-quotes `'2'`; sqlc's own docs write `"2"`.
fn quote_version(text: &str) -> String {
    let Some(rest) = text.strip_prefix("version: '") else {
        return text.to_string();
    };
    match rest.split_once("'\n") {
        Some((version, tail))
            if version
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.') =>
        {
            format!("version: \"{version}\"\n{tail}")
        }
        _ => text.to_string(),
    }
}

/// Indent block sequences one level under their parent key
/// (`key:\n  - item` rather than `key:\n- item`). Block scalar bodies are
/// shifted with their owner but never inspected.
fn indent_sequences(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    // Original indent of each sequence currently being shifted.
    let mut open: Vec<usize> = Vec::new();
    let mut scalar_owner: Option<usize> = None;

    for (pos, line) in lines.iter().enumerate() {
        let indent = indent_of(line);
        let body = &line[indent..];
        if let Some(owner) = scalar_owner {
            if body.is_empty() || indent > owner {
                push_shifted(&mut out, line, open.len());
                continue;
            }
            scalar_owner = None;
        }
        while let Some(&top) = open.last() {
            if top > indent || (top == indent && !body.starts_with("- ")) {
                open.pop();
            } else {
                break;
            }
        }
        push_shifted(&mut out, line, open.len());

        let (key_col, rest) = strip_item_markers(indent, body);
        if rest.ends_with(':') {
            if let Some(next) = lines.get(pos + 1) {
                if indent_of(next) == key_col && next.trim_start().starts_with("- ") {
                    open.push(key_col);
                }
            }
        } else if let Some(keyed) = block_scalar_header(rest) {
            scalar_owner = Some(if keyed { key_col } else { indent });
        }
    }
    out
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Column of the first key on a line, past any `- ` item markers.
fn strip_item_markers(indent: usize, body: &str) -> (usize, &str) {
    let mut col = indent;
    let mut rest = body;
    while let Some(next) = rest.strip_prefix("- ") {
        col += 2;
        rest = next;
    }
    (col, rest)
}

/// `Some(true)` for `key: |`, `Some(false)` for a bare `|` item.
fn block_scalar_header(rest: &str) -> Option<bool> {
    let token = rest.rsplit(' ').next()?;
    let mut chars = token.chars();
    if !matches!(chars.next(), Some('|' | '>'))
        || !chars.all(|c| c == '-' || c == '+' || c.is_ascii_digit())
    {
        return None;
    }
    if rest == token {
        return Some(false);
    }
    rest.strip_suffix(token)?.ends_with(": ").then_some(true)
}

fn push_shifted(out: &mut String, line: &str, depth: usize) {
    if !line.is_empty() {
        for _ in 0..depth {
            out.push_str("  ");
        }
    }
    out.push_str(line);
    out.push('\n');
}

/// Strip trailing whitespace and guarantee exactly one final newline.
fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for line in text.trim_end().lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Parse a document. `origin` names the source in error messages.
pub fn from_yaml(text: &str, origin: &str) -> Result<Config, ConfigError> {
    let parse_failed = |source| ConfigError::ConfigParseFailed {
        origin: origin.to_string(),
        source,
    };
    let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(parse_failed)?;
    check_path_shapes(&value)?;
    serde_yaml::from_value(value).map_err(parse_failed)
}

/// Report bad `queries`/`schema` shapes with their field path before the
/// typed parse turns them into a generic mismatch.
fn check_path_shapes(value: &serde_yaml::Value) -> Result<(), ConfigError> {
    let Some(sections) = value.get("sql").and_then(serde_yaml::Value::as_sequence) else {
        return Ok(());
    };
    for (idx, section) in sections.iter().enumerate() {
        for key in ["queries", "schema"] {
            if let Some(paths) = section.get(key) {
                PathOrList::from_value(&format!("sql[{idx}].{key}"), paths)?;
            }
        }
    }
    Ok(())
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|err| ConfigError::file_read(path, err))?;
    let config = from_yaml(&text, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), sections = config.sql.len(), "loaded config");
    Ok(config)
}

pub fn write_config(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let text = to_yaml(config)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|err| ConfigError::file_write(dir, err))?;
    let mut staged =
        tempfile::NamedTempFile::new_in(dir).map_err(|err| ConfigError::file_write(dir, err))?;
    staged
        .write_all(text.as_bytes())
        .map_err(|err| ConfigError::file_write(path, err))?;
    staged
        .persist(path)
        .map_err(|err| ConfigError::file_write(path, err.error))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote config");
    Ok(())
}

#[cfg(test)]
#[path = "yaml_tests.rs"]
mod tests;
