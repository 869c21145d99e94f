use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical project root; created first when `create` is set.
pub fn ensure_project_root(path: &Path, create: bool) -> Result<PathBuf> {
    if create {
        fs::create_dir_all(path)
            .with_context(|| format!("create project root {}", path.display()))?;
    }
    path.canonicalize()
        .with_context(|| format!("resolve project root {}", path.display()))
}

/// Directory that relative paths inside `config_path` are resolved against.
pub fn config_base_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Show `path` relative to `base` when it lives underneath it.
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base {
        if let Ok(relative) = path.strip_prefix(base) {
            return relative.display().to_string();
        }
    }
    path.display().to_string()
}
