//! Error catalog for the configuration core.
//!
//! Every failure the core can produce is one variant of [`ConfigError`]; field
//! paths and underlying causes ride along as variant data so the command layer
//! can print a short message and still walk the source chain.
use crate::validate::ValidationResult;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`ConfigError`], for callers that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidEnum,
    InvalidShape,
    InvalidPath,
    TemplateNotFound,
    ConfigNotFound,
    ConfigParseFailed,
    ConfigSerializeFailed,
    ValidationFailed,
    FileReadError,
    FileWriteError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidEnum => "invalid_enum",
            ErrorKind::InvalidShape => "invalid_shape",
            ErrorKind::InvalidPath => "invalid_path",
            ErrorKind::TemplateNotFound => "template_not_found",
            ErrorKind::ConfigNotFound => "config_not_found",
            ErrorKind::ConfigParseFailed => "config_parse_failed",
            ErrorKind::ConfigSerializeFailed => "config_serialize_failed",
            ErrorKind::ValidationFailed => "validation_failed",
            ErrorKind::FileReadError => "file_read_error",
            ErrorKind::FileWriteError => "file_write_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A string did not match any value of a closed set.
    #[error("{field}: {value:?} is not one of [{allowed}]")]
    InvalidEnum {
        field: String,
        value: String,
        allowed: String,
    },

    /// A path-or-list field held something other than a string or a list of strings.
    #[error("{field}: expected a string or a sequence of strings, found {found}")]
    InvalidShape { field: String, found: String },

    /// A directory is absolute or climbs out of the project root.
    #[error("{field}: {path:?} must be a relative path inside the project root")]
    InvalidPath { field: String, path: String },

    #[error("no preset registered for archetype {0:?}")]
    TemplateNotFound(String),

    #[error("config file not found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("failed to parse config {origin}")]
    ConfigParseFailed {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize config")]
    ConfigSerializeFailed(#[source] serde_yaml::Error),

    #[error("{}", summarize(.0))]
    ValidationFailed(ValidationResult),

    #[error("failed to read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn summarize(result: &ValidationResult) -> String {
    let mut text = format!(
        "configuration has {} validation error(s)",
        result.errors.len()
    );
    for finding in &result.errors {
        text.push_str("\n  ");
        text.push_str(&finding.to_string());
    }
    text
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::InvalidEnum { .. } => ErrorKind::InvalidEnum,
            ConfigError::InvalidShape { .. } => ErrorKind::InvalidShape,
            ConfigError::InvalidPath { .. } => ErrorKind::InvalidPath,
            ConfigError::TemplateNotFound(_) => ErrorKind::TemplateNotFound,
            ConfigError::ConfigNotFound(_) => ErrorKind::ConfigNotFound,
            ConfigError::ConfigParseFailed { .. } => ErrorKind::ConfigParseFailed,
            ConfigError::ConfigSerializeFailed(_) => ErrorKind::ConfigSerializeFailed,
            ConfigError::ValidationFailed(_) => ErrorKind::ValidationFailed,
            ConfigError::FileRead { .. } => ErrorKind::FileReadError,
            ConfigError::FileWrite { .. } => ErrorKind::FileWriteError,
        }
    }

    pub fn invalid_enum(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidEnum {
            field: field.into(),
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    pub fn invalid_shape(field: impl Into<String>, found: impl Into<String>) -> Self {
        Self::InvalidShape {
            field: field.into(),
            found: found.into(),
        }
    }

    pub fn invalid_path(field: impl Into<String>, path: impl Into<String>) -> Self {
        Self::InvalidPath {
            field: field.into(),
            path: path.into(),
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}
