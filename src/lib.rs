//! Configuration synthesis for sqlc.
//!
//! Maps a project archetype, a database engine and caller overrides onto a
//! validated `sqlc.yaml` document:
//!
//! - [`presets`] holds one immutable default record per archetype.
//! - [`synth`] layers overrides over a preset and assembles a [`document::Config`].
//! - [`validate`] partitions findings into errors and warnings.
//! - [`yaml`] emits and parses the on-disk form.
//! - [`starter`] writes starter schema and query files.
#![deny(clippy::unwrap_used)]

pub mod document;
pub mod engine;
pub mod error;
pub mod input;
pub mod paths;
pub mod presets;
pub mod rules;
pub mod starter;
pub mod synth;
mod templates;
pub mod types;
pub mod validate;
pub mod yaml;

pub use error::{ConfigError, ErrorKind};
