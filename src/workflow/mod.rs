//! Command orchestration for the config wizard.
//!
//! Each command is a small step over the synthesis core so the CLI stays thin
//! and every write goes through the same validated path.
mod context;
mod doctor;
mod generate;
mod init;
mod presets;
mod validate;

pub(crate) use context::{report_findings, SynthContext};
pub(crate) use doctor::run_doctor;
pub(crate) use generate::run_generate;
pub(crate) use init::run_init;
pub(crate) use presets::run_presets;
pub(crate) use validate::run_validate;
