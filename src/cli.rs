//! CLI argument parsing for the config wizard.
//!
//! The CLI is thin: it gathers an archetype and overrides and hands them to
//! the synthesis core, so the same core can sit behind an interactive prompt.
use clap::{Args, Parser, Subcommand};
use sqlc_wizard::input::Overrides;
use sqlc_wizard::types::{Archetype, Engine};
use sqlc_wizard::yaml::CONFIG_FILE_NAME;
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "sqlc-wizard",
    version,
    about = "Generate a validated sqlc.yaml from a project archetype",
    after_help = "Commands:\n  init --archetype <tag>       Write sqlc.yaml (and optional starter SQL files)\n  generate --archetype <tag>   Print the synthesized sqlc.yaml to stdout\n  validate --config <path>     Check an existing sqlc.yaml\n  doctor --config <path>       Check config, directories and the sqlc binary\n  presets                      List project archetypes\n\nExamples:\n  sqlc-wizard init --archetype microservice --name orders --starter-files\n  sqlc-wizard generate --archetype hobby --engine sqlite\n  sqlc-wizard validate --config sqlc.yaml --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Emit debug logs on stderr (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Init(InitArgs),
    Generate(GenerateArgs),
    Validate(ValidateArgs),
    Doctor(DoctorArgs),
    Presets(PresetsArgs),
}

fn parse_archetype(value: &str) -> Result<Archetype, String> {
    value.parse::<Archetype>().map_err(|err| err.to_string())
}

fn parse_engine(value: &str) -> Result<Engine, String> {
    value.parse::<Engine>().map_err(|err| err.to_string())
}

/// Inputs shared by every command that runs the synthesis pipeline.
#[derive(Args, Debug, Clone)]
pub struct SynthArgs {
    /// Project archetype (hobby, microservice, enterprise, api-first,
    /// analytics, testing, multi-tenant, library)
    #[arg(long, value_name = "TAG", default_value = "microservice", value_parser = parse_archetype)]
    pub archetype: Archetype,

    /// YAML answers file with override fields; flags win over it
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Per-field overrides layered over the archetype preset.
#[derive(Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    /// Project name (2-50 characters), used as the sql section name
    #[arg(long = "name", value_name = "NAME")]
    pub project_name: Option<String>,

    /// Go package name for generated code
    #[arg(long = "package", value_name = "NAME")]
    pub package_name: Option<String>,

    /// Go import path of the generated package
    #[arg(long, value_name = "PATH")]
    pub import_path: Option<String>,

    /// Comma-separated Go build tags
    #[arg(long, value_name = "TAGS")]
    pub build_tags: Option<String>,

    /// Database engine (postgresql, mysql, sqlite)
    #[arg(long, value_name = "ENGINE", value_parser = parse_engine)]
    pub engine: Option<Engine>,

    /// Connection URL or placeholder such as ${DATABASE_URL}
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    #[arg(long, value_name = "BOOL")]
    pub managed: Option<bool>,

    /// Map uuid columns to github.com/google/uuid
    #[arg(long, value_name = "BOOL")]
    pub uuids: Option<bool>,

    /// Map json/jsonb columns to json.RawMessage
    #[arg(long = "json-types", value_name = "BOOL")]
    pub json: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub arrays: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub full_text: Option<bool>,

    /// Use pgx/v5 instead of database/sql (postgresql only)
    #[arg(long, value_name = "BOOL")]
    pub pgx: Option<bool>,

    /// Output directory for generated code; queries/schema derive from it
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<String>,

    #[arg(long, value_name = "DIR")]
    pub queries_dir: Option<String>,

    #[arg(long, value_name = "DIR")]
    pub schema_dir: Option<String>,

    #[arg(long, value_name = "BOOL")]
    pub emit_json_tags: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub emit_prepared_queries: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub emit_interface: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub emit_empty_slices: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub emit_result_struct_pointers: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub emit_params_struct_pointers: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub emit_enum_valid_method: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub emit_all_enum_values: Option<bool>,

    /// JSON tag case style (camel, pascal, snake)
    #[arg(long, value_name = "STYLE")]
    pub json_tags_case_style: Option<String>,

    #[arg(long, value_name = "BOOL")]
    pub strict_function_checks: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub strict_order_by: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub no_select_star: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub require_where: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub no_drop_table: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub no_truncate: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub require_limit: Option<bool>,
}

impl From<OverrideArgs> for Overrides {
    fn from(args: OverrideArgs) -> Self {
        Overrides {
            project_name: args.project_name,
            package_name: args.package_name,
            import_path: args.import_path,
            build_tags: args.build_tags,
            engine: args.engine,
            database_url: args.database_url,
            managed: args.managed,
            uuids: args.uuids,
            json: args.json,
            arrays: args.arrays,
            full_text: args.full_text,
            pgx: args.pgx,
            base_dir: args.base_dir,
            queries_dir: args.queries_dir,
            schema_dir: args.schema_dir,
            emit_json_tags: args.emit_json_tags,
            emit_prepared_queries: args.emit_prepared_queries,
            emit_interface: args.emit_interface,
            emit_empty_slices: args.emit_empty_slices,
            emit_result_struct_pointers: args.emit_result_struct_pointers,
            emit_params_struct_pointers: args.emit_params_struct_pointers,
            emit_enum_valid_method: args.emit_enum_valid_method,
            emit_all_enum_values: args.emit_all_enum_values,
            json_tags_case_style: args.json_tags_case_style,
            strict_function_checks: args.strict_function_checks,
            strict_order_by: args.strict_order_by,
            no_select_star: args.no_select_star,
            require_where: args.require_where,
            no_drop_table: args.no_drop_table,
            no_truncate: args.no_truncate,
            require_limit: args.require_limit,
        }
    }
}

/// Init command inputs.
#[derive(Parser, Debug)]
#[command(about = "Synthesize, validate and write sqlc.yaml")]
pub struct InitArgs {
    /// Project root that receives sqlc.yaml and starter files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Also write starter users.sql and 001_users_table.sql
    #[arg(long)]
    pub starter_files: bool,

    /// Overwrite an existing sqlc.yaml and starter files
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub synth: SynthArgs,
}

/// Generate command inputs.
#[derive(Parser, Debug)]
#[command(about = "Print the synthesized sqlc.yaml without writing it")]
pub struct GenerateArgs {
    #[command(flatten)]
    pub synth: SynthArgs,
}

/// Validate command inputs.
#[derive(Parser, Debug)]
#[command(about = "Validate an existing sqlc.yaml")]
pub struct ValidateArgs {
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Doctor command inputs.
#[derive(Parser, Debug)]
#[command(about = "Check the config, its directories and the sqlc binary")]
pub struct DoctorArgs {
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

/// Presets command inputs.
#[derive(Parser, Debug)]
#[command(about = "List project archetypes and their features")]
pub struct PresetsArgs {
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
