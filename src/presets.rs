//! Archetype presets and the process-wide registry.
//!
//! A preset is an immutable record: the default [`InputRecord`] for one
//! archetype plus descriptive feature tags. Callers never mutate a preset;
//! they clone its defaults and layer overrides on top.
use crate::engine;
use crate::error::ConfigError;
use crate::input::{
    DatabaseFlags, DatabaseSelection, EmitOptions, InputRecord, OutputPaths, PackageIdentity,
    ProjectIdentity, SafetyToggles, StrictChecks,
};
use crate::types::{project_archetype_from, Archetype, Engine, JsonCaseStyle};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const DATABASE_URL: &str = "${DATABASE_URL}";
const ANALYTICS_DATABASE_URL: &str = "${ANALYTICS_DATABASE_URL}";

#[derive(Debug, Clone, Serialize)]
pub struct Preset {
    archetype: Archetype,
    description: &'static str,
    features: &'static [&'static str],
    defaults: InputRecord,
    extra_renames: &'static [(&'static str, &'static str)],
}

impl Preset {
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn name(&self) -> &'static str {
        self.archetype.as_str()
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn feature_tags(&self) -> &'static [&'static str] {
        self.features
    }

    /// A fresh copy of the preset's input record.
    pub fn defaults(&self) -> InputRecord {
        self.defaults.clone()
    }

    /// Section name used when the caller leaves the project name blank.
    pub fn fallback_name(&self) -> &str {
        &self.defaults.project.name
    }

    pub fn default_base_dir(&self) -> &str {
        &self.defaults.output.base_dir
    }

    /// The acronym rename map, extended with this archetype's extra entries.
    pub fn rename_map(&self) -> BTreeMap<String, String> {
        let mut rename = engine::rename_rules();
        for (from, to) in self.extra_renames {
            rename.insert(from.to_string(), to.to_string());
        }
        rename
    }
}

/// Every archetype, keyed by tag, built once on first use.
pub fn registry() -> &'static BTreeMap<Archetype, Preset> {
    static REGISTRY: OnceLock<BTreeMap<Archetype, Preset>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        [
            hobby(),
            microservice(),
            enterprise(),
            api_first(),
            analytics(),
            testing(),
            multi_tenant(),
            library(),
        ]
        .into_iter()
        .map(|preset| (preset.archetype, preset))
        .collect()
    })
}

pub fn preset(archetype: Archetype) -> Result<&'static Preset, ConfigError> {
    registry()
        .get(&archetype)
        .ok_or_else(|| ConfigError::TemplateNotFound(archetype.as_str().to_string()))
}

/// Look a preset up by raw tag; unknown tags are `TemplateNotFound`.
pub fn preset_by_tag(tag: &str) -> Result<&'static Preset, ConfigError> {
    let archetype =
        project_archetype_from(tag).map_err(|_| ConfigError::TemplateNotFound(tag.to_string()))?;
    preset(archetype)
}

pub fn list() -> impl Iterator<Item = &'static Preset> {
    registry().values()
}

fn baseline(archetype: Archetype, name: &str) -> InputRecord {
    InputRecord {
        project: ProjectIdentity {
            name: name.to_string(),
            archetype,
        },
        package: PackageIdentity {
            name: "db".to_string(),
            import_path: String::new(),
            build_tags: None,
        },
        database: DatabaseSelection {
            engine: Engine::Postgresql,
            url: DATABASE_URL.to_string(),
            flags: DatabaseFlags::default(),
            pgx: false,
        },
        output: OutputPaths {
            base_dir: "internal/db".to_string(),
            queries_dir: String::new(),
            schema_dir: String::new(),
        },
        emit: EmitOptions {
            json_tags: true,
            prepared_queries: true,
            interface: true,
            empty_slices: true,
            result_pointers: false,
            params_pointers: false,
            enum_valid_method: false,
            all_enum_values: false,
            json_tags_case_style: Some(JsonCaseStyle::Camel),
        },
        validation: StrictChecks::default(),
        safety: SafetyToggles {
            require_limit: false,
            ..SafetyToggles::ALL_ON
        },
    }
}

const STRICT: StrictChecks = StrictChecks {
    strict_functions: true,
    strict_order_by: true,
};

fn hobby() -> Preset {
    let base = baseline(Archetype::Hobby, "app");
    Preset {
        archetype: Archetype::Hobby,
        description: "Single-developer project on a local SQLite file",
        features: &["sqlite", "minimal-config"],
        defaults: InputRecord {
            database: DatabaseSelection {
                engine: Engine::Sqlite,
                url: "file:dev.db".to_string(),
                ..base.database
            },
            output: OutputPaths {
                base_dir: "db".to_string(),
                ..base.output
            },
            emit: EmitOptions {
                json_tags: false,
                prepared_queries: false,
                interface: false,
                json_tags_case_style: None,
                ..base.emit
            },
            safety: SafetyToggles::OFF,
            ..base
        },
        extra_renames: &[],
    }
}

fn microservice() -> Preset {
    let base = baseline(Archetype::Microservice, "service");
    Preset {
        archetype: Archetype::Microservice,
        description: "PostgreSQL-backed service using pgx with UUID and JSON types",
        features: &["pgx", "uuid", "json", "managed-database", "safety-rules"],
        defaults: InputRecord {
            database: DatabaseSelection {
                flags: DatabaseFlags {
                    managed: true,
                    uuids: true,
                    json: true,
                    ..DatabaseFlags::default()
                },
                pgx: true,
                ..base.database
            },
            ..base
        },
        extra_renames: &[],
    }
}

fn enterprise() -> Preset {
    let base = baseline(Archetype::Enterprise, "enterprise");
    Preset {
        archetype: Archetype::Enterprise,
        description: "Large PostgreSQL codebase with strict checks and full safety rules",
        features: &[
            "uuid",
            "json",
            "full-text-search",
            "managed-database",
            "strict-checks",
            "safety-rules",
        ],
        defaults: InputRecord {
            database: DatabaseSelection {
                flags: DatabaseFlags {
                    managed: true,
                    uuids: true,
                    json: true,
                    full_text: true,
                    ..DatabaseFlags::default()
                },
                ..base.database
            },
            emit: EmitOptions {
                enum_valid_method: true,
                all_enum_values: true,
                ..base.emit
            },
            validation: STRICT,
            safety: SafetyToggles::ALL_ON,
            ..base
        },
        extra_renames: &[],
    }
}

fn api_first() -> Preset {
    let base = baseline(Archetype::ApiFirst, "api");
    Preset {
        archetype: Archetype::ApiFirst,
        description: "HTTP API whose models are serialized straight to JSON",
        features: &["uuid", "json", "camel-json-tags", "pointer-structs"],
        defaults: InputRecord {
            database: DatabaseSelection {
                flags: DatabaseFlags {
                    uuids: true,
                    json: true,
                    ..DatabaseFlags::default()
                },
                ..base.database
            },
            emit: EmitOptions {
                json_tags: true,
                result_pointers: true,
                params_pointers: true,
                json_tags_case_style: Some(JsonCaseStyle::Camel),
                ..base.emit
            },
            ..base
        },
        extra_renames: &[],
    }
}

fn analytics() -> Preset {
    let base = baseline(Archetype::Analytics, "analytics");
    Preset {
        archetype: Archetype::Analytics,
        description: "Reporting workload on a dedicated analytics database",
        features: &["arrays", "json", "full-text-search", "strict-checks", "require-limit"],
        defaults: InputRecord {
            package: PackageIdentity {
                name: "analytics".to_string(),
                ..base.package
            },
            database: DatabaseSelection {
                url: ANALYTICS_DATABASE_URL.to_string(),
                flags: DatabaseFlags {
                    json: true,
                    arrays: true,
                    full_text: true,
                    ..DatabaseFlags::default()
                },
                ..base.database
            },
            output: OutputPaths {
                base_dir: "internal/analytics".to_string(),
                ..base.output
            },
            emit: EmitOptions {
                prepared_queries: false,
                ..base.emit
            },
            validation: STRICT,
            safety: SafetyToggles::ALL_ON,
            ..base
        },
        extra_renames: &[],
    }
}

fn testing() -> Preset {
    let base = baseline(Archetype::Testing, "test");
    Preset {
        archetype: Archetype::Testing,
        description: "Throwaway SQLite database for test fixtures",
        features: &["sqlite", "test-fixtures"],
        defaults: InputRecord {
            package: PackageIdentity {
                name: "testdb".to_string(),
                ..base.package
            },
            database: DatabaseSelection {
                engine: Engine::Sqlite,
                url: "file:testdata/test.db".to_string(),
                ..base.database
            },
            output: OutputPaths {
                base_dir: "testdata/db".to_string(),
                ..base.output
            },
            emit: EmitOptions {
                prepared_queries: false,
                ..base.emit
            },
            safety: SafetyToggles::OFF,
            ..base
        },
        extra_renames: &[],
    }
}

fn multi_tenant() -> Preset {
    let base = baseline(Archetype::MultiTenant, "tenant");
    Preset {
        archetype: Archetype::MultiTenant,
        description: "Shared PostgreSQL schema partitioned by tenant",
        features: &[
            "uuid",
            "json",
            "managed-database",
            "strict-checks",
            "require-limit",
            "tenant-rename",
        ],
        defaults: InputRecord {
            database: DatabaseSelection {
                flags: DatabaseFlags {
                    managed: true,
                    uuids: true,
                    json: true,
                    ..DatabaseFlags::default()
                },
                ..base.database
            },
            validation: STRICT,
            safety: SafetyToggles::ALL_ON,
            ..base
        },
        extra_renames: &[("tenant", "Tenant")],
    }
}

fn library() -> Preset {
    let base = baseline(Archetype::Library, "library");
    Preset {
        archetype: Archetype::Library,
        description: "Reusable Go package exposing a Querier interface",
        features: &["uuid", "interface", "enum-helpers", "permissive-rules"],
        defaults: InputRecord {
            database: DatabaseSelection {
                flags: DatabaseFlags {
                    uuids: true,
                    ..DatabaseFlags::default()
                },
                ..base.database
            },
            emit: EmitOptions {
                interface: true,
                enum_valid_method: true,
                all_enum_values: true,
                ..base.emit
            },
            safety: SafetyToggles {
                require_where: true,
                no_drop_table: true,
                ..SafetyToggles::OFF
            },
            ..base
        },
        extra_renames: &[],
    }
}
