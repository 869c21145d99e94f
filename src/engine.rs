//! Per-engine pieces of the generated config: driver package, build tags,
//! type overrides and the identifier rename map.
use crate::document::TypeOverride;
use crate::input::DatabaseFlags;
use crate::types::Engine;
use std::collections::BTreeMap;

pub const DATABASE_SQL: &str = "database/sql";
pub const PGX_V5: &str = "pgx/v5";

const UUID_IMPORT: &str = "github.com/google/uuid";
const JSON_IMPORT: &str = "encoding/json";

const ACRONYMS: [(&str, &str); 7] = [
    ("id", "ID"),
    ("uuid", "UUID"),
    ("url", "URL"),
    ("uri", "URI"),
    ("api", "API"),
    ("http", "HTTP"),
    ("json", "JSON"),
];

/// Driver package hint. pgx is only honored for PostgreSQL.
pub fn driver_hint(engine: Engine, pgx_requested: bool) -> &'static str {
    match engine {
        Engine::Postgresql if pgx_requested => PGX_V5,
        Engine::Postgresql | Engine::Mysql | Engine::Sqlite => DATABASE_SQL,
    }
}

pub fn build_tags(engine: Engine) -> &'static str {
    match engine {
        Engine::Postgresql => "postgres",
        Engine::Mysql => "mysql",
        Engine::Sqlite => "sqlite",
    }
}

pub fn type_overrides(engine: Engine, flags: &DatabaseFlags) -> Vec<TypeOverride> {
    let mut overrides = Vec::new();
    match engine {
        Engine::Postgresql => {
            if flags.uuids {
                overrides.push(type_override("uuid", "UUID", UUID_IMPORT));
            }
            if flags.json {
                overrides.push(type_override("jsonb", "RawMessage", JSON_IMPORT));
            }
        }
        Engine::Mysql => {
            if flags.json {
                overrides.push(type_override("json", "RawMessage", JSON_IMPORT));
            }
        }
        Engine::Sqlite => {}
    }
    overrides
}

fn type_override(db_type: &str, go_type: &str, import: &str) -> TypeOverride {
    TypeOverride {
        db_type: db_type.to_string(),
        go_type: go_type.to_string(),
        go_import_path: import.to_string(),
    }
}

/// Acronym normalization applied to generated identifiers.
pub fn rename_rules() -> BTreeMap<String, String> {
    ACRONYMS
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn all_flag_combinations() -> Vec<DatabaseFlags> {
        (0u8..32)
            .map(|bits| DatabaseFlags {
                managed: bits & 1 != 0,
                uuids: bits & 2 != 0,
                json: bits & 4 != 0,
                arrays: bits & 8 != 0,
                full_text: bits & 16 != 0,
            })
            .collect()
    }

    #[test]
    fn override_db_types_are_unique_for_every_engine_and_flag_set() {
        for engine in Engine::ALL {
            for flags in all_flag_combinations() {
                let overrides = type_overrides(engine, &flags);
                let unique: BTreeSet<&str> =
                    overrides.iter().map(|o| o.db_type.as_str()).collect();
                assert_eq!(unique.len(), overrides.len(), "{engine} {flags:?}");
            }
        }
    }

    #[test]
    fn postgres_binds_uuid_and_jsonb() {
        let flags = DatabaseFlags {
            uuids: true,
            json: true,
            ..DatabaseFlags::default()
        };
        let overrides = type_overrides(Engine::Postgresql, &flags);
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides[0].db_type, "uuid");
        assert_eq!(overrides[0].go_type, "UUID");
        assert_eq!(overrides[0].go_import_path, "github.com/google/uuid");
        assert_eq!(overrides[1].db_type, "jsonb");
        assert_eq!(overrides[1].go_import_path, "encoding/json");
    }

    #[test]
    fn mysql_binds_json_and_ignores_uuids() {
        let flags = DatabaseFlags {
            uuids: true,
            json: true,
            ..DatabaseFlags::default()
        };
        let overrides = type_overrides(Engine::Mysql, &flags);
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides[0].db_type, "json");
        assert_eq!(overrides[0].go_type, "RawMessage");
    }

    #[test]
    fn sqlite_never_binds_overrides() {
        for flags in all_flag_combinations() {
            assert!(type_overrides(Engine::Sqlite, &flags).is_empty());
        }
    }

    #[test]
    fn pgx_only_applies_to_postgres() {
        assert_eq!(driver_hint(Engine::Postgresql, false), "database/sql");
        assert_eq!(driver_hint(Engine::Postgresql, true), "pgx/v5");
        assert_eq!(driver_hint(Engine::Mysql, true), "database/sql");
        assert_eq!(driver_hint(Engine::Sqlite, true), "database/sql");
        assert_eq!(build_tags(Engine::Postgresql), "postgres");
        assert_eq!(build_tags(Engine::Mysql), "mysql");
        assert_eq!(build_tags(Engine::Sqlite), "sqlite");
    }

    #[test]
    fn rename_rules_cover_common_acronyms() {
        let rules = rename_rules();
        assert_eq!(rules.len(), 7);
        assert_eq!(rules.get("id").map(String::as_str), Some("ID"));
        assert_eq!(rules.get("http").map(String::as_str), Some("HTTP"));
        let keys: Vec<&String> = rules.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
