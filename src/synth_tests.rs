use super::*;
use crate::document::GoGen;
use crate::error::ErrorKind;
use crate::validate::validate;

fn go(config: &Config) -> &GoGen {
    config.sql[0].gen.go.as_ref().expect("go generator")
}

fn rule_names(config: &Config) -> Vec<&str> {
    config.sql[0]
        .rules
        .iter()
        .map(|rule| rule.name.as_str())
        .collect()
}

fn override_types(config: &Config) -> Vec<&str> {
    go(config)
        .overrides
        .iter()
        .map(|o| o.db_type.as_str())
        .collect()
}

#[test]
fn every_preset_synthesizes_a_valid_document() {
    for archetype in Archetype::ALL {
        let config = synthesize(archetype, &Overrides::default()).expect("synthesize");
        let result = validate(Some(&config));
        assert!(result.is_valid(), "{archetype}: {:?}", result.errors);
        assert_eq!(config.version, "2");
        assert_eq!(config.sql.len(), 1);
        assert!(config.rules.is_empty(), "{archetype}: top-level rules");
    }
}

#[test]
fn microservice_with_project_name() {
    let overrides = Overrides {
        project_name: Some("svc".to_string()),
        ..Overrides::default()
    };
    let config = synthesize(Archetype::Microservice, &overrides).expect("synthesize");
    let section = &config.sql[0];
    assert_eq!(section.name, "svc");
    assert_eq!(section.engine, "postgresql");
    assert_eq!(section.queries.strings(), ["internal/db/queries".to_string()]);
    assert_eq!(section.schema.strings(), ["internal/db/schema".to_string()]);
    let database = section.database.as_ref().expect("database");
    assert_eq!(database.uri, "${DATABASE_URL}");
    assert!(database.managed);

    let go = go(&config);
    assert_eq!(go.package, "db");
    assert_eq!(go.out, "internal/db");
    assert_eq!(go.sql_package, "pgx/v5");
    assert_eq!(go.build_tags, "postgres,pgx");
    assert!(go.emit_interface);
    assert!(go.emit_prepared_queries);
    assert!(go.emit_json_tags);
    assert_eq!(go.json_tags_case_style.as_deref(), Some("camel"));
    assert_eq!(override_types(&config), ["uuid", "jsonb"]);
    assert_eq!(go.rename.get("id").map(String::as_str), Some("ID"));

    let names = rule_names(&config);
    for expected in ["no-select-star", "require-where-delete", "no-drop-table"] {
        assert!(names.contains(&expected), "missing {expected}");
    }
    assert!(!names.contains(&"require-limit-select"));
    assert!(validate(Some(&config)).is_valid());
}

#[test]
fn hobby_on_sqlite() {
    let config = synthesize(Archetype::Hobby, &Overrides::default()).expect("synthesize");
    let section = &config.sql[0];
    assert_eq!(section.name, "app");
    assert_eq!(section.engine, "sqlite");
    let database = section.database.as_ref().expect("database");
    assert_eq!(database.uri, "file:dev.db");
    assert!(!database.managed);

    let go = go(&config);
    assert_eq!(go.out, "db");
    assert_eq!(go.sql_package, "database/sql");
    assert_eq!(go.build_tags, "sqlite");
    assert!(go.overrides.is_empty());
    assert!(go.json_tags_case_style.is_none());
    assert!(section.rules.is_empty());

    let result = validate(Some(&config));
    assert!(result.is_valid());
    let warned: Vec<&str> = result.warnings.iter().map(|w| w.field.as_str()).collect();
    assert_eq!(
        warned,
        [
            "sql[0].gen.go.emit_interface",
            "sql[0].gen.go.emit_prepared_queries",
            "sql[0].gen.go.emit_json_tags",
        ]
    );
}

#[test]
fn analytics_uses_its_own_database_and_limits() {
    let config = synthesize(Archetype::Analytics, &Overrides::default()).expect("synthesize");
    let section = &config.sql[0];
    assert_eq!(
        section.database.as_ref().map(|db| db.uri.as_str()),
        Some("${ANALYTICS_DATABASE_URL}")
    );
    assert!(go(&config).out.contains("internal/analytics"));
    assert!(!go(&config).emit_prepared_queries);
    assert!(rule_names(&config).contains(&"require-limit-select"));
    assert!(section.strict_function_checks);
    assert!(section.strict_order_by);
    assert_eq!(override_types(&config), ["jsonb"]);
}

#[test]
fn enterprise_case_style_override() {
    let pascal = Overrides {
        json_tags_case_style: Some("pascal".to_string()),
        ..Overrides::default()
    };
    let config = synthesize(Archetype::Enterprise, &pascal).expect("synthesize");
    assert_eq!(go(&config).json_tags_case_style.as_deref(), Some("pascal"));
    assert!(validate(Some(&config)).is_valid());

    let kebab = Overrides {
        json_tags_case_style: Some("kebab".to_string()),
        ..Overrides::default()
    };
    let err = synthesize(Archetype::Enterprise, &kebab).expect_err("kebab rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidEnum);
}

#[test]
fn multi_tenant_carries_tenant_rename() {
    let config = synthesize(Archetype::MultiTenant, &Overrides::default()).expect("synthesize");
    assert_eq!(
        go(&config).rename.get("tenant").map(String::as_str),
        Some("Tenant")
    );
    assert!(rule_names(&config).contains(&"require-limit-select"));
}

#[test]
fn base_dir_override_rederives_queries_and_schema() {
    let overrides = Overrides {
        base_dir: Some("pkg/store/".to_string()),
        ..Overrides::default()
    };
    let config = synthesize(Archetype::Library, &overrides).expect("synthesize");
    let section = &config.sql[0];
    assert_eq!(section.queries.first(), "pkg/store/queries");
    assert_eq!(section.schema.first(), "pkg/store/schema");
    assert_eq!(go(&config).out, "pkg/store");
}

#[test]
fn pgx_is_dropped_for_other_engines() {
    let overrides = Overrides {
        engine: Some(Engine::Mysql),
        ..Overrides::default()
    };
    let config = synthesize(Archetype::Microservice, &overrides).expect("synthesize");
    assert_eq!(config.sql[0].engine, "mysql");
    assert_eq!(go(&config).sql_package, "database/sql");
    assert_eq!(go(&config).build_tags, "mysql");
    assert_eq!(override_types(&config), ["json"]);
}

#[test]
fn explicit_build_tags_still_gain_pgx() {
    let overrides = Overrides {
        build_tags: Some("integration".to_string()),
        ..Overrides::default()
    };
    let config = synthesize(Archetype::Microservice, &overrides).expect("synthesize");
    assert_eq!(go(&config).build_tags, "integration,pgx");
}

#[test]
fn invalid_resolved_input_returns_validation_failed() {
    let overrides = Overrides {
        project_name: Some("x".to_string()),
        ..Overrides::default()
    };
    let err = synthesize(Archetype::Hobby, &overrides).expect_err("short name");
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    let ConfigError::ValidationFailed(result) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(result.errors[0].field, "project.name");

    let same_dirs = Overrides {
        base_dir: Some("db".to_string()),
        queries_dir: Some("db".to_string()),
        schema_dir: Some("db".to_string()),
        ..Overrides::default()
    };
    let err = synthesize(Archetype::Hobby, &same_dirs).expect_err("same dirs");
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);
}

#[test]
fn unknown_tag_is_template_not_found() {
    let err = synthesize_tag("startup", &Overrides::default()).expect_err("unknown");
    assert_eq!(err.kind(), ErrorKind::TemplateNotFound);
    assert!(synthesize_tag("testing", &Overrides::default()).is_ok());
}

#[test]
fn synthesis_is_deterministic() {
    let overrides = Overrides {
        project_name: Some("orders".to_string()),
        require_limit: Some(true),
        ..Overrides::default()
    };
    let first = synthesize(Archetype::ApiFirst, &overrides).expect("first");
    let second = synthesize(Archetype::ApiFirst, &overrides).expect("second");
    assert_eq!(first, second);
}
