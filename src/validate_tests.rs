use super::*;
use crate::document::{CodegenPlugin, Gen, JsonGen};
use crate::paths::PathOrList;

fn go_gen() -> GoGen {
    GoGen {
        package: "db".to_string(),
        out: "internal/db".to_string(),
        emit_json_tags: true,
        emit_prepared_queries: true,
        emit_interface: true,
        ..GoGen::default()
    }
}

fn section() -> SqlSection {
    SqlSection {
        name: "svc".to_string(),
        engine: "postgresql".to_string(),
        queries: PathOrList::single("queries"),
        schema: PathOrList::single("schema"),
        gen: Gen {
            go: Some(go_gen()),
            json: None,
        },
        ..SqlSection::default()
    }
}

fn config() -> Config {
    Config {
        version: "2".to_string(),
        sql: vec![section()],
        ..Config::default()
    }
}

fn fields(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.field.as_str()).collect()
}

#[test]
fn well_formed_config_is_clean() {
    let result = validate(Some(&config()));
    assert!(result.is_valid());
    assert!(!result.has_warnings());
}

#[test]
fn nil_config_yields_exactly_one_error() {
    let result = validate(None);
    assert_eq!(result.errors.len(), 1);
    assert!(result.warnings.is_empty());
    assert_eq!(
        result.errors[0].to_string(),
        "config: configuration cannot be nil"
    );
}

#[test]
fn empty_version_and_sql_list() {
    let config = Config {
        version: String::new(),
        ..Config::default()
    };
    let result = validate(Some(&config));
    assert!(!result.is_valid());
    assert_eq!(fields(&result.errors), ["version", "sql"]);
}

#[test]
fn version_one_is_accepted_and_three_is_not() {
    let mut config = config();
    config.version = "1".to_string();
    assert!(validate(Some(&config)).is_valid());
    config.version = "3".to_string();
    assert_eq!(fields(&validate(Some(&config)).errors), ["version"]);
}

#[test]
fn section_level_errors_carry_indexed_paths() {
    let mut config = config();
    let mut bad = section();
    bad.engine = "oracle".to_string();
    bad.queries = PathOrList::default();
    bad.schema = PathOrList::default();
    bad.gen = Gen::default();
    config.sql.push(bad);

    let result = validate(Some(&config));
    assert_eq!(
        fields(&result.errors),
        ["sql[1].engine", "sql[1].queries", "sql[1].schema", "sql[1].gen"]
    );
}

#[test]
fn go_generator_requires_package_out_and_known_case() {
    let mut config = config();
    let go = config.sql[0].gen.go.as_mut().expect("go");
    go.package = String::new();
    go.out = " ".to_string();
    go.json_tags_case_style = Some("kebab".to_string());

    let result = validate(Some(&config));
    assert_eq!(
        fields(&result.errors),
        [
            "sql[0].gen.go.package",
            "sql[0].gen.go.out",
            "sql[0].gen.go.json_tags_case_style",
        ]
    );
}

#[test]
fn pgx_on_sqlite_is_an_error() {
    let mut config = config();
    config.sql[0].engine = "sqlite".to_string();
    config.sql[0].gen.go.as_mut().expect("go").sql_package = "pgx/v5".to_string();
    assert_eq!(
        fields(&validate(Some(&config)).errors),
        ["sql[0].gen.go.sql_package"]
    );
}

#[test]
fn missing_emits_only_warn() {
    let mut config = config();
    let go = config.sql[0].gen.go.as_mut().expect("go");
    go.emit_interface = false;
    go.emit_json_tags = false;
    go.package = "MyDB".to_string();

    let result = validate(Some(&config));
    assert!(result.is_valid());
    assert_eq!(
        fields(&result.warnings),
        [
            "sql[0].gen.go.package",
            "sql[0].gen.go.emit_interface",
            "sql[0].gen.go.emit_json_tags",
        ]
    );
}

#[test]
fn json_generator_or_plugin_satisfies_generator_requirement() {
    let mut config = config();
    config.sql[0].gen = Gen {
        go: None,
        json: Some(JsonGen {
            out: "out".to_string(),
            ..JsonGen::default()
        }),
    };
    assert!(validate(Some(&config)).is_valid());

    config.sql[0].gen = Gen::default();
    config.sql[0].codegen.push(CodegenPlugin {
        out: "gen/ts".to_string(),
        plugin: "ts".to_string(),
    });
    assert!(validate(Some(&config)).is_valid());
}

#[test]
fn validation_is_repeatable() {
    let mut config = config();
    config.version = String::new();
    config.sql[0].gen.go.as_mut().expect("go").emit_interface = false;
    assert_eq!(validate(Some(&config)), validate(Some(&config)));
}
