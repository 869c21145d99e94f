//! End-to-end checks for `sqlc-wizard init`.

mod common;

use common::{parse_yaml, stderr, Workspace};

#[test]
fn init_writes_a_config_that_validates() {
    let ws = Workspace::new();
    let output = ws.run(&["init", "--archetype", "microservice", "--name", "orders"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("wrote sqlc.yaml"));

    let config = parse_yaml(&ws.read("sqlc.yaml"));
    assert_eq!(config["version"].as_str(), Some("2"));
    let section = &config["sql"][0];
    assert_eq!(section["name"].as_str(), Some("orders"));
    assert_eq!(section["engine"].as_str(), Some("postgresql"));
    assert_eq!(section["gen"]["go"]["package"].as_str(), Some("db"));
    assert!(section["queries"].is_sequence());

    let validated = ws.run(&["validate"]);
    assert!(validated.status.success(), "{}", stderr(&validated));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let ws = Workspace::new();
    ws.write("sqlc.yaml", "# hand written\n");

    let output = ws.run(&["init", "--archetype", "hobby"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--force"));
    assert_eq!(ws.read("sqlc.yaml"), "# hand written\n");

    let forced = ws.run(&["init", "--archetype", "hobby", "--force"]);
    assert!(forced.status.success(), "{}", stderr(&forced));
    assert!(ws.read("sqlc.yaml").starts_with("version:"));
}

#[test]
fn init_with_starter_files_writes_engine_templates() {
    let ws = Workspace::new();
    let output = ws.run(&[
        "init",
        "--archetype",
        "hobby",
        "--dir",
        "app",
        "--starter-files",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let queries = ws.read("app/db/queries/users.sql");
    let schema = ws.read("app/db/schema/001_users_table.sql");
    assert!(queries.contains("-- name: ListUsers :many"));
    assert!(schema.contains("AUTOINCREMENT"));

    let doctor = ws.run(&["doctor", "--config", "app/sqlc.yaml"]);
    assert!(doctor.status.success(), "{}", stderr(&doctor));
}

#[test]
fn failed_synthesis_writes_nothing() {
    let ws = Workspace::new();
    let output = ws.run(&["init", "--archetype", "hobby", "--name", "x"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("project.name"));
    assert!(!ws.path("sqlc.yaml").exists());
}

#[test]
fn escaping_output_dirs_are_rejected() {
    let ws = Workspace::new();
    let output = ws.run(&["init", "--archetype", "hobby", "--schema-dir", "../schema"]);
    assert!(!output.status.success());
    assert!(!ws.path("sqlc.yaml").exists());
}
