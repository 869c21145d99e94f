//! In-memory model of `sqlc.yaml` (schema version 2).
//!
//! Field declaration order is the emitted key order. Booleans that are false
//! and strings/lists/maps that are empty are omitted on output and restored
//! by `#[serde(default)]` on input, so a document survives a round trip.
use crate::paths::PathOrList;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const CONFIG_VERSION: &str = "2";
pub const SUPPORTED_VERSIONS: [&str; 2] = ["1", "2"];

fn is_false(value: &bool) -> bool {
    !*value
}

/// Hand-written files often carry `version: 2` unquoted; keep it as text so
/// the validator decides whether it is supported.
fn version_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct VersionVisitor;

    impl Visitor<'_> for VersionVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a version string or number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(VersionVisitor)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "version_text")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<Cloud>,
    #[serde(default)]
    pub sql: Vec<SqlSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cloud {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub organization: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hostname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlSection {
    #[serde(default)]
    pub name: String,
    /// Kept as text so hand-written files with unknown engines still load and
    /// can be reported by the validator.
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub queries: PathOrList,
    #[serde(default)]
    pub schema: PathOrList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<Database>,
    #[serde(default)]
    pub gen: Gen,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict_function_checks: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict_order_by: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub codegen: Vec<CodegenPlugin>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uri: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub managed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go: Option<GoGen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<JsonGen>,
}

impl Gen {
    pub fn is_empty(&self) -> bool {
        self.go.is_none() && self.json.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoGen {
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub out: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sql_package: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub build_tags: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emit_json_tags: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emit_prepared_queries: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emit_interface: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emit_empty_slices: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emit_result_struct_pointers: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emit_params_struct_pointers: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emit_enum_valid_method: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emit_all_enum_values: bool,
    /// Kept as text; the validator checks it against the three case words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_tags_case_style: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<TypeOverride>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rename: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_db_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_models_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_querier_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_files_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonGen {
    #[serde(default)]
    pub out: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filename: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub indent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenPlugin {
    #[serde(default)]
    pub out: String,
    #[serde(default)]
    pub plugin: String,
}

/// Binds a database column type to a generated Go type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOverride {
    pub db_type: String,
    pub go_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub go_import_path: String,
}

/// A named predicate over a query, enforced downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub rule: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}
