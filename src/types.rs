//! Closed sets: project archetypes, database engines and JSON tag case styles.
//!
//! Each set parses through a smart constructor that rejects unknown strings
//! with [`ConfigError::InvalidEnum`]; comparison is case-sensitive.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Archetype {
    Hobby,
    Microservice,
    Enterprise,
    ApiFirst,
    Analytics,
    Testing,
    MultiTenant,
    Library,
}

impl Archetype {
    pub const ALL: [Archetype; 8] = [
        Archetype::Hobby,
        Archetype::Microservice,
        Archetype::Enterprise,
        Archetype::ApiFirst,
        Archetype::Analytics,
        Archetype::Testing,
        Archetype::MultiTenant,
        Archetype::Library,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Hobby => "hobby",
            Archetype::Microservice => "microservice",
            Archetype::Enterprise => "enterprise",
            Archetype::ApiFirst => "api-first",
            Archetype::Analytics => "analytics",
            Archetype::Testing => "testing",
            Archetype::MultiTenant => "multi-tenant",
            Archetype::Library => "library",
        }
    }

    fn tags() -> Vec<&'static str> {
        Self::ALL.iter().map(Archetype::as_str).collect()
    }
}

/// Parse an archetype tag.
pub fn project_archetype_from(value: &str) -> Result<Archetype, ConfigError> {
    Archetype::ALL
        .into_iter()
        .find(|archetype| archetype.as_str() == value)
        .ok_or_else(|| ConfigError::invalid_enum("project.archetype", value, &Archetype::tags()))
}

pub fn is_valid_archetype(value: &str) -> bool {
    project_archetype_from(value).is_ok()
}

impl FromStr for Archetype {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        project_archetype_from(s)
    }
}

impl TryFrom<String> for Archetype {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        project_archetype_from(&value)
    }
}

impl From<Archetype> for String {
    fn from(value: Archetype) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Engine {
    Postgresql,
    Mysql,
    Sqlite,
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::Postgresql, Engine::Mysql, Engine::Sqlite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Postgresql => "postgresql",
            Engine::Mysql => "mysql",
            Engine::Sqlite => "sqlite",
        }
    }

    fn tags() -> Vec<&'static str> {
        Self::ALL.iter().map(Engine::as_str).collect()
    }
}

/// Parse a database engine tag.
pub fn database_engine_from(value: &str) -> Result<Engine, ConfigError> {
    Engine::ALL
        .into_iter()
        .find(|engine| engine.as_str() == value)
        .ok_or_else(|| ConfigError::invalid_enum("database.engine", value, &Engine::tags()))
}

pub fn is_valid_engine(value: &str) -> bool {
    database_engine_from(value).is_ok()
}

impl FromStr for Engine {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        database_engine_from(s)
    }
}

impl TryFrom<String> for Engine {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        database_engine_from(&value)
    }
}

impl From<Engine> for String {
    fn from(value: Engine) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum JsonCaseStyle {
    Camel,
    Pascal,
    Snake,
}

impl JsonCaseStyle {
    pub const ALL: [JsonCaseStyle; 3] = [
        JsonCaseStyle::Camel,
        JsonCaseStyle::Pascal,
        JsonCaseStyle::Snake,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonCaseStyle::Camel => "camel",
            JsonCaseStyle::Pascal => "pascal",
            JsonCaseStyle::Snake => "snake",
        }
    }

    fn words() -> Vec<&'static str> {
        Self::ALL.iter().map(JsonCaseStyle::as_str).collect()
    }
}

pub fn json_case_style_from(value: &str) -> Result<JsonCaseStyle, ConfigError> {
    JsonCaseStyle::ALL
        .into_iter()
        .find(|style| style.as_str() == value)
        .ok_or_else(|| {
            ConfigError::invalid_enum("emit.json_tags_case_style", value, &JsonCaseStyle::words())
        })
}

pub fn is_valid_json_case_style(value: &str) -> bool {
    json_case_style_from(value).is_ok()
}

impl FromStr for JsonCaseStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        json_case_style_from(s)
    }
}

impl TryFrom<String> for JsonCaseStyle {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        json_case_style_from(&value)
    }
}

impl From<JsonCaseStyle> for String {
    fn from(value: JsonCaseStyle) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for JsonCaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn every_archetype_tag_parses_back_to_itself() {
        for archetype in Archetype::ALL {
            assert_eq!(
                project_archetype_from(archetype.as_str()).expect("parse tag"),
                archetype
            );
        }
        assert!(is_valid_archetype("api-first"));
        assert!(is_valid_archetype("multi-tenant"));
    }

    #[test]
    fn archetype_rejects_unknown_and_miscased_tags() {
        for tag in ["", "Hobby", "api_first", "startup", " hobby"] {
            let err = project_archetype_from(tag).expect_err("tag should be rejected");
            assert_eq!(err.kind(), ErrorKind::InvalidEnum, "tag {tag:?}");
        }
        assert!(!is_valid_archetype("MICROSERVICE"));
    }

    #[test]
    fn engine_accepts_only_the_three_dialects() {
        assert_eq!(database_engine_from("postgresql").ok(), Some(Engine::Postgresql));
        assert_eq!(database_engine_from("mysql").ok(), Some(Engine::Mysql));
        assert_eq!(database_engine_from("sqlite").ok(), Some(Engine::Sqlite));
        assert!(!is_valid_engine("postgres"));
        assert!(!is_valid_engine("SQLite"));
        let err = "oracle".parse::<Engine>().expect_err("oracle rejected");
        assert!(err.to_string().contains("postgresql, mysql, sqlite"));
    }

    #[test]
    fn json_case_style_rejects_kebab() {
        assert_eq!("pascal".parse::<JsonCaseStyle>().ok(), Some(JsonCaseStyle::Pascal));
        assert!(!is_valid_json_case_style("kebab"));
        assert!(!is_valid_json_case_style("Camel"));
    }

    #[test]
    fn engine_deserializes_through_the_smart_constructor() {
        let engine: Engine = serde_yaml::from_str("mysql").expect("parse engine");
        assert_eq!(engine, Engine::Mysql);
        assert!(serde_yaml::from_str::<Engine>("mssql").is_err());
    }
}
