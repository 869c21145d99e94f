//! Path-or-list values for `queries` and `schema`.
//!
//! On the wire a path-or-list is either a single string or a sequence of
//! strings. In memory it is always an ordered list, and it always serializes
//! as a sequence so emitted files keep one shape.
use crate::error::ConfigError;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOrList {
    paths: Vec<String>,
}

impl PathOrList {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn single(path: impl Into<String>) -> Self {
        Self {
            paths: vec![path.into()],
        }
    }

    pub fn strings(&self) -> &[String] {
        &self.paths
    }

    /// First entry, or the empty string for an empty list.
    pub fn first(&self) -> &str {
        self.paths.first().map(String::as_str).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Convert an already-parsed YAML node, reporting a bad shape against `field`.
    pub fn from_value(field: &str, value: &serde_yaml::Value) -> Result<Self, ConfigError> {
        match value {
            serde_yaml::Value::String(path) => Ok(Self::single(path.clone())),
            serde_yaml::Value::Sequence(items) => {
                let mut paths = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    let Some(path) = item.as_str() else {
                        return Err(ConfigError::invalid_shape(
                            format!("{field}[{idx}]"),
                            describe_value(item),
                        ));
                    };
                    paths.push(path.to_string());
                }
                Ok(Self { paths })
            }
            other => Err(ConfigError::invalid_shape(field, describe_value(other))),
        }
    }
}

pub(crate) fn describe_value(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

impl From<&str> for PathOrList {
    fn from(value: &str) -> Self {
        Self::single(value)
    }
}

impl From<Vec<String>> for PathOrList {
    fn from(paths: Vec<String>) -> Self {
        Self { paths }
    }
}

impl Serialize for PathOrList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.paths.len()))?;
        for path in &self.paths {
            seq.serialize_element(path)?;
        }
        seq.end()
    }
}

struct PathOrListVisitor;

impl<'de> Visitor<'de> for PathOrListVisitor {
    type Value = PathOrList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a path string or a sequence of path strings")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(PathOrList::single(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(PathOrList::single(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut paths = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(path) = seq.next_element::<String>()? {
            paths.push(path);
        }
        Ok(PathOrList { paths })
    }
}

impl<'de> Deserialize<'de> for PathOrList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PathOrListVisitor)
    }
}
