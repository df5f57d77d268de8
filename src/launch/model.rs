//! Typed view of a parsed launch.json

use serde_json::{Map, Value};

use crate::schema::{FieldError, FieldResult, json_list, json_str, json_type_name};

/// Keys every configuration must carry
pub const REQUIRED_KEYS: [&str; 3] = ["name", "request", "type"];

/// Top-level launch.json object
#[derive(Debug, Clone)]
pub struct LaunchDocument {
    object: Map<String, Value>,
}

impl LaunchDocument {
    /// Wrap a parsed value; the top level must be an object.
    ///
    /// On failure returns the JSON type that was found instead.
    pub fn from_value(value: Value) -> std::result::Result<Self, &'static str> {
        match value {
            Value::Object(object) => Ok(Self { object }),
            other => Err(json_type_name(&other)),
        }
    }

    pub fn version(&self) -> FieldResult<&str> {
        json_str(&self.object, "version")
    }

    pub fn configurations(&self) -> FieldResult<Vec<LaunchConfiguration<'_>>> {
        let items = json_list(&self.object, "configurations")?;
        Ok(items
            .iter()
            .enumerate()
            .map(|(index, value)| LaunchConfiguration { index, value })
            .collect())
    }

    /// Configurations, treating an absent key as an empty list
    pub fn configurations_or_empty(&self) -> FieldResult<Vec<LaunchConfiguration<'_>>> {
        match self.configurations() {
            Err(FieldError::Missing) => Ok(Vec::new()),
            other => other,
        }
    }
}

/// One entry of `configurations`
#[derive(Debug, Clone, Copy)]
pub struct LaunchConfiguration<'a> {
    pub index: usize,
    value: &'a Value,
}

impl<'a> LaunchConfiguration<'a> {
    pub fn as_object(&self) -> Option<&'a Map<String, Value>> {
        self.value.as_object()
    }

    fn field(&self, key: &str) -> FieldResult<&'a str> {
        match self.value.as_object() {
            Some(object) => json_str(object, key),
            None => Err(FieldError::Missing),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.as_object().is_some_and(|o| o.contains_key(key))
    }

    pub fn kind(&self) -> FieldResult<&'a str> {
        self.field("type")
    }

    pub fn request(&self) -> FieldResult<&'a str> {
        self.field("request")
    }

    pub fn name(&self) -> FieldResult<&'a str> {
        self.field("name")
    }

    pub fn url(&self) -> FieldResult<&'a str> {
        self.field("url")
    }

    pub fn web_root(&self) -> FieldResult<&'a str> {
        self.field("webRoot")
    }

    /// Required keys this configuration lacks, sorted
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| !self.has(key))
            .collect()
    }
}
