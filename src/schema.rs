//! Typed field access over loosely structured documents.
//!
//! Parsed JSON and front-matter values are read through accessors that tell
//! "absent" apart from "present with the wrong type".

use std::fmt;

use serde_json::{Map, Value};

/// Why a field could not be read as the requested type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Missing,
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing => write!(f, "missing"),
            FieldError::Mismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
        }
    }
}

pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// JSON type name used in mismatch messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Read `key` from a JSON object as a string
pub fn json_str<'a>(object: &'a Map<String, Value>, key: &str) -> FieldResult<&'a str> {
    match object.get(key) {
        None => Err(FieldError::Missing),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(FieldError::Mismatch {
            expected: "string",
            found: json_type_name(other),
        }),
    }
}

/// Read `key` from a JSON object as a list
pub fn json_list<'a>(object: &'a Map<String, Value>, key: &str) -> FieldResult<&'a [Value]> {
    match object.get(key) {
        None => Err(FieldError::Missing),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(FieldError::Mismatch {
            expected: "list",
            found: json_type_name(other),
        }),
    }
}
