//! Extract and parse the YAML-style front matter of a Markdown document.
//!
//! This is deliberately not a YAML implementation. The accepted grammar is one
//! `key: value` scalar per line plus a single list-valued key, `globs`, whose
//! items follow on `- value` lines. Blank lines and `#` comments are skipped;
//! anything else is rejected.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Result, frontmatter as fm_error};
use crate::schema::{FieldError, FieldResult};

/// The only key whose value is a list.
pub const LIST_KEY: &str = "globs";

const DELIMITER: &str = "---";

static LIST_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*globs\s*:\s*$").expect("valid regex"));
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-\s").expect("valid regex"));
static LIST_ITEM_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^-\s*"?(.*?)"?\s*$"#).expect("valid regex"));
static KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z0-9_]+)\s*:\s*(.*?)\s*$").expect("valid regex"));
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("valid regex"));

/// Extract the text between the leading `---` delimiter pair.
///
/// The first line must be exactly `---` and the block ends at the next line
/// that is exactly `---`. A trailing `\r` on either delimiter is tolerated.
pub fn extract(document: &str) -> Result<&str> {
    let rest = document
        .strip_prefix("---\n")
        .or_else(|| document.strip_prefix("---\r\n"))
        .ok_or_else(fm_error::missing)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == DELIMITER {
            let inner = &rest[..offset];
            let inner = inner.strip_suffix('\n').unwrap_or(inner);
            return Ok(inner.strip_suffix('\r').unwrap_or(inner));
        }
        offset += line.len();
    }

    Err(fm_error::missing())
}

/// A parsed front-matter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FrontMatterValue {
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<String>),
}

impl FrontMatterValue {
    /// Interpret a raw scalar: quoted string, then boolean, then integer, then raw text.
    pub fn from_scalar(raw: &str) -> Self {
        if raw.starts_with('"') && raw.ends_with('"') {
            // A lone `"` is both the opening and closing quote
            let inner = raw
                .strip_prefix('"')
                .and_then(|r| r.strip_suffix('"'))
                .unwrap_or_default();
            return FrontMatterValue::String(inner.to_string());
        }
        if raw.eq_ignore_ascii_case("true") {
            return FrontMatterValue::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return FrontMatterValue::Bool(false);
        }
        if INTEGER.is_match(raw) {
            // Out-of-range integers stay text
            if let Ok(n) = raw.parse() {
                return FrontMatterValue::Int(n);
            }
        }
        FrontMatterValue::String(raw.to_string())
    }

    fn type_name(&self) -> &'static str {
        match self {
            FrontMatterValue::Bool(_) => "boolean",
            FrontMatterValue::Int(_) => "integer",
            FrontMatterValue::String(_) => "string",
            FrontMatterValue::List(_) => "list",
        }
    }
}

impl fmt::Display for FrontMatterValue {
    /// Renders the value so that parsing it back yields the same value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontMatterValue::Bool(b) => write!(f, "{b}"),
            FrontMatterValue::Int(n) => write!(f, "{n}"),
            FrontMatterValue::String(s) => write!(f, "\"{s}\""),
            FrontMatterValue::List(items) => {
                for item in items {
                    write!(f, "\n  - \"{item}\"")?;
                }
                Ok(())
            }
        }
    }
}

/// Parsed front matter: key to value, later keys overriding earlier ones
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrontMatter {
    entries: BTreeMap<String, FrontMatterValue>,
}

impl FrontMatter {
    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &'static str,
        pick: impl FnOnce(&'a FrontMatterValue) -> Option<T>,
    ) -> FieldResult<T> {
        let value = self.get(key).ok_or(FieldError::Missing)?;
        pick(value).ok_or(FieldError::Mismatch {
            expected,
            found: value.type_name(),
        })
    }

    pub fn get_str(&self, key: &str) -> FieldResult<&str> {
        self.typed(key, "string", |v| match v {
            FrontMatterValue::String(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn get_bool(&self, key: &str) -> FieldResult<bool> {
        self.typed(key, "boolean", |v| match v {
            FrontMatterValue::Bool(b) => Some(*b),
            _ => None,
        })
    }

    pub fn get_int(&self, key: &str) -> FieldResult<i64> {
        self.typed(key, "integer", |v| match v {
            FrontMatterValue::Int(n) => Some(*n),
            _ => None,
        })
    }

    pub fn get_list(&self, key: &str) -> FieldResult<&[String]> {
        self.typed(key, "list", |v| match v {
            FrontMatterValue::List(items) => Some(items.as_slice()),
            _ => None,
        })
    }
}

/// Parse front-matter text (delimiters already removed)
pub fn parse(text: &str) -> Result<FrontMatter> {
    let lines: Vec<&str> = text.lines().collect();
    let mut entries = BTreeMap::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim_end();
        if line.is_empty() || line.trim_start().starts_with('#') {
            i += 1;
            continue;
        }

        if LIST_START.is_match(line) {
            i += 1;
            let mut items = Vec::new();
            while i < lines.len() && LIST_ITEM.is_match(lines[i]) {
                let item_line = lines[i].trim();
                let caps = LIST_ITEM_VALUE
                    .captures(item_line)
                    .ok_or_else(|| fm_error::unrecognized_line(i + 1, item_line))?;
                items.push(caps[1].to_string());
                i += 1;
            }
            entries.insert(LIST_KEY.to_string(), FrontMatterValue::List(items));
            continue;
        }

        let caps = KEY_VALUE
            .captures(line)
            .ok_or_else(|| fm_error::unrecognized_line(i + 1, line))?;
        entries.insert(caps[1].to_string(), FrontMatterValue::from_scalar(&caps[2]));
        i += 1;
    }

    tracing::debug!("parsed {} front matter keys", entries.len());
    Ok(FrontMatter { entries })
}

/// Extract and parse the front matter of a whole document
pub fn parse_document(document: &str) -> Result<FrontMatter> {
    parse(extract(document)?)
}
