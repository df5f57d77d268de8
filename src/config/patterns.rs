//! Regex lists from confcheck.yaml, compiled as they are loaded

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, config as config_error};

/// Compiled regexes, each kept next to the text it was compiled from.
///
/// Patterns are unanchored searches; `^` and `$` match only at the ends of the
/// searched text. `CASE_INSENSITIVE` applies to every pattern in the list.
#[derive(Debug, Clone, Default)]
pub struct Patterns<const CASE_INSENSITIVE: bool> {
    compiled: Vec<(String, Regex)>,
}

/// Patterns that must match as written
pub type Phrases = Patterns<false>;

/// Patterns matched regardless of case
pub type Forbidden = Patterns<true>;

impl<const CASE_INSENSITIVE: bool> Patterns<CASE_INSENSITIVE> {
    pub fn compile<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let compiled = sources
            .into_iter()
            .map(|source| {
                let source = source.into();
                RegexBuilder::new(&source)
                    .case_insensitive(CASE_INSENSITIVE)
                    .build()
                    .map(|regex| (source.clone(), regex))
                    .map_err(|e| config_error::invalid_pattern(source, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { compiled })
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.compiled.iter().map(|(source, _)| source.as_str())
    }

    /// Source of the first pattern that does not match `text`
    pub fn first_unmatched(&self, text: &str) -> Option<&str> {
        self.compiled
            .iter()
            .find(|(_, regex)| !regex.is_match(text))
            .map(|(source, _)| source.as_str())
    }

    /// Source of the first pattern that matches `text`
    pub fn first_matched(&self, text: &str) -> Option<&str> {
        self.compiled
            .iter()
            .find(|(_, regex)| regex.is_match(text))
            .map(|(source, _)| source.as_str())
    }
}

impl<const CASE_INSENSITIVE: bool> Serialize for Patterns<CASE_INSENSITIVE> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sources())
    }
}

impl<'de, const CASE_INSENSITIVE: bool> Deserialize<'de> for Patterns<CASE_INSENSITIVE> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let sources = Vec::<String>::deserialize(deserializer)?;
        Self::compile(sources).map_err(serde::de::Error::custom)
    }
}
