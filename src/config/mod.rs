//! Configuration file handling for confcheck
//!
//! An optional `confcheck.yaml` at the project root overrides the values the
//! checks expect. Every field falls back to the built-in expectations, so an
//! empty file (or no file at all) checks the stock polling-app layout.
//!
//! ```yaml
//! launch:
//!   expected_port: 3000
//! rules:
//!   headings: ["Project Rules", "1. Folder Structure"]
//! ```

pub mod launch;
pub mod patterns;
pub mod rules;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config as config_error};

pub use launch::LaunchPolicy;
pub use rules::RulesPolicy;

/// Default configuration file name, looked up in the project root
pub const CONFIG_FILE: &str = "confcheck.yaml";

/// Top-level configuration (confcheck.yaml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub launch: LaunchPolicy,
    pub rules: RulesPolicy,
}

impl Config {
    /// Parse configuration from a YAML string, compiling its patterns
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        // Empty or comment-only files
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_value(value)?)
    }

    /// Load configuration for `root`.
    ///
    /// An explicit path must exist. Without one, `root/confcheck.yaml` is used
    /// when present and the built-in defaults otherwise.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(config_error::not_found(path.display().to_string()));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE);
                if !candidate.is_file() {
                    tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, root.display());
                    return Ok(Self::default());
                }
                candidate
            }
        };

        tracing::debug!("loading configuration from {}", path.display());
        let content = std::fs::read_to_string(&path)
            .map_err(|e| config_error::parse_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content).map_err(|e| match e {
            crate::error::ConfcheckError::ConfigParseFailed { reason, .. } => {
                config_error::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }
}
