//! Expectations for the launch.json checks

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What a valid launch.json must look like
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchPolicy {
    /// Paths probed first, relative to the project root
    pub candidates: Vec<PathBuf>,
    /// File name searched recursively when no candidate exists
    pub file_name: String,
    pub expected_version: String,
    pub expected_name: String,
    pub allowed_hosts: Vec<String>,
    pub expected_port: u16,
    pub web_root_placeholder: String,
}

impl Default for LaunchPolicy {
    fn default() -> Self {
        Self {
            candidates: vec![
                PathBuf::from(".vscode").join("launch.json"),
                PathBuf::from("launch.json"),
            ],
            file_name: "launch.json".to_string(),
            expected_version: "0.2.0".to_string(),
            expected_name: "Launch Chrome against localhost".to_string(),
            allowed_hosts: vec!["localhost".to_string(), "127.0.0.1".to_string()],
            expected_port: 8080,
            web_root_placeholder: "${workspaceFolder}".to_string(),
        }
    }
}
