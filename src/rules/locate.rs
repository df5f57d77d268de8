//! Discovery of the rules document
//!
//! The environment override (`RULES_FILE` by default) wins when set and
//! non-blank; the configured candidates follow in order. Relative paths are
//! resolved against the project root.

use std::path::{Path, PathBuf};

use crate::config::RulesPolicy;
use crate::error::{Result, fs as fs_error};

/// Candidate paths in priority order, existing or not
pub fn candidate_paths(root: &Path, policy: &RulesPolicy) -> Vec<PathBuf> {
    let env_path = std::env::var(&policy.env_override)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    env_path
        .map(PathBuf::from)
        .into_iter()
        .chain(policy.candidates.iter().cloned())
        .map(|p| root.join(p))
        .collect()
}

/// The rules file to check: `explicit` (relative to `root`) when given, else
/// the first existing candidate
pub fn locate(root: &Path, policy: &RulesPolicy, explicit: Option<&Path>) -> Result<PathBuf> {
    let candidates = match explicit {
        Some(path) => vec![root.join(path)],
        None => candidate_paths(root, policy),
    };

    for path in &candidates {
        let exists = path.is_file();
        tracing::debug!("rules candidate {} exists: {}", path.display(), exists);
        if exists {
            return Ok(path.clone());
        }
    }
    Err(fs_error::not_located("rules markdown file", &candidates))
}
