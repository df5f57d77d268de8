//! Discovery of launch.json
//!
//! Fixed candidates relative to the project root are probed first, then the
//! whole tree is searched for files with the configured name. Directories that
//! never hold editor configuration (`.git`, `node_modules`, `target`) are
//! skipped during the search.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::LaunchPolicy;
use crate::error::{Result, fs as fs_error};

const SKIPPED_DIRS: &[&str] = &[".git", "node_modules", "target"];

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// All existing launch files under `root`, most preferred first
pub fn candidates(root: &Path, policy: &LaunchPolicy) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = policy.candidates.iter().map(|c| root.join(c)).collect();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped(e))
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_str() == Some(policy.file_name.as_str()));

    for entry in walker {
        let path = entry.into_path();
        if !found.contains(&path) {
            found.push(path);
        }
    }

    found.retain(|p| {
        let exists = p.is_file();
        tracing::debug!("launch candidate {} exists: {}", p.display(), exists);
        exists
    });
    found
}

/// The launch file to check: `explicit` (relative to `root`) when given, else
/// the first candidate
pub fn locate(root: &Path, policy: &LaunchPolicy, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let path = root.join(path);
        return if path.is_file() {
            Ok(path)
        } else {
            Err(fs_error::not_located("launch configuration", &[path]))
        };
    }

    candidates(root, policy).into_iter().next().ok_or_else(|| {
        let probed: Vec<PathBuf> = policy.candidates.iter().map(|c| root.join(c)).collect();
        fs_error::not_located("launch configuration", &probed)
    })
}
