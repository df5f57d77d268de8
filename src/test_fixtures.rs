//! Test fixtures shared by the unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_test_files, VALID_LAUNCH_JSON};
//!
//! let temp = create_temp_dir();
//! create_test_files(&temp, &[(".vscode/launch.json", VALID_LAUNCH_JSON)]);
//! ```

#![allow(clippy::expect_used)]

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// A launch.json as VS Code generates it, comments included
pub const VALID_LAUNCH_JSON: &str = r#"{
    // Use IntelliSense to learn about possible attributes.
    // Hover to view descriptions of existing attributes.
    // For more information, visit: https://go.microsoft.com/fwlink/?linkid=830387
    "version": "0.2.0",
    "configurations": [
        {
            "type": "chrome",
            "request": "launch",
            "name": "Launch Chrome against localhost",
            "url": "http://localhost:8080", // dev server
            "webRoot": "${workspaceFolder}"
        }
    ]
}
"#;

/// A rules document that passes every rules check
pub const VALID_RULES_MD: &str = r#"---
description: "Project rules for the Polling App with QR Code Sharing"
globs:
  - "/app/**"
  - "/components/**"
  - "/lib/**"
alwaysApply: true
version: 1
---

## Polling App Project Rules

### 1. Folder Structure

- Routes live in `/app/polls/` and API handlers in `/app/api/`.
- Shared UI goes in `/components/ui/`, helpers in `/lib/`.

### 2. Forms & UI

- Forms use `react-hook-form` with shadcn/ui components.

### 3. Supabase Usage

- Use the Supabase client from `/lib/`; mutations go through a Server Action.
- Secrets come from `.env.local` via `process.env`, never from source.

### 4. AI-Assisted Patterns

- Generated code follows the folder structure above.

### 5. Verification

- Are routes in `/app/polls` and `/app/api`?
- Are forms using `react-hook-form` and shadcn/ui components?
- Are Supabase keys and operations secure and correct?
- Does AI-generated code follow the existing folder structure and server/client component rules?
"#;

/// Base directory for temp dirs; never relative, so nothing lands under the cwd
/// when `TMPDIR` is something like `./tmp`.
fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples; paths are relative to `temp`.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().is_absolute());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("docs/RULES.md", "# Rules"), ("launch.json", "{}")]);
        assert!(temp.path().join("docs/RULES.md").exists());
        assert!(temp.path().join("launch.json").exists());
    }
}
