//! Error types and handling for confcheck
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File discovery and read errors
//! - [`config`]: Configuration file errors
//! - [`jsonc`]: JSON-with-comments decode errors
//! - [`frontmatter`]: Front-matter extraction and parse errors
//! - [`check`]: Check suite failures

pub mod check;
pub mod config;
pub mod frontmatter;
pub mod fs;
pub mod jsonc;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for confcheck operations
#[derive(Error, Diagnostic, Debug)]
pub enum ConfcheckError {
    // File system errors
    #[error("Could not locate {what} in candidates: {candidates}")]
    #[diagnostic(
        code(confcheck::fs::not_located),
        help("Pass --file, or run from the project root (or set --root)")
    )]
    NotLocated { what: String, candidates: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(confcheck::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(confcheck::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(confcheck::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(confcheck::config::parse_failed),
        help("Only the `launch` and `rules` sections are recognized in confcheck.yaml")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid pattern '{pattern}': {reason}")]
    #[diagnostic(code(confcheck::config::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    // JSON errors
    #[error("Failed to decode JSON: {reason}")]
    #[diagnostic(
        code(confcheck::jsonc::decode_failed),
        help("Only // comments are supported; block comments (/* */) are not")
    )]
    JsonDecodeFailed { reason: String },

    // Front-matter errors
    #[error("YAML front matter block delimited by --- not found at top of file")]
    #[diagnostic(
        code(confcheck::frontmatter::missing),
        help("The document must start with a '---' line and the block must be closed by another '---' line")
    )]
    FrontMatterMissing,

    #[error("Unrecognized YAML line {line_number}: {line:?}")]
    #[diagnostic(
        code(confcheck::frontmatter::unrecognized_line),
        help("Only `key: value` scalars and a `globs:` list are supported")
    )]
    UnrecognizedLine { line_number: usize, line: String },

    // Check failures
    #[error("{failed} of {total} checks failed")]
    #[diagnostic(code(confcheck::check::failed))]
    ChecksFailed { failed: usize, total: usize },
}

impl From<std::io::Error> for ConfcheckError {
    fn from(err: std::io::Error) -> Self {
        ConfcheckError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ConfcheckError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfcheckError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfcheckError {
    fn from(err: serde_json::Error) -> Self {
        ConfcheckError::JsonDecodeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ConfcheckError>;
