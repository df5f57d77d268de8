//! Configuration errors

use super::ConfcheckError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> ConfcheckError {
    ConfcheckError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfcheckError {
    ConfcheckError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> ConfcheckError {
    ConfcheckError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
