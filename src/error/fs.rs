//! File system errors

use super::ConfcheckError;

/// Creates a "not located" error listing every probed candidate
pub fn not_located(what: impl Into<String>, candidates: &[std::path::PathBuf]) -> ConfcheckError {
    let candidates = candidates
        .iter()
        .map(|p| format!("{:?}", p.display().to_string()))
        .collect::<Vec<_>>()
        .join(", ");
    ConfcheckError::NotLocated {
        what: what.into(),
        candidates: format!("[{candidates}]"),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfcheckError {
    ConfcheckError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
