//! Check suite errors

use super::ConfcheckError;

/// Creates a checks failed error
pub fn failed(failed: usize, total: usize) -> ConfcheckError {
    ConfcheckError::ChecksFailed { failed, total }
}
