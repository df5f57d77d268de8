//! JSON decode errors

use super::ConfcheckError;

/// Creates a JSON decode error
pub fn decode_failed(reason: impl Into<String>) -> ConfcheckError {
    ConfcheckError::JsonDecodeFailed {
        reason: reason.into(),
    }
}
