//! Front-matter errors

use super::ConfcheckError;

/// Creates a missing front-matter block error
pub fn missing() -> ConfcheckError {
    ConfcheckError::FrontMatterMissing
}

/// Creates an unrecognized line error (`line_number` is 1-based within the block)
pub fn unrecognized_line(line_number: usize, line: impl Into<String>) -> ConfcheckError {
    ConfcheckError::UnrecognizedLine {
        line_number,
        line: line.into(),
    }
}
