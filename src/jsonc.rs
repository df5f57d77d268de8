//! JSON-with-comments support for VS Code style configuration files.
//!
//! Only `//` comments are handled. Lines that are nothing but a comment are
//! dropped entirely, so the stripped text has fewer lines than the source and
//! JSON error positions refer to the stripped text. Block comments are left in
//! place and make the subsequent JSON parse fail.

use serde_json::Value;

use crate::error::{Result, jsonc as jsonc_error};

/// Scanner state while walking a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString,
    /// Inside a string, directly after an unconsumed backslash.
    Escaped,
}

/// Returns true when the first non-whitespace characters of `line` are `//`.
fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

/// Strip a trailing `//` comment from one line and trim trailing whitespace.
///
/// `//` inside a double-quoted string is kept verbatim.
pub fn strip_line(line: &str) -> &str {
    let mut state = ScanState::Normal;
    let mut chars = line.char_indices().peekable();
    let mut end = line.len();

    while let Some((idx, ch)) = chars.next() {
        state = match (state, ch) {
            (ScanState::Normal, '"') => ScanState::InString,
            (ScanState::Normal, '/') if matches!(chars.peek(), Some((_, '/'))) => {
                end = idx;
                break;
            }
            (ScanState::Normal, _) => ScanState::Normal,
            (ScanState::InString, '"') => ScanState::Normal,
            (ScanState::InString, '\\') => ScanState::Escaped,
            (ScanState::InString | ScanState::Escaped, _) => ScanState::InString,
        };
    }

    line[..end].trim_end()
}

/// Remove `//` comments from a whole document.
///
/// Comment-only lines contribute nothing to the output, not even an empty line.
/// The remaining lines are joined with `\n`.
pub fn strip_comments(text: &str) -> String {
    text.lines()
        .filter(|line| !is_comment_line(line))
        .map(strip_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse `text` as JSON, retrying once with comments stripped.
pub fn parse(text: &str) -> Result<Value> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(first) => {
            tracing::debug!("plain JSON parse failed ({first}), retrying without comments");
            serde_json::from_str(&strip_comments(text))
                .map_err(|e| jsonc_error::decode_failed(e.to_string()))
        }
    }
}
