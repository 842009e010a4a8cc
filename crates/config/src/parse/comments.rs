//! Comment removal.
//!
//! Responsibilities:
//! - Remove `#` comments from raw parameter file text.
//! - Keep the terminating newline of lines that carry content before a comment.
//! - Drop lines that consist only of a comment entirely (no blank line left behind).
//!
//! Invariants:
//! - Text without a comment marker is returned unchanged.
//! - A newline always ends an open comment and starts a new line.

use crate::constants::COMMENT_MARKER;

/// Scanner state while walking the source one character at a time.
#[derive(Debug, Clone, Copy)]
struct ParseState {
    /// Inside a comment that has not reached its newline yet.
    in_comment: bool,
    /// No non-whitespace character has been seen on the current line.
    at_line_start: bool,
    /// The open comment began before any content on its line.
    whole_line_comment: bool,
}

impl Default for ParseState {
    fn default() -> Self {
        Self {
            in_comment: false,
            at_line_start: true,
            whole_line_comment: false,
        }
    }
}

/// Removes all comments from `source`.
///
/// A comment starts at `#` and runs up to the next newline. When the comment
/// is the only content of its line, the line disappears together with its
/// newline. When content precedes the comment, only the comment is removed
/// and the newline is kept so the content stays a complete line.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut state = ParseState::default();

    for c in source.chars() {
        if state.in_comment {
            if c == '\n' {
                state.in_comment = false;
                if !state.whole_line_comment {
                    out.push('\n');
                }
                state.at_line_start = true;
            }
            continue;
        }

        if c == COMMENT_MARKER {
            state.in_comment = true;
            state.whole_line_comment = state.at_line_start;
            continue;
        }

        out.push(c);

        if c == '\n' {
            state.at_line_start = true;
        } else if !c.is_ascii_whitespace() {
            state.at_line_start = false;
        }
    }

    out
}
