//! Delimiter-based tokenization.
//!
//! Responsibilities:
//! - Split normalized text into an ordered list of tokens.
//! - Treat every newline as an additional delimiter.
//! - Remove a configurable set of characters from every token afterwards.
//!
//! Invariants:
//! - A token is only emitted when the text between two delimiters is non-empty.
//! - Character removal happens after splitting, so a token made only of
//!   removable characters survives as an empty string.
//! - Removal applies to every token; a value containing a removable character
//!   (e.g. a space inside a path) loses it.

/// Splits `text` on any character in `delimiters` and on newlines, then
/// removes every character in `delete_chars` from each token.
///
/// ```
/// use spfr_config::parse::split;
///
/// let tokens = split("a: 1\nb: 2\n", ":", " ");
/// assert_eq!(tokens, ["a", "1", "b", "2"]);
/// ```
pub fn split(text: &str, delimiters: &str, delete_chars: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for line in text.lines() {
        let mut prev = 0;
        while let Some(offset) = line[prev..].find(|c: char| delimiters.contains(c)) {
            let pos = prev + offset;
            if pos > prev {
                tokens.push(line[prev..pos].to_string());
            }
            // Delimiters may be multi-byte; skip the whole character.
            let width = line[pos..].chars().next().map_or(1, char::len_utf8);
            prev = pos + width;
        }

        if prev < line.len() {
            tokens.push(line[prev..].to_string());
        }
    }

    if !delete_chars.is_empty() {
        for token in &mut tokens {
            token.retain(|c| !delete_chars.contains(c));
        }
    }

    tokens
}
