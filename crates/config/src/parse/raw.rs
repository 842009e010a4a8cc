//! The flat pair sequence produced from a parameter file.
//!
//! Responsibilities:
//! - Own the ordered `[key, value, key, value, ...]` token list.
//! - Answer first-match lookups by key.
//! - Report whether the token list forms complete pairs.
//!
//! Does NOT handle:
//! - Caching the validity result (see `reader.rs`).
//! - Type coercion of values (see `value.rs`).
//!
//! Invariants:
//! - The token list is never mutated after construction.
//! - Duplicate keys are kept; lookups resolve to the first occurrence.

use serde::Serialize;

use super::{split, strip_comments};
use crate::constants::{PAIR_DELETE_CHARS, PAIR_DELIMITERS};

/// A key and its raw value text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pair<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Tokenized parameter file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    tokens: Vec<String>,
}

impl RawConfig {
    /// Wraps an already tokenized sequence.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Strips comments from `source` and tokenizes it into key/value tokens.
    pub fn parse(source: &str) -> Self {
        let normalized = strip_comments(source);
        Self::from_tokens(split(&normalized, PAIR_DELIMITERS, PAIR_DELETE_CHARS))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens (twice the number of pairs for a well-formed file).
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when the sequence is non-empty and every key has a value.
    pub fn is_well_formed(&self) -> bool {
        !self.tokens.is_empty() && self.tokens.len() % 2 == 0
    }

    /// Iterates over complete pairs in source order.
    ///
    /// A dangling trailing key (odd token count) is not yielded.
    pub fn pairs(&self) -> impl Iterator<Item = Pair<'_>> {
        self.tokens.chunks_exact(2).map(|chunk| Pair {
            key: chunk[0].as_str(),
            value: chunk[1].as_str(),
        })
    }

    /// Returns the value of the first pair whose key equals `name`.
    pub fn find(&self, name: &str) -> Option<&str> {
        self.pairs()
            .find(|pair| pair.key == name)
            .map(|pair| pair.value)
    }
}
