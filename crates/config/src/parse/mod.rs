//! Text normalization and tokenization.
//!
//! Responsibilities:
//! - Strip comments from raw parameter file text (`comments.rs`).
//! - Split normalized text into tokens (`split.rs`).
//! - Hold the resulting key/value token sequence (`raw.rs`).
//!
//! Does NOT handle:
//! - Reading files or enforcing size limits (see `loader`).
//! - Typed value coercion (see `value.rs`).

mod comments;
mod raw;
mod split;

pub use comments::strip_comments;
pub use raw::{Pair, RawConfig};
pub use split::split;
