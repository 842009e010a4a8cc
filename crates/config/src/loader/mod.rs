//! Parameter file loading.
//!
//! Responsibilities:
//! - Obtain the raw text of a parameter file, enforcing the size limit.
//! - Provide a builder-pattern `ReaderBuilder` for loader settings.
//! - Enforce the `DOTENV_DISABLED` gate before `.env` loading.
//!
//! Does NOT handle:
//! - Comment stripping and tokenization (see `parse`).
//! - Typed lookups (see `reader.rs`).
//!
//! Invariants / Assumptions:
//! - The source is read completely and released before parsing begins.
//! - `SPFR_MAX_BYTES` only applies when `from_env()` is called.

mod builder;
mod env;
mod error;
mod source;

pub use builder::ReaderBuilder;
pub use env::env_var_or_none;
pub use error::LoadError;
pub use source::{Source, read_source};
