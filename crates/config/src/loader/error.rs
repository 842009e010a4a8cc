//! Error types for loading parameter files.
//!
//! Responsibilities:
//! - Define error variants for every way a source can be unusable.
//! - Define errors for invalid loader settings coming from the environment.
//!
//! Does NOT handle:
//! - Value coercion failures (see `value.rs`); those never abort loading.
//!
//! Invariants:
//! - All variants carry the path or variable name they concern.
//! - Dotenv errors NEVER include raw .env line contents.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while obtaining the raw text of a parameter file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file {path} does not exist")]
    NotFound { path: PathBuf },

    #[error("{path} is not a regular file")]
    NotAFile { path: PathBuf },

    #[error("size of {path} ({size} Bytes) exceeds the limit of {limit} Bytes")]
    TooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the position is kept, never the offending line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl LoadError {
    /// True for failures that concern the parameter file itself rather than loader settings.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            LoadError::NotFound { .. }
                | LoadError::NotAFile { .. }
                | LoadError::TooLarge { .. }
                | LoadError::Read { .. }
        )
    }
}
