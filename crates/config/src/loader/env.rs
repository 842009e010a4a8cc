//! Environment variable parsing for loader settings.
//!
//! Responsibilities:
//! - Read loader settings (`SPFR_MAX_BYTES`) from the environment.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - .env file loading (handled by `ReaderBuilder::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return `LoadError::InvalidValue`.

use super::builder::ReaderBuilder;
use super::error::LoadError;
use crate::constants::ENV_MAX_BYTES;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the builder.
pub fn apply_env(builder: &mut ReaderBuilder) -> Result<(), LoadError> {
    if let Some(max) = env_var_or_none(ENV_MAX_BYTES) {
        let value: u64 = max.parse().map_err(|_| LoadError::InvalidValue {
            var: ENV_MAX_BYTES.to_string(),
            message: "must be a positive number of bytes".to_string(),
        })?;
        if value == 0 {
            return Err(LoadError::InvalidValue {
                var: ENV_MAX_BYTES.to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        builder.set_max_bytes(value);
    }
    Ok(())
}
