//! Check command.
//!
//! Responsibilities:
//! - Report whether the parameter file forms complete key/value pairs.
//!
//! Does NOT handle:
//! - Opening the file (see `config_context`).

use anyhow::Result;
use spfr_config::ParamReader;
use std::path::Path;

use crate::error::ExitCode;
use crate::formatters::{CheckOutput, OutputFormat, format_check};

/// Run the check command, returning `ValidationError` for unusable files.
pub fn run(path: &Path, reader: &ParamReader, format: OutputFormat) -> Result<ExitCode> {
    let result = CheckOutput {
        path: path.display().to_string(),
        valid: reader.is_valid(),
        pairs: reader.len(),
        tokens: reader.raw_config().token_count(),
    };

    print!("{}", format_check(&result, format)?);

    Ok(if result.valid {
        ExitCode::Success
    } else {
        ExitCode::ValidationError
    })
}
