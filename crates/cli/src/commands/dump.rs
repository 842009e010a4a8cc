//! Dump command.
//!
//! Responsibilities:
//! - List every complete key/value pair in file order, duplicates included.

use anyhow::Result;
use spfr_config::{Pair, ParamReader};

use crate::error::ExitCode;
use crate::formatters::{OutputFormat, format_pairs};

pub fn run(reader: &ParamReader, format: OutputFormat) -> Result<ExitCode> {
    let pairs: Vec<Pair<'_>> = reader.pairs().collect();
    print!("{}", format_pairs(&pairs, format)?);

    // A dangling key means the listing above is incomplete.
    Ok(if reader.raw_config().token_count() % 2 == 0 {
        ExitCode::Success
    } else {
        ExitCode::ValidationError
    })
}
