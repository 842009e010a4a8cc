//! Opening the parameter file selected on the command line.
//!
//! Responsibilities:
//! - Resolve the parameter file path from `--config` / `SPFR_CONFIG_PATH`.
//! - Apply size-limit settings (env first, then `--max-bytes`).
//! - Select the diagnostics reporter (`--quiet` silences it).
//!
//! Does NOT handle:
//! - Parsing or lookups (see `spfr_config`).
//!
//! Invariants:
//! - Blank paths are treated as missing.
//! - Files are opened strictly so scripts can tell an unavailable file from an empty one.

use anyhow::{Context, Result};
use spfr_config::{NullReporter, ParamReader, ReaderBuilder};
use std::path::{Path, PathBuf};

use crate::args::Cli;

/// Returns the parameter file path, ignoring blank values.
pub(crate) fn config_path(cli: &Cli) -> Result<&Path> {
    cli.config
        .as_deref()
        .filter(|path| !path.to_string_lossy().trim().is_empty())
        .context("No parameter file given. Use --config <FILE> or set SPFR_CONFIG_PATH")
}

/// Opens the parameter file with the settings from the command line.
pub(crate) fn open_reader(cli: &Cli) -> Result<(PathBuf, ParamReader)> {
    let path = config_path(cli)?.to_path_buf();

    let mut builder = ReaderBuilder::new()
        .from_env()
        .context("Failed to load settings from environment")?;
    if let Some(max_bytes) = cli.max_bytes {
        builder = builder.with_max_bytes(max_bytes);
    }
    if cli.quiet {
        builder = builder.with_reporter(NullReporter);
    }

    let reader = builder
        .try_open(&path)
        .with_context(|| format!("Failed to open parameter file {}", path.display()))?;

    Ok((path, reader))
}
