//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Open the parameter file once for the selected command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Process exit (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::get::GetRequest;
use crate::config_context::open_reader;
use crate::error::ExitCode;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
///
/// Returns the exit code the command settled on; errors are mapped to exit
/// codes by the caller.
pub(crate) fn run_command(cli: Cli) -> Result<ExitCode> {
    let format = OutputFormat::parse(&cli.output)?;
    let (path, reader) = open_reader(&cli)?;

    match &cli.command {
        Commands::Check => commands::check::run(&path, &reader, format),
        Commands::Dump => commands::dump::run(&reader, format),
        Commands::Get {
            name,
            value_type,
            len,
            default,
        } => {
            let request = GetRequest {
                name,
                value_type: *value_type,
                len: *len,
                default: default.as_deref(),
            };
            commands::get::run(&reader, &request, format)
        }
    }
}
