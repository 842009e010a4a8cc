//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not open parameter files (see `config_context` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spfr-cli")]
#[command(about = "SPFR - read typed parameters from simple key: value files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  spfr-cli --config demos/test.config check\n  spfr-cli --config demos/test.config dump -o json\n  spfr-cli --config demos/test.config get number_int --type int\n  spfr-cli --config demos/test.config get number_int_array --type int --len 5\n"
)]
pub struct Cli {
    /// Path to the parameter file.
    ///
    /// Can also be set via SPFR_CONFIG_PATH environment variable.
    #[arg(short, long, global = true, env = "SPFR_CONFIG_PATH", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum accepted file size in bytes (overrides SPFR_MAX_BYTES, default 1 MiB)
    #[arg(long, global = true, value_name = "BYTES")]
    pub max_bytes: Option<u64>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Suppress diagnostics (lookup status lines are not logged).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the file forms complete key/value pairs
    Check,

    /// List all parameters in file order
    Dump,

    /// Resolve a single parameter, falling back to a default
    Get {
        /// Parameter name
        name: String,

        /// Type the value is read as
        #[arg(short = 't', long = "type", value_enum, default_value_t = ValueType::String)]
        value_type: ValueType,

        /// Read the value as an array with exactly this many elements
        #[arg(short, long, value_name = "N")]
        len: Option<usize>,

        /// Value used when the parameter is missing or malformed
        /// (an array literal such as [1,2,3] when --len is given)
        #[arg(short, long, value_name = "VALUE")]
        default: Option<String>,
    },
}

/// Value types a parameter can be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    String,
    Char,
    Int,
    Float,
    Bool,
}
