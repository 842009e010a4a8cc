//! Centralized constants for the SPFR workspace.
//!
//! This module contains the delimiters, limits and literal sets shared by the
//! parser, the typed accessors and the CLI.

// =============================================================================
// Source Limits
// =============================================================================

/// Maximum size of a parameter file in bytes (1 MiB).
pub const DEFAULT_MAX_SOURCE_BYTES: u64 = 1_048_576;

// =============================================================================
// Grammar
// =============================================================================

/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// Separates a key from its value on a line.
pub const PAIR_DELIMITERS: &str = ":";

/// Characters removed from every key and value token.
pub const PAIR_DELETE_CHARS: &str = " ";

/// Separates the elements of an array value.
pub const ARRAY_DELIMITERS: &str = ",";

/// Characters removed from every array element token.
pub const ARRAY_DELETE_CHARS: &str = " ";

/// Bracket and brace characters stripped from an array value before splitting.
pub const ARRAY_BRACKETS: &str = "()[]{}";

/// Literals accepted as boolean `true`.
pub const TRUE_LITERALS: &[&str] = &["1", "true", "TRUE"];

/// Literals accepted as boolean `false`.
pub const FALSE_LITERALS: &[&str] = &["0", "false", "FALSE"];

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the maximum accepted source size.
pub const ENV_MAX_BYTES: &str = "SPFR_MAX_BYTES";

/// Path of the parameter file used by the CLI.
pub const ENV_CONFIG_PATH: &str = "SPFR_CONFIG_PATH";

/// Disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Diagnostics
// =============================================================================

/// Example of a well-formed parameter file, shown when a file cannot be paired.
pub const FORMAT_EXAMPLE: &str = "\
path: /home/USERNAME/workspace/blubb
number_int: 12
number_float: 4234.234234
number_bool_1: 1
number_bool_2: false
number_array: [2,3,4.5]
list: {Hello, World, !}";
