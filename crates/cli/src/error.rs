//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `LoadError` variants and lookup outcomes to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.

use spfr_config::{LoadError, Lookup};

/// Structured exit codes for spfr-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The parameter file is missing, not a file, too large, or unreadable.
    SourceUnavailable = 2,

    /// The file is empty or its tokens do not form key/value pairs.
    ValidationError = 3,

    /// The requested parameter is not in the file; the default was printed.
    NotFound = 4,

    /// The parameter value could not be read as the requested type; the default was printed.
    MalformedValue = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LoadError> for ExitCode {
    fn from(err: &LoadError) -> Self {
        if err.is_source_error() {
            ExitCode::SourceUnavailable
        } else {
            ExitCode::GeneralError
        }
    }
}

impl From<&Lookup> for ExitCode {
    fn from(outcome: &Lookup) -> Self {
        match outcome {
            Lookup::Found => ExitCode::Success,
            Lookup::NotFound => ExitCode::NotFound,
            Lookup::InvalidConfig => ExitCode::ValidationError,
            Lookup::Malformed(_) => ExitCode::MalformedValue,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `LoadError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<LoadError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
