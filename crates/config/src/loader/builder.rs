//! Parameter reader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ReaderBuilder` for loader settings.
//! - Open parameter files either strictly (`try_open`) or degrading (`open`).
//! - Build readers from in-memory text.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - File access details (delegated to source.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when called after `from_env()`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - A degrading open never fails; it yields a reader whose lookups fall back to defaults.

use std::path::Path;

use super::env::apply_env;
use super::error::LoadError;
use super::source::read_source;
use crate::constants::{DEFAULT_MAX_SOURCE_BYTES, ENV_DOTENV_DISABLED};
use crate::parse::RawConfig;
use crate::reader::ParamReader;
use crate::report::{Diagnostic, Reporter, TracingReporter};

/// Builds `ParamReader`s from files or text.
pub struct ReaderBuilder {
    max_bytes: u64,
    reporter: Box<dyn Reporter>,
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderBuilder {
    /// Create a builder with the 1 MiB size limit and tracing diagnostics.
    pub fn new() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_SOURCE_BYTES,
            reporter: Box::new(TracingReporter),
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`LoadError::DotenvParse`) or cannot be read (`LoadError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, LoadError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if e.not_found() => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(LoadError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(LoadError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(LoadError::DotenvUnknown),
        }
    }

    /// Read loader settings from environment variables.
    pub fn from_env(mut self) -> Result<Self, LoadError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Override the maximum accepted file size in bytes.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Route diagnostics to `reporter` instead of `tracing`.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub(crate) fn set_max_bytes(&mut self, max_bytes: u64) {
        self.max_bytes = max_bytes;
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Open `path`, returning an error if the file is missing, not a file, too
    /// large, or unreadable.
    pub fn try_open(self, path: impl AsRef<Path>) -> Result<ParamReader, LoadError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), max_bytes = self.max_bytes, "Opening parameter file");

        let source = match read_source(path, self.max_bytes) {
            Ok(source) => source,
            Err(error) => {
                self.reporter
                    .report(&Diagnostic::SourceFailed { path, error: &error });
                return Err(error);
            }
        };

        self.reporter.report(&Diagnostic::SourceLoaded {
            path,
            bytes: source.bytes,
        });
        Ok(self.from_text(&source.text))
    }

    /// Open `path`, falling back to an empty reader if the file cannot be used.
    ///
    /// The failure is reported; every lookup on the returned reader keeps the
    /// caller's default.
    pub fn open(self, path: impl AsRef<Path>) -> ParamReader {
        let path = path.as_ref();
        let max_bytes = self.max_bytes;
        let reporter = self.reporter;

        match read_source(path, max_bytes) {
            Ok(source) => {
                reporter.report(&Diagnostic::SourceLoaded {
                    path,
                    bytes: source.bytes,
                });
                Self::finish(RawConfig::parse(&source.text), reporter)
            }
            Err(error) => {
                reporter.report(&Diagnostic::SourceFailed { path, error: &error });
                ParamReader::new(RawConfig::default(), reporter)
            }
        }
    }

    /// Build a reader from in-memory parameter text.
    pub fn from_text(self, text: &str) -> ParamReader {
        Self::finish(RawConfig::parse(text), self.reporter)
    }

    fn finish(raw: RawConfig, reporter: Box<dyn Reporter>) -> ParamReader {
        if raw.token_count() % 2 != 0 {
            reporter.report(&Diagnostic::MalformedFormat {
                token_count: raw.token_count(),
            });
        } else if !raw.is_empty() {
            reporter.report(&Diagnostic::Loaded {
                pairs: raw.token_count() / 2,
            });
        }
        ParamReader::new(raw, reporter)
    }
}
