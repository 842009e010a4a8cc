//! Diagnostics emitted while loading parameter files and resolving lookups.
//!
//! Responsibilities:
//! - Define the `Diagnostic` events the reader produces.
//! - Define the `Reporter` sink the host application plugs in.
//! - Provide the default `TracingReporter`, a silent `NullReporter`, and an
//!   in-memory `MemoryReporter`.
//!
//! Does NOT handle:
//! - Deciding when a diagnostic is emitted (see `reader.rs` and `loader`).
//!
//! Invariants:
//! - Reporting never influences lookup results.
//! - Every `Diagnostic` renders as a single human-readable status message.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::constants::FORMAT_EXAMPLE;
use crate::loader::LoadError;
use crate::value::CoercionError;

/// A status event produced by the loader or an accessor.
pub enum Diagnostic<'a> {
    /// The source file passed the size check and was read.
    SourceLoaded { path: &'a Path, bytes: u64 },
    /// The source file could not be used; the reader falls back to defaults.
    SourceFailed { path: &'a Path, error: &'a LoadError },
    /// The token count is odd, so keys and values cannot be paired.
    MalformedFormat { token_count: usize },
    /// The source was tokenized into complete pairs.
    Loaded { pairs: usize },
    /// First lookup found the data unusable (empty or malformed).
    InvalidData,
    /// A lookup resolved `name` to `value`.
    Found {
        name: &'a str,
        value: &'a dyn fmt::Display,
    },
    /// `name` is not present; `default` is kept.
    NotFound {
        name: &'a str,
        default: &'a dyn fmt::Display,
    },
    /// `name` is present but its value could not be coerced; `default` is kept.
    Malformed {
        name: &'a str,
        error: &'a CoercionError,
        default: &'a dyn fmt::Display,
    },
}

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Diagnostic<'_> {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::SourceLoaded { .. } | Diagnostic::Loaded { .. } | Diagnostic::Found { .. } => {
                Severity::Info
            }
            Diagnostic::InvalidData | Diagnostic::NotFound { .. } | Diagnostic::Malformed { .. } => {
                Severity::Warning
            }
            Diagnostic::SourceFailed { .. } | Diagnostic::MalformedFormat { .. } => {
                Severity::Error
            }
        }
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SourceLoaded { path, bytes } => write!(
                f,
                "Size of the configuration file {}: {} Bytes",
                path.display(),
                bytes
            ),
            Diagnostic::SourceFailed { path, error } => write!(
                f,
                "Error while reading the configuration file {}: {}",
                path.display(),
                error
            ),
            Diagnostic::MalformedFormat { token_count } => write!(
                f,
                "The configuration file has one or more wrong parameters \
                 ({token_count} tokens do not form key/value pairs). \
                 Limitations: there are no spaces allowed inside values.\n\
                 Here an example of an allowed format:\n\n{FORMAT_EXAMPLE}"
            ),
            Diagnostic::Loaded { pairs } => write!(
                f,
                "Success in reading the configuration file ({pairs} parameters)"
            ),
            Diagnostic::InvalidData => f.write_str(
                "Data invalid! Please read the previous output for further information. \
                 Using initial values...",
            ),
            Diagnostic::Found { name, value } => write!(f, "Parameter for {name} is: {value}"),
            Diagnostic::NotFound { name, default } => write!(
                f,
                "Could not find the parameter for {name}. Using instead the initial value: {default}"
            ),
            Diagnostic::Malformed {
                name,
                error,
                default,
            } => write!(
                f,
                "Error in reading parameter for {name}: {error}. \
                 Using instead the initial value: {default}"
            ),
        }
    }
}

/// Receives diagnostics from the reader.
pub trait Reporter {
    fn report(&self, diagnostic: &Diagnostic<'_>);
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        (**self).report(diagnostic);
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        (**self).report(diagnostic);
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        match diagnostic {
            Diagnostic::Found { name, value } => {
                tracing::info!(parameter = %name, value = %value, "{diagnostic}");
            }
            Diagnostic::NotFound { name, default } => {
                tracing::warn!(parameter = %name, default = %default, "{diagnostic}");
            }
            Diagnostic::Malformed { name, error, .. } => {
                tracing::warn!(parameter = %name, error = %error, "{diagnostic}");
            }
            Diagnostic::SourceFailed { path, .. } => {
                tracing::error!(path = %path.display(), "{diagnostic}");
            }
            other => match other.severity() {
                Severity::Info => tracing::info!("{other}"),
                Severity::Warning => tracing::warn!("{other}"),
                Severity::Error => tracing::error!("{other}"),
            },
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _diagnostic: &Diagnostic<'_>) {}
}

/// Keeps rendered diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered messages in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(_, line)| line)
            .collect()
    }

    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((diagnostic.severity(), diagnostic.to_string()));
        }
    }
}
