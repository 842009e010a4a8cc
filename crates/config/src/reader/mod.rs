//! Typed parameter lookups.
//!
//! Responsibilities:
//! - Hold the parsed pair sequence for the lifetime of the reader.
//! - Validate the pair sequence lazily, once, on first use.
//! - Resolve scalar and fixed-size array parameters into caller-owned storage.
//!
//! Does NOT handle:
//! - Reading files (see `loader`).
//! - Literal grammar of individual types (see `value.rs`).
//!
//! Invariants:
//! - The pair sequence is never mutated after construction.
//! - A failed lookup never changes a scalar or array destination, except a
//!   character array whose element past the first fails to parse (elements
//!   are written in order, fail-fast).
//! - Every lookup emits exactly one `Found`, `NotFound` or `Malformed` diagnostic.
//! - Readers are not `Sync`; share one across threads only behind external locking.

use std::cell::OnceCell;
use std::fmt;
use std::path::Path;

use crate::loader::ReaderBuilder;
use crate::parse::{Pair, RawConfig};
use crate::report::{Diagnostic, Reporter};
use crate::value::{CoercionError, DisplayList, ParamValue, parse_array_into};

/// Outcome of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The destination now holds the value from the file.
    Found,
    /// No pair with the requested key; the default is kept.
    NotFound,
    /// The file is empty or its tokens do not form pairs; the default is kept.
    InvalidConfig,
    /// The key exists but its value could not be coerced.
    Malformed(CoercionError),
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found)
    }
}

/// Read-only view over a parsed parameter file.
pub struct ParamReader {
    raw: RawConfig,
    valid: OnceCell<bool>,
    reporter: Box<dyn Reporter>,
}

impl fmt::Debug for ParamReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamReader")
            .field("raw", &self.raw)
            .field("valid", &self.valid.get())
            .finish_non_exhaustive()
    }
}

impl ParamReader {
    pub(crate) fn new(raw: RawConfig, reporter: Box<dyn Reporter>) -> Self {
        Self {
            raw,
            valid: OnceCell::new(),
            reporter,
        }
    }

    pub fn builder() -> ReaderBuilder {
        ReaderBuilder::new()
    }

    /// Open `path` with default settings. See [`ReaderBuilder::open`].
    pub fn open(path: impl AsRef<Path>) -> Self {
        ReaderBuilder::new().open(path)
    }

    /// Parse in-memory text with default settings.
    pub fn from_text(text: &str) -> Self {
        ReaderBuilder::new().from_text(text)
    }

    /// Whether lookups can succeed at all.
    ///
    /// Computed on first call (or first lookup) and cached; an unusable file
    /// is reported once at that point.
    pub fn is_valid(&self) -> bool {
        *self.valid.get_or_init(|| {
            let valid = self.raw.is_well_formed();
            if !valid {
                self.reporter.report(&Diagnostic::InvalidData);
            }
            valid
        })
    }

    pub fn raw_config(&self) -> &RawConfig {
        &self.raw
    }

    /// Complete pairs in file order, duplicates included.
    pub fn pairs(&self) -> impl Iterator<Item = Pair<'_>> {
        self.raw.pairs()
    }

    /// Number of complete pairs.
    pub fn len(&self) -> usize {
        self.raw.token_count() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Raw value text of the first pair named `name`, if the file is valid.
    pub fn raw(&self, name: &str) -> Option<&str> {
        if self.is_valid() {
            self.raw.find(name)
        } else {
            None
        }
    }

    fn resolve(&self, name: &str) -> Result<&str, Lookup> {
        if !self.is_valid() {
            return Err(Lookup::InvalidConfig);
        }
        self.raw.find(name).ok_or(Lookup::NotFound)
    }

    /// Look up a scalar parameter.
    ///
    /// On success `value` is overwritten; otherwise it keeps its current
    /// content, which acts as the default.
    ///
    /// ```
    /// use spfr_config::ParamReader;
    ///
    /// let reader = ParamReader::builder()
    ///     .with_reporter(spfr_config::NullReporter)
    ///     .from_text("number_int: 12\n");
    ///
    /// let mut number = 0;
    /// reader.get("number_int", &mut number);
    /// assert_eq!(number, 12);
    ///
    /// let mut missing = 7;
    /// reader.get("missing_key", &mut missing);
    /// assert_eq!(missing, 7);
    /// ```
    pub fn get<T: ParamValue>(&self, name: &str, value: &mut T) -> Lookup {
        let raw = match self.resolve(name) {
            Ok(raw) => raw,
            Err(outcome) => {
                self.reporter.report(&Diagnostic::NotFound {
                    name,
                    default: &*value,
                });
                return outcome;
            }
        };

        match T::parse_param(raw) {
            Ok(parsed) => {
                *value = parsed;
                self.reporter.report(&Diagnostic::Found {
                    name,
                    value: &*value,
                });
                Lookup::Found
            }
            Err(error) => {
                self.reporter.report(&Diagnostic::Malformed {
                    name,
                    error: &error,
                    default: &*value,
                });
                Lookup::Malformed(error)
            }
        }
    }

    /// Look up a scalar parameter, returning `default` when it cannot be resolved.
    pub fn get_or<T: ParamValue>(&self, name: &str, default: T) -> T {
        let mut value = default;
        self.get(name, &mut value);
        value
    }

    /// Look up a fixed-size array parameter.
    ///
    /// The file must list exactly `buffer.len()` elements; the buffer is never
    /// resized. The first element that fails to parse stops the lookup and
    /// leaves the buffer unchanged; character arrays are the exception and keep
    /// the elements written before the bad one.
    pub fn get_array<T: ParamValue>(&self, name: &str, buffer: &mut [T]) -> Lookup {
        let raw = match self.resolve(name) {
            Ok(raw) => raw,
            Err(outcome) => {
                self.reporter.report(&Diagnostic::NotFound {
                    name,
                    default: &DisplayList(&*buffer),
                });
                return outcome;
            }
        };

        match parse_array_into(raw, buffer) {
            Ok(()) => {
                self.reporter.report(&Diagnostic::Found {
                    name,
                    value: &DisplayList(&*buffer),
                });
                Lookup::Found
            }
            Err(error) => {
                self.reporter.report(&Diagnostic::Malformed {
                    name,
                    error: &error,
                    default: &DisplayList(&*buffer),
                });
                Lookup::Malformed(error)
            }
        }
    }
}

#[cfg(test)]
mod tests;
