//! Simple parameter file reader.
//!
//! This crate loads small `key: value` parameter files, strips `#` comments,
//! and resolves typed parameters (strings, characters, integers, floats,
//! booleans and fixed-size arrays of each) into caller-owned storage, keeping
//! the caller's value as the default whenever a parameter is missing or
//! malformed.

pub mod constants;
mod loader;
pub mod parse;
mod reader;
pub mod report;
mod value;

pub use loader::{LoadError, ReaderBuilder, Source, env_var_or_none, read_source};
pub use parse::{Pair, RawConfig};
pub use reader::{Lookup, ParamReader};
pub use report::{Diagnostic, MemoryReporter, NullReporter, Reporter, Severity, TracingReporter};
pub use value::{CoercionError, DisplayList, ParamValue, parse_array_into, parse_array_literal};
