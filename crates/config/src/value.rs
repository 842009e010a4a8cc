//! Typed coercion of raw value text.
//!
//! Responsibilities:
//! - Convert a raw value token into a string, character, boolean, integer or float.
//! - Break a bracketed array value into element tokens.
//! - Describe every coercion failure with a typed error.
//!
//! Does NOT handle:
//! - Key lookup or default handling (see `reader.rs`).
//!
//! Invariants:
//! - Booleans accept only the literals in `TRUE_LITERALS` / `FALSE_LITERALS`.
//! - A character value must be exactly one character long.
//! - Numeric values use the standard `FromStr` literal grammar; no trimming or
//!   trailing-garbage tolerance.
//! - A failed array parse leaves the buffer untouched, except for character
//!   arrays, which are written in place and keep the elements before the
//!   first bad one.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::constants::{
    ARRAY_BRACKETS, ARRAY_DELETE_CHARS, ARRAY_DELIMITERS, FALSE_LITERALS, TRUE_LITERALS,
};
use crate::parse::split;

/// Reasons a raw value could not be converted to the requested type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    #[error("expected exactly one character but found {found}")]
    UnexpectedLength { found: usize },

    #[error("cannot read '{raw}' as a boolean. Allowed values are: 0, 1, true, false, TRUE and FALSE")]
    InvalidBool { raw: String },

    #[error("cannot read '{raw}' as an integer: {source}")]
    InvalidInteger {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot read '{raw}' as a float: {source}")]
    InvalidFloat {
        raw: String,
        #[source]
        source: ParseFloatError,
    },

    #[error(
        "the requested array has {requested} fields but the array in the file has {found} fields"
    )]
    ArrayLength { requested: usize, found: usize },

    #[error("field {index} is invalid: {source}")]
    ArrayElement {
        index: usize,
        #[source]
        source: Box<CoercionError>,
    },
}

/// A type that can be read from a raw parameter value.
pub trait ParamValue: Sized + fmt::Display {
    /// Human-readable type name used in diagnostics.
    const KIND: &'static str;

    /// Array elements are written as they are parsed, so a bad element leaves
    /// the earlier ones written.
    const PARTIAL_ARRAY_WRITES: bool = false;

    fn parse_param(raw: &str) -> Result<Self, CoercionError>;
}

impl ParamValue for String {
    const KIND: &'static str = "string";

    fn parse_param(raw: &str) -> Result<Self, CoercionError> {
        Ok(raw.to_string())
    }
}

impl ParamValue for char {
    const KIND: &'static str = "character";
    const PARTIAL_ARRAY_WRITES: bool = true;

    fn parse_param(raw: &str) -> Result<Self, CoercionError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(CoercionError::UnexpectedLength {
                found: raw.chars().count(),
            }),
        }
    }
}

impl ParamValue for bool {
    const KIND: &'static str = "boolean";

    fn parse_param(raw: &str) -> Result<Self, CoercionError> {
        if TRUE_LITERALS.contains(&raw) {
            Ok(true)
        } else if FALSE_LITERALS.contains(&raw) {
            Ok(false)
        } else {
            Err(CoercionError::InvalidBool {
                raw: raw.to_string(),
            })
        }
    }
}

macro_rules! impl_param_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamValue for $ty {
                const KIND: &'static str = "integer";

                fn parse_param(raw: &str) -> Result<Self, CoercionError> {
                    raw.parse().map_err(|source| CoercionError::InvalidInteger {
                        raw: raw.to_string(),
                        source,
                    })
                }
            }
        )*
    };
}

macro_rules! impl_param_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamValue for $ty {
                const KIND: &'static str = "float";

                fn parse_param(raw: &str) -> Result<Self, CoercionError> {
                    raw.parse().map_err(|source| CoercionError::InvalidFloat {
                        raw: raw.to_string(),
                        source,
                    })
                }
            }
        )*
    };
}

impl_param_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_param_float!(f32, f64);

/// Splits an array value such as `[1, 2, 3]` into its element tokens.
///
/// All bracket and brace characters are removed first, then the remainder is
/// split on commas with spaces removed from each element.
pub fn parse_array_literal(raw: &str) -> Vec<String> {
    let inner: String = raw.chars().filter(|c| !ARRAY_BRACKETS.contains(*c)).collect();
    split(&inner, ARRAY_DELIMITERS, ARRAY_DELETE_CHARS)
}

/// Parses every element of an array value into `buffer`, in place.
///
/// The element count must equal `buffer.len()`; otherwise nothing is written.
/// The first bad element stops the operation. The buffer is only written once
/// every element has parsed, unless `T::PARTIAL_ARRAY_WRITES` is set, in which
/// case elements are written one by one and earlier elements stay written.
pub fn parse_array_into<T: ParamValue>(raw: &str, buffer: &mut [T]) -> Result<(), CoercionError> {
    let elements = parse_array_literal(raw);
    if elements.len() != buffer.len() {
        return Err(CoercionError::ArrayLength {
            requested: buffer.len(),
            found: elements.len(),
        });
    }

    let parse = |index: usize, element: &str| {
        T::parse_param(element).map_err(|source| CoercionError::ArrayElement {
            index,
            source: Box::new(source),
        })
    };

    if T::PARTIAL_ARRAY_WRITES {
        for (index, (slot, element)) in buffer.iter_mut().zip(&elements).enumerate() {
            *slot = parse(index, element.as_str())?;
        }
        return Ok(());
    }

    let parsed = elements
        .iter()
        .enumerate()
        .map(|(index, element)| parse(index, element.as_str()))
        .collect::<Result<Vec<T>, _>>()?;
    for (slot, value) in buffer.iter_mut().zip(parsed) {
        *slot = value;
    }

    Ok(())
}

/// Formats a slice as `[a, b, c]` for diagnostics.
pub struct DisplayList<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for DisplayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
