//! Get command.
//!
//! Responsibilities:
//! - Resolve one parameter as a scalar or fixed-size array of the requested type.
//! - Print the resolved value, or the default when the lookup falls back.
//!
//! Does NOT handle:
//! - Literal grammar (see `spfr_config::ParamValue`).
//!
//! Invariants:
//! - The printed value is always the final content of the destination,
//!   so a fallback prints the default.
//! - Characters have no meaningful zero value: a `char` fallback without
//!   `--default` prints an empty line (JSON `null`).

use anyhow::{Context, Result};
use serde::Serialize;
use spfr_config::{DisplayList, Lookup, ParamReader, ParamValue, parse_array_into};

use crate::args::ValueType;
use crate::error::ExitCode;
use crate::formatters::{GetOutput, LookupStatus, OutputFormat, format_get};

/// Options for a single `get` invocation.
pub struct GetRequest<'a> {
    pub name: &'a str,
    pub value_type: ValueType,
    pub len: Option<usize>,
    pub default: Option<&'a str>,
}

pub fn run(
    reader: &ParamReader,
    request: &GetRequest<'_>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let (outcome, result) = match request.value_type {
        ValueType::String => resolve::<String>(reader, request)?,
        ValueType::Char => resolve::<char>(reader, request)?,
        ValueType::Int => resolve::<i64>(reader, request)?,
        ValueType::Float => resolve::<f64>(reader, request)?,
        ValueType::Bool => resolve::<bool>(reader, request)?,
    };

    print!("{}", format_get(&result, format)?);
    Ok(ExitCode::from(&outcome))
}

fn resolve<T>(reader: &ParamReader, request: &GetRequest<'_>) -> Result<(Lookup, GetOutput)>
where
    T: ParamValue + Serialize + Default + Clone,
{
    let (outcome, value, display) = match request.len {
        None => {
            let mut value = match request.default {
                Some(raw) => T::parse_param(raw)
                    .with_context(|| format!("Invalid --default '{raw}' for {}", T::KIND))?,
                None => T::default(),
            };
            let outcome = reader.get(request.name, &mut value);
            (outcome, serde_json::to_value(&value)?, value.to_string())
        }
        Some(len) => {
            let mut buffer = vec![T::default(); len];
            if let Some(raw) = request.default {
                parse_array_into(raw, &mut buffer).with_context(|| {
                    format!("Invalid --default '{raw}' for an array of {len} {} values", T::KIND)
                })?;
            }
            let outcome = reader.get_array(request.name, &mut buffer);
            let display = DisplayList(&buffer).to_string();
            (outcome, serde_json::to_value(&buffer)?, display)
        }
    };

    let (value, display) = if request.value_type == ValueType::Char
        && request.default.is_none()
        && !outcome.is_found()
    {
        (serde_json::Value::Null, String::new())
    } else {
        (value, display)
    };

    let (status, error) = match &outcome {
        Lookup::Found => (LookupStatus::Found, None),
        Lookup::NotFound => (LookupStatus::NotFound, None),
        Lookup::InvalidConfig => (LookupStatus::InvalidConfig, None),
        Lookup::Malformed(error) => (LookupStatus::Malformed, Some(error.to_string())),
    };

    let result = GetOutput {
        name: request.name.to_string(),
        status,
        value,
        display,
        error,
    };
    Ok((outcome, result))
}
