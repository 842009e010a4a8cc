//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the JSON and table output formats.
//! - Render parameter listings, lookup results and check summaries.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - JSON output is pretty-printed and always valid, including for empty files (`[]`).

use anyhow::Result;
use serde::Serialize;
use spfr_config::Pair;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Lookup status as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    Found,
    NotFound,
    InvalidConfig,
    Malformed,
}

/// Result of `spfr-cli get`.
#[derive(Debug, Clone, Serialize)]
pub struct GetOutput {
    pub name: String,
    pub status: LookupStatus,
    pub value: serde_json::Value,
    #[serde(skip)]
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of `spfr-cli check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    pub path: String,
    pub valid: bool,
    pub pairs: usize,
    pub tokens: usize,
}

pub fn format_pairs(pairs: &[Pair<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(pairs)?)),
        OutputFormat::Table => {
            if pairs.is_empty() {
                return Ok("No parameters found.\n".to_string());
            }
            let mut output = String::from("Key\tValue\n");
            for pair in pairs {
                output.push_str(&format!("{}\t{}\n", pair.key, pair.value));
            }
            Ok(output)
        }
    }
}

pub fn format_get(result: &GetOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(result)?)),
        OutputFormat::Table => Ok(format!("{}\n", result.display)),
    }
}

pub fn format_check(result: &CheckOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(result)?)),
        OutputFormat::Table => {
            let verdict = if result.valid { "OK" } else { "INVALID" };
            Ok(format!(
                "{verdict}: {} ({} parameters, {} tokens)\n",
                result.path, result.pairs, result.tokens
            ))
        }
    }
}
