// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

pub mod delimited;
pub mod geoff;
pub mod json;
pub mod stringify;
pub mod table;

pub use stringify::{encode_properties, stringify, Style};

use crate::error::Result;
use crate::model::{QueryError, QueryResult};
use std::convert::Infallible;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output formats understood by [`ResultFormatter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
    Geoff,
    #[default]
    Text,
}

impl OutputFormat {
    /// Look up a format by name, case-insensitively. Unknown names select
    /// the text table.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "csv" => OutputFormat::Csv,
            "tsv" => OutputFormat::Tsv,
            "json" => OutputFormat::Json,
            "geoff" => OutputFormat::Geoff,
            "text" => OutputFormat::Text,
            other => {
                log::warn!("Unknown output format '{}', using text", other);
                OutputFormat::Text
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
            OutputFormat::Geoff => "geoff",
            OutputFormat::Text => "text",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(OutputFormat::from_name(s))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result formatter for different output formats
pub struct ResultFormatter;

impl ResultFormatter {
    /// Render query results in the specified format to `out`
    pub fn render<W: Write + ?Sized>(
        result: &QueryResult,
        format: OutputFormat,
        out: &mut W,
    ) -> Result<()> {
        log::debug!(
            "Rendering {} rows x {} columns as {}",
            result.row_count(),
            result.columns().len(),
            format
        );
        match format {
            OutputFormat::Csv => delimited::write_delimited(result, ",", out),
            OutputFormat::Tsv => delimited::write_delimited(result, "\t", out),
            OutputFormat::Json => json::write_json(result, out),
            OutputFormat::Geoff => geoff::write_geoff(result, out),
            OutputFormat::Text => table::write_table(result, out),
        }
    }

    /// Render query results into a string
    pub fn format(result: &QueryResult, format: OutputFormat) -> Result<String> {
        let mut out = Vec::new();
        Self::render(result, format, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

/// Write each error as `<classification>: <message>` to the error sink.
/// Traces go to the debug log.
pub fn forward_errors<W: Write + ?Sized>(errors: &[QueryError], err: &mut W) -> Result<()> {
    for error in errors {
        writeln!(err, "{}", error)?;
        if !error.trace.is_empty() {
            log::debug!(
                "{} trace:\n  {}",
                error.classification,
                error.trace.join("\n  ")
            );
        }
    }
    Ok(())
}
