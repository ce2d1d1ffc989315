// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CSV and TSV output

use super::stringify::{stringify, Style};
use crate::error::Result;
use crate::model::QueryResult;
use serde_json::Value as JsonValue;
use std::io::Write;

/// Write a header line of JSON-quoted column names, then one line per row.
/// Nothing is written for a result with neither rows nor columns.
pub fn write_delimited<W: Write + ?Sized>(
    result: &QueryResult,
    delimiter: &str,
    out: &mut W,
) -> Result<()> {
    if result.is_empty() {
        return Ok(());
    }

    let header: Vec<String> = result
        .columns()
        .iter()
        .map(|name| JsonValue::String(name.clone()).to_string())
        .collect();
    writeln!(out, "{}", header.join(delimiter))?;

    for row in result.rows() {
        let fields: Vec<String> = row
            .iter()
            .map(|value| stringify(value, Style::DELIMITED))
            .collect();
        writeln!(out, "{}", fields.join(delimiter))?;
    }

    Ok(())
}
