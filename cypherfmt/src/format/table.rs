// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Aligned text table output
//!
//! ```text
//! +-----+-----+
//! | n   | age |
//! +-----+-----+
//! | (1) | 33  |
//! +-----+-----+
//! ```

use super::stringify::{stringify, Style};
use crate::error::Result;
use crate::model::QueryResult;
use comfy_table::Table;
use std::io::Write;

/// ASCII borders, a header separator and no lines between data rows
const TABLE_PRESET: &str = "||--+-++|    ++++++";

/// Write the result as a bordered table. Widths need every row, so the
/// whole result is stringified before the first line is written.
pub fn write_table<W: Write + ?Sized>(result: &QueryResult, out: &mut W) -> Result<()> {
    if result.is_empty() {
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(TABLE_PRESET);
    table.set_header(result.columns());

    for row in result.rows() {
        let cells: Vec<String> = row.iter().map(|value| stringify(value, Style::TEXT)).collect();
        table.add_row(cells);
    }

    writeln!(out, "{}", table)?;
    Ok(())
}
