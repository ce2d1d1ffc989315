// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! JSON array output, one object per row

use super::stringify::{stringify, Style};
use crate::error::Result;
use crate::model::{QueryResult, Value};
use serde_json::Value as JsonValue;
use std::io::Write;

/// Write the result as a JSON array of row objects.
///
/// Lists are embedded as literal arrays; every other cell is embedded as a
/// JSON scalar, with nodes and relationships as their quoted identity.
pub fn write_json<W: Write + ?Sized>(result: &QueryResult, out: &mut W) -> Result<()> {
    if result.is_empty() {
        return Ok(());
    }

    let keys: Vec<String> = result
        .columns()
        .iter()
        .map(|name| JsonValue::String(name.clone()).to_string())
        .collect();

    out.write_all(b"[\n")?;
    for (i, row) in result.rows().iter().enumerate() {
        if i > 0 {
            out.write_all(b",\n")?;
        }
        let members: Vec<String> = keys
            .iter()
            .zip(row.iter())
            .map(|(key, value)| format!("{}: {}", key, json_member(value)))
            .collect();
        write!(out, "\t{{{}}}", members.join(", "))?;
    }
    out.write_all(b"\n]\n")?;

    Ok(())
}

fn json_member(value: &Value) -> String {
    stringify(value, Style::JSON.quoted(!value.is_list()))
}
