// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query results and the error events reported alongside them

use super::value::Value;
use crate::error::{FormatError, Result};
use std::fmt;

/// Single result row, one value per column
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    /// Create a row from its values
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Get the value at a column position
    pub fn get(&self, position: usize) -> Option<&Value> {
        self.values.get(position)
    }

    /// Number of values in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

/// The full tabular output of one query execution
///
/// Every row holds exactly as many values as there are columns; rows that
/// break this are rejected when they are added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl QueryResult {
    /// Create an empty result with the given column names
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a result from columns and rows, checking row widths
    pub fn from_parts(columns: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let mut result = Self::new(columns);
        for row in rows {
            result.push_row(row)?;
        }
        Ok(result)
    }

    /// Append a row
    pub fn push_row(&mut self, row: impl Into<Row>) -> Result<()> {
        let row = row.into();
        if row.len() != self.columns.len() {
            return Err(FormatError::RowWidthMismatch {
                row: self.rows.len(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the result has neither rows nor columns
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }
}

/// A failed statement reported by the query engine
#[derive(Debug, Clone, PartialEq)]
pub struct QueryError {
    pub message: String,
    /// Server-side error class, e.g. `SyntaxException`
    pub classification: String,
    /// Diagnostic stack trace lines
    pub trace: Vec<String>,
}

impl QueryError {
    pub fn new(classification: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            classification: classification.into(),
            trace: Vec::new(),
        }
    }

    pub fn with_trace(mut self, trace: Vec<String>) -> Self {
        self.trace = trace;
        self
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.classification, self.message)
    }
}

/// Everything the engine hands back for one query: the rows it produced
/// and any statement errors raised along the way
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResponse {
    pub result: QueryResult,
    pub errors: Vec<QueryError>,
}

impl QueryResponse {
    pub fn new(result: QueryResult) -> Self {
        Self {
            result,
            errors: Vec::new(),
        }
    }

    /// A response carrying only an error
    pub fn failed(error: QueryError) -> Self {
        Self {
            result: QueryResult::default(),
            errors: vec![error],
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
