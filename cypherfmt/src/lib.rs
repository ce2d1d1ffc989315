// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! cypherfmt - result formatting for Cypher query tools
//!
//! Takes the tabular result of one Cypher query (columns plus rows of
//! scalars, nodes, relationships and lists) and renders it as text.
//!
//! # Formats
//!
//! - **CSV / TSV**: delimited lines with JSON-quoted fields
//! - **JSON**: an array with one object per row
//! - **Geoff**: one line per distinct node or relationship
//! - **Text**: a bordered, column-aligned table
//!
//! # Usage
//!
//! ```ignore
//! use cypherfmt::{OutputFormat, ResultFormatter};
//!
//! let response = engine.execute("START n=node(1) RETURN n")?;
//! cypherfmt::forward_errors(&response.errors, &mut std::io::stderr())?;
//! ResultFormatter::render(&response.result, OutputFormat::Csv, &mut std::io::stdout())?;
//! ```

pub mod engine;
pub mod error;
pub mod format;
pub mod model;

pub use engine::{EngineError, QueryEngine};
pub use error::{FormatError, Result};
pub use format::{forward_errors, stringify, OutputFormat, ResultFormatter, Style};
pub use model::{Node, PropertyMap, QueryError, QueryResponse, QueryResult, Relationship, Row, Value};

/// cypherfmt version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
