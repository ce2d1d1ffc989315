// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Geoff graph-interchange output
//!
//! Geoff has no representation for loose values, so only the nodes and
//! relationships found in the result are written, each exactly once.

use crate::error::Result;
use crate::model::{PropertyMap, QueryResult, Value};
use indexmap::IndexMap;
use std::io::Write;

/// Distinct entities keyed by rendered identity, kept in first-seen order.
/// Re-inserting a key replaces its properties but keeps its position.
type EntityIndex<'a> = IndexMap<String, &'a PropertyMap>;

#[derive(Default)]
struct GraphCollector<'a> {
    nodes: EntityIndex<'a>,
    relationships: EntityIndex<'a>,
}

impl<'a> GraphCollector<'a> {
    fn visit(&mut self, value: &'a Value) {
        match value {
            Value::Node(node) => {
                self.nodes.insert(node.identity(), &node.properties);
            }
            Value::Relationship(rel) => {
                self.relationships.insert(rel.identity(), &rel.properties);
            }
            Value::List(items) => items.iter().for_each(|item| self.visit(item)),
            Value::Null
            | Value::Boolean(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::String(_) => {}
        }
    }
}

/// Write one line per distinct node, then one per distinct relationship
pub fn write_geoff<W: Write + ?Sized>(result: &QueryResult, out: &mut W) -> Result<()> {
    let mut graph = GraphCollector::default();
    for row in result.rows() {
        for value in row.iter() {
            graph.visit(value);
        }
    }

    log::debug!(
        "Geoff: {} distinct nodes, {} distinct relationships",
        graph.nodes.len(),
        graph.relationships.len()
    );

    for (identity, properties) in graph.nodes.iter().chain(graph.relationships.iter()) {
        write!(out, "{} ", identity)?;
        serde_json::to_writer(&mut *out, properties)?;
        out.write_all(b"\n")?;
    }

    Ok(())
}
