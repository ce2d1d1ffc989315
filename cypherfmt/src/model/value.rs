// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Value type system for query results
//!
//! A result cell is one of:
//! - Scalars: Null, Boolean, Integer, Float, String
//! - Graph entities: Node, Relationship
//! - Collections: List

use serde_json::{Map, Value as JsonValue};
use std::fmt;

/// Property mapping of a node or relationship, in server order
pub type PropertyMap = Map<String, JsonValue>;

/// A graph node: identity handle plus its properties
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: u64,
    pub properties: PropertyMap,
}

impl Node {
    /// Create a node with no properties
    pub fn new(id: u64) -> Self {
        Self {
            id,
            properties: PropertyMap::new(),
        }
    }

    /// Create a node with the given properties
    pub fn with_properties(id: u64, properties: PropertyMap) -> Self {
        Self { id, properties }
    }

    /// Set a property value, keeping first-insertion order
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Rendered identity, e.g. `(1)`
    pub fn identity(&self) -> String {
        format!("({})", self.id)
    }
}

/// A directed, typed relationship between two nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub id: u64,
    pub start: Node,
    pub end: Node,
    pub rel_type: String,
    pub properties: PropertyMap,
}

impl Relationship {
    /// Create a relationship with no properties
    pub fn new(id: u64, start: Node, rel_type: impl Into<String>, end: Node) -> Self {
        Self {
            id,
            start,
            end,
            rel_type: rel_type.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Set a property value, keeping first-insertion order
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Identity of the relationship alone, e.g. `-[7:KNOWS]->`
    pub fn own_identity(&self) -> String {
        format!("-[{}:{}]->", self.id, self.rel_type)
    }

    /// Full rendered identity: start, relationship and end concatenated,
    /// e.g. `(1)-[7:KNOWS]->(2)`
    pub fn identity(&self) -> String {
        format!(
            "{}{}{}",
            self.start.identity(),
            self.own_identity(),
            self.end.identity()
        )
    }
}

/// A single cell of a query result
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Node(Node),
    Relationship(Relationship),
    List(Vec<Value>),
}

impl Value {
    /// Check if this is a list value
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Get the type name for error messages and logging
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Node(_) => "node",
            Value::Relationship(_) => "relationship",
            Value::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::stringify(self, crate::format::Style::TEXT))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<Relationship> for Value {
    fn from(rel: Relationship) -> Self {
        Value::Relationship(rel)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
