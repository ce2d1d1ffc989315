// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Value stringification shared by all renderers
//!
//! Every renderer turns cells into text through [`stringify`], each with its
//! own fixed [`Style`]. The three flags interact:
//!
//! - `quoted`: strings (and node/relationship identities) become JSON string
//!   literals. A bracketed list under `quoted` is itself escaped as one JSON
//!   string, so nested lists come out double-encoded.
//! - `bracketed`: lists render as `[a, b]` with quoted children; otherwise
//!   lists render as their children joined by single spaces.
//! - `with_properties`: nodes and relationships are followed by a space and
//!   the compact JSON of their properties.

use crate::model::{PropertyMap, Value};
use serde_json::Value as JsonValue;

/// Flag combination passed to [`stringify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub quoted: bool,
    pub bracketed: bool,
    pub with_properties: bool,
}

impl Style {
    /// CSV/TSV fields
    pub const DELIMITED: Style = Style {
        quoted: true,
        bracketed: false,
        with_properties: false,
    };

    /// JSON object members
    pub const JSON: Style = Style {
        quoted: true,
        bracketed: true,
        with_properties: false,
    };

    /// Aligned table cells
    pub const TEXT: Style = Style {
        quoted: false,
        bracketed: false,
        with_properties: true,
    };

    pub fn quoted(self, quoted: bool) -> Self {
        Style { quoted, ..self }
    }
}

/// Render a value as text in the given style
pub fn stringify(value: &Value, style: Style) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Float(n) => JsonValue::from(*n).to_string(),
        Value::String(s) => {
            if style.quoted {
                json_quote(s)
            } else {
                s.clone()
            }
        }
        Value::Node(node) => entity(node.identity(), &node.properties, style),
        Value::Relationship(rel) => entity(rel.identity(), &rel.properties, style),
        Value::List(items) => {
            let child_style = style.quoted(style.bracketed);
            let children = items.iter().map(|item| stringify(item, child_style));
            if style.bracketed {
                let array = format!("[{}]", children.collect::<Vec<_>>().join(", "));
                if style.quoted {
                    json_quote(&array)
                } else {
                    array
                }
            } else {
                children.collect::<Vec<_>>().join(" ")
            }
        }
    }
}

/// Compact JSON encoding of a property mapping, e.g. `{"name":"Alice"}`
///
/// Infallible: a property map holds only string keys and JSON values, so it
/// goes through `Value`'s `Display` rather than the fallible serializer.
pub fn encode_properties(properties: &PropertyMap) -> String {
    JsonValue::Object(properties.clone()).to_string()
}

fn entity(identity: String, properties: &PropertyMap, style: Style) -> String {
    let mut out = if style.quoted {
        json_quote(&identity)
    } else {
        identity
    };
    if style.with_properties {
        out.push(' ');
        out.push_str(&encode_properties(properties));
    }
    out
}

fn json_quote(s: &str) -> String {
    JsonValue::String(s.to_string()).to_string()
}
