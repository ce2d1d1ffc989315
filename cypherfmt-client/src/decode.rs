//! Decoding of REST replies into query results
//!
//! A successful reply looks like:
//!
//! ```text
//! {
//!   "columns": ["n"],
//!   "data": [[{"self": "http://localhost:7474/db/data/node/1", "data": {"name": "Alice"}, ...}]]
//! }
//! ```
//!
//! Nodes and relationships are recognised by their `self` URI. Relationships
//! carry only the URIs of their endpoints, so the decoded start and end nodes
//! have an identity but no properties.
//!
//! A failed statement comes back with a 4xx/5xx status and a body of the form
//! `{"message": ..., "exception": ..., "stacktrace": [...]}`.

use crate::error::{Error, Result};
use cypherfmt::{Node, PropertyMap, QueryError, QueryResponse, QueryResult, Relationship, Row, Value};
use serde::Deserialize;
use serde_json::Value as JsonValue;

#[derive(Debug, Deserialize)]
struct CypherReply {
    columns: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<JsonValue>>,
}

#[derive(Debug, Deserialize)]
struct ServerError {
    message: String,
    #[serde(default)]
    exception: Option<String>,
    #[serde(default)]
    stacktrace: Vec<String>,
}

/// Turn an HTTP status and body into a query response
pub fn decode_response(status: u16, body: &str) -> Result<QueryResponse> {
    if (200..300).contains(&status) {
        let reply: CypherReply = serde_json::from_str(body)?;
        let rows = reply
            .data
            .iter()
            .map(|row| row.iter().map(decode_value).collect::<Result<Vec<_>>>().map(Row::new))
            .collect::<Result<Vec<_>>>()?;
        let result = QueryResult::from_parts(reply.columns, rows)?;
        log::debug!(
            "Decoded {} rows x {} columns",
            result.row_count(),
            result.columns().len()
        );
        return Ok(QueryResponse::new(result));
    }

    match serde_json::from_str::<ServerError>(body) {
        Ok(err) => {
            let classification = err
                .exception
                .unwrap_or_else(|| format!("HTTP {}", status));
            Ok(QueryResponse::failed(
                QueryError::new(classification, err.message).with_trace(err.stacktrace),
            ))
        }
        Err(_) => Err(Error::Protocol(format!(
            "HTTP {} with unrecognised body: {}",
            status,
            body.trim()
        ))),
    }
}

/// Convert one JSON cell into a result value
pub fn decode_value(json: &JsonValue) -> Result<Value> {
    Ok(match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Boolean(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(items) => {
            Value::List(items.iter().map(decode_value).collect::<Result<Vec<_>>>()?)
        }
        JsonValue::Object(obj) => match obj.get("self").and_then(JsonValue::as_str) {
            Some(uri) if uri.contains("/relationship/") => Value::Relationship(decode_relationship(uri, obj)?),
            Some(uri) if uri.contains("/node/") => Value::Node(Node::with_properties(
                entity_id(uri)?,
                properties(obj),
            )),
            _ => {
                log::debug!("Keeping unrecognised object as JSON text");
                Value::String(json.to_string())
            }
        },
    })
}

fn decode_relationship(uri: &str, obj: &serde_json::Map<String, JsonValue>) -> Result<Relationship> {
    let field = |name: &str| {
        obj.get(name)
            .and_then(JsonValue::as_str)
            .ok_or_else(|| Error::Decode(format!("relationship {} has no '{}'", uri, name)))
    };

    let start = Node::new(entity_id(field("start")?)?);
    let end = Node::new(entity_id(field("end")?)?);
    let mut rel = Relationship::new(entity_id(uri)?, start, field("type")?, end);
    rel.properties = properties(obj);
    Ok(rel)
}

/// The numeric id at the end of an entity URI, e.g. `.../node/42` -> 42
fn entity_id(uri: &str) -> Result<u64> {
    uri.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .ok_or_else(|| Error::Decode(format!("no entity id in URI '{}'", uri)))
}

fn properties(obj: &serde_json::Map<String, JsonValue>) -> PropertyMap {
    match obj.get("data") {
        Some(JsonValue::Object(data)) => data.clone(),
        _ => PropertyMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_id() {
        assert_eq!(entity_id("http://localhost:7474/db/data/node/42").unwrap(), 42);
        assert_eq!(entity_id("http://localhost:7474/db/data/node/7/").unwrap(), 7);
        assert!(entity_id("http://localhost:7474/db/data/node/").is_err());
    }

    #[test]
    fn test_scalars() {
        assert_eq!(decode_value(&json!(null)).unwrap(), Value::Null);
        assert_eq!(decode_value(&json!(true)).unwrap(), Value::Boolean(true));
        assert_eq!(decode_value(&json!(41)).unwrap(), Value::Integer(41));
        assert_eq!(decode_value(&json!(1.5)).unwrap(), Value::Float(1.5));
        assert_eq!(decode_value(&json!("x")).unwrap(), Value::from("x"));
        assert_eq!(
            decode_value(&json!([1, "a"])).unwrap(),
            Value::List(vec![Value::Integer(1), Value::from("a")])
        );
    }

    #[test]
    fn test_node() {
        let value = decode_value(&json!({
            "self": "http://localhost:7474/db/data/node/1",
            "data": {"number": 41, "name": "forty-one"},
            "properties": "http://localhost:7474/db/data/node/1/properties"
        }))
        .unwrap();

        match value {
            Value::Node(node) => {
                assert_eq!(node.id, 1);
                let keys: Vec<&String> = node.properties.keys().collect();
                assert_eq!(keys, vec!["number", "name"]);
            }
            other => panic!("expected node, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_relationship() {
        let value = decode_value(&json!({
            "self": "http://localhost:7474/db/data/relationship/9",
            "start": "http://localhost:7474/db/data/node/1",
            "end": "http://localhost:7474/db/data/node/2",
            "type": "KNOWS",
            "data": {"since": 1999}
        }))
        .unwrap();

        match value {
            Value::Relationship(rel) => {
                assert_eq!(rel.identity(), "(1)-[9:KNOWS]->(2)");
                assert_eq!(rel.properties["since"], 1999);
            }
            other => panic!("expected relationship, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_relationship_without_type_is_rejected() {
        let err = decode_value(&json!({
            "self": "http://localhost:7474/db/data/relationship/9",
            "start": "http://localhost:7474/db/data/node/1",
            "end": "http://localhost:7474/db/data/node/2"
        }))
        .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_plain_object_kept_as_text() {
        let value = decode_value(&json!({"a": 1})).unwrap();
        assert_eq!(value, Value::from("{\"a\":1}"));
    }
}
