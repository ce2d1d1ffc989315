//! Test utilities for cypherfmt integration tests
//!
//! Builders for the sample results shared across the renderer tests.

#![allow(dead_code)]

use cypherfmt::{Node, OutputFormat, QueryResult, Relationship, ResultFormatter, Value};

/// Node with `number` and `name` properties, in that order
pub fn numbered_node(id: u64, number: i64, name: &str) -> Node {
    let mut node = Node::new(id);
    node.set_property("number", number);
    node.set_property("name", name);
    node
}

/// Columns `["n"]` with nodes (1) forty-one and (2) forty-seven
pub fn two_node_result() -> QueryResult {
    let mut result = QueryResult::new(vec!["n".to_string()]);
    result
        .push_row(vec![Value::Node(numbered_node(1, 41, "forty-one"))])
        .expect("row fits");
    result
        .push_row(vec![Value::Node(numbered_node(2, 47, "forty-seven"))])
        .expect("row fits");
    result
}

/// A small social graph where the same entities recur across rows
///
/// Columns `a`, `r`, `b`, `names`; every row is one KNOWS relationship.
pub fn social_result() -> QueryResult {
    let alice = numbered_node(1, 1, "Alice");
    let bob = numbered_node(2, 2, "Bob");
    let carol = numbered_node(3, 3, "Carol");

    let mut ab = Relationship::new(10, alice.clone(), "KNOWS", bob.clone());
    ab.set_property("since", 2001);
    let mut bc = Relationship::new(11, bob.clone(), "KNOWS", carol.clone());
    bc.set_property("since", 2010);
    let ac = Relationship::new(12, alice.clone(), "KNOWS", carol.clone());

    let mut result = QueryResult::new(vec![
        "a".to_string(),
        "r".to_string(),
        "b".to_string(),
        "names".to_string(),
    ]);
    for (start, rel, end) in [(&alice, &ab, &bob), (&bob, &bc, &carol), (&alice, &ac, &carol)] {
        let names = vec![
            start.properties["name"].as_str().map(Value::from).unwrap_or(Value::Null),
            end.properties["name"].as_str().map(Value::from).unwrap_or(Value::Null),
        ];
        result
            .push_row(vec![
                Value::Node(start.clone()),
                Value::Relationship(rel.clone()),
                Value::Node(end.clone()),
                Value::List(names),
            ])
            .expect("row fits");
    }
    result
}

/// Render into a string, panicking on I/O failure
pub fn render(result: &QueryResult, format: OutputFormat) -> String {
    ResultFormatter::format(result, format).expect("render into memory")
}
