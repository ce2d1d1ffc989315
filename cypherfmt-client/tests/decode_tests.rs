//! Tests for turning REST replies into rendered output
//!
//! These run the decoder over reply bodies captured from a graph server and
//! render the outcome, without needing a running server.

use cypherfmt::{forward_errors, OutputFormat, ResultFormatter, Value};
use cypherfmt_client::{decode_response, Error};

const TWO_NODES: &str = r#"{
  "columns": ["n"],
  "data": [
    [{"self": "http://localhost:7474/db/data/node/1",
      "properties": "http://localhost:7474/db/data/node/1/properties",
      "data": {"number": 41, "name": "forty-one"}}],
    [{"self": "http://localhost:7474/db/data/node/2",
      "properties": "http://localhost:7474/db/data/node/2/properties",
      "data": {"number": 47, "name": "forty-seven"}}]
  ]
}"#;

const SYNTAX_ERROR: &str = r#"{
  "message": "Unknown identifier `m`.",
  "exception": "SyntaxException",
  "fullname": "org.neo4j.cypher.SyntaxException",
  "stacktrace": [
    "org.neo4j.cypher.internal.parser.v1_9.CypherParserImpl.parse(CypherParserImpl.scala:45)",
    "org.neo4j.cypher.CypherParser.parse(CypherParser.scala:44)"
  ]
}"#;

#[test]
fn test_two_nodes_reply_renders_as_geoff() {
    let response = decode_response(200, TWO_NODES).expect("decodes");
    assert!(!response.has_errors());
    assert_eq!(response.result.columns(), ["n"]);

    let geoff = ResultFormatter::format(&response.result, OutputFormat::Geoff).unwrap();
    assert_eq!(
        geoff,
        "(1) {\"number\":41,\"name\":\"forty-one\"}\n(2) {\"number\":47,\"name\":\"forty-seven\"}\n"
    );
}

#[test]
fn test_relationship_and_scalar_columns() {
    let body = r#"{
      "columns": ["r", "since", "tags"],
      "data": [[
        {"self": "http://localhost:7474/db/data/relationship/3",
         "start": "http://localhost:7474/db/data/node/1",
         "end": "http://localhost:7474/db/data/node/2",
         "type": "LOVES",
         "data": {"since": 2004}},
        2004,
        ["a", "b"]
      ]]
    }"#;

    let response = decode_response(200, body).expect("decodes");
    let row = &response.result.rows()[0];
    assert_eq!(row.get(1), Some(&Value::Integer(2004)));

    let csv = ResultFormatter::format(&response.result, OutputFormat::Csv).unwrap();
    assert_eq!(
        csv,
        "\"r\",\"since\",\"tags\"\n\"(1)-[3:LOVES]->(2)\",2004,a b\n"
    );
}

#[test]
fn test_empty_reply() {
    let response = decode_response(200, r#"{"columns": [], "data": []}"#).expect("decodes");
    assert!(response.result.is_empty());
    let text = ResultFormatter::format(&response.result, OutputFormat::Text).unwrap();
    assert_eq!(text, "");
}

#[test]
fn test_server_error_becomes_error_event() {
    let response = decode_response(400, SYNTAX_ERROR).expect("decodes");
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].trace.len(), 2);
    assert!(response.result.is_empty());

    let mut sink = Vec::new();
    forward_errors(&response.errors, &mut sink).unwrap();
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "SyntaxException: Unknown identifier `m`.\n"
    );
}

#[test]
fn test_server_error_without_exception_uses_status() {
    let response = decode_response(500, r#"{"message": "boom"}"#).expect("decodes");
    assert_eq!(response.errors[0].to_string(), "HTTP 500: boom");
}

#[test]
fn test_ragged_reply_is_rejected() {
    let body = r#"{"columns": ["a", "b"], "data": [[1, 2], [3]]}"#;
    assert!(matches!(decode_response(200, body), Err(Error::Format(_))));
}

#[test]
fn test_non_json_error_body_is_protocol_error() {
    let err = decode_response(502, "<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, Error::Protocol(_)));
}

#[test]
fn test_malformed_success_body_is_json_error() {
    assert!(matches!(
        decode_response(200, "{\"columns\": 3}"),
        Err(Error::Json(_))
    ));
}
