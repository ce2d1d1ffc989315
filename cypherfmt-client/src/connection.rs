//! Server endpoint configuration and the HTTP query engine

use crate::decode::decode_response;
use crate::error::{Error, Result};
use cypherfmt::{EngineError, QueryEngine, QueryResponse};

/// Where the graph server listens
///
/// # Examples
///
/// ```no_run
/// use cypherfmt_client::Endpoint;
///
/// let endpoint = Endpoint::new("localhost", 7474, "/db/data/");
/// assert_eq!(endpoint.cypher_url(), "http://localhost:7474/db/data/cypher");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub database_path: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new("localhost", 7474, "/db/data/")
    }
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16, database_path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            database_path: database_path.into(),
        }
    }

    /// URL of the server's Cypher resource
    pub fn cypher_url(&self) -> String {
        let path = self.database_path.trim_matches('/');
        if path.is_empty() {
            format!("http://{}:{}/cypher", self.host, self.port)
        } else {
            format!("http://{}:{}/{}/cypher", self.host, self.port, path)
        }
    }
}

/// Query engine that posts queries to the server's Cypher resource
///
/// Each call to [`execute`](QueryEngine::execute) is one blocking HTTP
/// round trip; the agent keeps the connection alive between calls.
pub struct RestEngine {
    endpoint: Endpoint,
    agent: ureq::Agent,
}

impl RestEngine {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Send a query and decode whatever the server answers
    pub fn query(&self, query: &str) -> Result<QueryResponse> {
        let url = self.endpoint.cypher_url();
        log::debug!("POST {} ({} bytes of query)", url, query.len());

        let body = serde_json::json!({
            "query": query,
            "params": {},
        });

        let (status, text) = match self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .send_json(&body)
        {
            Ok(response) => (response.status(), read_body(response)?),
            // statement errors arrive as 4xx/5xx with a JSON body
            Err(ureq::Error::Status(code, response)) => (code, read_body(response)?),
            Err(transport) => {
                return Err(Error::Connection(format!(
                    "could not reach {}: {}",
                    url, transport
                )))
            }
        };

        log::debug!("HTTP {} ({} bytes)", status, text.len());
        decode_response(status, &text)
    }
}

impl QueryEngine for RestEngine {
    fn execute(&self, query: &str) -> std::result::Result<QueryResponse, EngineError> {
        self.query(query).map_err(EngineError::from)
    }
}

fn read_body(response: ureq::Response) -> Result<String> {
    response
        .into_string()
        .map_err(|e| Error::Protocol(format!("failed to read response body: {}", e)))
}
