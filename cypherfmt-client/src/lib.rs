//! cypherfmt client - run Cypher queries over the server's REST endpoint
//!
//! This crate provides the [`QueryEngine`](cypherfmt::QueryEngine) used by
//! the `cypher` command: it posts a query to the server's `cypher` resource
//! and turns the JSON reply into a [`QueryResponse`](cypherfmt::QueryResponse).
//!
//! # Quick Start
//!
//! ```no_run
//! use cypherfmt::{OutputFormat, QueryEngine, ResultFormatter};
//! use cypherfmt_client::{Endpoint, RestEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = RestEngine::new(Endpoint::default());
//! let response = engine.execute("START n=node(1) RETURN n")?;
//!
//! cypherfmt::forward_errors(&response.errors, &mut std::io::stderr())?;
//! ResultFormatter::render(&response.result, OutputFormat::Text, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`connection`] - Endpoint configuration and the HTTP engine
//! - [`decode`] - Conversion of REST replies into query results
//! - [`error`] - Error types and handling

pub mod connection;
pub mod decode;
pub mod error;

pub use connection::{Endpoint, RestEngine};
pub use decode::{decode_response, decode_value};
pub use error::{Error, Result};
