//! Error types for the REST client

use cypherfmt::{EngineError, FormatError};
use thiserror::Error;

/// Errors raised while talking to the server or decoding its replies
#[derive(Error, Debug)]
pub enum Error {
    /// The server could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server answered with something other than a query reply
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// A reply value could not be mapped onto the result model
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Result error: {0}")]
    Format(#[from] FormatError),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for EngineError {
    fn from(error: Error) -> Self {
        match error {
            Error::Connection(msg) => EngineError::Connection(msg),
            Error::Protocol(msg) => EngineError::Protocol(msg),
            other => EngineError::Decode(other.to_string()),
        }
    }
}
