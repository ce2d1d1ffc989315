// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! The seam between the formatter and whatever executes queries

use crate::model::QueryResponse;
use thiserror::Error;

/// Transport-level failures that prevent a query from producing a response
///
/// Statement errors raised by the server are not `EngineError`s; they come
/// back inside [`QueryResponse::errors`].
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Executes a query text and returns its result together with any errors
pub trait QueryEngine {
    fn execute(&self, query: &str) -> Result<QueryResponse, EngineError>;
}
