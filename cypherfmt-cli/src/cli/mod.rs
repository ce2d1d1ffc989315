// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for the cypher tool
//!
//! Parses arguments, runs the query against the server and writes the
//! formatted result to stdout and statement errors to stderr.

pub mod commands;
pub mod query;

pub use commands::Cli;
pub use query::handle_query;
