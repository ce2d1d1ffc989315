// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Data model for query results

pub mod result;
pub mod value;

pub use result::{QueryError, QueryResponse, QueryResult, Row};
pub use value::{Node, PropertyMap, Relationship, Value};
