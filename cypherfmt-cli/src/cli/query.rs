// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query command handler

use std::error::Error;
use std::io::{self, Read, Write};

use super::commands::Cli;
use cypherfmt::{forward_errors, OutputFormat, QueryEngine, ResultFormatter};
use cypherfmt_client::{Endpoint, RestEngine};

/// Handle one invocation: read the query, run it, print the results
pub fn handle_query(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let query = read_query(&cli.query, &mut io::stdin().lock())?;

    let endpoint = Endpoint::new(cli.host.clone(), cli.port, cli.database_path.clone());
    log::debug!("Using endpoint {}", endpoint.cypher_url());
    let engine = RestEngine::new(endpoint);

    let stdout = io::stdout();
    let stderr = io::stderr();
    run_query(
        &engine,
        &query,
        cli.format,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Execute `query` and write its results to `out`, statement errors to `err`.
///
/// Statement errors are reported before the rows; they do not stop rows the
/// engine did return from being rendered, even when `err` cannot be written.
pub fn run_query<E, W, V>(
    engine: &E,
    query: &str,
    format: OutputFormat,
    out: &mut W,
    err: &mut V,
) -> Result<(), Box<dyn Error>>
where
    E: QueryEngine + ?Sized,
    W: Write + ?Sized,
    V: Write + ?Sized,
{
    let response = engine.execute(query)?;
    if response.has_errors() {
        log::debug!("Query reported {} error(s)", response.errors.len());
    }
    if let Err(e) = forward_errors(&response.errors, err) {
        log::warn!("Could not write query errors to the error stream: {}", e);
    }
    ResultFormatter::render(&response.result, format, out)?;
    out.flush()?;
    Ok(())
}

/// The query named on the command line, or all of stdin for `-`
pub fn read_query<R: Read + ?Sized>(arg: &str, stdin: &mut R) -> Result<String, Box<dyn Error>> {
    let query = if arg == "-" {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        buf
    } else {
        arg.to_string()
    };

    let query = query.trim();
    if query.is_empty() {
        return Err("no query given".into());
    }
    Ok(query.to_string())
}
