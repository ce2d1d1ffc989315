// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! cypher CLI entry point

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

mod cli;
use cli::Cli;

fn main() -> ExitCode {
    // Parse command line arguments first to get log level
    let cli = Cli::parse();

    // Level from -v/--log-level; per-module RUST_LOG directives still apply
    env_logger::Builder::from_default_env()
        .filter_level(cli.level_filter())
        .init();

    match cli::handle_query(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            ExitCode::FAILURE
        }
    }
}
