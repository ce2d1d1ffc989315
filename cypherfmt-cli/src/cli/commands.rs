// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line arguments

use clap::{Parser, ValueEnum};
use cypherfmt::OutputFormat;

/// Run a Cypher query against a graph server and format the results
#[derive(Parser, Debug)]
#[command(name = "cypher")]
#[command(author, version = cypherfmt::VERSION, about, long_about = None)]
pub struct Cli {
    /// Query text, or '-' to read the query from standard input
    #[arg(default_value = "-")]
    pub query: String,

    /// Server host name
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Server port
    #[arg(long, default_value_t = 7474)]
    pub port: u16,

    /// Path of the database service on the server
    #[arg(long, default_value = "/db/data/")]
    pub database_path: String,

    /// Output format: csv, tsv, json, geoff or text (unknown names use text)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (overrides the default of warn)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

/// Log levels accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Cli {
    /// Effective log level: `-v` wins, then `--log-level`, then warn
    pub fn level_filter(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if let Some(level) = self.log_level {
            level.to_level_filter()
        } else {
            log::LevelFilter::Warn
        }
    }
}
