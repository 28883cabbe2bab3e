//! CLI subcommands.

pub mod check_config;
pub mod list;
pub mod routes;

use std::io::{self, Write};

use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The seeded catalog failed to load.
    #[error("Failed to load store records: {0}")]
    Catalog(#[from] retail_ops_admin::catalog::CatalogError),

    /// The `--filter` value names no known status.
    #[error("Invalid filter: {0}")]
    Query(#[from] retail_ops_core::QueryError),

    /// Configuration could not be loaded from the environment.
    #[error("Configuration error: {0}")]
    Config(#[from] retail_ops_admin::config::ConfigError),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Write command output to stdout, one block per call.
fn emit(text: &str) -> Result<(), CommandError> {
    let mut out = io::stdout().lock();
    writeln!(out, "{text}")?;
    Ok(())
}
