//! Retail Ops CLI - inspect store records and configuration.
//!
//! # Usage
//!
//! ```bash
//! # Print low-stock products as JSON
//! retail-ops-cli list inventory --filter low
//!
//! # Search support tickets
//! retail-ops-cli list tickets --query payment
//!
//! # Print the console's page routes
//! retail-ops-cli routes
//!
//! # Validate ADMIN_* and SENTRY_* environment variables
//! retail-ops-cli check-config
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::list::RecordKind;

#[derive(Parser)]
#[command(name = "retail-ops-cli")]
#[command(author, version, about = "Retail Ops CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print matching records as JSON
    List {
        /// Record collection
        #[arg(value_enum)]
        kind: RecordKind,

        /// Case-insensitive text search
        #[arg(short, long)]
        query: Option<String>,

        /// Status, role, or urgency key (`all` for no filter)
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Print the page route table
    Routes,
    /// Load the admin configuration and report problems
    CheckConfig,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "retail_ops_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::List {
            kind,
            query,
            filter,
        } => commands::list::run(kind, query.as_deref(), filter.as_deref()),
        Commands::Routes => commands::routes::run(),
        Commands::CheckConfig => commands::check_config::run(),
    }
}
