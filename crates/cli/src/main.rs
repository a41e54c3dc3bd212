//! Brandhub CLI - fixture and reporting tools.
//!
//! # Usage
//!
//! ```bash
//! # Check a fixture file before pointing ADMIN_FIXTURES_PATH at it
//! bh-cli fixtures validate fixtures.yaml
//!
//! # Write the built-in sample data to a file
//! bh-cli fixtures export -o fixtures.yaml
//!
//! # List one tenant's orders
//! bh-cli orders --scope c1
//!
//! # Dashboard overview across all tenants
//! bh-cli dashboard
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use brandhub_core::Scope;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bh-cli")]
#[command(author, version, about = "Brandhub CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate or export fixture data
    Fixtures {
        #[command(subcommand)]
        action: FixturesAction,
    },
    /// List orders visible under a scope
    Orders {
        /// Tenant id, or `all`
        #[arg(short, long, default_value = "all")]
        scope: Scope,

        /// Fixture file (default: built-in sample)
        #[arg(short, long, env = "ADMIN_FIXTURES_PATH")]
        fixtures: Option<PathBuf>,
    },
    /// Show dashboard metrics for a scope
    Dashboard {
        /// Tenant id, or `all`
        #[arg(short, long, default_value = "all")]
        scope: Scope,

        /// Fixture file (default: built-in sample)
        #[arg(short, long, env = "ADMIN_FIXTURES_PATH")]
        fixtures: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum FixturesAction {
    /// Parse a fixture file and check ids and tenant references
    Validate {
        /// Path to the YAML fixture file
        file: PathBuf,
    },
    /// Write fixtures as YAML
    Export {
        /// Fixture file to re-export (default: built-in sample)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env so ADMIN_FIXTURES_PATH matches the admin server
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Fixtures { action } => match action {
            FixturesAction::Validate { file } => commands::fixtures::validate(&file)?,
            FixturesAction::Export { source, output } => {
                commands::fixtures::export(source.as_deref(), output.as_deref()).await?;
            }
        },
        Commands::Orders { scope, fixtures } => {
            commands::report::orders(fixtures.as_deref(), &scope)?;
        }
        Commands::Dashboard { scope, fixtures } => {
            commands::report::dashboard(fixtures.as_deref(), &scope)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_orders_scope_parses() {
        let cli = Cli::try_parse_from(["bh-cli", "orders", "--scope", "c2"])
            .unwrap_or_else(|e| panic!("{e}"));
        match cli.command {
            Commands::Orders { scope, .. } => assert_eq!(scope, Scope::parse("c2")),
            _ => panic!("expected orders command"),
        }
    }
}
