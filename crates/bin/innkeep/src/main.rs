//! # innkeep — hotel reservations from the command line
//!
//! Composition root that wires all adapters together and runs one command.
//!
//! ## Responsibilities
//! - Parse the command line and configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Run the command and print its JSON result
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use innkeep_adapter_storage_sqlite_sqlx::Config as DatabaseConfig;
use innkeep_domain::time;

use crate::cli::Cli;
use crate::commands::App;
use crate::config::Config;

fn init_logging(filter: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("innkeep=debug,innkeep_app=debug,innkeep_adapter_storage_sqlite_sqlx=debug")
    } else {
        EnvFilter::new(filter)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    init_logging(&config.logging.filter, cli.verbose);
    tracing::debug!(?config, "configuration loaded");

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    // Repositories and services
    let app = App::new(&db);

    match app.run(cli.command, time::now()).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            Ok(ExitCode::FAILURE)
        }
    }
}
