//! `seo_probe` command-line tool.
//!
//! Reads credentials from the environment (or a `.env` file), runs one
//! subcommand and prints its result as pretty JSON on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_probe::initialization::init_logger_with;
use seo_probe::{execute, Cli, ProviderClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load DATAFORSEO_LOGIN / DATAFORSEO_PASSWORD from .env (if it exists)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    let client =
        ProviderClient::from_env(cli.client_config()).context("Failed to create API client")?;

    match execute(&client, cli.command).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_probe error: {:#}", e);
            process::exit(1);
        }
    }
}
