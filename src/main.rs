// Greetings - CRUD HTTP service for greeting messages
// Copyright (c) 2025 Greetings Contributors
// Licensed under the MIT License

use clap::Parser;
use greetings::cli::{Cli, Commands};
use greetings::config::LoggingConfig;
use greetings::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Optional; a missing .env is silently ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    process::exit(exit_code);
}

async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Serve(args) => args.execute(&cli.config, cli.log_level.as_deref()).await,
        Commands::ValidateConfig(args) => {
            init_console_logging(cli)?;
            args.execute(&cli.config).await
        }
        Commands::Init(args) => {
            init_console_logging(cli)?;
            args.execute().await
        }
    }
}

/// Console-only logging for the short-lived commands
fn init_console_logging(cli: &Cli) -> anyhow::Result<()> {
    let log_level = cli.log_level.as_deref().unwrap_or("warn");
    let logging_config = LoggingConfig {
        local_enabled: false,
        ..LoggingConfig::default()
    };

    // The guard only owns a file writer, which is disabled here
    drop(init_logging(log_level, &logging_config)?);
    Ok(())
}
