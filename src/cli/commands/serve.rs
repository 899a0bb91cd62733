//! Serve command implementation
//!
//! Loads configuration, sets up logging and storage, then runs the HTTP
//! server until SIGINT or SIGTERM.

use crate::adapters::create_repository;
use crate::api;
use crate::config::{load_config, GreetingsConfig};
use crate::core::GreetingService;
use crate::logging::init_logging;
use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen address, overrides server.bind_address
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Use the in-memory store and ignore the configuration file
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    /// Execute the serve command
    ///
    /// Logging is initialized here rather than in `main` because the file
    /// layer depends on the loaded configuration.
    pub async fn execute(&self, config_path: &str, log_level: Option<&str>) -> anyhow::Result<i32> {
        let mut config = if self.in_memory {
            GreetingsConfig::in_memory()
        } else {
            match load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("❌ Failed to load configuration file: {config_path}");
                    eprintln!("   Error: {e}");
                    return Ok(2);
                }
            }
        };

        if let Some(ref bind) = self.bind {
            config.server.bind_address = bind.clone();
        }
        let addr = match config.server.socket_addr() {
            Ok(addr) => addr,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let level = log_level.unwrap_or(&config.application.log_level);
        let _logging_guard = init_logging(level, &config.logging)?;

        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            backend = %config.database_target,
            "Starting greetings service"
        );

        let repository = create_repository(&config).await?;
        repository
            .ensure_schema()
            .await
            .context("Failed to prepare database schema")?;

        let service = GreetingService::new(repository);
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        api::serve(listener, api::router(service), shutdown_signal()).await?;

        tracing::info!("Server stopped");
        Ok(0)
    }
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT (Ctrl+C), shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
