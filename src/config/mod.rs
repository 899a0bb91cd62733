//! Configuration management.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `GREETINGS_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ServerConfig`] - HTTP listener
//! - [`PostgreSQLConfig`] - PostgreSQL connection pool
//! - [`LoggingConfig`] - Log file output
//!
//! # Example Configuration
//!
//! ```toml
//! database_target = "postgresql"
//!
//! [application]
//! log_level = "info"
//!
//! [server]
//! bind_address = "0.0.0.0:8080"
//!
//! [postgresql]
//! connection_string = "${GREETINGS_DATABASE_URL}"
//! max_connections = 10
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use greetings::config::load_config;
//!
//! # fn example() {
//! match load_config("greetings.toml") {
//!     Ok(config) => println!("Listening on {}", config.server.bind_address),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, DatabaseTarget, GreetingsConfig, LoggingConfig, PostgreSQLConfig,
    ServerConfig,
};
pub use secret::{redact_connection_string, secret_string, SecretString, SecretValue};
