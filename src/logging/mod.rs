//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - Human-readable console output
//! - Optional JSON log files with rotation
//! - Level from configuration, overridable with `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use greetings::logging::init_logging;
//! use greetings::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use greetings::log_error_with_context;
/// use greetings::domain::GreetingsError;
///
/// let error = GreetingsError::Database("connection refused".to_string());
/// log_error_with_context!(&error, "Failed to list greetings");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log the outcome of a store mutation
///
/// # Example
///
/// ```no_run
/// use greetings::log_greeting_change;
/// use greetings::domain::GreetingId;
///
/// log_greeting_change!("created", GreetingId::new(1));
/// ```
#[macro_export]
macro_rules! log_greeting_change {
    ($action:expr, $id:expr) => {
        tracing::info!(
            greeting_id = %$id,
            action = $action,
            "Greeting {}", $action
        );
    };
}
