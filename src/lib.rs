// Greetings - CRUD HTTP service for greeting messages
// Copyright (c) 2025 Greetings Contributors
// Licensed under the MIT License

//! # Greetings
//!
//! A small HTTP/JSON service that creates, reads, updates and deletes
//! greeting messages stored in PostgreSQL.
//!
//! ## Architecture
//!
//! Requests flow through three layers:
//!
//! - [`api`] - HTTP routes, input validation, status code mapping
//! - [`core`] - Stateless service with fetch-or-fail semantics
//! - [`adapters`] - Persistence (PostgreSQL, in-memory)
//!
//! Supporting modules:
//!
//! - [`domain`] - Entity, request DTO, identifiers and errors
//! - [`config`] - TOML configuration
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use greetings::adapters::create_repository;
//! use greetings::api;
//! use greetings::config::load_config;
//! use greetings::core::GreetingService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("greetings.toml")?;
//!
//!     let repository = create_repository(&config).await?;
//!     repository.ensure_schema().await?;
//!
//!     let service = GreetingService::new(repository);
//!     let listener = tokio::net::TcpListener::bind(config.server.socket_addr()?).await?;
//!     api::serve(listener, api::router(service), std::future::pending()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`], whose error type is
//! [`domain::GreetingsError`]. The request layer turns validation failures
//! into 400, missing ids into 404 and everything else into 500.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
