//! PostgreSQL integration
//!
//! Stores greetings in a single `greetings` table.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLRepository;
pub use client::PostgreSQLClient;
pub use models::PostgreSQLGreeting;
