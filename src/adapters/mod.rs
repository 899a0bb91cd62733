//! Storage backends.
//!
//! - [`database`] - Repository trait and backend factory
//! - [`postgresql`] - PostgreSQL implementation
//! - [`memory`] - In-process implementation for development and tests
//!
//! # Design Pattern
//!
//! Adapters isolate the database driver behind [`GreetingRepository`] so the
//! service layer can be exercised against either backend:
//!
//! ```rust
//! use greetings::adapters::{GreetingRepository, MemoryRepository};
//! use std::sync::Arc;
//!
//! let repo: Arc<dyn GreetingRepository> = Arc::new(MemoryRepository::new());
//! assert_eq!(repo.backend_name(), "memory");
//! ```

pub mod database;
pub mod memory;
pub mod postgresql;

pub use database::{create_repository, GreetingRepository};
pub use memory::MemoryRepository;
