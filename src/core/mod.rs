//! Business logic.
//!
//! - [`service`] - Greeting CRUD orchestration
//!
//! ```rust
//! use greetings::adapters::MemoryRepository;
//! use greetings::core::GreetingService;
//! use greetings::domain::ValidatedMessage;
//! use std::sync::Arc;
//!
//! # async fn example() -> greetings::domain::Result<()> {
//! let service = GreetingService::new(Arc::new(MemoryRepository::new()));
//! let greeting = service.add_greeting(ValidatedMessage::parse("Hello")?).await?;
//! assert_eq!(service.get_all_greetings().await?.len(), 1);
//! # let _ = greeting;
//! # Ok(())
//! # }
//! ```

pub mod service;

pub use service::GreetingService;
