//! Database abstraction layer
//!
//! Provides the repository trait and a factory that picks the backend.

pub mod factory;
pub mod traits;

pub use factory::create_repository;
pub use traits::GreetingRepository;
