//! Domain models and types for the greetings service.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifier** ([`GreetingId`])
//! - **Entity and DTO** ([`Greeting`], [`GreetingRequest`], [`NewGreeting`])
//! - **Error type** ([`GreetingsError`])
//! - **Result type alias** ([`Result`])
//!
//! # Validation
//!
//! Client input is validated before it reaches the service layer:
//!
//! ```rust
//! use greetings::domain::GreetingRequest;
//!
//! let ok = GreetingRequest::new("Hello").validate();
//! assert!(ok.is_ok());
//!
//! let blank = GreetingRequest::new("   ").validate();
//! assert!(blank.is_err());
//! ```

pub mod errors;
pub mod greeting;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::GreetingsError;
pub use greeting::{
    FieldError, Greeting, GreetingRequest, NewGreeting, ValidatedMessage, MAX_MESSAGE_LENGTH,
};
pub use ids::GreetingId;
pub use result::Result;
