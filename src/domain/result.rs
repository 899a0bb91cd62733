//! Result type alias
//!
//! This module provides a convenient Result type alias that uses
//! [`GreetingsError`] as the error type.

use super::errors::GreetingsError;

/// Result type alias for service operations
///
/// # Examples
///
/// ```
/// use greetings::domain::result::Result;
/// use greetings::domain::errors::GreetingsError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(GreetingsError::Other("boom".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, GreetingsError>;
