//! Persistence abstraction
//!
//! This module defines the trait that storage backends implement so the
//! service layer never depends on a concrete database.

use crate::domain::{Greeting, GreetingId, NewGreeting, Result};
use async_trait::async_trait;

/// Keyed record store for greetings
///
/// Every method is a single store round-trip. Writes are durable when the
/// returned future resolves: a subsequent `find_by_id`, `exists_by_id` or
/// `delete_by_id` from any task observes them.
#[async_trait]
pub trait GreetingRepository: Send + Sync {
    /// Test the underlying connection
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    async fn test_connection(&self) -> Result<()>;

    /// Create the backing table if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    async fn ensure_schema(&self) -> Result<()>;

    /// Insert a new record, assigning its id and creation time
    ///
    /// # Returns
    ///
    /// The stored greeting as the store sees it.
    async fn insert(&self, greeting: NewGreeting) -> Result<Greeting>;

    /// Persist the message of an existing record
    ///
    /// Only `message` is written; `id` and `created_at` are never modified.
    ///
    /// # Errors
    ///
    /// Returns [`GreetingsError::NotFound`](crate::domain::GreetingsError::NotFound)
    /// if the row vanished before the write.
    async fn save(&self, greeting: &Greeting) -> Result<Greeting>;

    /// Look up a record by id
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(_))` if found, `Ok(None)` if not found.
    async fn find_by_id(&self, id: GreetingId) -> Result<Option<Greeting>>;

    /// Return every record in insertion order
    async fn find_all(&self) -> Result<Vec<Greeting>>;

    /// Check whether a record exists
    async fn exists_by_id(&self, id: GreetingId) -> Result<bool>;

    /// Delete a record; deleting a missing id is not an error
    async fn delete_by_id(&self, id: GreetingId) -> Result<()>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}
