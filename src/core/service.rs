//! Greeting service
//!
//! Stateless orchestration between the request layer and the repository.
//! Messages arrive already validated; this layer owns the existence checks.

use crate::adapters::database::traits::GreetingRepository;
use crate::domain::{Greeting, GreetingId, GreetingsError, NewGreeting, Result, ValidatedMessage};
use crate::log_greeting_change;
use std::sync::Arc;

/// CRUD operations on greetings
///
/// Cheap to share: holds only a handle to the repository.
#[derive(Clone)]
pub struct GreetingService {
    repository: Arc<dyn GreetingRepository>,
}

impl GreetingService {
    pub fn new(repository: Arc<dyn GreetingRepository>) -> Self {
        Self { repository }
    }

    /// The repository this service writes to
    pub fn repository(&self) -> &Arc<dyn GreetingRepository> {
        &self.repository
    }

    /// Store a new greeting; the repository assigns id and creation time
    pub async fn add_greeting(&self, message: ValidatedMessage) -> Result<Greeting> {
        let greeting = self.repository.insert(NewGreeting::new(message)).await?;
        log_greeting_change!("created", greeting.id);
        Ok(greeting)
    }

    /// # Errors
    ///
    /// Returns [`GreetingsError::NotFound`] if no greeting has this id.
    pub async fn get_greeting_by_id(&self, id: GreetingId) -> Result<Greeting> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(GreetingsError::NotFound(id))
    }

    /// Every greeting in insertion order
    pub async fn get_all_greetings(&self) -> Result<Vec<Greeting>> {
        self.repository.find_all().await
    }

    /// # Errors
    ///
    /// Returns [`GreetingsError::NotFound`] if no greeting has this id.
    pub async fn delete_greeting_by_id(&self, id: GreetingId) -> Result<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(GreetingsError::NotFound(id));
        }

        self.repository.delete_by_id(id).await?;
        log_greeting_change!("deleted", id);
        Ok(())
    }

    /// Replace the message of an existing greeting
    ///
    /// The lookup runs before any write, so a missing id never reaches the
    /// repository's `save`.
    ///
    /// # Errors
    ///
    /// Returns [`GreetingsError::NotFound`] if no greeting has this id.
    pub async fn update_greeting(
        &self,
        id: GreetingId,
        message: ValidatedMessage,
    ) -> Result<Greeting> {
        let existing = self.get_greeting_by_id(id).await?;
        let updated = self.repository.save(&existing.with_message(message)).await?;
        log_greeting_change!("updated", id);
        Ok(updated)
    }
}
