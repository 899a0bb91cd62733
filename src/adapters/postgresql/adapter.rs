//! PostgreSQL repository implementing [`GreetingRepository`]

use crate::adapters::database::traits::GreetingRepository;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::{PostgreSQLGreeting, GREETING_COLUMNS};
use crate::domain::{Greeting, GreetingId, GreetingsError, NewGreeting, Result};
use async_trait::async_trait;

/// PostgreSQL implementation of the repository trait
///
/// Ids come from the `BIGSERIAL` sequence, so they are never reused after a
/// delete, and `created_at` from the column default.
pub struct PostgreSQLRepository {
    client: PostgreSQLClient,
}

impl PostgreSQLRepository {
    pub fn new(client: PostgreSQLClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GreetingRepository for PostgreSQLRepository {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.client.ensure_schema().await
    }

    async fn insert(&self, greeting: NewGreeting) -> Result<Greeting> {
        let query =
            format!("INSERT INTO greetings (message) VALUES ($1) RETURNING {GREETING_COLUMNS}");

        let row = self.client.query_one(&query, &[&greeting.message]).await?;
        Ok(PostgreSQLGreeting::from_row(&row)?.into())
    }

    async fn save(&self, greeting: &Greeting) -> Result<Greeting> {
        let query = format!(
            "UPDATE greetings SET message = $2 WHERE id = $1 RETURNING {GREETING_COLUMNS}"
        );

        let id = greeting.id.value();
        match self
            .client
            .query_opt(&query, &[&id, &greeting.message])
            .await?
        {
            Some(row) => Ok(PostgreSQLGreeting::from_row(&row)?.into()),
            None => Err(GreetingsError::NotFound(greeting.id)),
        }
    }

    async fn find_by_id(&self, id: GreetingId) -> Result<Option<Greeting>> {
        let query = format!("SELECT {GREETING_COLUMNS} FROM greetings WHERE id = $1");

        self.client
            .query_opt(&query, &[&id.value()])
            .await?
            .map(|row| PostgreSQLGreeting::from_row(&row).map(Greeting::from))
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Greeting>> {
        let query = format!("SELECT {GREETING_COLUMNS} FROM greetings ORDER BY id");

        self.client
            .query(&query, &[])
            .await?
            .iter()
            .map(|row| PostgreSQLGreeting::from_row(row).map(Greeting::from))
            .collect()
    }

    async fn exists_by_id(&self, id: GreetingId) -> Result<bool> {
        let row = self
            .client
            .query_one(
                "SELECT EXISTS (SELECT 1 FROM greetings WHERE id = $1)",
                &[&id.value()],
            )
            .await?;

        row.try_get(0)
            .map_err(|e| GreetingsError::Database(format!("Unexpected row shape: {e}")))
    }

    async fn delete_by_id(&self, id: GreetingId) -> Result<()> {
        let deleted = self
            .client
            .execute("DELETE FROM greetings WHERE id = $1", &[&id.value()])
            .await?;

        tracing::debug!(greeting_id = %id, rows = deleted, "Delete executed");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgresql"
    }
}
