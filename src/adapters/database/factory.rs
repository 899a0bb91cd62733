//! Repository factory
//!
//! Builds the storage backend selected by `database_target`.

use crate::adapters::database::traits::GreetingRepository;
use crate::adapters::memory::MemoryRepository;
use crate::adapters::postgresql::{PostgreSQLClient, PostgreSQLRepository};
use crate::config::schema::{DatabaseTarget, GreetingsConfig};
use crate::domain::{GreetingsError, Result};
use std::sync::Arc;

/// Create a repository based on the configuration
///
/// # Errors
///
/// Returns an error if the PostgreSQL section is missing or the connection
/// pool cannot be built.
pub async fn create_repository(config: &GreetingsConfig) -> Result<Arc<dyn GreetingRepository>> {
    match config.database_target {
        DatabaseTarget::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                GreetingsError::Configuration(
                    "postgresql configuration is required when database_target = 'postgresql'"
                        .to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL repository");
            let client = PostgreSQLClient::new(pg_config.clone()).await?;

            Ok(Arc::new(PostgreSQLRepository::new(client)) as Arc<dyn GreetingRepository>)
        }
        DatabaseTarget::Memory => {
            tracing::warn!("Using in-memory repository; greetings are lost on shutdown");
            Ok(Arc::new(MemoryRepository::new()) as Arc<dyn GreetingRepository>)
        }
    }
}
