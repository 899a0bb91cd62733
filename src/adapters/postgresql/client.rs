//! PostgreSQL client implementation
//!
//! Wraps a `deadpool-postgres` connection pool. Connections are created
//! lazily, so building a client never touches the network.

use crate::config::schema::PostgreSQLConfig;
use crate::config::redact_connection_string;
use crate::domain::{GreetingsError, Result};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};

const SCHEMA_SQL: &str = include_str!("../../../migrations/001_create_greetings.sql");

/// PostgreSQL client
///
/// Provides pooled connections and thin query helpers that map driver
/// errors onto [`GreetingsError::Database`].
pub struct PostgreSQLClient {
    /// Connection pool
    pool: Pool,

    /// Configuration
    config: PostgreSQLConfig,
}

impl PostgreSQLClient {
    /// Create a new PostgreSQL client
    ///
    /// The statement timeout is applied as a session option on every pooled
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is malformed or the pool
    /// cannot be built.
    pub async fn new(config: PostgreSQLConfig) -> Result<Self> {
        let mut pg_config: tokio_postgres::Config = config
            .connection_string
            .expose_secret()
            .parse()
            .map_err(|e| {
                GreetingsError::Configuration(format!(
                    "Invalid PostgreSQL connection string: {e}"
                ))
            })?;
        pg_config.options(&format!(
            "-c statement_timeout={}",
            config.statement_timeout_seconds.saturating_mul(1000)
        ));

        let manager = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );

        let timeout = Duration::from_secs(config.connection_timeout_seconds);
        let pool = Pool::builder(manager)
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .wait_timeout(Some(timeout))
            .create_timeout(Some(timeout))
            .recycle_timeout(Some(timeout))
            .build()
            .map_err(|e| {
                GreetingsError::Database(format!("Failed to create connection pool: {e}"))
            })?;

        let client = Self { pool, config };
        tracing::debug!(
            connection = %client.connection_string_safe(),
            max_connections = client.config.max_connections,
            "PostgreSQL pool created"
        );

        Ok(client)
    }

    /// Test the connection to PostgreSQL
    pub async fn test_connection(&self) -> Result<()> {
        let client = self.get_connection().await?;

        client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| GreetingsError::Database(format!("Connection test failed: {e}")))?;

        let status = self.pool_status();
        tracing::debug!(
            pool_size = status.size,
            pool_available = status.available,
            "PostgreSQL connection test successful"
        );
        Ok(())
    }

    /// Ensure the greetings table exists
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub async fn ensure_schema(&self) -> Result<()> {
        let client = self.get_connection().await?;

        client
            .batch_execute(SCHEMA_SQL)
            .await
            .map_err(|e| GreetingsError::Database(format!("Failed to execute migration: {e}")))?;

        tracing::info!("PostgreSQL schema initialized successfully");
        Ok(())
    }

    /// Get a connection from the pool
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be obtained.
    pub async fn get_connection(&self) -> Result<deadpool_postgres::Object> {
        self.pool.get().await.map_err(|e| {
            GreetingsError::Database(format!("Failed to get connection from pool: {e}"))
        })
    }

    /// Execute a query and return all rows
    pub async fn query(&self, query: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Vec<Row>> {
        let client = self.get_connection().await?;
        let statement = client.prepare_cached(query).await?;

        client
            .query(&statement, params)
            .await
            .map_err(|e| GreetingsError::Database(format!("Query failed: {e}")))
    }

    /// Execute a query that returns at most one row
    pub async fn query_opt(
        &self,
        query: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Option<Row>> {
        let client = self.get_connection().await?;
        let statement = client.prepare_cached(query).await?;

        client
            .query_opt(&statement, params)
            .await
            .map_err(|e| GreetingsError::Database(format!("Query failed: {e}")))
    }

    /// Execute a query that returns exactly one row
    pub async fn query_one(&self, query: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Row> {
        let client = self.get_connection().await?;
        let statement = client.prepare_cached(query).await?;

        client
            .query_one(&statement, params)
            .await
            .map_err(|e| GreetingsError::Database(format!("Query failed: {e}")))
    }

    /// Execute a statement and return the number of affected rows
    pub async fn execute(&self, statement: &str, params: &[&(dyn ToSql + Sync)]) -> Result<u64> {
        let client = self.get_connection().await?;
        let statement = client.prepare_cached(statement).await?;

        client
            .execute(&statement, params)
            .await
            .map_err(|e| GreetingsError::Database(format!("Statement execution failed: {e}")))
    }

    /// Get the connection string (without password)
    pub fn connection_string_safe(&self) -> String {
        redact_connection_string(&self.config.connection_string)
    }

    /// Get the pool statistics
    pub fn pool_status(&self) -> deadpool_postgres::Status {
        self.pool.status()
    }
}
