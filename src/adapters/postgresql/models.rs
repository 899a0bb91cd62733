//! PostgreSQL row models
//!
//! Maps rows of the `greetings` table onto domain types.

use crate::domain::{Greeting, GreetingId, GreetingsError, Result};
use chrono::{DateTime, Utc};
use tokio_postgres::Row;

/// Column list shared by every query that returns full rows
pub const GREETING_COLUMNS: &str = "id, message, created_at";

/// A row of the `greetings` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgreSQLGreeting {
    pub id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl PostgreSQLGreeting {
    /// Reads a row produced by a query selecting [`GREETING_COLUMNS`]
    ///
    /// # Errors
    ///
    /// Returns an error if a column is missing or has an unexpected type.
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.try_get("id").map_err(column_error)?,
            message: row.try_get("message").map_err(column_error)?,
            created_at: row.try_get("created_at").map_err(column_error)?,
        })
    }
}

impl From<PostgreSQLGreeting> for Greeting {
    fn from(row: PostgreSQLGreeting) -> Self {
        Greeting {
            id: GreetingId::new(row.id),
            message: row.message,
            created_at: row.created_at,
        }
    }
}

fn column_error(err: tokio_postgres::Error) -> GreetingsError {
    GreetingsError::Database(format!("Unexpected row shape: {err}"))
}
