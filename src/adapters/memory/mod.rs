//! In-process repository
//!
//! Backs local development and the test suite. A single lock serializes
//! writes; ids come from a counter that only moves forward.

use crate::adapters::database::traits::GreetingRepository;
use crate::domain::{Greeting, GreetingId, GreetingsError, NewGreeting, Result};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<GreetingId, Greeting>,
    last_id: i64,
}

/// Memory-backed [`GreetingRepository`]
#[derive(Debug, Default)]
pub struct MemoryRepository {
    table: RwLock<Table>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored greetings
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl GreetingRepository for MemoryRepository {
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn insert(&self, greeting: NewGreeting) -> Result<Greeting> {
        let mut table = self.table.write();
        table.last_id += 1;

        let stored = Greeting {
            id: GreetingId::new(table.last_id),
            message: greeting.message,
            created_at: Utc::now(),
        };
        table.rows.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn save(&self, greeting: &Greeting) -> Result<Greeting> {
        let mut table = self.table.write();
        let row = table
            .rows
            .get_mut(&greeting.id)
            .ok_or(GreetingsError::NotFound(greeting.id))?;

        row.message = greeting.message.clone();
        Ok(row.clone())
    }

    async fn find_by_id(&self, id: GreetingId) -> Result<Option<Greeting>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Greeting>> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: GreetingId) -> Result<bool> {
        Ok(self.table.read().rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: GreetingId) -> Result<()> {
        self.table.write().rows.remove(&id);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
