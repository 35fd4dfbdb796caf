//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use familytree_core::person::PersonRecord;
use familytree_core::storage::{PersonRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    persons: Arc<RwLock<HashMap<String, PersonRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.persons.read().await.len()
    }

    /// Snapshot of every stored record.
    pub async fn records(&self) -> Vec<PersonRecord> {
        self.persons.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl PersonRepository for InMemoryRepository {
    async fn get_person(&self, id: &str) -> Result<Option<PersonRecord>> {
        let persons = self.persons.read().await;
        Ok(persons.get(id).cloned())
    }

    async fn put_person(&self, person: &PersonRecord) -> Result<()> {
        let id = person
            .id()
            .ok_or_else(|| RepositoryError::InvalidData("Missing or invalid field: id".to_string()))?;

        let mut persons = self.persons.write().await;
        persons.insert(id.to_string(), person.clone());
        Ok(())
    }
}
