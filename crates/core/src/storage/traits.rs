use async_trait::async_trait;

use crate::person::PersonRecord;

use super::Result;

/// Repository for person records.
///
/// Both operations are point operations addressed by the `id` primary key.
/// Implementations never read-modify-write; concurrent writes to the same key
/// are last-write-wins.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Gets a person by its ID.
    async fn get_person(&self, id: &str) -> Result<Option<PersonRecord>>;

    /// Stores a person unconditionally, replacing any item with the same ID.
    async fn put_person(&self, person: &PersonRecord) -> Result<()>;
}
