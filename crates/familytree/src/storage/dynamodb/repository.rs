//! DynamoDB repository implementation.
//!
//! Implements `familytree_core::storage::PersonRepository` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use familytree_core::person::{PersonRecord, FIELD_ID};
use familytree_core::storage::{PersonRepository, Result};

use super::conversions::{item_to_record, record_to_item};
use super::error::{map_get_item_error, map_put_item_error};

/// DynamoDB-based repository implementation.
///
/// The client is built once per process and shared by every invocation.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl PersonRepository for DynamoDbRepository {
    async fn get_person(&self, id: &str) -> Result<Option<PersonRecord>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(FIELD_ID, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        result.item.as_ref().map(item_to_record).transpose()
    }

    async fn put_person(&self, person: &PersonRecord) -> Result<()> {
        let item = record_to_item(person);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        tracing::debug!(table = %self.table_name, id = ?person.id(), "Stored person");
        Ok(())
    }
}
