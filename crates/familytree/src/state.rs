//! Application state shared by every invocation.
//!
//! The state is built once during cold start and handed to the router by
//! reference. It holds the repository trait object and the configuration.

use std::sync::Arc;

use familytree_core::storage::PersonRepository;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Person repository (DynamoDB in production).
    pub persons: Arc<dyn PersonRepository>,
    /// Function configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with the given repository and configuration.
    pub fn new(persons: Arc<dyn PersonRepository>, config: Config) -> Self {
        Self {
            persons,
            config: Arc::new(config),
        }
    }

    /// Builds the state for the compiled storage backend.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: Config) -> Self {
        use crate::storage::DynamoDbRepository;

        let repo = DynamoDbRepository::from_env(config.table_name.clone()).await;
        tracing::info!(table = %repo.table_name(), "Using DynamoDB storage");
        Self::new(Arc::new(repo), config)
    }

    /// Builds the state for the compiled storage backend.
    #[cfg(not(feature = "dynamodb"))]
    pub async fn from_config(config: Config) -> Self {
        use crate::storage::InMemoryRepository;

        tracing::warn!(
            table = %config.table_name,
            "Built without the dynamodb feature, records are kept in memory"
        );
        Self::new(Arc::new(InMemoryRepository::new()), config)
    }
}
