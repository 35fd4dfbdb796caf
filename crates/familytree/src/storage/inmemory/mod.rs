//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of `PersonRepository`
//! that keeps records in a `HashMap` wrapped in `Arc<RwLock<_>>`. This is
//! useful for tests and for builds without the `dynamodb` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use familytree::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
