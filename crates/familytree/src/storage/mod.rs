//! Storage backend implementations.
//!
//! This module provides concrete implementations of `PersonRepository`
//! defined in `familytree_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always built. It backs the test suite and is the
//! fallback when the function is compiled without `dynamodb`.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p familytree
//! ```
//!
//! Build with the in-memory store only:
//! ```bash
//! cargo build -p familytree --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

// Only the test suite uses it when DynamoDB is compiled in.
#[cfg_attr(feature = "dynamodb", allow(dead_code))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[allow(unused_imports)]
pub use inmemory::InMemoryRepository;
