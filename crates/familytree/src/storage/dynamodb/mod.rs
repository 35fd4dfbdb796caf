//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `PersonRepository`
//! using `aws-sdk-dynamodb`. The table is keyed by the string attribute `id`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
