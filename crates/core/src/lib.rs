//! Functional core for the familytree person API.
//!
//! Everything in this crate is pure: record construction, validation, the
//! route table, the response envelope and the error taxonomy. Storage access
//! is described by the [`storage::PersonRepository`] trait and implemented by
//! the `familytree` binary.

pub mod api;
pub mod person;
pub mod storage;
