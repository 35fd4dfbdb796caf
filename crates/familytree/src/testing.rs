//! Test doubles and request builders shared by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use lambda_http::{http, Body, Request, RequestExt};
use serde_json::{json, Value};

use familytree_core::api::PERSON_PATH;
use familytree_core::person::PersonRecord;
use familytree_core::storage::{PersonRepository, RepositoryError, Result};

use crate::storage::InMemoryRepository;

pub fn request(method: &str, path: &str, body: Body) -> Request {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(body)
        .expect("valid test request")
}

pub fn post_request(body: &str) -> Request {
    let body = if body.is_empty() {
        Body::Empty
    } else {
        Body::Text(body.to_string())
    };
    request("POST", PERSON_PATH, body)
}

pub fn get_request(id: Option<&str>) -> Request {
    let event = request("GET", PERSON_PATH, Body::Empty);
    match id {
        Some(id) => event.with_query_string_parameters(HashMap::from([(
            "id".to_string(),
            id.to_string(),
        )])),
        None => event,
    }
}

pub fn get_request_with_ids(ids: &[&str]) -> Request {
    let values = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
    request("GET", PERSON_PATH, Body::Empty)
        .with_query_string_parameters(HashMap::from([("id".to_string(), values)]))
}

/// Parses an API Gateway REST API proxy event deployed on the `prod` stage.
///
/// A parameter may repeat in `query`. API Gateway lists every value in
/// `multiValueQueryStringParameters` and keeps the last one in
/// `queryStringParameters`.
pub fn rest_api_event(method: &str, query: &[(&str, &str)], body: Option<&str>) -> Request {
    let mut single = serde_json::Map::new();
    let mut multi = serde_json::Map::new();
    for (name, value) in query {
        single.insert(name.to_string(), json!(value));
        match multi
            .entry(name.to_string())
            .or_insert_with(|| json!([]))
        {
            Value::Array(values) => values.push(json!(value)),
            _ => unreachable!(),
        }
    }
    let (single, multi) = if query.is_empty() {
        (Value::Null, Value::Null)
    } else {
        (Value::Object(single), Value::Object(multi))
    };

    let event = json!({
        "resource": PERSON_PATH,
        "path": PERSON_PATH,
        "httpMethod": method,
        "headers": {
            "Content-Type": "application/json",
            "Host": "abc123.execute-api.us-east-1.amazonaws.com"
        },
        "multiValueHeaders": {
            "Content-Type": ["application/json"],
            "Host": ["abc123.execute-api.us-east-1.amazonaws.com"]
        },
        "queryStringParameters": single,
        "multiValueQueryStringParameters": multi,
        "pathParameters": null,
        "stageVariables": null,
        "requestContext": {
            "accountId": "123456789012",
            "resourceId": "a1b2c3",
            "stage": "prod",
            "requestId": "c6af9ac6-7b61-11e6-9a41-93e8deadbeef",
            "requestTimeEpoch": 1705314600123_i64,
            "identity": {
                "sourceIp": "192.168.100.1",
                "userAgent": "curl/8.4.0"
            },
            "resourcePath": PERSON_PATH,
            "httpMethod": method,
            "apiId": "abc123",
            "path": format!("/prod{PERSON_PATH}")
        },
        "body": body,
        "isBase64Encoded": false
    });

    lambda_http::request::from_str(&event.to_string()).expect("valid REST API event")
}

/// In-memory repository that counts storage operations.
#[derive(Debug, Clone, Default)]
pub struct RecordingRepository {
    inner: InMemoryRepository,
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn records(&self) -> Vec<PersonRecord> {
        self.inner.records().await
    }
}

#[async_trait]
impl PersonRepository for RecordingRepository {
    async fn get_person(&self, id: &str) -> Result<Option<PersonRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_person(id).await
    }

    async fn put_person(&self, person: &PersonRecord) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.put_person(person).await
    }
}

/// Repository whose every operation fails.
pub struct FailingRepository;

#[async_trait]
impl PersonRepository for FailingRepository {
    async fn get_person(&self, _id: &str) -> Result<Option<PersonRecord>> {
        Err(RepositoryError::QueryFailed("Table not found".to_string()))
    }

    async fn put_person(&self, _person: &PersonRecord) -> Result<()> {
        Err(RepositoryError::ConnectionFailed(
            "Request dispatch failed".to_string(),
        ))
    }
}

/// Repository that panics, standing in for a bug below the handlers.
pub struct PanickingRepository;

#[async_trait]
impl PersonRepository for PanickingRepository {
    async fn get_person(&self, _id: &str) -> Result<Option<PersonRecord>> {
        panic!("lookup exploded")
    }

    async fn put_person(&self, _person: &PersonRecord) -> Result<()> {
        panic!("write exploded")
    }
}
