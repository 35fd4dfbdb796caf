use serde_json::{json, Value};

use super::{api_error_to_status_code, ApiError, INTERNAL_SERVER_ERROR};

/// Headers attached to every response, including errors.
pub const RESPONSE_HEADERS: [(&str, &str); 5] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Credentials", "true"),
    (
        "Access-Control-Allow-Methods",
        "GET, POST, PUT, DELETE, OPTIONS",
    ),
    (
        "Access-Control-Allow-Headers",
        "Content-Type, Authorization, Content-Length, X-Requested-With, X-Amz-Date, X-Api-Key, X-Amz-Security-Token",
    ),
    ("Content-Type", "application/json"),
];

/// Message returned for failures no handler classified.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

/// Message returned after a successful create.
pub const PERSON_CREATED_MESSAGE: &str = "Person created successfully";

/// Transport-independent response: a status code and a JSON body.
///
/// Headers are fixed ([`RESPONSE_HEADERS`]) and added when the envelope is
/// turned into a transport response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 200 with the given body.
    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    /// 201 for a created person, optionally echoing its ID.
    pub fn person_created(id: Option<&str>) -> Self {
        let body = match id {
            Some(id) => json!({ "message": PERSON_CREATED_MESSAGE, "id": id }),
            None => json!({ "message": PERSON_CREATED_MESSAGE }),
        };
        Self::new(201, body)
    }

    /// Error body of the form `{"error": message}`.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }

    /// The generic 500 used for unclassified failures.
    pub fn internal_server_error() -> Self {
        Self::error(INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_MESSAGE)
    }

    /// Serialized body text.
    pub fn body_text(&self) -> String {
        self.body.to_string()
    }
}

impl From<&ApiError> for ApiResponse {
    fn from(error: &ApiError) -> Self {
        Self::error(api_error_to_status_code(error), error.to_string())
    }
}

impl From<ApiError> for ApiResponse {
    fn from(error: ApiError) -> Self {
        Self::from(&error)
    }
}
