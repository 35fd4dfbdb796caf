//! Person handlers.
//!
//! Each handler performs at most one storage operation. Only storage failures
//! are classified here; anything else propagates to the router boundary.

use chrono::Utc;
use lambda_http::{Body, Request, RequestExt};
use serde_json::{Map, Value};

use familytree_core::api::{ApiError, ApiResponse};
use familytree_core::person::{
    new_person_record, validate_create_payload, validate_person_id, FIELD_ID,
};

use crate::{handlers::AppError, state::AppState};

/// Create a person (POST /api/person).
pub async fn create_person(state: &AppState, event: &Request) -> Result<ApiResponse, AppError> {
    let payload = parse_payload(event.body())?;
    validate_create_payload(&payload)?;

    let record = new_person_record(payload, Utc::now(), state.config.id_strategy);

    state
        .persons
        .put_person(&record)
        .await
        .map_err(ApiError::CreateFailed)?;

    tracing::info!(id = ?record.id(), "Created person");

    let id = if state.config.return_created_id {
        record.id()
    } else {
        None
    };
    Ok(ApiResponse::person_created(id))
}

/// Get a person by ID (GET /api/person?id=...).
pub async fn get_person(state: &AppState, event: &Request) -> Result<ApiResponse, AppError> {
    let query = event.query_string_parameters_ref();
    // A repeated `id` resolves to its last value, as in `queryStringParameters`.
    let id = validate_person_id(
        query
            .and_then(|q| q.all(FIELD_ID))
            .and_then(|ids| ids.last().copied()),
    )?;

    let person = state
        .persons
        .get_person(id)
        .await
        .map_err(ApiError::RetrieveFailed)?
        .ok_or(ApiError::PersonNotFound)?;

    Ok(ApiResponse::ok(person.into_json()))
}

/// Parses a request body into the create payload.
///
/// An empty body is an empty payload. Arrays, strings, numbers and booleans
/// carry no fields, so they are also an empty payload. Malformed JSON and a
/// JSON `null` body are errors.
fn parse_payload(body: &Body) -> anyhow::Result<Map<String, Value>> {
    let bytes: &[u8] = body.as_ref();
    if bytes.is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(map) => Ok(map),
        Value::Null => anyhow::bail!("request body is JSON null"),
        _ => Ok(Map::new()),
    }
}
