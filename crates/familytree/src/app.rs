use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use lambda_http::{http, Body, Error, Request, RequestExt, Response};

use familytree_core::api::{resolve_route, ApiError, ApiResponse, Route, RESPONSE_HEADERS};

use crate::{
    handlers::{
        persons::{create_person, get_person},
        AppError,
    },
    state::AppState,
};

/// Lambda entry point: routes the event and converts the result.
pub async fn function_handler(state: &AppState, event: Request) -> Result<Response<Body>, Error> {
    let response = route(state, event).await;
    Ok(into_lambda_response(response)?)
}

/// Routes a request to its handler behind the error boundary.
///
/// Failures a handler reports as [`ApiError`] keep their status. Any other
/// error, including a panic inside the handler, becomes a 500.
pub async fn route(state: &AppState, event: Request) -> ApiResponse {
    tracing::info!(event = ?event, "Received request");

    match AssertUnwindSafe(dispatch(state, &event)).catch_unwind().await {
        Ok(Ok(response)) => response,
        Ok(Err(err)) => err.into_api_response(),
        Err(_) => {
            tracing::error!(
                method = %event.method(),
                path = %request_path(&event),
                "Handler panicked"
            );
            ApiResponse::internal_server_error()
        }
    }
}

async fn dispatch(state: &AppState, event: &Request) -> Result<ApiResponse, AppError> {
    match resolve_route(event.method().as_str(), request_path(event)) {
        Some(Route::CreatePerson) => create_person(state, event).await,
        Some(Route::GetPerson) => get_person(state, event).await,
        None => Err(ApiError::RouteNotFound.into()),
    }
}

/// Path used for routing.
///
/// API Gateway REST events carry the stage in front of the URI path
/// (`/prod/api/person`); the raw event path has no stage. Requests that did
/// not come from a proxy event fall back to the URI path.
fn request_path(event: &Request) -> &str {
    match event.raw_http_path() {
        "" => event.uri().path(),
        raw => raw,
    }
}

/// Builds the Lambda response, attaching the fixed header set.
pub fn into_lambda_response(response: ApiResponse) -> Result<Response<Body>, http::Error> {
    let mut builder = Response::builder().status(response.status);
    for (name, value) in RESPONSE_HEADERS {
        builder = builder.header(name, value);
    }
    builder.body(Body::Text(response.body_text()))
}
