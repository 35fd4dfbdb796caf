use std::error::Error as _;

use familytree_core::api::{ApiError, ApiResponse};

/// Error returned by handlers.
///
/// Wraps `anyhow::Error` so handlers can use `?` on anything. At the router
/// boundary an [`ApiError`] keeps its status and message; every other error
/// becomes the generic 500.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Converts the error into the response sent to the client.
    pub fn into_api_response(self) -> ApiResponse {
        if let Some(api_error) = self.0.downcast_ref::<ApiError>() {
            let response = ApiResponse::from(api_error);
            match api_error.source() {
                Some(cause) => tracing::error!(
                    status = response.status,
                    error = %api_error,
                    cause = %cause,
                    "Storage operation failed"
                ),
                None => tracing::warn!(
                    status = response.status,
                    error = %api_error,
                    "Request rejected"
                ),
            }
            return response;
        }

        tracing::error!(error = %format!("{:#}", self.0), "Unhandled error");
        ApiResponse::internal_server_error()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
