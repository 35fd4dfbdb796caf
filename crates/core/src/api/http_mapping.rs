//! Pure functions for mapping API errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`ApiError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::ApiError;

/// Status code for failures that no handler classified.
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Maps an [`ApiError`] to an HTTP status code.
///
/// - `MissingRequiredFields` -> 400 (Bad Request)
/// - `MissingPersonId` -> 400 (Bad Request)
/// - `PersonNotFound` -> 404 (Not Found)
/// - `RouteNotFound` -> 404 (Not Found)
/// - `CreateFailed` -> 500 (Internal Server Error)
/// - `RetrieveFailed` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use familytree_core::api::{api_error_to_status_code, ApiError};
///
/// assert_eq!(api_error_to_status_code(&ApiError::MissingPersonId), 400);
/// assert_eq!(api_error_to_status_code(&ApiError::RouteNotFound), 404);
/// ```
pub fn api_error_to_status_code(error: &ApiError) -> u16 {
    match error {
        ApiError::MissingRequiredFields => 400,
        ApiError::MissingPersonId => 400,
        ApiError::PersonNotFound => 404,
        ApiError::RouteNotFound => 404,
        ApiError::CreateFailed(_) => INTERNAL_SERVER_ERROR,
        ApiError::RetrieveFailed(_) => INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RepositoryError;

    #[test]
    fn test_missing_fields_maps_to_400() {
        assert_eq!(
            api_error_to_status_code(&ApiError::MissingRequiredFields),
            400
        );
        assert_eq!(api_error_to_status_code(&ApiError::MissingPersonId), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(api_error_to_status_code(&ApiError::PersonNotFound), 404);
        assert_eq!(api_error_to_status_code(&ApiError::RouteNotFound), 404);
    }

    #[test]
    fn test_storage_failures_map_to_500() {
        let cause = RepositoryError::QueryFailed("DynamoDB internal server error".to_string());

        assert_eq!(
            api_error_to_status_code(&ApiError::CreateFailed(cause.clone())),
            500
        );
        assert_eq!(
            api_error_to_status_code(&ApiError::RetrieveFailed(cause)),
            500
        );
    }
}
