use thiserror::Error;

use crate::storage::RepositoryError;

/// Failures a handler reports with a definite status and message.
///
/// The `Display` text of each variant is the `error` string returned to the
/// client, so it must stay stable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingRequiredFields,
    #[error("Missing person ID")]
    MissingPersonId,
    #[error("Person not found")]
    PersonNotFound,
    #[error("Not Found")]
    RouteNotFound,
    #[error("Could not create person")]
    CreateFailed(#[source] RepositoryError),
    #[error("Could not retrieve person")]
    RetrieveFailed(#[source] RepositoryError),
}
