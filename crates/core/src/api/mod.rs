mod error;
mod http_mapping;
mod response;
mod routes;

pub use error::ApiError;
pub use http_mapping::{api_error_to_status_code, INTERNAL_SERVER_ERROR};
pub use response::{
    ApiResponse, INTERNAL_SERVER_ERROR_MESSAGE, PERSON_CREATED_MESSAGE, RESPONSE_HEADERS,
};
pub use routes::{resolve_route, Route, PERSON_PATH};
