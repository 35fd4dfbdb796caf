mod operations;
mod types;
mod validation;

pub use operations::{format_timestamp, generate_person_id, new_person_record};
pub use types::{
    IdStrategy, ParseIdStrategyError, PersonRecord, FIELD_AGE, FIELD_CREATED_AT, FIELD_ID,
    FIELD_NAME, FIELD_UPDATED_AT,
};
pub use validation::{
    is_supplied, validate_create_payload, validate_person_id, REQUIRED_CREATE_FIELDS,
};
