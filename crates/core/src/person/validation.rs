use serde_json::{Map, Value};

use crate::api::ApiError;

use super::types::{FIELD_AGE, FIELD_ID, FIELD_NAME};

/// Fields a create payload must carry.
pub const REQUIRED_CREATE_FIELDS: [&str; 3] = [FIELD_ID, FIELD_NAME, FIELD_AGE];

/// Returns `true` if a payload value counts as supplied.
///
/// `null`, `false`, numeric zero and the empty string count as missing, the
/// same as an absent key. Arrays and objects are always supplied, even empty.
///
/// # Examples
///
/// ```
/// use familytree_core::person::is_supplied;
/// use serde_json::json;
///
/// assert!(is_supplied(&json!("Ada")));
/// assert!(is_supplied(&json!(30)));
/// assert!(!is_supplied(&json!("")));
/// assert!(!is_supplied(&json!(0)));
/// assert!(!is_supplied(&json!(null)));
/// ```
pub fn is_supplied(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validates a create payload.
///
/// Every field in [`REQUIRED_CREATE_FIELDS`] must be present and supplied in
/// the sense of [`is_supplied`]. The type of `age` is not checked.
pub fn validate_create_payload(payload: &Map<String, Value>) -> Result<(), ApiError> {
    let complete = REQUIRED_CREATE_FIELDS
        .iter()
        .all(|field| payload.get(*field).is_some_and(is_supplied));

    if !complete {
        return Err(ApiError::MissingRequiredFields);
    }
    Ok(())
}

/// Extracts the person ID from a lookup query value.
///
/// An empty value is treated the same as a missing one.
pub fn validate_person_id(id: Option<&str>) -> Result<&str, ApiError> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ApiError::MissingPersonId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    #[test]
    fn test_complete_payload_is_valid() {
        let body = payload(json!({"id": "x", "name": "Ada", "age": 30}));
        assert_eq!(validate_create_payload(&body), Ok(()));
    }

    #[test]
    fn test_age_type_is_not_checked() {
        let body = payload(json!({"id": "x", "name": "Ada", "age": "thirty"}));
        assert_eq!(validate_create_payload(&body), Ok(()));
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        for missing in REQUIRED_CREATE_FIELDS {
            let mut body = payload(json!({"id": "x", "name": "Ada", "age": 30}));
            body.remove(missing);

            assert_eq!(
                validate_create_payload(&body),
                Err(ApiError::MissingRequiredFields),
                "payload without {missing} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_values_are_rejected() {
        let cases = [
            json!({"id": "", "name": "Ada", "age": 30}),
            json!({"id": "x", "name": null, "age": 30}),
            json!({"id": "x", "name": "Ada", "age": 0}),
            json!({"id": "x", "name": false, "age": 30}),
        ];

        for case in cases {
            assert_eq!(
                validate_create_payload(&payload(case.clone())),
                Err(ApiError::MissingRequiredFields),
                "{case} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        assert_eq!(
            validate_create_payload(&Map::new()),
            Err(ApiError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_is_supplied_collections() {
        assert!(is_supplied(&json!([])));
        assert!(is_supplied(&json!({})));
        assert!(is_supplied(&json!(true)));
        assert!(is_supplied(&json!(-1.5)));
        assert!(!is_supplied(&json!(0.0)));
    }

    #[test]
    fn test_validate_person_id() {
        assert_eq!(validate_person_id(Some("123")), Ok("123"));
        assert_eq!(validate_person_id(Some("")), Err(ApiError::MissingPersonId));
        assert_eq!(validate_person_id(None), Err(ApiError::MissingPersonId));
    }
}
