//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! person records. Records are open JSON maps, so the conversion is a
//! structural JSON <-> AttributeValue mapping:
//!
//! | JSON    | DynamoDB |
//! |---------|----------|
//! | string  | `S`      |
//! | number  | `N`      |
//! | bool    | `BOOL`   |
//! | null    | `NULL`   |
//! | array   | `L`      |
//! | object  | `M`      |
//!
//! When reading, string and number sets come back as arrays. Binary
//! attributes have no JSON form and are rejected.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use familytree_core::person::PersonRecord;
use familytree_core::storage::RepositoryError;
use serde_json::{Map, Number, Value};

/// Convert a PersonRecord to DynamoDB item.
pub fn record_to_item(record: &PersonRecord) -> HashMap<String, AttributeValue> {
    record
        .fields()
        .iter()
        .map(|(key, value)| (key.clone(), json_to_attribute(value)))
        .collect()
}

/// Convert a DynamoDB item to PersonRecord.
pub fn item_to_record(
    item: &HashMap<String, AttributeValue>,
) -> Result<PersonRecord, RepositoryError> {
    let mut fields = Map::new();
    for (key, value) in item {
        fields.insert(key.clone(), attribute_to_json(key, value)?);
    }
    Ok(PersonRecord::from_fields(fields))
}

/// Convert a JSON value to an AttributeValue.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert an AttributeValue to a JSON value.
///
/// `field` names the top-level attribute being converted, for error messages.
pub fn attribute_to_json(field: &str, value: &AttributeValue) -> Result<Value, RepositoryError> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(field, n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(items) => items
            .iter()
            .map(|v| attribute_to_json(field, v))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => {
            let mut object = Map::new();
            for (k, v) in map {
                object.insert(k.clone(), attribute_to_json(field, v)?);
            }
            Ok(Value::Object(object))
        }
        AttributeValue::Ss(items) => Ok(Value::Array(
            items.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(items) => items
            .iter()
            .map(|n| parse_number(field, n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(RepositoryError::InvalidData(
            format!("Binary attribute not supported: {}", field),
        )),
        _ => Err(RepositoryError::InvalidData(format!(
            "Unknown attribute type: {}",
            field
        ))),
    }
}

/// Parse a DynamoDB number string into a JSON number.
///
/// Integers keep full precision; anything else goes through `f64`.
fn parse_number(field: &str, n: &str) -> Result<Number, RepositoryError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Number::from(u));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Invalid number {}: {}", field, n)))
}
