use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use super::types::{
    IdStrategy, PersonRecord, FIELD_CREATED_AT, FIELD_ID, FIELD_UPDATED_AT,
};

/// Generates a server-side person ID from the creation time.
///
/// The ID is the number of milliseconds since the Unix epoch, as a decimal string.
pub fn generate_person_id(now: DateTime<Utc>) -> String {
    now.timestamp_millis().to_string()
}

/// Formats a timestamp the way records store it: RFC 3339, UTC, milliseconds.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use familytree_core::person::format_timestamp;
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
/// assert_eq!(format_timestamp(now), "2024-01-15T10:30:00.000Z");
/// ```
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Builds the record to store for a validated create payload.
///
/// The payload is shallow-merged first, then the server fields are written
/// over it: the key (according to `strategy`), `createdAt` and `updatedAt`.
/// Both timestamps come from `now`, so they are always equal.
pub fn new_person_record(
    payload: Map<String, Value>,
    now: DateTime<Utc>,
    strategy: IdStrategy,
) -> PersonRecord {
    let id = match strategy {
        IdStrategy::ServerGenerated => generate_person_id(now),
        IdStrategy::ClientSupplied => match payload.get(FIELD_ID) {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => generate_person_id(now),
        },
    };
    let timestamp = format_timestamp(now);

    let mut fields = payload;
    fields.insert(FIELD_ID.to_string(), Value::String(id));
    fields.insert(
        FIELD_CREATED_AT.to_string(),
        Value::String(timestamp.clone()),
    );
    fields.insert(FIELD_UPDATED_AT.to_string(), Value::String(timestamp));

    PersonRecord::from_fields(fields)
}
