use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Primary key attribute of a person record.
pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_AGE: &str = "age";
pub const FIELD_CREATED_AT: &str = "createdAt";
pub const FIELD_UPDATED_AT: &str = "updatedAt";

/// A stored person.
///
/// The record is an open map: besides `id`, `name`, `age`, `createdAt` and
/// `updatedAt` it keeps every field the client sent at creation time. It is
/// returned to callers verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonRecord(Map<String, Value>);

impl PersonRecord {
    /// Wraps an already-built field map.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the primary key, if the record carries a string `id`.
    pub fn id(&self) -> Option<&str> {
        self.0.get(FIELD_ID).and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Converts the record into the JSON value sent back to clients.
    pub fn into_json(self) -> Value {
        Value::Object(self.0)
    }
}

/// How the primary key of a new record is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// The key is derived from the creation time; the client `id` is discarded.
    #[default]
    ServerGenerated,
    /// The client `id` becomes the key.
    ClientSupplied,
}

/// Error returned when parsing an [`IdStrategy`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid id strategy: {0} (expected 'server' or 'client')")]
pub struct ParseIdStrategyError(pub String);

impl FromStr for IdStrategy {
    type Err = ParseIdStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" => Ok(Self::ServerGenerated),
            "client" => Ok(Self::ClientSupplied),
            other => Err(ParseIdStrategyError(other.to_string())),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServerGenerated => write!(f, "server"),
            Self::ClientSupplied => write!(f, "client"),
        }
    }
}
