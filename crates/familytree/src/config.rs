use std::env;

use familytree_core::person::{IdStrategy, ParseIdStrategyError};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error(transparent)]
    IdStrategy(#[from] ParseIdStrategyError),
}

/// Function configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Table holding person records, used by every operation.
    pub table_name: String,
    /// How new records get their primary key (default: server-generated).
    pub id_strategy: IdStrategy,
    /// Echo the stored ID in the create response (default: false).
    pub return_created_id: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PERSONS_TABLE` - Table name (required)
    /// - `PERSON_ID_STRATEGY` - `server` or `client` (default: `server`)
    /// - `RETURN_CREATED_ID` - `true` or `false` (default: `false`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup("PERSONS_TABLE")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("PERSONS_TABLE"))?;

        let id_strategy = match lookup("PERSON_ID_STRATEGY") {
            Some(v) => v.parse()?,
            None => IdStrategy::default(),
        };

        let return_created_id = match lookup("RETURN_CREATED_ID") {
            Some(v) => parse_bool("RETURN_CREATED_ID", &v)?,
            None => false,
        };

        Ok(Self {
            table_name,
            id_strategy,
            return_created_id,
        })
    }

    /// Configuration for tests and local runs.
    #[cfg(test)]
    pub fn for_table(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            id_strategy: IdStrategy::default(),
            return_created_id: false,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}
