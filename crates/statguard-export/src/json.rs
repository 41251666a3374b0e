//! JSON encoding via serde_json

use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Compact JSON
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Indented JSON
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode a value previously produced by [`to_json`] or [`to_json_pretty`]
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
