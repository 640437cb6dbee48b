//! Lenient decoders for backend values whose JSON type is not stable.
//!
//! The backend serializes decimals as strings and primary keys as numbers,
//! but neither is guaranteed by the contract, so both forms are accepted.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a JSON string or number and keeps its textual form.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

/// Accepts a JSON number or numeric string as `f64`. Null decodes as zero.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("number out of range")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("not a number: {s:?}"))),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!(
            "expected number, found {other}"
        ))),
    }
}

/// Treats a JSON null the same as a missing string.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
