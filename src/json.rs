// src/json.rs
//! Bridging between serde types and loose JSON maps

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{CheatSheetError, Result};
use crate::text::split_by_case_style;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Serialize to compact or pretty JSON text
pub fn to_json_string<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Serialize to a JSON object; anything else is [`CheatSheetError::NotAnObject`]
pub fn to_json_map<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(CheatSheetError::NotAnObject(kind(&other))),
    }
}

/// Decode a loose JSON map into a typed value
pub fn map_to_struct<T: DeserializeOwned>(map: &Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(map.clone())).map_err(|err| {
        debug!(error = %err, "map does not fit target type");
        err.into()
    })
}

/// Serialize `value` to a map whose top-level keys are snake_case.
///
/// Keys are re-split with [`split_by_case_style`] and joined with `_`; a key
/// no style recognises is kept verbatim. Null fields are dropped.
pub fn as_snake_case_map<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>> {
    Ok(to_json_map(value)?
        .into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(key, v)| {
            let words = split_by_case_style(&key);
            let key = if words.is_empty() { key } else { words.join("_") };
            (key, v)
        })
        .collect())
}

/// Every key whose value equals `value`, in iteration order
pub fn keys_for_value<'a, K, V, I>(entries: I, value: &V) -> Vec<K>
where
    K: Clone + 'a,
    V: PartialEq + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    entries
        .into_iter()
        .filter(|(_, v)| *v == value)
        .map(|(k, _)| k.clone())
        .collect()
}
