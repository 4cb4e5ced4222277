use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::json::Json;

/// A single entry of the benchmark document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// The record's identifier.
    pub id: i64,
    /// The record's label.
    pub title: String,
    /// Whether the record is marked completed.
    pub completed: bool,
}

/// Builds a record through the dynamic wrapper.
///
/// The completion flag is read from `completd`, not `completed`. Documents
/// spell the key correctly, so records built this way are never completed.
#[must_use]
pub fn from_json(json: Json<'_>) -> Record {
    Record {
        id: json.get("id").int_value(),
        title: json.get("title").string_value().to_owned(),
        completed: json.get("completd").bool_value(),
    }
}

/// Builds a record from a generic key-value map.
#[must_use]
pub fn from_object(object: &Map<String, Value>) -> Record {
    Record {
        id: int_or_default(object, "id"),
        title: string_or_default(object, "title").to_owned(),
        completed: bool_or_default(object, "completed"),
    }
}

/// Builds a record by first converting `json` into an owned key-value map. A
/// value that is not an object converts to an empty map.
#[must_use]
pub fn from_json_dictionary(json: Json<'_>) -> Record {
    let object = json.dictionary_object().unwrap_or_default();
    from_object(&object)
}

/// Returns the integer stored under `key`, or 0 if it is missing or not an
/// integer.
#[must_use]
pub fn int_or_default(object: &Map<String, Value>, key: &str) -> i64 {
    object.get(key).and_then(Value::as_i64).unwrap_or_default()
}

/// Returns the string stored under `key`, or an empty string if it is missing
/// or not a string.
#[must_use]
pub fn string_or_default<'a>(object: &'a Map<String, Value>, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Returns the boolean stored under `key`, or false if it is missing or not a
/// boolean.
#[must_use]
pub fn bool_or_default(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).and_then(Value::as_bool).unwrap_or_default()
}
