use serde_json::{Map, Value};

use crate::Error;

/// A parsed JSON document that can be explored through [`Json`] views.
///
/// This is the owning half of the dynamic wrapper. The document itself never
/// fails to produce a view: [`Document::root`] of a document that failed to
/// parse is simply null.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Parses `json` into a document, returning an error if the bytes are not
    /// valid JSON.
    pub fn from_json_bytes(json: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            root: serde_json::from_slice(json)?,
        })
    }

    /// Parses `json` into a document. Invalid JSON produces a null document
    /// instead of an error.
    #[must_use]
    pub fn from_json_bytes_lossy(json: &[u8]) -> Self {
        Self::from_json_bytes(json).unwrap_or_default()
    }

    /// Returns a view of the document's root value.
    #[must_use]
    pub fn root(&self) -> Json<'_> {
        Json::new(&self.root)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self { root: Value::Null }
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

/// A borrowed view into a JSON value where every lookup succeeds.
///
/// Indexing a missing key, an out-of-range element, or a value of the wrong
/// type yields a null view. The `*_value` accessors then fall back to the
/// zero value for their type, so chains like
/// `json.get("a").at(2).string_value()` never fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Json<'a> {
    value: Option<&'a Value>,
}

impl<'a> Json<'a> {
    /// A view that refers to nothing.
    pub const NULL: Json<'static> = Json { value: None };

    /// Returns a view of `value`.
    #[must_use]
    pub const fn new(value: &'a Value) -> Self {
        Self { value: Some(value) }
    }

    /// Returns the underlying value, or `None` if this view is null.
    #[must_use]
    pub fn as_value(self) -> Option<&'a Value> {
        self.value.filter(|value| !value.is_null())
    }

    /// Returns true if this view refers to nothing or to a JSON `null`.
    #[must_use]
    pub fn is_null(self) -> bool {
        self.as_value().is_none()
    }

    /// Returns a view of the value stored under `key`. Returns a null view if
    /// this is not an object or `key` is missing.
    #[must_use]
    pub fn get(self, key: &str) -> Self {
        Self {
            value: self.value.and_then(|value| value.get(key)),
        }
    }

    /// Returns a view of the element at `index`. Returns a null view if this is
    /// not an array or `index` is out of range.
    #[must_use]
    pub fn at(self, index: usize) -> Self {
        Self {
            value: self.value.and_then(|value| value.get(index)),
        }
    }

    /// Returns the value as an `i64`, or `None` if it is not an integer that
    /// fits.
    #[must_use]
    pub fn int(self) -> Option<i64> {
        self.value.and_then(Value::as_i64)
    }

    /// Returns the value as an `i64`, or 0.
    #[must_use]
    pub fn int_value(self) -> i64 {
        self.int().unwrap_or_default()
    }

    /// Returns the value as a string, or `None` if it is not a string.
    #[must_use]
    pub fn string(self) -> Option<&'a str> {
        self.value.and_then(Value::as_str)
    }

    /// Returns the value as a string, or an empty string.
    #[must_use]
    pub fn string_value(self) -> &'a str {
        self.string().unwrap_or_default()
    }

    /// Returns the value as a boolean, or `None` if it is not a boolean.
    #[must_use]
    pub fn bool(self) -> Option<bool> {
        self.value.and_then(Value::as_bool)
    }

    /// Returns the value as a boolean, or false.
    #[must_use]
    pub fn bool_value(self) -> bool {
        self.bool().unwrap_or_default()
    }

    /// Returns the elements of this array, or `None` if it is not an array.
    #[must_use]
    pub fn array(self) -> Option<JsonArray<'a>> {
        self.value
            .and_then(Value::as_array)
            .map(|values| JsonArray(values.iter()))
    }

    /// Returns the elements of this array. A value that is not an array has no
    /// elements.
    #[must_use]
    pub fn array_value(self) -> JsonArray<'a> {
        self.array().unwrap_or_default()
    }

    /// Returns the object this view refers to, or `None` if it is not an
    /// object.
    #[must_use]
    pub fn object(self) -> Option<&'a Map<String, Value>> {
        self.value.and_then(Value::as_object)
    }

    /// Converts this object into an owned key-value map, or `None` if it is
    /// not an object.
    ///
    /// Every entry is cloned. Building records through this conversion is one
    /// of the measured strategies, so the copy is intentional.
    #[must_use]
    pub fn dictionary_object(self) -> Option<Map<String, Value>> {
        self.object().cloned()
    }
}

impl<'a> From<&'a Value> for Json<'a> {
    fn from(value: &'a Value) -> Self {
        Self::new(value)
    }
}

/// An iterator over the elements of a JSON array as [`Json`] views.
#[derive(Debug, Clone, Default)]
pub struct JsonArray<'a>(std::slice::Iter<'a, Value>);

impl<'a> Iterator for JsonArray<'a> {
    type Item = Json<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Json::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for JsonArray<'_> {}

#[test]
fn lookups_never_fail() {
    let doc = Document::from_json_bytes(br#"{"a":[1,"two",true,null]}"#).unwrap();
    let root = doc.root();
    assert_eq!(root.get("a").at(0).int_value(), 1);
    assert_eq!(root.get("a").at(1).string_value(), "two");
    assert!(root.get("a").at(2).bool_value());
    assert!(root.get("a").at(3).is_null());
    assert!(root.get("a").at(9).is_null());
    assert!(root.get("missing").get("deeper").is_null());
    assert_eq!(root.get("a").at(1).int_value(), 0);
    assert_eq!(root.get("a").at(0).string_value(), "");
    assert_eq!(root.get("a").array_value().len(), 4);
    assert_eq!(root.array_value().len(), 0);
    assert!(root.dictionary_object().is_some());
    assert!(root.get("a").dictionary_object().is_none());
}

#[test]
fn lossy_parse_is_null() {
    let doc = Document::from_json_bytes_lossy(b"[1,");
    assert!(doc.root().is_null());
    assert_eq!(doc.root().array_value().count(), 0);
    assert!(Json::NULL.is_null());
}
