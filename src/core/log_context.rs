//! Structured fields attached to a log event
//!
//! This module provides:
//! - `FieldValue`: the closed set of value kinds a field may hold
//! - `ScalarValue`: the renderable subset (string, integer, boolean)
//! - `LogContext`: the per-event field map

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Value type for structured logging fields
///
/// Only `String`, `Int` and `Bool` are rendered by the template formatter.
/// The remaining kinds can be carried on an event but are skipped when
/// formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    List(Vec<FieldValue>),
    Map(HashMap<String, FieldValue>),
}

/// Borrowed view of a renderable field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarValue<'a> {
    Str(&'a str),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ScalarValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Str(s) => f.write_str(s),
            ScalarValue::Int(i) => write!(f, "{}", i),
            ScalarValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl<'a> ScalarValue<'a> {
    /// Text substituted into templates; strings are borrowed as-is
    #[must_use]
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            ScalarValue::Str(s) => Cow::Borrowed(s),
            ScalarValue::Int(i) => Cow::Owned(i.to_string()),
            ScalarValue::Bool(true) => Cow::Borrowed("true"),
            ScalarValue::Bool(false) => Cow::Borrowed("false"),
        }
    }
}

impl FieldValue {
    /// Narrow this value to a renderable scalar
    ///
    /// Returns `None` for floats, nulls, lists and maps.
    #[must_use]
    pub fn as_scalar(&self) -> Option<ScalarValue<'_>> {
        match self {
            FieldValue::String(s) => Some(ScalarValue::Str(s)),
            FieldValue::Int(i) => Some(ScalarValue::Int(*i)),
            FieldValue::Bool(b) => Some(ScalarValue::Bool(*b)),
            FieldValue::Float(_) | FieldValue::Null | FieldValue::List(_) | FieldValue::Map(_) => {
                None
            }
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            // Integers outside i64 keep their magnitude as a float
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => FieldValue::String(s),
            serde_json::Value::Array(items) => {
                FieldValue::List(items.into_iter().map(FieldValue::from).collect())
            }
            serde_json::Value::Object(map) => FieldValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Named fields attached to a single log event
///
/// Keys are unique and iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogContext {
    fields: HashMap<String, FieldValue>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Add a field to the context
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the context (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a single field
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Iterate over fields in the map's natural order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if context has any fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields in the context
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K, V> FromIterator<(K, V)> for LogContext
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for LogContext {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}
