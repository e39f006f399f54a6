//! # Property Values
//!
//! Values handed over by a [`PropertySource`](super::source::PropertySource)
//! are heterogeneous: strings, numbers, booleans, lists and nested tables.
//! Kafka clients only take strings, so every value has to end up as text.
//!
//! Conversion happens in two steps. Scalar kinds (string, integer, float,
//! boolean) have an explicit conversion; anything else falls back to its
//! [`Display`](std::fmt::Display) form. Nothing here can fail.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single typed value read from a property source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<PropertyValue>),
    /// Nested structure that was not flattened into dotted keys
    Table(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Whether the explicit string conversion supports this kind
    pub fn can_convert_to_string(&self) -> bool {
        matches!(
            self,
            PropertyValue::Boolean(_)
                | PropertyValue::Integer(_)
                | PropertyValue::Float(_)
                | PropertyValue::String(_)
        )
    }

    /// Explicit conversion for scalar kinds
    ///
    /// Returns `None` for kinds without a conversion, and for non-finite
    /// floats which have no stable textual form.
    pub fn convert_to_string(&self) -> Option<String> {
        match self {
            PropertyValue::Boolean(b) => Some(b.to_string()),
            PropertyValue::Integer(i) => Some(i.to_string()),
            PropertyValue::Float(f) if f.is_finite() => Some(format_float(*f)),
            PropertyValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Text handed to the Kafka client for this value
    pub fn to_property_string(&self) -> String {
        if self.can_convert_to_string() {
            if let Some(converted) = self.convert_to_string() {
                return converted;
            }
        }
        self.to_string()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Name of the value kind, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Boolean(_) => "boolean",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Float(_) => "float",
            PropertyValue::String(_) => "string",
            PropertyValue::List(_) => "list",
            PropertyValue::Table(_) => "table",
        }
    }
}

/// Integral floats keep a trailing `.0` so `1.0` does not turn into `1`
fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => write!(f, "null"),
            PropertyValue::Boolean(b) => write!(f, "{b}"),
            PropertyValue::Integer(i) => write!(f, "{i}"),
            PropertyValue::Float(x) => write!(f, "{x}"),
            PropertyValue::String(s) => write!(f, "{s}"),
            // Kafka list settings are comma separated
            PropertyValue::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item.to_property_string())?;
                }
                Ok(())
            }
            PropertyValue::Table(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}={}", value.to_property_string())?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Integer(i64::from(value))
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        PropertyValue::Integer(i64::from(value))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(values: Vec<T>) -> Self {
        PropertyValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => PropertyValue::Null,
            Value::Bool(b) => PropertyValue::Boolean(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    PropertyValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    PropertyValue::Float(f)
                } else {
                    // u64 beyond i64::MAX
                    PropertyValue::String(n.to_string())
                }
            }
            Value::String(s) => PropertyValue::String(s),
            Value::Array(items) => {
                PropertyValue::List(items.into_iter().map(PropertyValue::from).collect())
            }
            Value::Object(map) => PropertyValue::Table(
                map.into_iter()
                    .map(|(k, v)| (k, PropertyValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<config::Value> for PropertyValue {
    fn from(value: config::Value) -> Self {
        use config::ValueKind;

        match value.kind {
            ValueKind::Nil => PropertyValue::Null,
            ValueKind::Boolean(b) => PropertyValue::Boolean(b),
            ValueKind::I64(i) => PropertyValue::Integer(i),
            ValueKind::I128(i) => i64::try_from(i)
                .map(PropertyValue::Integer)
                .unwrap_or_else(|_| PropertyValue::String(i.to_string())),
            ValueKind::U64(u) => i64::try_from(u)
                .map(PropertyValue::Integer)
                .unwrap_or_else(|_| PropertyValue::String(u.to_string())),
            ValueKind::U128(u) => i64::try_from(u)
                .map(PropertyValue::Integer)
                .unwrap_or_else(|_| PropertyValue::String(u.to_string())),
            ValueKind::Float(f) => PropertyValue::Float(f),
            ValueKind::String(s) => PropertyValue::String(s),
            ValueKind::Array(items) => {
                PropertyValue::List(items.into_iter().map(PropertyValue::from).collect())
            }
            ValueKind::Table(map) => PropertyValue::Table(
                map.into_iter()
                    .map(|(k, v)| (k, PropertyValue::from(v)))
                    .collect(),
            ),
        }
    }
}
