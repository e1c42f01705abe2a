//! Property values attached to a node

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single node property value.
///
/// Serialized untagged, so on the wire a property is a bare JSON string,
/// integer, boolean or `null`. Floats, arrays and objects are rejected at
/// deserialization time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Boolean(bool),
    Integer(i64),
    String(String),
}

impl PropertyValue {
    /// Compare this value against a filter value taken from a request.
    ///
    /// String properties compare case-insensitively. Every other variant
    /// compares its canonical text form (`28`, `true`, `null`) exactly.
    /// Booleans and null use their JSON spelling, so `True` or `None` do not
    /// match a boolean or null property.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::String(s) => s.to_lowercase() == value.to_lowercase(),
            other => other.to_string() == value,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}
