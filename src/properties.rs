//! Author-supplied key/value properties.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Property map attached to a map, layer, tileset or tile.
pub type Properties = HashMap<String, PropertyValue>;

/// One property value as authored in the editor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl PropertyValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value; integers widen to float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Int(i) => Some(*i as f64),
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Converts a parsed JSON value; arrays and objects have no property
    /// representation and map to `None`.
    pub fn from_json(value: &JsonValue) -> Option<PropertyValue> {
        match value {
            JsonValue::Bool(b) => Some(PropertyValue::Bool(*b)),
            JsonValue::Number(n) => n
                .as_i64()
                .map(PropertyValue::Int)
                .or_else(|| n.as_f64().map(PropertyValue::Float)),
            JsonValue::String(s) => Some(PropertyValue::String(s.clone())),
            _ => None,
        }
    }
}
