//! Node Key Value Object
//!
//! A hashable identity for a record's key (or parent key) value.
//! JSON values are not `Hash`, so keys are compared through their compact
//! JSON text. Object members are sorted by `serde_json`, which makes the
//! text canonical for structurally equal values.

use std::fmt;

use serde_json::Value;

/// Hashable identity of a tree node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(String);

impl NodeKey {
    /// Build the identity of a JSON value
    pub fn from_value(value: &Value) -> Self {
        Self(value.to_string())
    }

    /// Canonical JSON text of the key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Value> for NodeKey {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render a key value as plain text
///
/// Scalars render as their natural text (strings unquoted), `null` renders
/// empty and composite values render as compact JSON.
pub fn key_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
