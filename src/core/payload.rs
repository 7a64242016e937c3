//! Raw transport payloads.
//!
//! A backend response arrives either as an already-structured JSON tree or
//! as text that still has to be parsed (double-encoded payloads).

use serde_json::Value;

/// Untyped payload handed over by a transport.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// JSON text that must be parsed before hydration.
    Text(String),
    /// An already-parsed JSON tree.
    Structured(Value),
}

impl RawPayload {
    /// Parse the payload into a JSON tree.
    ///
    /// `Structured` payloads are returned as-is.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the `Text` arm is not valid JSON.
    pub fn parse(self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Text(text) => serde_json::from_str(&text),
            Self::Structured(value) => Ok(value),
        }
    }

    /// Whether the payload still needs a parse step.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl Default for RawPayload {
    fn default() -> Self {
        Self::Structured(Value::Null)
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

impl From<&Value> for RawPayload {
    fn from(value: &Value) -> Self {
        Self::Structured(value.clone())
    }
}

impl From<String> for RawPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Short name of a JSON value's kind, for error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
