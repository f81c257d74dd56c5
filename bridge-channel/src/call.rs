//! Method calls and argument extraction.

use crate::error::{ChannelError, Result};
use serde_json::{Map, Value};

/// One host call: a method name plus named arguments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodCall {
    pub method: String,
    pub arguments: Map<String, Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Parse arguments from a JSON object string.
    ///
    /// An empty string or `null` means no arguments. Anything other than an
    /// object is rejected with `INVALID_ARGUMENT`.
    pub fn from_json(method: impl Into<String>, arguments: &str) -> Result<Self> {
        let method = method.into();
        if arguments.trim().is_empty() {
            return Ok(Self::new(method));
        }

        let value: Value = serde_json::from_str(arguments)
            .map_err(|e| ChannelError::invalid_argument(format!("Malformed arguments: {}", e)))?;

        match value {
            Value::Null => Ok(Self::new(method)),
            Value::Object(arguments) => Ok(Self { method, arguments }),
            other => Err(ChannelError::invalid_argument(format!(
                "Arguments must be an object, got {}",
                type_name(&other)
            ))),
        }
    }

    /// A string argument that must be present.
    ///
    /// Blank strings pass; deciding whether blank is valid is the facade's job.
    pub fn required_str(&self, name: &str) -> Result<&str> {
        match self.arguments.get(name) {
            Some(Value::String(value)) => Ok(value),
            Some(Value::Null) | None => {
                Err(ChannelError::invalid_argument(format!("{} is required", name)))
            }
            Some(other) => Err(ChannelError::invalid_argument(format!(
                "{} must be a string, got {}",
                name,
                type_name(other)
            ))),
        }
    }

    /// A string argument that may be missing or `null`.
    pub fn optional_str(&self, name: &str) -> Result<Option<&str>> {
        match self.arguments.get(name) {
            Some(Value::Null) | None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => Err(ChannelError::invalid_argument(format!(
                "{} must be a string, got {}",
                name,
                type_name(other)
            ))),
        }
    }

    /// A numeric argument that must be present. Integers are accepted.
    pub fn required_f64(&self, name: &str) -> Result<f64> {
        match self.arguments.get(name) {
            Some(Value::Number(number)) => number.as_f64().ok_or_else(|| {
                ChannelError::invalid_argument(format!("{} is out of range", name))
            }),
            Some(Value::Null) | None => {
                Err(ChannelError::invalid_argument(format!("{} is required", name)))
            }
            Some(other) => Err(ChannelError::invalid_argument(format!(
                "{} must be a number, got {}",
                name,
                type_name(other)
            ))),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
