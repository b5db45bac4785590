//! Declarative field validation
//!
//! A schema is a slice of [`FieldRule`]s evaluated against a JSON object.
//! Every rule is checked; violations are reported together in declaration order.

mod rules;

pub use rules::{FieldKind, FieldRule};

use serde::Serialize;
use serde_json::Value;

/// A single constraint violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Offending field, or `None` when the body as a whole is invalid
    pub path: Option<String>,
    /// Human-readable description of the violation
    pub message: String,
}

impl FieldError {
    /// Error attached to a named field
    pub fn field(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            message: message.into(),
        }
    }

    /// Error attached to the whole body
    pub fn body(message: impl Into<String>) -> Self {
        Self {
            path: None,
            message: message.into(),
        }
    }
}

/// Validate `body` against `rules`, collecting all violations
pub fn validate(body: &Value, rules: &[FieldRule]) -> Result<(), Vec<FieldError>> {
    let Some(object) = body.as_object() else {
        return Err(vec![FieldError::body(format!(
            "Expected object, received {}",
            json_type_name(body)
        ))]);
    };

    let errors: Vec<FieldError> = rules
        .iter()
        .filter_map(|rule| rule.check(object.get(rule.field)))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
