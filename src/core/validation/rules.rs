//! Field rule definitions

use super::{FieldError, json_type_name};
use serde_json::Value;

/// Constraint applied to a present field
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// String with at least this many UTF-16 code units
    MinLength(usize),
    /// String equal to one of the listed values
    OneOf(&'static [&'static str]),
}

/// One optional field and its constraint
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: FieldKind,
    /// Message reported on violation; enumerations build their own
    pub message: &'static str,
}

impl FieldRule {
    pub const fn min_length(field: &'static str, min: usize, message: &'static str) -> Self {
        Self {
            field,
            kind: FieldKind::MinLength(min),
            message,
        }
    }

    pub const fn one_of(field: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            field,
            kind: FieldKind::OneOf(allowed),
            message: "",
        }
    }

    /// Check a field value; absent fields always pass
    pub(super) fn check(&self, value: Option<&Value>) -> Option<FieldError> {
        let value = value?;
        let Some(text) = value.as_str() else {
            return Some(FieldError::field(
                self.field,
                format!("Expected string, received {}", json_type_name(value)),
            ));
        };

        match self.kind {
            FieldKind::MinLength(min) if text.encode_utf16().count() < min => {
                Some(FieldError::field(self.field, self.message))
            }
            FieldKind::OneOf(allowed) if !allowed.contains(&text) => {
                let expected = allowed
                    .iter()
                    .map(|v| format!("'{v}'"))
                    .collect::<Vec<_>>()
                    .join(" | ");
                Some(FieldError::field(
                    self.field,
                    format!("Invalid enum value. Expected {expected}, received '{text}'"),
                ))
            }
            _ => None,
        }
    }
}
