//! Typed decode failures.
//!
//! Every failure a binding can produce while reading a payload is one of
//! these variants. They are values, never panics: callers match on them and
//! the conformance harness records them per fixture.

use crate::envelope::EnvelopeKind;
use thiserror::Error;

/// Structured error type for decode operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("payload is not valid JSON: {message}")]
    Syntax { message: String },

    #[error("missing required field `{field}` at {path}")]
    MissingRequiredField { path: String, field: &'static str },

    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("value {value} at {path} is outside the {kind} range")]
    FieldOutOfRange {
        path: String,
        kind: &'static str,
        value: String,
    },

    #[error("ambiguous envelope: {reason}")]
    EnvelopeAmbiguous { reason: &'static str },

    #[error("expected a {expected} envelope, found a {found}")]
    EnvelopeMismatch {
        expected: EnvelopeKind,
        found: EnvelopeKind,
    },

    #[error("value at {path} matches no alternative of {union}")]
    UnionNoMatch { path: String, union: &'static str },

    #[error("value at {path} matches several alternatives of {union}: {}", alternatives.join(", "))]
    UnionAmbiguous {
        path: String,
        union: &'static str,
        alternatives: Vec<&'static str>,
    },

    #[error("unknown field `{field}` at {path}")]
    UnknownField { path: String, field: String },

    #[error("expected literal {expected:?} at {path}, found {found}")]
    LiteralMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    #[error("{value} is not a valid {enumeration} at {path}")]
    InvalidEnumValue {
        path: String,
        enumeration: &'static str,
        value: String,
    },

    #[error("no binding registered for method `{method}`")]
    UnknownMethod { method: String },
}

impl DecodeError {
    /// Short, stable label for the error kind. Used in reports and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "Syntax",
            Self::MissingRequiredField { .. } => "MissingRequiredField",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::FieldOutOfRange { .. } => "FieldOutOfRange",
            Self::EnvelopeAmbiguous { .. } => "EnvelopeAmbiguous",
            Self::EnvelopeMismatch { .. } => "EnvelopeMismatch",
            Self::UnionNoMatch { .. } => "UnionNoMatch",
            Self::UnionAmbiguous { .. } => "UnionAmbiguous",
            Self::UnknownField { .. } => "UnknownField",
            Self::LiteralMismatch { .. } => "LiteralMismatch",
            Self::InvalidEnumValue { .. } => "InvalidEnumValue",
            Self::UnknownMethod { .. } => "UnknownMethod",
        }
    }

    pub(crate) fn syntax(err: serde_json::Error) -> Self {
        Self::Syntax {
            message: err.to_string(),
        }
    }
}

/// Name of the JSON kind of `value`, as used in `TypeMismatch` errors.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
