//! Decode framework shared by every generated binding.
//!
//! Decoding goes through [`serde_json::Value`] so that presence (absent vs.
//! `null` vs. value) is observable before a field is interpreted. Encoding
//! is plain `serde::Serialize`.

pub mod error;
pub mod object;
pub mod presence;
pub mod primitives;
pub mod union;

pub use error::{json_kind, DecodeError};
pub use object::ObjectReader;
pub use presence::{Nullable, Presence};
pub use primitives::{LspAny, LspObject, NoParams, Null};
pub use union::UnionDecoder;

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Options that apply to a whole decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject object keys that the target record does not declare.
    pub reject_unknown_fields: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            reject_unknown_fields: true,
        }
    }
}

impl DecodeOptions {
    pub fn permissive() -> Self {
        Self {
            reject_unknown_fields: false,
        }
    }
}

/// JSON path of the value being decoded, rendered as `$.params.edit[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        Self("$".to_string())
    }

    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }

    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn entry(&self, key: &str) -> Self {
        Self(format!("{}[{:?}]", self.0, key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a decoder is in the payload and under which options it runs.
#[derive(Debug, Clone)]
pub struct DecodeContext {
    path: FieldPath,
    options: DecodeOptions,
}

impl DecodeContext {
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            path: FieldPath::root(),
            options,
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    pub fn field(&self, name: &str) -> Self {
        Self {
            path: self.path.field(name),
            options: self.options,
        }
    }

    pub fn index(&self, index: usize) -> Self {
        Self {
            path: self.path.index(index),
            options: self.options,
        }
    }

    pub fn entry(&self, key: &str) -> Self {
        Self {
            path: self.path.entry(key),
            options: self.options,
        }
    }

    /// Same position, with unknown fields rejected from here down.
    pub fn strict(&self) -> Self {
        Self {
            path: self.path.clone(),
            options: DecodeOptions {
                reject_unknown_fields: true,
            },
        }
    }

    pub fn type_mismatch(&self, expected: &'static str, found: &Value) -> DecodeError {
        DecodeError::TypeMismatch {
            path: self.path.to_string(),
            expected,
            found: json_kind(found),
        }
    }
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self::new(DecodeOptions::default())
    }
}

/// A protocol type that can be read from a JSON value.
pub trait Decode: Sized {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError>;

    /// Value to use when a required key for this type is absent.
    ///
    /// Only types with a canonical "nothing" form (e.g. [`NoParams`])
    /// override this.
    fn decode_absent(field: &'static str, cx: &DecodeContext) -> Result<Self, DecodeError> {
        Err(DecodeError::MissingRequiredField {
            path: cx.path().to_string(),
            field,
        })
    }
}

/// Parse raw payload bytes and decode them as `T`.
pub fn decode_bytes<T: Decode>(bytes: &[u8], options: DecodeOptions) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::syntax)?;
    T::decode(&value, &DecodeContext::new(options))
}

/// Decode an already parsed value from the root.
pub fn decode_value<T: Decode>(value: &Value, options: DecodeOptions) -> Result<T, DecodeError> {
    T::decode(value, &DecodeContext::new(options))
}

/// Encode a binding back to payload bytes.
pub fn encode<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(value)
}
