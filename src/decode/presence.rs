//! Wrappers that keep `null` and "absent" apart.
//!
//! | presence mode       | Rust type      |
//! |---------------------|----------------|
//! | required            | `T`            |
//! | optional            | `Option<T>`    |
//! | nullable            | `Nullable<T>`  |
//! | optional + nullable | `Presence<T>`  |

use super::{Decode, DecodeContext, DecodeError};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A value that is always present on the wire but may be `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(v),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Null => None,
            Self::Value(v) => Some(v),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Null => None,
            Self::Value(v) => Some(v),
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T: Decode> Decode for Nullable<T> {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self::Null),
            other => T::decode(other, cx).map(Self::Value),
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Value(v) => v.serialize(serializer),
        }
    }
}

/// Tri-state field: absent, explicitly `null`, or a value.
///
/// Struct fields of this type must carry
/// `#[serde(skip_serializing_if = "Presence::is_absent")]` so that the
/// absent state round-trips as a missing key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Presence<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Presence<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Serialize> Serialize for Presence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent | Self::Null => serializer.serialize_unit(),
            Self::Value(v) => v.serialize(serializer),
        }
    }
}
