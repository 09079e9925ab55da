use super::{Decode, DecodeContext, DecodeError, Nullable, Presence};
use serde_json::{Map, Value};

/// Reads a JSON object one declared field at a time.
///
/// Each accessor encodes one presence mode. Keys are marked as consumed as
/// they are read so that [`ObjectReader::finish`] can report undeclared keys
/// when unknown fields are rejected.
pub struct ObjectReader<'a> {
    map: &'a Map<String, Value>,
    cx: &'a DecodeContext,
    consumed: Vec<&'a str>,
}

impl<'a> ObjectReader<'a> {
    pub fn new(value: &'a Value, cx: &'a DecodeContext) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self {
                map,
                cx,
                consumed: Vec::with_capacity(map.len()),
            }),
            other => Err(cx.type_mismatch("object", other)),
        }
    }

    /// Whether `name` is present, without consuming it.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Raw access to a key, consuming it if present.
    pub fn raw(&mut self, name: &str) -> Option<&'a Value> {
        let (key, value) = self.map.get_key_value(name)?;
        self.consumed.push(key.as_str());
        Some(value)
    }

    /// Must be present; decoded as `T`.
    pub fn required<T: Decode>(&mut self, name: &'static str) -> Result<T, DecodeError> {
        match self.raw(name) {
            Some(value) => T::decode(value, &self.cx.field(name)),
            None => T::decode_absent(name, self.cx),
        }
    }

    /// May be absent. A present value, `null` included, is decoded as `T`.
    pub fn optional<T: Decode>(&mut self, name: &'static str) -> Result<Option<T>, DecodeError> {
        self.raw(name)
            .map(|value| T::decode(value, &self.cx.field(name)))
            .transpose()
    }

    /// Must be present; may be `null`.
    pub fn nullable<T: Decode>(&mut self, name: &'static str) -> Result<Nullable<T>, DecodeError> {
        match self.raw(name) {
            Some(value) => Nullable::decode(value, &self.cx.field(name)),
            None => Err(DecodeError::MissingRequiredField {
                path: self.cx.path().to_string(),
                field: name,
            }),
        }
    }

    /// May be absent or `null`.
    pub fn optional_nullable<T: Decode>(
        &mut self,
        name: &'static str,
    ) -> Result<Presence<T>, DecodeError> {
        match self.raw(name) {
            None => Ok(Presence::Absent),
            Some(Value::Null) => Ok(Presence::Null),
            Some(value) => T::decode(value, &self.cx.field(name)).map(Presence::Value),
        }
    }

    /// Must be present and equal to the string literal `expected`.
    pub fn literal(&mut self, name: &'static str, expected: &'static str) -> Result<(), DecodeError> {
        let cx = self.cx.field(name);
        match self.raw(name) {
            Some(Value::String(found)) if found == expected => Ok(()),
            Some(Value::String(found)) => Err(DecodeError::LiteralMismatch {
                path: cx.path().to_string(),
                expected,
                found: found.clone(),
            }),
            Some(other) => Err(cx.type_mismatch("string", other)),
            None => Err(DecodeError::MissingRequiredField {
                path: self.cx.path().to_string(),
                field: name,
            }),
        }
    }

    pub fn finish(self) -> Result<(), DecodeError> {
        if !self.cx.options().reject_unknown_fields {
            return Ok(());
        }
        match self
            .map
            .keys()
            .find(|key| !self.consumed.contains(&key.as_str()))
        {
            Some(key) => Err(DecodeError::UnknownField {
                path: self.cx.path().to_string(),
                field: key.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// String value of a marker field, if `value` is an object that has one.
pub fn marker<'v>(value: &'v Value, field: &str) -> Option<&'v str> {
    value.as_object()?.get(field)?.as_str()
}
