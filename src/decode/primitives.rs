//! Decoders for the meta-model base types and containers.

use super::{Decode, DecodeContext, DecodeError};
use crate::constants::{UINTEGER_MAX, UINTEGER_MIN};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// `LSPAny`: any JSON value, `null` included.
pub type LspAny = Value;

/// `LSPObject`: a JSON object with arbitrary members.
pub type LspObject = Map<String, Value>;

impl Decode for bool {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        value.as_bool().ok_or_else(|| cx.type_mismatch("boolean", value))
    }
}

impl Decode for String {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(cx.type_mismatch("string", other)),
        }
    }
}

/// Reads an integral number within `min..=max`.
///
/// Integral values written in exponent or decimal form (`3e9`, `1.0`) are
/// not integers on the wire; they fail with `FieldOutOfRange` when they lie
/// outside the range and with `TypeMismatch` otherwise.
fn bounded(
    value: &Value,
    cx: &DecodeContext,
    kind: &'static str,
    min: i64,
    max: i64,
) -> Result<i64, DecodeError> {
    let Value::Number(n) = value else {
        return Err(cx.type_mismatch(kind, value));
    };
    let out_of_range = || DecodeError::FieldOutOfRange {
        path: cx.path().to_string(),
        kind,
        value: n.to_string(),
    };
    if let Some(i) = n.as_i64() {
        return if (min..=max).contains(&i) {
            Ok(i)
        } else {
            Err(out_of_range())
        };
    }
    if n.as_u64().is_some() {
        return Err(out_of_range());
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && (f < min as f64 || f > max as f64) => Err(out_of_range()),
        _ => Err(DecodeError::TypeMismatch {
            path: cx.path().to_string(),
            expected: kind,
            found: "non-integral number",
        }),
    }
}

/// `integer`: the full signed 32-bit range.
impl Decode for i32 {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        bounded(value, cx, "integer", i64::from(i32::MIN), i64::from(i32::MAX)).map(|v| v as i32)
    }
}

/// `uinteger`: 0 through 2^31 - 1.
impl Decode for u32 {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        bounded(
            value,
            cx,
            "uinteger",
            i64::from(UINTEGER_MIN),
            i64::from(UINTEGER_MAX),
        )
        .map(|v| v as u32)
    }
}

/// `decimal`: any finite number.
impl Decode for f64 {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        let Value::Number(n) = value else {
            return Err(cx.type_mismatch("decimal", value));
        };
        match n.as_f64() {
            Some(f) if f.is_finite() => Ok(f),
            _ => Err(DecodeError::FieldOutOfRange {
                path: cx.path().to_string(),
                kind: "decimal",
                value: n.to_string(),
            }),
        }
    }
}

impl Decode for Value {
    fn decode(value: &Value, _cx: &DecodeContext) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }
}

impl Decode for Map<String, Value> {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(map.clone()),
            other => Err(cx.type_mismatch("object", other)),
        }
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        let Value::Array(items) = value else {
            return Err(cx.type_mismatch("array", value));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode(item, &cx.index(i)))
            .collect()
    }
}

/// Map types (`{ [uri: DocumentUri]: T }`). Keys are always strings on the wire.
impl<T: Decode> Decode for BTreeMap<String, T> {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        let Value::Object(map) = value else {
            return Err(cx.type_mismatch("object", value));
        };
        map.iter()
            .map(|(key, item)| T::decode(item, &cx.entry(key)).map(|v| (key.clone(), v)))
            .collect()
    }
}

/// Params of a message that declares none. Accepts an absent key or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoParams;

impl Decode for NoParams {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self),
            other => Err(cx.type_mismatch("null", other)),
        }
    }

    fn decode_absent(_field: &'static str, _cx: &DecodeContext) -> Result<Self, DecodeError> {
        Ok(Self)
    }
}

impl Serialize for NoParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

/// The `null` base type, e.g. the result of `shutdown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Null;

impl Decode for Null {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self),
            other => Err(cx.type_mismatch("null", other)),
        }
    }
}

impl Serialize for Null {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodeOptions;
    use serde_json::json;

    fn cx() -> DecodeContext {
        DecodeContext::new(DecodeOptions::default())
    }

    #[test]
    fn test_integer_accepts_full_i32_range() {
        assert_eq!(i32::decode(&json!(-2147483648i64), &cx()).unwrap(), i32::MIN);
        assert_eq!(i32::decode(&json!(2147483647i64), &cx()).unwrap(), i32::MAX);
    }

    #[test]
    fn test_integer_rejects_out_of_range() {
        for raw in [json!(-2147483649i64), json!(2147483648i64), json!(u64::MAX)] {
            assert!(matches!(
                i32::decode(&raw, &cx()),
                Err(DecodeError::FieldOutOfRange { kind: "integer", .. })
            ));
        }
    }

    #[test]
    fn test_integer_rejects_fractions_and_strings() {
        assert!(matches!(
            i32::decode(&json!(1.5), &cx()),
            Err(DecodeError::TypeMismatch { .. })
        ));
        assert!(matches!(
            i32::decode(&json!(1.0), &cx()),
            Err(DecodeError::TypeMismatch { .. })
        ));
        assert!(matches!(
            i32::decode(&json!(3e9), &cx()),
            Err(DecodeError::FieldOutOfRange { .. })
        ));
        assert!(matches!(
            i32::decode(&json!("1"), &cx()),
            Err(DecodeError::TypeMismatch { found: "string", .. })
        ));
    }

    #[test]
    fn test_uinteger_bounds() {
        assert_eq!(u32::decode(&json!(0), &cx()).unwrap(), 0);
        assert_eq!(u32::decode(&json!(2147483647i64), &cx()).unwrap(), 2147483647);
        assert!(matches!(
            u32::decode(&json!(-1), &cx()),
            Err(DecodeError::FieldOutOfRange { kind: "uinteger", .. })
        ));
        assert!(matches!(
            u32::decode(&json!(2147483648i64), &cx()),
            Err(DecodeError::FieldOutOfRange { .. })
        ));
    }

    #[test]
    fn test_decimal_accepts_finite_numbers() {
        assert_eq!(f64::decode(&json!(0.25), &cx()).unwrap(), 0.25);
        assert_eq!(f64::decode(&json!(-3), &cx()).unwrap(), -3.0);
        assert!(f64::decode(&json!("0.25"), &cx()).is_err());
    }

    #[test]
    fn test_vec_reports_element_path() {
        let err = Vec::<i32>::decode(&json!([1, "two"]), &cx()).unwrap_err();
        match err {
            DecodeError::TypeMismatch { path, .. } => assert_eq!(path, "$[1]"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_reports_entry_path() {
        let err = BTreeMap::<String, bool>::decode(&json!({"a": true, "b": 1}), &cx()).unwrap_err();
        match err {
            DecodeError::TypeMismatch { path, .. } => assert_eq!(path, "$[\"b\"]"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_params_accepts_absent_and_null_only() {
        assert!(NoParams::decode_absent("params", &cx()).is_ok());
        assert!(NoParams::decode(&json!(null), &cx()).is_ok());
        assert!(NoParams::decode(&json!({}), &cx()).is_err());
    }

    #[test]
    fn test_any_accepts_null() {
        assert_eq!(Value::decode(&json!(null), &cx()).unwrap(), Value::Null);
    }
}
