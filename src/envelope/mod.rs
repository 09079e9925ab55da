//! JSON-RPC envelopes: classification, untyped messages and error payloads.
//!
//! A payload is classified by which of `id` and `method` it carries:
//!
//! | `method` | `id` | kind         |
//! |----------|------|--------------|
//! | yes      | yes  | Request      |
//! | yes      | no   | Notification |
//! | no       | yes  | Response     |
//! | no       | no   | malformed    |
//!
//! A Response must then carry exactly one of `result` and `error`.

mod typed;

pub use typed::{LspNotification, LspRequest, NotificationMessage, RequestMessage, ResponseMessage};

use crate::constants::JSONRPC_VERSION;
use crate::decode::{Decode, DecodeContext, DecodeError, Nullable, ObjectReader};
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use tower_lsp::jsonrpc::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeKind {
    Request,
    Notification,
    Response,
}

impl fmt::Display for EnvelopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Request => "request",
            Self::Notification => "notification",
            Self::Response => "response",
        })
    }
}

/// Classify a payload without decoding its contents.
pub fn classify(value: &Value, cx: &DecodeContext) -> Result<EnvelopeKind, DecodeError> {
    let Value::Object(map) = value else {
        return Err(cx.type_mismatch("object", value));
    };
    match (map.contains_key("method"), map.contains_key("id")) {
        (true, true) => Ok(EnvelopeKind::Request),
        (true, false) => Ok(EnvelopeKind::Notification),
        (false, true) => Ok(EnvelopeKind::Response),
        (false, false) => Err(DecodeError::EnvelopeAmbiguous {
            reason: "message has neither `id` nor `method`",
        }),
    }
}

pub(crate) fn expect_kind(
    value: &Value,
    cx: &DecodeContext,
    expected: EnvelopeKind,
) -> Result<(), DecodeError> {
    let found = classify(value, cx)?;
    if found == expected {
        Ok(())
    } else {
        Err(DecodeError::EnvelopeMismatch { expected, found })
    }
}

string_literal!(
    /// The `jsonrpc` member. Always `"2.0"`.
    JsonRpcVersion = "2.0"
);

/// `integer | string`, used for request ids and progress tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumberOrString {
    Number(i32),
    String(String),
}

pub type RequestId = NumberOrString;
pub type ProgressToken = NumberOrString;

impl Decode for NumberOrString {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        match value {
            Value::Number(_) => i32::decode(value, cx).map(Self::Number),
            Value::String(s) => Ok(Self::String(s.clone())),
            other => Err(cx.type_mismatch("integer | string", other)),
        }
    }
}

impl Serialize for NumberOrString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_i32(*n),
            Self::String(s) => serializer.serialize_str(s),
        }
    }
}

impl From<i32> for NumberOrString {
    fn from(value: i32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumberOrString {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// The `error` member of a failed response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ResponseError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The well-known JSON-RPC or LSP meaning of `code`, if any.
    pub fn error_code(&self) -> ErrorCode {
        ErrorCode::from(i64::from(self.code))
    }
}

impl Decode for ResponseError {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        let mut obj = ObjectReader::new(value, cx)?;
        let code = obj.required("code")?;
        let message = obj.required("message")?;
        let data = obj.optional("data")?;
        obj.finish()?;
        Ok(Self {
            code,
            message,
            data,
        })
    }
}

/// Exactly one of `result` and `error`.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome<T> {
    Result(T),
    Error(ResponseError),
}

impl<T> ResponseOutcome<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Self::Result(result) => Some(result),
            Self::Error(_) => None,
        }
    }
}

/// Which member carries a response's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutcomeKey {
    Result,
    Error,
}

impl OutcomeKey {
    /// Runs on the raw payload, ahead of any `jsonrpc` or `id` checks, so a
    /// response that breaks the exactly-one rule reports that first.
    pub(crate) fn of(value: &Value) -> Result<Self, DecodeError> {
        let has = |key: &str| value.get(key).is_some();
        match (has("result"), has("error")) {
            (true, false) => Ok(Self::Result),
            (false, true) => Ok(Self::Error),
            (true, true) => Err(DecodeError::EnvelopeAmbiguous {
                reason: "response has both `result` and `error`",
            }),
            (false, false) => Err(DecodeError::EnvelopeAmbiguous {
                reason: "response has neither `result` nor `error`",
            }),
        }
    }
}

impl<T: Decode> ResponseOutcome<T> {
    pub(crate) fn read(obj: &mut ObjectReader<'_>, key: OutcomeKey) -> Result<Self, DecodeError> {
        match key {
            OutcomeKey::Result => obj.required("result").map(Self::Result),
            OutcomeKey::Error => obj.required("error").map(Self::Error),
        }
    }
}

impl<T: Serialize> ResponseOutcome<T> {
    pub(crate) fn write<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        match self {
            Self::Result(result) => map.serialize_entry("result", result),
            Self::Error(error) => map.serialize_entry("error", error),
        }
    }
}

/// Writes `params` unless it serializes to `null` (no params).
pub(crate) fn write_params<M: SerializeMap, P: Serialize>(
    map: &mut M,
    params: &P,
) -> Result<(), M::Error> {
    let value = serde_json::to_value(params).map_err(M::Error::custom)?;
    if value.is_null() {
        return Ok(());
    }
    map.serialize_entry("params", &value)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawRequest {
    pub id: RequestId,
    pub method: String,
    pub params: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawNotification {
    pub method: String,
    pub params: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub id: Nullable<RequestId>,
    pub outcome: ResponseOutcome<Value>,
}

/// Any JSON-RPC message, with params and results left as raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Request(RawRequest),
    Notification(RawNotification),
    Response(RawResponse),
}

impl Message {
    pub fn kind(&self) -> EnvelopeKind {
        match self {
            Self::Request(_) => EnvelopeKind::Request,
            Self::Notification(_) => EnvelopeKind::Notification,
            Self::Response(_) => EnvelopeKind::Response,
        }
    }

    pub fn method(&self) -> Option<&str> {
        match self {
            Self::Request(r) => Some(&r.method),
            Self::Notification(n) => Some(&n.method),
            Self::Response(_) => None,
        }
    }
}

impl Decode for Message {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        let kind = classify(value, cx)?;
        if kind == EnvelopeKind::Response {
            OutcomeKey::of(value)?;
        }
        let mut obj = ObjectReader::new(value, cx)?;
        obj.literal("jsonrpc", JSONRPC_VERSION)?;
        let message = match kind {
            EnvelopeKind::Request => Self::Request(RawRequest {
                id: obj.required("id")?,
                method: obj.required("method")?,
                params: obj.optional("params")?,
            }),
            EnvelopeKind::Notification => Self::Notification(RawNotification {
                method: obj.required("method")?,
                params: obj.optional("params")?,
            }),
            EnvelopeKind::Response => {
                let id = obj.nullable("id")?;
                let outcome = ResponseOutcome::read(&mut obj, OutcomeKey::of(value)?)?;
                Self::Response(RawResponse { id, outcome })
            }
        };
        obj.finish()?;
        Ok(message)
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("jsonrpc", &JsonRpcVersion)?;
        match self {
            Self::Request(request) => {
                map.serialize_entry("id", &request.id)?;
                map.serialize_entry("method", &request.method)?;
                if let Some(params) = &request.params {
                    map.serialize_entry("params", params)?;
                }
            }
            Self::Notification(notification) => {
                map.serialize_entry("method", &notification.method)?;
                if let Some(params) = &notification.params {
                    map.serialize_entry("params", params)?;
                }
            }
            Self::Response(response) => {
                map.serialize_entry("id", &response.id)?;
                response.outcome.write(&mut map)?;
            }
        }
        map.end()
    }
}
