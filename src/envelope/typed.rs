use super::{
    expect_kind, write_params, EnvelopeKind, JsonRpcVersion, OutcomeKey, RequestId, ResponseOutcome,
};
use crate::constants::JSONRPC_VERSION;
use crate::decode::{Decode, DecodeContext, DecodeError, Nullable, ObjectReader};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// A request method: its wire name, fixture type names and payload types.
pub trait LspRequest: 'static {
    const METHOD: &'static str;
    const REQUEST_TYPE: &'static str;
    const RESPONSE_TYPE: &'static str;
    type Params: Decode + Serialize + fmt::Debug + Clone + PartialEq + Send + Sync + 'static;
    type Result: Decode + Serialize + fmt::Debug + Clone + PartialEq + Send + Sync + 'static;
}

/// A notification method.
pub trait LspNotification: 'static {
    const METHOD: &'static str;
    const TYPE_NAME: &'static str;
    type Params: Decode + Serialize + fmt::Debug + Clone + PartialEq + Send + Sync + 'static;
}

pub struct RequestMessage<R: LspRequest> {
    pub id: RequestId,
    pub params: R::Params,
}

impl<R: LspRequest> RequestMessage<R> {
    pub fn new(id: impl Into<RequestId>, params: R::Params) -> Self {
        Self {
            id: id.into(),
            params,
        }
    }

    pub fn method(&self) -> &'static str {
        R::METHOD
    }
}

impl<R: LspRequest> Decode for RequestMessage<R> {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        expect_kind(value, cx, EnvelopeKind::Request)?;
        let mut obj = ObjectReader::new(value, cx)?;
        obj.literal("jsonrpc", JSONRPC_VERSION)?;
        let id = obj.required("id")?;
        obj.literal("method", R::METHOD)?;
        let params = obj.required("params")?;
        obj.finish()?;
        Ok(Self { id, params })
    }
}

impl<R: LspRequest> Serialize for RequestMessage<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("jsonrpc", &JsonRpcVersion)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("method", R::METHOD)?;
        write_params(&mut map, &self.params)?;
        map.end()
    }
}

pub struct ResponseMessage<R: LspRequest> {
    pub id: Nullable<RequestId>,
    pub outcome: ResponseOutcome<R::Result>,
    _method: PhantomData<fn() -> R>,
}

impl<R: LspRequest> ResponseMessage<R> {
    pub fn new(id: Nullable<RequestId>, outcome: ResponseOutcome<R::Result>) -> Self {
        Self {
            id,
            outcome,
            _method: PhantomData,
        }
    }
}

impl<R: LspRequest> Decode for ResponseMessage<R> {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        expect_kind(value, cx, EnvelopeKind::Response)?;
        let key = OutcomeKey::of(value)?;
        let mut obj = ObjectReader::new(value, cx)?;
        obj.literal("jsonrpc", JSONRPC_VERSION)?;
        let id = obj.nullable("id")?;
        let outcome = ResponseOutcome::read(&mut obj, key)?;
        obj.finish()?;
        Ok(Self::new(id, outcome))
    }
}

impl<R: LspRequest> Serialize for ResponseMessage<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("jsonrpc", &JsonRpcVersion)?;
        map.serialize_entry("id", &self.id)?;
        self.outcome.write(&mut map)?;
        map.end()
    }
}

pub struct NotificationMessage<N: LspNotification> {
    pub params: N::Params,
}

impl<N: LspNotification> NotificationMessage<N> {
    pub fn new(params: N::Params) -> Self {
        Self { params }
    }

    pub fn method(&self) -> &'static str {
        N::METHOD
    }
}

impl<N: LspNotification> Decode for NotificationMessage<N> {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        expect_kind(value, cx, EnvelopeKind::Notification)?;
        let mut obj = ObjectReader::new(value, cx)?;
        obj.literal("jsonrpc", JSONRPC_VERSION)?;
        obj.literal("method", N::METHOD)?;
        let params = obj.required("params")?;
        obj.finish()?;
        Ok(Self { params })
    }
}

impl<N: LspNotification> Serialize for NotificationMessage<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("jsonrpc", &JsonRpcVersion)?;
        map.serialize_entry("method", N::METHOD)?;
        write_params(&mut map, &self.params)?;
        map.end()
    }
}

// Derives would put bounds on the marker types, which are uninhabited.

impl<R: LspRequest> fmt::Debug for RequestMessage<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(R::REQUEST_TYPE)
            .field("id", &self.id)
            .field("params", &self.params)
            .finish()
    }
}

impl<R: LspRequest> Clone for RequestMessage<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            params: self.params.clone(),
        }
    }
}

impl<R: LspRequest> PartialEq for RequestMessage<R> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.params == other.params
    }
}

impl<R: LspRequest> fmt::Debug for ResponseMessage<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(R::RESPONSE_TYPE)
            .field("id", &self.id)
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl<R: LspRequest> Clone for ResponseMessage<R> {
    fn clone(&self) -> Self {
        Self::new(self.id.clone(), self.outcome.clone())
    }
}

impl<R: LspRequest> PartialEq for ResponseMessage<R> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.outcome == other.outcome
    }
}

impl<N: LspNotification> fmt::Debug for NotificationMessage<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(N::TYPE_NAME)
            .field("params", &self.params)
            .finish()
    }
}

impl<N: LspNotification> Clone for NotificationMessage<N> {
    fn clone(&self) -> Self {
        Self::new(self.params.clone())
    }
}

impl<N: LspNotification> PartialEq for NotificationMessage<N> {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode_value, DecodeOptions, NoParams, Null};
    use serde_json::json;

    lsp_request!(Ping, "test/ping", "Ping", NoParams => Null);
    lsp_request!(Echo, "test/echo", "Echo", String => String);
    lsp_notification!(Tick, "test/tick", "Tick", NoParams);

    fn decode<T: Decode>(value: Value) -> Result<T, DecodeError> {
        decode_value(&value, DecodeOptions::default())
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Ping::REQUEST_TYPE, "PingRequest");
        assert_eq!(Ping::RESPONSE_TYPE, "PingResponse");
        assert_eq!(Tick::TYPE_NAME, "TickNotification");
    }

    #[test]
    fn test_request_without_params() {
        let request: RequestMessage<Ping> =
            decode(json!({"jsonrpc": "2.0", "id": 1, "method": "test/ping"})).unwrap();
        assert_eq!(request.id, RequestId::Number(1));
        let with_null: RequestMessage<Ping> =
            decode(json!({"jsonrpc": "2.0", "id": 1, "method": "test/ping", "params": null}))
                .unwrap();
        assert_eq!(with_null, request);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"jsonrpc": "2.0", "id": 1, "method": "test/ping"})
        );
    }

    #[test]
    fn test_request_with_wrong_method() {
        let err = decode::<RequestMessage<Ping>>(json!({
            "jsonrpc": "2.0", "id": 1, "method": "test/echo", "params": "x"
        }))
        .unwrap_err();
        assert!(matches!(err, DecodeError::LiteralMismatch { expected: "test/ping", .. }));
    }

    #[test]
    fn test_request_requires_declared_params() {
        let err =
            decode::<RequestMessage<Echo>>(json!({"jsonrpc": "2.0", "id": 1, "method": "test/echo"}))
                .unwrap_err();
        assert!(matches!(err, DecodeError::MissingRequiredField { field: "params", .. }));
    }

    #[test]
    fn test_notification_with_id_is_mismatch() {
        let err = decode::<NotificationMessage<Tick>>(json!({
            "jsonrpc": "2.0", "id": 4, "method": "test/tick"
        }))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::EnvelopeMismatch {
                expected: EnvelopeKind::Notification,
                found: EnvelopeKind::Request,
            }
        );
    }

    #[test]
    fn test_response_result_and_error() {
        let ok: ResponseMessage<Echo> =
            decode(json!({"jsonrpc": "2.0", "id": 2, "result": "pong"})).unwrap();
        assert_eq!(ok.outcome.result(), Some(&"pong".to_string()));

        let failed: ResponseMessage<Echo> = decode(json!({
            "jsonrpc": "2.0", "id": null, "error": {"code": -32601, "message": "unknown"}
        }))
        .unwrap();
        assert!(failed.id.is_null());
        assert!(failed.outcome.is_error());
    }

    #[test]
    fn test_response_result_is_typed() {
        let err = decode::<ResponseMessage<Ping>>(json!({"jsonrpc": "2.0", "id": 2, "result": 1}))
            .unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { expected: "null", .. }));
    }
}
