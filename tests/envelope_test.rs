mod common;

use common::decode_str;
use lsp_conformance::decode::{DecodeError, DecodeOptions, Nullable};
use lsp_conformance::envelope::{
    EnvelopeKind, Message, NotificationMessage, RequestId, RequestMessage, ResponseError,
    ResponseMessage, ResponseOutcome,
};
use lsp_conformance::protocol::{
    Cancel, HoverRequest, Initialized, Position, Shutdown, TextDocumentIdentifier,
};
use lsp_conformance::registry::{Incoming, MethodRegistry};
use serde_json::json;

#[test]
fn test_classify_all_three_kinds() {
    let request: Message = decode_str(r#"{"jsonrpc":"2.0","id":1,"method":"shutdown"}"#).unwrap();
    let notification: Message = decode_str(r#"{"jsonrpc":"2.0","method":"exit"}"#).unwrap();
    let response: Message = decode_str(r#"{"jsonrpc":"2.0","id":1,"result":null}"#).unwrap();

    assert_eq!(request.kind(), EnvelopeKind::Request);
    assert_eq!(notification.kind(), EnvelopeKind::Notification);
    assert_eq!(response.kind(), EnvelopeKind::Response);
    assert_eq!(request.method(), Some("shutdown"));
    assert_eq!(response.method(), None);
}

#[test]
fn test_neither_id_nor_method_is_ambiguous() {
    let err = decode_str::<Message>(r#"{"jsonrpc":"2.0"}"#).unwrap_err();
    assert!(matches!(err, DecodeError::EnvelopeAmbiguous { .. }));
}

#[test]
fn test_response_with_result_and_error_is_ambiguous() {
    let err = decode_str::<ResponseMessage<Shutdown>>(
        r#"{"jsonrpc":"2.0","id":1,"result":null,"error":{"code":-32603,"message":"x"}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::EnvelopeAmbiguous { .. }));
}

#[test]
fn test_response_with_neither_result_nor_error_is_ambiguous() {
    let err = decode_str::<ResponseMessage<Shutdown>>(r#"{"jsonrpc":"2.0","id":1}"#).unwrap_err();
    assert!(matches!(err, DecodeError::EnvelopeAmbiguous { .. }));
}

#[test]
fn test_outcome_ambiguity_reported_before_version_and_id() {
    let payloads = [
        r#"{"id":1,"result":null,"error":{"code":1,"message":"x"}}"#,
        r#"{"jsonrpc":"2.0","id":true,"result":null,"error":{"code":1,"message":"x"}}"#,
        r#"{"jsonrpc":"1.0","id":{},"result":null,"error":{"code":1,"message":"x"}}"#,
        r#"{"id":true}"#,
    ];
    for payload in payloads {
        let typed = decode_str::<ResponseMessage<Shutdown>>(payload).unwrap_err();
        assert!(matches!(typed, DecodeError::EnvelopeAmbiguous { .. }), "{payload}: {typed}");
        let untyped = decode_str::<Message>(payload).unwrap_err();
        assert!(matches!(untyped, DecodeError::EnvelopeAmbiguous { .. }), "{payload}: {untyped}");
    }
}

#[test]
fn test_request_where_notification_expected() {
    let err = decode_str::<NotificationMessage<Initialized>>(
        r#"{"jsonrpc":"2.0","id":4,"method":"initialized","params":{}}"#,
    )
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
fn test_wrong_jsonrpc_version() {
    let err = decode_str::<RequestMessage<Shutdown>>(r#"{"jsonrpc":"1.0","id":1,"method":"shutdown"}"#)
        .unwrap_err();
    assert!(matches!(err, DecodeError::LiteralMismatch { .. }));
}

#[test]
fn test_typed_hover_request_fields() {
    let request: RequestMessage<HoverRequest> = decode_str(
        r#"{"jsonrpc":"2.0","id":"abc","method":"textDocument/hover",
            "params":{"textDocument":{"uri":"file:///x.rs"},"position":{"line":3,"character":7}}}"#,
    )
    .unwrap();
    assert_eq!(request.id, RequestId::from("abc"));
    assert_eq!(
        request.params.text_document,
        TextDocumentIdentifier {
            uri: "file:///x.rs".to_string()
        }
    );
    assert_eq!(request.params.position, Position::new(3, 7));
}

#[test]
fn test_error_response_with_null_id() {
    let response: ResponseMessage<HoverRequest> = decode_str(
        r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32700,"message":"Parse error"}}"#,
    )
    .unwrap();
    assert_eq!(response.id, Nullable::Null);
    assert!(response.outcome.is_error());
    match &response.outcome {
        ResponseOutcome::Error(error) => {
            assert_eq!(error.code, -32700);
            assert_eq!(error.error_code(), tower_lsp::jsonrpc::ErrorCode::ParseError);
        }
        other => panic!("expected error outcome, got {:?}", other),
    }
}

#[test]
fn test_response_error_integer_bounds() {
    assert!(decode_str::<ResponseError>(r#"{"code":-2147483648,"message":""}"#).is_ok());
    assert!(decode_str::<ResponseError>(r#"{"code":2147483647,"message":""}"#).is_ok());
    for code in ["-2147483649", "2147483648"] {
        let err = decode_str::<ResponseError>(&format!(r#"{{"code":{},"message":""}}"#, code))
            .unwrap_err();
        assert!(
            matches!(err, DecodeError::FieldOutOfRange { .. }),
            "{code}: {err:?}"
        );
    }
}

#[test]
fn test_encode_request_omits_absent_params() {
    let request = RequestMessage::<Shutdown>::new(1, lsp_conformance::decode::NoParams);
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"jsonrpc": "2.0", "id": 1, "method": "shutdown"})
    );
}

#[test]
fn test_decode_incoming_routes_by_method() {
    let methods = MethodRegistry::protocol();
    let incoming = methods
        .decode_incoming(
            br#"{"jsonrpc":"2.0","method":"$/cancelRequest","params":{"id":12}}"#,
            DecodeOptions::default(),
        )
        .unwrap();
    match incoming {
        Incoming::Notification { method, message } => {
            assert_eq!(method, "$/cancelRequest");
            let cancel = message
                .downcast_ref::<NotificationMessage<Cancel>>()
                .unwrap();
            assert_eq!(cancel.params.id, RequestId::Number(12));
        }
        other => panic!("expected notification, got {:?}", other),
    }

    let err = methods
        .decode_incoming(
            br#"{"jsonrpc":"2.0","id":1,"method":"textDocument/unknown"}"#,
            DecodeOptions::default(),
        )
        .unwrap_err();
    assert!(matches!(err, DecodeError::UnknownMethod { .. }));
}
