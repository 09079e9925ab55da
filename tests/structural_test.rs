mod common;

use common::decode_str;
use lsp_conformance::decode::{decode_bytes, DecodeError, DecodeOptions, Nullable};
use lsp_conformance::protocol::{
    DefinitionResult, Diagnostic, DiagnosticSeverity, DocumentChange, Hover, HoverContents,
    LanguageKind, MarkedString, MarkupKind, OffsetRange, Position, PublishDiagnosticsParams,
    Range, TextDocumentContentChangeEvent, TextDocumentEdit, TextDocumentEditItem, WorkspaceEdit,
};
use serde_json::json;

#[test]
fn test_offsets_accepted_only_by_offset_range() {
    let payload = r#"{"start": -1, "end": -1}"#;
    let offsets: OffsetRange = decode_str(payload).unwrap();
    assert_eq!(offsets, OffsetRange { start: -1, end: -1 });

    let err = decode_str::<Range>(payload).unwrap_err();
    assert!(matches!(err, DecodeError::TypeMismatch { .. }), "{err:?}");
}

#[test]
fn test_missing_required_field_names_the_field() {
    let err = decode_str::<Range>(r#"{"start": {"line": 0, "character": 0}}"#).unwrap_err();
    assert!(matches!(err, DecodeError::MissingRequiredField { field: "end", .. }));
}

#[test]
fn test_nested_path_in_error() {
    let err = decode_str::<Range>(
        r#"{"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": "1"}}"#,
    )
    .unwrap_err();
    match err {
        DecodeError::TypeMismatch { path, .. } => assert_eq!(path, "$.end.character"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_unknown_fields_rejected_unless_permissive() {
    let payload = br#"{"line": 1, "character": 1, "extra": true}"#;
    let err = decode_bytes::<Position>(payload, DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, DecodeError::UnknownField { .. }));

    let position: Position = decode_bytes(payload, DecodeOptions::permissive()).unwrap();
    assert_eq!(position, Position::new(1, 1));
}

#[test]
fn test_optional_field_rejects_explicit_null() {
    let err = decode_str::<Diagnostic>(
        r#"{"range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 0}},
            "message": "m", "severity": null}"#,
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::TypeMismatch { .. }), "{err:?}");
}

#[test]
fn test_diagnostic_round_trips_through_encode() {
    let mut diagnostic = Diagnostic::new(
        Range::new(Position::new(2, 0), Position::new(2, 8)),
        "unused variable",
    );
    diagnostic.severity = Some(DiagnosticSeverity::Warning);

    let encoded = serde_json::to_value(&diagnostic).unwrap();
    assert_eq!(encoded["severity"], json!(2));
    assert!(encoded.get("tags").is_none());

    let decoded: Diagnostic = decode_str(&encoded.to_string()).unwrap();
    assert_eq!(decoded, diagnostic);
}

#[test]
fn test_publish_diagnostics_version_is_optional() {
    let params: PublishDiagnosticsParams =
        decode_str(r#"{"uri": "file:///a.py", "diagnostics": []}"#).unwrap();
    assert!(params.version.is_none());
    assert!(params.diagnostics.is_empty());
}

#[test]
fn test_closed_enums_reject_unknown_values() {
    assert_eq!(decode_str::<DiagnosticSeverity>("1").unwrap(), DiagnosticSeverity::Error);
    assert!(matches!(
        decode_str::<DiagnosticSeverity>("5").unwrap_err(),
        DecodeError::InvalidEnumValue { .. }
    ));
    assert_eq!(decode_str::<MarkupKind>(r#""markdown""#).unwrap(), MarkupKind::Markdown);
    assert!(decode_str::<MarkupKind>(r#""html""#).is_err());
}

#[test]
fn test_open_enum_keeps_custom_values() {
    assert_eq!(decode_str::<LanguageKind>(r#""rust""#).unwrap(), LanguageKind::Rust);
    let custom = decode_str::<LanguageKind>(r#""zig""#).unwrap();
    assert_eq!(custom, LanguageKind::Custom("zig".to_string()));
    assert_eq!(serde_json::to_value(&custom).unwrap(), json!("zig"));
}

#[test]
fn test_permissive_options_reach_through_unions() {
    let payload = br#"{"contents": {"kind": "markdown", "value": "x", "extra": 1}}"#;
    let err = decode_bytes::<Hover>(payload, DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, DecodeError::UnionNoMatch { union: "HoverContents", .. }));

    let hover: Hover = decode_bytes(payload, DecodeOptions::permissive()).unwrap();
    match hover.contents {
        HoverContents::Markup(markup) => {
            assert_eq!(markup.kind, MarkupKind::Markdown);
            assert_eq!(markup.value, "x");
        }
        other => panic!("unexpected contents: {other:?}"),
    }
}

#[test]
fn test_hover_contents_union_alternatives() {
    let markup: Hover = decode_str(r#"{"contents": {"kind": "plaintext", "value": "x"}}"#).unwrap();
    assert!(matches!(markup.contents, HoverContents::Markup(_)));

    let scalar: Hover = decode_str(r#"{"contents": "x"}"#).unwrap();
    assert_eq!(
        scalar.contents,
        HoverContents::Scalar(MarkedString::String("x".to_string()))
    );

    let array: Hover =
        decode_str(r#"{"contents": [{"language": "rust", "value": "fn f()"}, "doc"]}"#).unwrap();
    match array.contents {
        HoverContents::Array(items) => assert_eq!(items.len(), 2),
        other => panic!("expected array, got {other:?}"),
    }

    let err = decode_str::<Hover>(r#"{"contents": 7}"#).unwrap_err();
    assert!(matches!(err, DecodeError::UnionNoMatch { .. }));
}

#[test]
fn test_definition_result_links() {
    let result: DefinitionResult = decode_str(
        r#"[{"targetUri": "file:///b.rs",
             "targetRange": {"start": {"line": 1, "character": 0}, "end": {"line": 9, "character": 1}},
             "targetSelectionRange": {"start": {"line": 1, "character": 3}, "end": {"line": 1, "character": 8}}}]"#,
    )
    .unwrap();
    assert!(matches!(result, DefinitionResult::Links(ref links) if links.len() == 1));
}

#[test]
fn test_content_change_event_partial_vs_whole() {
    let whole: TextDocumentContentChangeEvent = decode_str(r#"{"text": "all"}"#).unwrap();
    assert!(matches!(whole, TextDocumentContentChangeEvent::WholeDocument(_)));

    let partial: TextDocumentContentChangeEvent = decode_str(
        r#"{"range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 3}},
            "text": "abc"}"#,
    )
    .unwrap();
    assert!(matches!(partial, TextDocumentContentChangeEvent::Partial(_)));
}

#[test]
fn test_document_change_discriminated_by_kind() {
    let rename: DocumentChange =
        decode_str(r#"{"kind": "rename", "oldUri": "file:///a", "newUri": "file:///b"}"#).unwrap();
    assert!(matches!(rename, DocumentChange::RenameFile(_)));

    let delete: DocumentChange =
        decode_str(r#"{"kind": "delete", "uri": "file:///a", "options": {"recursive": true}}"#)
            .unwrap();
    assert!(matches!(delete, DocumentChange::DeleteFile(_)));

    // A create payload does not fit a rename.
    assert!(decode_str::<DocumentChange>(r#"{"kind": "rename", "uri": "file:///a"}"#).is_err());
}

#[test]
fn test_text_document_edit_with_annotated_edits() {
    let edit: TextDocumentEdit = decode_str(
        r#"{"textDocument": {"uri": "file:///a", "version": 3},
            "edits": [
              {"range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 0}}, "newText": "a"},
              {"range": {"start": {"line": 1, "character": 0}, "end": {"line": 1, "character": 0}}, "newText": "b", "annotationId": "rename-1"}
            ]}"#,
    )
    .unwrap();
    assert_eq!(edit.text_document.version, Nullable::Value(3));
    assert!(matches!(edit.edits[0], TextDocumentEditItem::TextEdit(_)));
    assert!(matches!(edit.edits[1], TextDocumentEditItem::Annotated(_)));
}

#[test]
fn test_workspace_edit_changes_map() {
    let edit: WorkspaceEdit = decode_str(
        r#"{"changes": {"file:///b": [], "file:///a": []},
            "changeAnnotations": {"x": {"label": "Rename", "needsConfirmation": true}}}"#,
    )
    .unwrap();
    let changes = edit.changes.as_ref().unwrap();
    assert_eq!(
        changes.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["file:///a", "file:///b"]
    );
    assert!(edit.document_changes.is_none());
}
