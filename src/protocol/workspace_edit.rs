//! Workspace edits and resource operations.

use super::basic::{AnnotatedTextEdit, DocumentUri, OptionalVersionedTextDocumentIdentifier, TextEdit};
use crate::decode::object::marker;
use crate::decode::{Decode, DecodeContext, DecodeError, UnionDecoder};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub type ChangeAnnotationIdentifier = String;

string_literal!(CreateKind = "create");
string_literal!(RenameKind = "rename");
string_literal!(DeleteKind = "delete");

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ChangeAnnotation {
        pub label: String = required("label"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub needs_confirmation: Option<bool> = optional("needsConfirmation"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String> = optional("description"),
    }
}

record! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateFileOptions {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub overwrite: Option<bool> = optional("overwrite"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ignore_if_exists: Option<bool> = optional("ignoreIfExists"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateFile {
        pub kind: CreateKind = required("kind"),
        pub uri: DocumentUri = required("uri"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub options: Option<CreateFileOptions> = optional("options"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub annotation_id: Option<ChangeAnnotationIdentifier> = optional("annotationId"),
    }
}

record! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RenameFileOptions {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub overwrite: Option<bool> = optional("overwrite"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ignore_if_exists: Option<bool> = optional("ignoreIfExists"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RenameFile {
        pub kind: RenameKind = required("kind"),
        pub old_uri: DocumentUri = required("oldUri"),
        pub new_uri: DocumentUri = required("newUri"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub options: Option<RenameFileOptions> = optional("options"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub annotation_id: Option<ChangeAnnotationIdentifier> = optional("annotationId"),
    }
}

record! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DeleteFileOptions {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub recursive: Option<bool> = optional("recursive"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ignore_if_not_exists: Option<bool> = optional("ignoreIfNotExists"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DeleteFile {
        pub kind: DeleteKind = required("kind"),
        pub uri: DocumentUri = required("uri"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub options: Option<DeleteFileOptions> = optional("options"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub annotation_id: Option<ChangeAnnotationIdentifier> = optional("annotationId"),
    }
}

/// `TextEdit | AnnotatedTextEdit`, told apart by `annotationId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextDocumentEditItem {
    TextEdit(TextEdit),
    Annotated(AnnotatedTextEdit),
}

impl Decode for TextDocumentEditItem {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        UnionDecoder::new("TextEdit | AnnotatedTextEdit", value, cx)
            .alternative("TextEdit", Self::TextEdit)
            .alternative("AnnotatedTextEdit", Self::Annotated)
            .finish()
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TextDocumentEdit {
        pub text_document: OptionalVersionedTextDocumentIdentifier = required("textDocument"),
        pub edits: Vec<TextDocumentEditItem> = required("edits"),
    }
}

/// Entry of `WorkspaceEdit.documentChanges`, discriminated by `kind`.
/// Entries without a `kind` are text document edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DocumentChange {
    TextDocumentEdit(TextDocumentEdit),
    CreateFile(CreateFile),
    RenameFile(RenameFile),
    DeleteFile(DeleteFile),
}

impl Decode for DocumentChange {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        if value.get("kind").is_none() {
            return TextDocumentEdit::decode(value, cx).map(Self::TextDocumentEdit);
        }
        match marker(value, "kind") {
            Some(CreateKind::VALUE) => CreateFile::decode(value, cx).map(Self::CreateFile),
            Some(RenameKind::VALUE) => RenameFile::decode(value, cx).map(Self::RenameFile),
            Some(DeleteKind::VALUE) => DeleteFile::decode(value, cx).map(Self::DeleteFile),
            _ => Err(DecodeError::UnionNoMatch {
                path: cx.path().to_string(),
                union: "DocumentChange",
            }),
        }
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WorkspaceEdit {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub changes: Option<BTreeMap<DocumentUri, Vec<TextEdit>>> = optional("changes"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub document_changes: Option<Vec<DocumentChange>> = optional("documentChanges"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub change_annotations: Option<BTreeMap<ChangeAnnotationIdentifier, ChangeAnnotation>> = optional("changeAnnotations"),
    }
}

record! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WorkspaceEditMetadata {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_refactoring: Option<bool> = optional("isRefactoring"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct ApplyWorkspaceEditParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub label: Option<String> = optional("label"),
        pub edit: WorkspaceEdit = required("edit"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub metadata: Option<WorkspaceEditMetadata> = optional("metadata"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ApplyWorkspaceEditResult {
        pub applied: bool = required("applied"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub failure_reason: Option<String> = optional("failureReason"),
        /// Index into `documentChanges` of the first change that failed.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub failed_change: Option<u32> = optional("failedChange"),
    }
}
