use super::basic::{
    Range, TextDocumentIdentifier, TextDocumentItem, VersionedTextDocumentIdentifier,
};
use crate::decode::{Decode, DecodeContext, DecodeError, UnionDecoder};
use serde::Serialize;
use serde_json::Value;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DidOpenTextDocumentParams {
        pub text_document: TextDocumentItem = required("textDocument"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TextDocumentContentChangePartial {
        pub range: Range = required("range"),
        /// Deprecated in favour of `range`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub range_length: Option<u32> = optional("rangeLength"),
        pub text: String = required("text"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct TextDocumentContentChangeWholeDocument {
        pub text: String = required("text"),
    }
}

/// Either an incremental change or a full replacement of the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextDocumentContentChangeEvent {
    Partial(TextDocumentContentChangePartial),
    WholeDocument(TextDocumentContentChangeWholeDocument),
}

impl Decode for TextDocumentContentChangeEvent {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        UnionDecoder::new("TextDocumentContentChangeEvent", value, cx)
            .alternative("TextDocumentContentChangePartial", Self::Partial)
            .alternative("TextDocumentContentChangeWholeDocument", Self::WholeDocument)
            .finish()
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DidChangeTextDocumentParams {
        pub text_document: VersionedTextDocumentIdentifier = required("textDocument"),
        pub content_changes: Vec<TextDocumentContentChangeEvent> = required("contentChanges"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DidCloseTextDocumentParams {
        pub text_document: TextDocumentIdentifier = required("textDocument"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DidSaveTextDocumentParams {
        pub text_document: TextDocumentIdentifier = required("textDocument"),
        /// Present when the client includes content on save.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub text: Option<String> = optional("text"),
    }
}
