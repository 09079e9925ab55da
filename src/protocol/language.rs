//! Hover, go-to-definition and diagnostics.

use super::basic::{DocumentUri, Location, LocationLink, Position, Range, TextDocumentIdentifier, Uri};
use super::enums::{DiagnosticSeverity, DiagnosticTag, MarkupKind};
use crate::decode::{Decode, DecodeContext, DecodeError, LspAny, UnionDecoder};
use crate::envelope::{NumberOrString, ProgressToken};
use serde::Serialize;
use serde_json::Value;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct HoverParams {
        pub text_document: TextDocumentIdentifier = required("textDocument"),
        pub position: Position = required("position"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub work_done_token: Option<ProgressToken> = optional("workDoneToken"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DefinitionParams {
        pub text_document: TextDocumentIdentifier = required("textDocument"),
        pub position: Position = required("position"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub work_done_token: Option<ProgressToken> = optional("workDoneToken"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub partial_result_token: Option<ProgressToken> = optional("partialResultToken"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct MarkupContent {
        pub kind: MarkupKind = required("kind"),
        pub value: String = required("value"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct MarkedStringWithLanguage {
        pub language: String = required("language"),
        pub value: String = required("value"),
    }
}

/// Deprecated hover content: markdown text or a code block in a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MarkedString {
    String(String),
    LanguageString(MarkedStringWithLanguage),
}

impl Decode for MarkedString {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        UnionDecoder::new("MarkedString", value, cx)
            .alternative("string", Self::String)
            .alternative("MarkedStringWithLanguage", Self::LanguageString)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HoverContents {
    Markup(MarkupContent),
    Scalar(MarkedString),
    Array(Vec<MarkedString>),
}

impl Decode for HoverContents {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        UnionDecoder::new("HoverContents", value, cx)
            .alternative("MarkupContent", Self::Markup)
            .alternative("MarkedString", Self::Scalar)
            .alternative("MarkedString[]", Self::Array)
            .finish()
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct Hover {
        pub contents: HoverContents = required("contents"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub range: Option<Range> = optional("range"),
    }
}

/// `Location | Location[]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Definition {
    Scalar(Location),
    Array(Vec<Location>),
}

impl Decode for Definition {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        UnionDecoder::new("Definition", value, cx)
            .alternative("Location", Self::Scalar)
            .alternative("Location[]", Self::Array)
            .finish()
    }
}

/// Non-null result of `textDocument/definition`: `Definition | DefinitionLink[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DefinitionResult {
    Definition(Definition),
    Links(Vec<LocationLink>),
}

impl Decode for DefinitionResult {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        UnionDecoder::new("DefinitionResult", value, cx)
            .alternative("Definition", Self::Definition)
            .alternative("DefinitionLink[]", Self::Links)
            .finish()
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct CodeDescription {
        pub href: Uri = required("href"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct DiagnosticRelatedInformation {
        pub location: Location = required("location"),
        pub message: String = required("message"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Diagnostic {
        pub range: Range = required("range"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub severity: Option<DiagnosticSeverity> = optional("severity"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub code: Option<NumberOrString> = optional("code"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub code_description: Option<CodeDescription> = optional("codeDescription"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub source: Option<String> = optional("source"),
        pub message: String = required("message"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tags: Option<Vec<DiagnosticTag>> = optional("tags"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub related_information: Option<Vec<DiagnosticRelatedInformation>> = optional("relatedInformation"),
        /// Preserved between `publishDiagnostics` and `codeAction`. May be `null`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub data: Option<LspAny> = optional("data"),
    }
}

impl Diagnostic {
    pub fn new(range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: None,
            code: None,
            code_description: None,
            source: None,
            message: message.into(),
            tags: None,
            related_information: None,
            data: None,
        }
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct PublishDiagnosticsParams {
        pub uri: DocumentUri = required("uri"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub version: Option<i32> = optional("version"),
        pub diagnostics: Vec<Diagnostic> = required("diagnostics"),
    }
}
