//! Positions, ranges, locations, document identifiers and text edits.

use super::enums::LanguageKind;
use crate::decode::Nullable;
use serde::Serialize;

pub type DocumentUri = String;
pub type Uri = String;

record! {
    /// Zero-based line and UTF-16 character offset.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct Position {
        pub line: u32 = required("line"),
        pub character: u32 = required("character"),
    }
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

record! {
    /// Start and end positions. `end` is exclusive; ordering is not checked.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct Range {
        pub start: Position = required("start"),
        pub end: Position = required("end"),
    }
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

record! {
    /// Signed integer interval, e.g. a byte span. Any pair of integers is
    /// structurally valid, including negative and inverted bounds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct OffsetRange {
        pub start: i32 = required("start"),
        pub end: i32 = required("end"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    pub struct Location {
        pub uri: DocumentUri = required("uri"),
        pub range: Range = required("range"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct LocationLink {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub origin_selection_range: Option<Range> = optional("originSelectionRange"),
        pub target_uri: DocumentUri = required("targetUri"),
        pub target_range: Range = required("targetRange"),
        pub target_selection_range: Range = required("targetSelectionRange"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    pub struct TextDocumentIdentifier {
        pub uri: DocumentUri = required("uri"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    pub struct VersionedTextDocumentIdentifier {
        pub uri: DocumentUri = required("uri"),
        pub version: i32 = required("version"),
    }
}

record! {
    /// `version` must be present but is `null` when the client does not track
    /// versions for the document.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    pub struct OptionalVersionedTextDocumentIdentifier {
        pub uri: DocumentUri = required("uri"),
        pub version: Nullable<i32> = nullable("version"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TextDocumentItem {
        pub uri: DocumentUri = required("uri"),
        pub language_id: LanguageKind = required("languageId"),
        pub version: i32 = required("version"),
        pub text: String = required("text"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TextEdit {
        pub range: Range = required("range"),
        pub new_text: String = required("newText"),
    }
}

record! {
    /// A text edit tied to a change annotation by id.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AnnotatedTextEdit {
        pub range: Range = required("range"),
        pub new_text: String = required("newText"),
        pub annotation_id: String = required("annotationId"),
    }
}
