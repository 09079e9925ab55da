//! Conversions between the bindings and `tower_lsp::lsp_types`.
//!
//! Lets a `tower-lsp` server hand decoded payloads to its handlers. Only
//! types whose shapes agree on both sides are converted.

use crate::protocol::{DiagnosticSeverity, Location, Position, Range, TextEdit};
use thiserror::Error;
use tower_lsp::lsp_types;

#[derive(Debug, Error)]
pub enum InteropError {
    #[error("Invalid document URI {uri}: {reason}")]
    InvalidUri { uri: String, reason: String },
}

impl From<Position> for lsp_types::Position {
    fn from(position: Position) -> Self {
        lsp_types::Position::new(position.line, position.character)
    }
}

impl From<lsp_types::Position> for Position {
    fn from(position: lsp_types::Position) -> Self {
        Position::new(position.line, position.character)
    }
}

impl From<Range> for lsp_types::Range {
    fn from(range: Range) -> Self {
        lsp_types::Range::new(range.start.into(), range.end.into())
    }
}

impl From<lsp_types::Range> for Range {
    fn from(range: lsp_types::Range) -> Self {
        Range::new(range.start.into(), range.end.into())
    }
}

impl TryFrom<Location> for lsp_types::Location {
    type Error = InteropError;

    fn try_from(location: Location) -> Result<Self, Self::Error> {
        let uri = lsp_types::Url::parse(&location.uri).map_err(|e| InteropError::InvalidUri {
            uri: location.uri.clone(),
            reason: e.to_string(),
        })?;
        Ok(lsp_types::Location::new(uri, location.range.into()))
    }
}

impl From<lsp_types::Location> for Location {
    fn from(location: lsp_types::Location) -> Self {
        Location {
            uri: location.uri.to_string(),
            range: location.range.into(),
        }
    }
}

impl From<TextEdit> for lsp_types::TextEdit {
    fn from(edit: TextEdit) -> Self {
        lsp_types::TextEdit::new(edit.range.into(), edit.new_text)
    }
}

impl From<DiagnosticSeverity> for lsp_types::DiagnosticSeverity {
    fn from(severity: DiagnosticSeverity) -> Self {
        match severity {
            DiagnosticSeverity::Error => lsp_types::DiagnosticSeverity::ERROR,
            DiagnosticSeverity::Warning => lsp_types::DiagnosticSeverity::WARNING,
            DiagnosticSeverity::Information => lsp_types::DiagnosticSeverity::INFORMATION,
            DiagnosticSeverity::Hint => lsp_types::DiagnosticSeverity::HINT,
        }
    }
}
