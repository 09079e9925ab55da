//! Generated LSP bindings.
//!
//! Records decode through [`ObjectReader`](crate::decode::ObjectReader) with
//! one accessor per field presence mode and encode with serde. Properties
//! inherited from base structures and mixins are flattened into each record.

pub mod basic;
pub mod document_sync;
pub mod enums;
pub mod language;
pub mod notification;
pub mod request;
pub mod window;
pub mod workspace_edit;

pub use basic::*;
pub use document_sync::*;
pub use enums::*;
pub use language::*;
pub use notification::*;
pub use request::*;
pub use window::*;
pub use workspace_edit::*;

use crate::registry::{MethodRegistry, TypeRegistry};

macro_rules! register_named {
    ($registry:expr; $($ty:ident),+ $(,)?) => {
        $($registry.register::<$ty>(stringify!($ty));)+
    };
}

/// Registers every structure, union, enumeration and message type.
pub fn register_types(registry: &mut TypeRegistry) {
    register_named!(registry;
        Position,
        Range,
        OffsetRange,
        Location,
        LocationLink,
        TextDocumentIdentifier,
        VersionedTextDocumentIdentifier,
        OptionalVersionedTextDocumentIdentifier,
        TextDocumentItem,
        TextEdit,
        AnnotatedTextEdit,
        ChangeAnnotation,
        CreateFileOptions,
        CreateFile,
        RenameFileOptions,
        RenameFile,
        DeleteFileOptions,
        DeleteFile,
        TextDocumentEdit,
        DocumentChange,
        WorkspaceEdit,
        WorkspaceEditMetadata,
        ApplyWorkspaceEditParams,
        ApplyWorkspaceEditResult,
        DidOpenTextDocumentParams,
        TextDocumentContentChangePartial,
        TextDocumentContentChangeWholeDocument,
        TextDocumentContentChangeEvent,
        DidChangeTextDocumentParams,
        DidCloseTextDocumentParams,
        DidSaveTextDocumentParams,
        HoverParams,
        DefinitionParams,
        MarkupContent,
        MarkedStringWithLanguage,
        MarkedString,
        HoverContents,
        Hover,
        Definition,
        DefinitionResult,
        CodeDescription,
        DiagnosticRelatedInformation,
        Diagnostic,
        PublishDiagnosticsParams,
        ShowMessageParams,
        LogMessageParams,
        MessageActionItem,
        ShowMessageRequestParams,
        WorkDoneProgressCreateParams,
        ProgressParams,
        CancelParams,
        SetTraceParams,
        ConfigurationItem,
        ConfigurationParams,
        InitializedParams,
        WorkspaceFolder,
        WorkspaceFoldersInitializeParams,
        DiagnosticSeverity,
        DiagnosticTag,
        MessageType,
        MarkupKind,
        TraceValue,
        LanguageKind,
    );

    registry.register::<crate::envelope::ResponseError>("ResponseError");
    registry.register::<crate::envelope::Message>("Message");

    registry.register_request::<ApplyWorkspaceEdit>();
    registry.register_request::<HoverRequest>();
    registry.register_request::<GotoDefinition>();
    registry.register_request::<ShowMessageRequest>();
    registry.register_request::<WorkDoneProgressCreate>();
    registry.register_request::<WorkspaceConfiguration>();
    registry.register_request::<CodeLensRefresh>();
    registry.register_request::<Shutdown>();

    registry.register_notification::<Initialized>();
    registry.register_notification::<Exit>();
    registry.register_notification::<DidOpenTextDocument>();
    registry.register_notification::<DidChangeTextDocument>();
    registry.register_notification::<DidCloseTextDocument>();
    registry.register_notification::<DidSaveTextDocument>();
    registry.register_notification::<PublishDiagnostics>();
    registry.register_notification::<ShowMessage>();
    registry.register_notification::<LogMessage>();
    registry.register_notification::<Cancel>();
    registry.register_notification::<Progress>();
    registry.register_notification::<SetTrace>();
}

/// Registers every request and notification by method.
pub fn register_methods(registry: &mut MethodRegistry) {
    registry.register_request::<ApplyWorkspaceEdit>();
    registry.register_request::<HoverRequest>();
    registry.register_request::<GotoDefinition>();
    registry.register_request::<ShowMessageRequest>();
    registry.register_request::<WorkDoneProgressCreate>();
    registry.register_request::<WorkspaceConfiguration>();
    registry.register_request::<CodeLensRefresh>();
    registry.register_request::<Shutdown>();

    registry.register_notification::<Initialized>();
    registry.register_notification::<Exit>();
    registry.register_notification::<DidOpenTextDocument>();
    registry.register_notification::<DidChangeTextDocument>();
    registry.register_notification::<DidCloseTextDocument>();
    registry.register_notification::<DidSaveTextDocument>();
    registry.register_notification::<PublishDiagnostics>();
    registry.register_notification::<ShowMessage>();
    registry.register_notification::<LogMessage>();
    registry.register_notification::<Cancel>();
    registry.register_notification::<Progress>();
    registry.register_notification::<SetTrace>();
}
