use super::document_sync::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams,
};
use super::language::PublishDiagnosticsParams;
use super::window::{
    CancelParams, InitializedParams, LogMessageParams, ProgressParams, SetTraceParams,
    ShowMessageParams,
};
use crate::decode::NoParams;

lsp_notification!(Initialized, "initialized", "Initialized", InitializedParams);
lsp_notification!(Exit, "exit", "Exit", NoParams);

lsp_notification!(
    DidOpenTextDocument,
    "textDocument/didOpen",
    "DidOpenTextDocument",
    DidOpenTextDocumentParams
);
lsp_notification!(
    DidChangeTextDocument,
    "textDocument/didChange",
    "DidChangeTextDocument",
    DidChangeTextDocumentParams
);
lsp_notification!(
    DidCloseTextDocument,
    "textDocument/didClose",
    "DidCloseTextDocument",
    DidCloseTextDocumentParams
);
lsp_notification!(
    DidSaveTextDocument,
    "textDocument/didSave",
    "DidSaveTextDocument",
    DidSaveTextDocumentParams
);
lsp_notification!(
    PublishDiagnostics,
    "textDocument/publishDiagnostics",
    "PublishDiagnostics",
    PublishDiagnosticsParams
);

lsp_notification!(ShowMessage, "window/showMessage", "ShowMessage", ShowMessageParams);
lsp_notification!(LogMessage, "window/logMessage", "LogMessage", LogMessageParams);

lsp_notification!(
    /// `$/cancelRequest`. Only the id of the request to cancel is carried.
    Cancel,
    "$/cancelRequest",
    "Cancel",
    CancelParams
);
lsp_notification!(Progress, "$/progress", "Progress", ProgressParams);
lsp_notification!(SetTrace, "$/setTrace", "SetTrace", SetTraceParams);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode_value, DecodeError, DecodeOptions};
    use crate::envelope::{LspNotification, NotificationMessage};
    use serde_json::json;

    #[test]
    fn test_exit_accepts_absent_or_null_params() {
        for value in [
            json!({"jsonrpc": "2.0", "method": "exit"}),
            json!({"jsonrpc": "2.0", "method": "exit", "params": null}),
        ] {
            let message: NotificationMessage<Exit> =
                decode_value(&value, DecodeOptions::default()).unwrap();
            assert_eq!(message.method(), "exit");
        }
    }

    #[test]
    fn test_cancel_type_name() {
        assert_eq!(Cancel::TYPE_NAME, "CancelNotification");
        assert_eq!(Cancel::METHOD, "$/cancelRequest");
    }

    #[test]
    fn test_did_open_wrong_method() {
        let err = decode_value::<NotificationMessage<DidOpenTextDocument>>(
            &json!({"jsonrpc": "2.0", "method": "textDocument/didClose", "params": {}}),
            DecodeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DecodeError::LiteralMismatch { .. }));
    }

    #[test]
    fn test_set_trace_round_trip() {
        let value = json!({"jsonrpc": "2.0", "method": "$/setTrace", "params": {"value": "off"}});
        let message: NotificationMessage<SetTrace> =
            decode_value(&value, DecodeOptions::default()).unwrap();
        assert_eq!(serde_json::to_value(&message).unwrap(), value);
    }
}
