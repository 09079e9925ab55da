use super::language::{DefinitionParams, DefinitionResult, Hover, HoverParams};
use super::window::{
    ConfigurationParams, MessageActionItem, ShowMessageRequestParams, WorkDoneProgressCreateParams,
};
use super::workspace_edit::{ApplyWorkspaceEditParams, ApplyWorkspaceEditResult};
use crate::decode::{LspAny, NoParams, Null, Nullable};

lsp_request!(
    /// Server asks the client to apply a workspace edit.
    ApplyWorkspaceEdit,
    "workspace/applyEdit",
    "ApplyWorkspaceEdit",
    ApplyWorkspaceEditParams => ApplyWorkspaceEditResult
);

lsp_request!(
    HoverRequest,
    "textDocument/hover",
    "Hover",
    HoverParams => Nullable<Hover>
);

lsp_request!(
    GotoDefinition,
    "textDocument/definition",
    "Definition",
    DefinitionParams => Nullable<DefinitionResult>
);

lsp_request!(
    /// Show a message with action buttons and wait for the user's choice.
    ShowMessageRequest,
    "window/showMessageRequest",
    "ShowMessage",
    ShowMessageRequestParams => Nullable<MessageActionItem>
);

lsp_request!(
    WorkDoneProgressCreate,
    "window/workDoneProgress/create",
    "WorkDoneProgressCreate",
    WorkDoneProgressCreateParams => Null
);

lsp_request!(
    /// Fetch configuration sections from the client. One result per item.
    WorkspaceConfiguration,
    "workspace/configuration",
    "Configuration",
    ConfigurationParams => Vec<LspAny>
);

lsp_request!(
    CodeLensRefresh,
    "workspace/codeLens/refresh",
    "CodeLensRefresh",
    NoParams => Null
);

lsp_request!(Shutdown, "shutdown", "Shutdown", NoParams => Null);
