//! Window, progress, tracing and general lifecycle payloads.

use super::enums::{MessageType, TraceValue};
use crate::decode::{Decode, DecodeContext, DecodeError, LspAny, ObjectReader, Presence};
use crate::envelope::{NumberOrString, ProgressToken};
use serde::Serialize;
use serde_json::Value;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct ShowMessageParams {
        #[serde(rename = "type")]
        pub typ: MessageType = required("type"),
        pub message: String = required("message"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct LogMessageParams {
        #[serde(rename = "type")]
        pub typ: MessageType = required("type"),
        pub message: String = required("message"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct MessageActionItem {
        pub title: String = required("title"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct ShowMessageRequestParams {
        #[serde(rename = "type")]
        pub typ: MessageType = required("type"),
        pub message: String = required("message"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub actions: Option<Vec<MessageActionItem>> = optional("actions"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct WorkDoneProgressCreateParams {
        pub token: ProgressToken = required("token"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ProgressParams {
        pub token: ProgressToken = required("token"),
        pub value: LspAny = required("value"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct CancelParams {
        pub id: NumberOrString = required("id"),
    }
}

record! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct SetTraceParams {
        pub value: TraceValue = required("value"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ConfigurationItem {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub scope_uri: Option<String> = optional("scopeUri"),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub section: Option<String> = optional("section"),
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct ConfigurationParams {
        pub items: Vec<ConfigurationItem> = required("items"),
    }
}

/// Params of `initialized`: always an empty object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InitializedParams {}

impl Decode for InitializedParams {
    fn decode(value: &Value, cx: &DecodeContext) -> Result<Self, DecodeError> {
        ObjectReader::new(value, cx)?.finish()?;
        Ok(Self {})
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct WorkspaceFolder {
        pub uri: String = required("uri"),
        pub name: String = required("name"),
    }
}

record! {
    /// `workspaceFolders` of the initialize request. Absent means the client
    /// does not support folders, `null` that none are open.
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WorkspaceFoldersInitializeParams {
        #[serde(skip_serializing_if = "Presence::is_absent")]
        pub workspace_folders: Presence<Vec<WorkspaceFolder>> = optional_nullable("workspaceFolders"),
    }
}
