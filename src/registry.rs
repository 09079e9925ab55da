//! Name-keyed dispatch tables.
//!
//! [`TypeRegistry`] maps a fixture type name to a decoder, [`MethodRegistry`]
//! maps a JSON-RPC method to the typed message for that method. Both are
//! filled once at startup and then shared read-only behind an `Arc`.

use crate::decode::{Decode, DecodeContext, DecodeError, DecodeOptions};
use crate::envelope::{
    EnvelopeKind, LspNotification, LspRequest, Message, NotificationMessage,
    RawResponse, RequestMessage, ResponseMessage,
};
use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::fmt;

/// A decoded protocol value with its concrete type erased.
pub trait ProtocolValue: fmt::Debug + Send + Sync {
    fn encode(&self) -> serde_json::Result<Value>;

    fn as_any(&self) -> &dyn Any;
}

impl<T> ProtocolValue for T
where
    T: Serialize + fmt::Debug + Send + Sync + 'static,
{
    fn encode(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn ProtocolValue {
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}

type DecodeFn = fn(&Value, &DecodeContext) -> Result<Box<dyn ProtocolValue>, DecodeError>;

fn decode_erased<T>(value: &Value, cx: &DecodeContext) -> Result<Box<dyn ProtocolValue>, DecodeError>
where
    T: Decode + ProtocolValue + 'static,
{
    T::decode(value, cx).map(|decoded| Box::new(decoded) as Box<dyn ProtocolValue>)
}

/// Decoder for one registered type name.
#[derive(Clone, Copy)]
pub struct TypeDecoder {
    name: &'static str,
    decode: DecodeFn,
}

impl TypeDecoder {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn decode_value(
        &self,
        value: &Value,
        options: DecodeOptions,
    ) -> Result<Box<dyn ProtocolValue>, DecodeError> {
        (self.decode)(value, &DecodeContext::new(options))
    }

    pub fn decode_bytes(
        &self,
        bytes: &[u8],
        options: DecodeOptions,
    ) -> Result<Box<dyn ProtocolValue>, DecodeError> {
        let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::syntax)?;
        self.decode_value(&value, options)
    }
}

impl fmt::Debug for TypeDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeDecoder").field(&self.name).finish()
    }
}

/// Type name → decoder.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    decoders: FxHashMap<CompactString, TypeDecoder>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every type of the protocol library.
    pub fn protocol() -> Self {
        let mut registry = Self::new();
        crate::protocol::register_types(&mut registry);
        registry
    }

    pub fn register<T>(&mut self, name: &'static str)
    where
        T: Decode + ProtocolValue + 'static,
    {
        let decoder = TypeDecoder {
            name,
            decode: decode_erased::<T>,
        };
        if self.decoders.insert(CompactString::from(name), decoder).is_some() {
            tracing::warn!("Type {} registered twice, keeping the last decoder", name);
        }
    }

    /// Registers `<Name>Request` and `<Name>Response`.
    pub fn register_request<R: LspRequest>(&mut self) {
        self.register::<RequestMessage<R>>(R::REQUEST_TYPE);
        self.register::<ResponseMessage<R>>(R::RESPONSE_TYPE);
    }

    /// Registers `<Name>Notification`.
    pub fn register_notification<N: LspNotification>(&mut self) {
        self.register::<NotificationMessage<N>>(N::TYPE_NAME);
    }

    pub fn lookup(&self, name: &str) -> Option<TypeDecoder> {
        self.decoders.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.decoders.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.decoders.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// A message decoded by [`MethodRegistry::decode_incoming`].
#[derive(Debug)]
pub enum Incoming {
    Request {
        method: &'static str,
        message: Box<dyn ProtocolValue>,
    },
    Notification {
        method: &'static str,
        message: Box<dyn ProtocolValue>,
    },
    /// Responses carry no method; their result stays untyped.
    Response(RawResponse),
}

impl Incoming {
    pub fn kind(&self) -> EnvelopeKind {
        match self {
            Self::Request { .. } => EnvelopeKind::Request,
            Self::Notification { .. } => EnvelopeKind::Notification,
            Self::Response(_) => EnvelopeKind::Response,
        }
    }
}

/// Method name → typed request or notification decoder.
#[derive(Debug, Default)]
pub struct MethodRegistry {
    requests: FxHashMap<CompactString, TypeDecoder>,
    notifications: FxHashMap<CompactString, TypeDecoder>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protocol() -> Self {
        let mut registry = Self::new();
        crate::protocol::register_methods(&mut registry);
        registry
    }

    pub fn register_request<R: LspRequest>(&mut self) {
        self.requests.insert(
            CompactString::from(R::METHOD),
            TypeDecoder {
                name: R::METHOD,
                decode: decode_erased::<RequestMessage<R>>,
            },
        );
    }

    pub fn register_notification<N: LspNotification>(&mut self) {
        self.notifications.insert(
            CompactString::from(N::METHOD),
            TypeDecoder {
                name: N::METHOD,
                decode: decode_erased::<NotificationMessage<N>>,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.requests.len() + self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty() && self.notifications.is_empty()
    }

    /// Classify a payload and decode it with the binding for its method.
    pub fn decode_incoming(
        &self,
        bytes: &[u8],
        options: DecodeOptions,
    ) -> Result<Incoming, DecodeError> {
        let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::syntax)?;
        let cx = DecodeContext::new(options);
        let (kind, method) = match Message::decode(&value, &cx)? {
            Message::Request(request) => (EnvelopeKind::Request, request.method),
            Message::Notification(notification) => {
                (EnvelopeKind::Notification, notification.method)
            }
            Message::Response(response) => return Ok(Incoming::Response(response)),
        };
        let table = match kind {
            EnvelopeKind::Request => &self.requests,
            _ => &self.notifications,
        };
        let decoder = table
            .get(method.as_str())
            .ok_or(DecodeError::UnknownMethod { method })?;
        let message = (decoder.decode)(&value, &cx)?;
        Ok(match kind {
            EnvelopeKind::Request => Incoming::Request {
                method: decoder.name,
                message,
            },
            _ => Incoming::Notification {
                method: decoder.name,
                message,
            },
        })
    }
}
