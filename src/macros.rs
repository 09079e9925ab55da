//! Declaration macros for the generated type library.

/// A unit type that encodes as one fixed string (`kind: 'create'`).
macro_rules! string_literal {
    ($(#[$meta:meta])* $name:ident = $lit:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl $name {
            pub const VALUE: &'static str = $lit;
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($lit)
            }
        }

        impl $crate::decode::Decode for $name {
            fn decode(
                value: &serde_json::Value,
                cx: &$crate::decode::DecodeContext,
            ) -> Result<Self, $crate::decode::DecodeError> {
                match value {
                    serde_json::Value::String(s) if s == $lit => Ok(Self),
                    serde_json::Value::String(s) => Err($crate::decode::DecodeError::LiteralMismatch {
                        path: cx.path().to_string(),
                        expected: $lit,
                        found: s.clone(),
                    }),
                    other => Err(cx.type_mismatch("string", other)),
                }
            }
        }
    };
}

/// A closed enumeration over `uinteger` values.
macro_rules! integer_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            pub const fn value(self) -> u32 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            pub fn from_value(value: u32) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u32(self.value())
            }
        }

        impl $crate::decode::Decode for $name {
            fn decode(
                value: &serde_json::Value,
                cx: &$crate::decode::DecodeContext,
            ) -> Result<Self, $crate::decode::DecodeError> {
                let raw = <u32 as $crate::decode::Decode>::decode(value, cx)?;
                Self::from_value(raw).ok_or_else(|| $crate::decode::DecodeError::InvalidEnumValue {
                    path: cx.path().to_string(),
                    enumeration: stringify!($name),
                    value: raw.to_string(),
                })
            }
        }
    };
}

/// A closed enumeration over string values.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            pub fn from_str_value(value: &str) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl $crate::decode::Decode for $name {
            fn decode(
                value: &serde_json::Value,
                cx: &$crate::decode::DecodeContext,
            ) -> Result<Self, $crate::decode::DecodeError> {
                let raw = <String as $crate::decode::Decode>::decode(value, cx)?;
                Self::from_str_value(&raw).ok_or_else(|| {
                    $crate::decode::DecodeError::InvalidEnumValue {
                        path: cx.path().to_string(),
                        enumeration: stringify!($name),
                        value: raw,
                    }
                })
            }
        }
    };
}

/// A string enumeration that also admits custom values.
macro_rules! open_string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            Custom(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Custom(custom) => custom,
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Custom(other.to_string()),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl $crate::decode::Decode for $name {
            fn decode(
                value: &serde_json::Value,
                cx: &$crate::decode::DecodeContext,
            ) -> Result<Self, $crate::decode::DecodeError> {
                <String as $crate::decode::Decode>::decode(value, cx).map(|raw| Self::from(raw.as_str()))
            }
        }
    };
}

/// A structure decoded one declared field at a time.
///
/// Each field names its wire key and the [`ObjectReader`] accessor for its
/// presence mode: `required`, `optional`, `nullable` or `optional_nullable`.
/// Serialization stays with the attributes written on the struct.
///
/// [`ObjectReader`]: crate::decode::ObjectReader
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident: $ty:ty = $mode:ident($wire:literal),
            )+
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $($(#[$fmeta])* pub $field: $ty,)+
        }

        impl $crate::decode::Decode for $name {
            fn decode(
                value: &serde_json::Value,
                cx: &$crate::decode::DecodeContext,
            ) -> Result<Self, $crate::decode::DecodeError> {
                let mut obj = $crate::decode::ObjectReader::new(value, cx)?;
                $(let $field = obj.$mode($wire)?;)+
                obj.finish()?;
                Ok(Self { $($field,)+ })
            }
        }
    };
}

/// Declares a request marker type.
macro_rules! lsp_request {
    ($(#[$meta:meta])* $marker:ident, $method:literal, $type_stem:literal, $params:ty => $result:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $marker {}

        impl $crate::envelope::LspRequest for $marker {
            const METHOD: &'static str = $method;
            const REQUEST_TYPE: &'static str = concat!($type_stem, "Request");
            const RESPONSE_TYPE: &'static str = concat!($type_stem, "Response");
            type Params = $params;
            type Result = $result;
        }
    };
}

/// Declares a notification marker type.
macro_rules! lsp_notification {
    ($(#[$meta:meta])* $marker:ident, $method:literal, $type_stem:literal, $params:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $marker {}

        impl $crate::envelope::LspNotification for $marker {
            const METHOD: &'static str = $method;
            const TYPE_NAME: &'static str = concat!($type_stem, "Notification");
            type Params = $params;
        }
    };
}
