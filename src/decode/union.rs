//! Shape-matched union decoding.
//!
//! Unions without a marker field are decoded by trying every alternative in
//! upstream order against the full payload shape. Alternatives are matched
//! with unknown fields rejected first so that records which differ only by an
//! extra property stay distinguishable. Under permissive options, a union
//! with no strict match is retried with the caller's options.

use super::{Decode, DecodeContext, DecodeError};
use serde::Serialize;
use serde_json::Value;

pub struct UnionDecoder<'a, U> {
    union: &'static str,
    value: &'a Value,
    strict: DecodeContext,
    caller: DecodeContext,
    matches: Vec<(&'static str, U)>,
    lenient: Vec<(&'static str, U)>,
}

impl<'a, U: Serialize> UnionDecoder<'a, U> {
    pub fn new(union: &'static str, value: &'a Value, cx: &DecodeContext) -> Self {
        Self {
            union,
            value,
            strict: cx.strict(),
            caller: cx.clone(),
            matches: Vec::new(),
            lenient: Vec::new(),
        }
    }

    /// Try one alternative; `wrap` lifts it into the union type.
    pub fn alternative<T: Decode>(mut self, name: &'static str, wrap: fn(T) -> U) -> Self {
        if let Ok(decoded) = T::decode(self.value, &self.strict) {
            self.matches.push((name, wrap(decoded)));
        } else if !self.caller.options().reject_unknown_fields {
            if let Ok(decoded) = T::decode(self.value, &self.caller) {
                self.lenient.push((name, wrap(decoded)));
            }
        }
        self
    }

    /// Pick the winning alternative.
    ///
    /// Several matches are only ambiguous when they would encode
    /// differently; an empty array that is both `Location[]` and
    /// `LocationLink[]` resolves to the first alternative.
    /// Strict matches win; lenient ones are only considered without any.
    pub fn finish(self) -> Result<U, DecodeError> {
        let mut matches = if self.matches.is_empty() {
            self.lenient
        } else {
            self.matches
        };
        match matches.len() {
            0 => Err(DecodeError::UnionNoMatch {
                path: self.caller.path().to_string(),
                union: self.union,
            }),
            1 => Ok(matches.remove(0).1),
            _ => {
                let encodings: Vec<Option<Value>> = matches
                    .iter()
                    .map(|(_, candidate)| serde_json::to_value(candidate).ok())
                    .collect();
                let first = &encodings[0];
                if first.is_some() && encodings.iter().all(|e| e == first) {
                    Ok(matches.remove(0).1)
                } else {
                    Err(DecodeError::UnionAmbiguous {
                        path: self.caller.path().to_string(),
                        union: self.union,
                        alternatives: matches.iter().map(|(name, _)| *name).collect(),
                    })
                }
            }
        }
    }
}
