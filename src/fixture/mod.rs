//! Golden fixtures and where they come from.
//!
//! A fixture file is named `<TypeName>-<True|False>-<discriminator>.json`.
//! The name is the only place the harness interprets untyped strings; a
//! name that does not follow the convention is skipped, never an error.

mod source;

pub use source::{DirectorySource, FixtureSource, Listing, MemorySource};

use crate::constants::FIXTURE_EXTENSION;
use compact_str::CompactString;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Outcome a fixture demands from the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedOutcome {
    /// `True`: decoding must succeed.
    Accept,
    /// `False`: decoding must fail.
    Reject,
}

impl ExpectedOutcome {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "True" => Some(Self::Accept),
            "False" => Some(Self::Reject),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Accept => "True",
            Self::Reject => "False",
        }
    }
}

/// Identity of a fixture, recovered from its file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixtureName {
    pub type_name: CompactString,
    pub expected: ExpectedOutcome,
    pub discriminator: String,
}

impl FixtureName {
    /// Parses a bare file name. The discriminator is everything after the
    /// second `-` and may itself contain dashes.
    pub fn parse(file_name: &str) -> Option<Self> {
        let (stem, extension) = file_name.rsplit_once('.')?;
        if extension != FIXTURE_EXTENSION {
            return None;
        }

        let mut parts = stem.splitn(3, '-');
        let type_name = parts.next()?;
        if type_name.is_empty()
            || !type_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return None;
        }
        let expected = ExpectedOutcome::from_token(parts.next()?)?;
        let discriminator = parts.next().filter(|d| !d.is_empty())?;

        Some(Self {
            type_name: CompactString::from(type_name),
            expected,
            discriminator: discriminator.to_string(),
        })
    }
}

impl fmt::Display for FixtureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}.{}",
            self.type_name,
            self.expected.token(),
            self.discriminator,
            FIXTURE_EXTENSION
        )
    }
}

/// A fixture discovered by a [`FixtureSource`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fixture {
    /// Source-specific key, e.g. the path relative to the fixture directory.
    pub id: String,
    pub name: FixtureName,
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Fixture directory not found: {path:?}")]
    MissingDirectory { path: PathBuf },

    #[error("Failed to read fixture {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Fixture walk failed: {0}")]
    Walk(String),

    #[error("Unknown fixture: {id}")]
    NotFound { id: String },
}
