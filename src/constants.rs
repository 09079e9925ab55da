//! Constants used throughout the codebase.

/// Value of the `jsonrpc` member on every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Smallest value of the LSP `uinteger` base type.
pub const UINTEGER_MIN: u32 = 0;

/// Largest value of the LSP `uinteger` base type (2^31 - 1).
pub const UINTEGER_MAX: u32 = 2_147_483_647;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "lsp-conformance.toml";

/// Fixture directory used when neither config nor CLI names one.
pub const DEFAULT_FIXTURE_DIR: &str = "testdata";

/// File extension that marks a fixture as JSON content.
pub const FIXTURE_EXTENSION: &str = "json";

/// Upper bound on concurrently evaluated fixtures.
pub const MAX_PARALLELISM: usize = 64;
