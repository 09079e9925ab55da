#[macro_use]
mod macros;

pub mod constants;
pub mod decode;
pub mod envelope;
pub mod fixture;
pub mod harness;
pub mod interop;
pub mod protocol;
pub mod registry;

pub use decode::{Decode, DecodeError, DecodeOptions, Nullable, Presence};
pub use fixture::{DirectorySource, FixtureSource, MemorySource};
pub use harness::{ConformanceHarness, HarnessConfig, Report};
pub use registry::{MethodRegistry, TypeRegistry};
