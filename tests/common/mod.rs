#![allow(dead_code)]

use lsp_conformance::decode::{decode_bytes, Decode, DecodeError, DecodeOptions};
use lsp_conformance::harness::{ConformanceHarness, HarnessConfig, Report};
use lsp_conformance::registry::TypeRegistry;
use lsp_conformance::DirectorySource;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

// Unique directory names across parallel tests
static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A scratch fixture directory, removed on drop.
pub struct FixtureDir {
    pub root: PathBuf,
}

impl FixtureDir {
    pub fn new() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let counter = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let root = std::env::temp_dir().join(format!(
            "lsp_conformance_test_{}_{}",
            timestamp, counter
        ));
        fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn source(&self) -> DirectorySource {
        DirectorySource::new(&self.root)
    }

    pub async fn run(&self) -> Report {
        run_source(self.source(), HarnessConfig::default()).await
    }
}

impl Drop for FixtureDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub async fn run_source(source: DirectorySource, config: HarnessConfig) -> Report {
    let harness = ConformanceHarness::new(Arc::new(TypeRegistry::protocol()), config);
    harness.run(Arc::new(source)).await.unwrap()
}

/// The golden fixtures shipped with the crate.
pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/testdata")
}

pub fn decode_str<T: Decode>(json: &str) -> Result<T, DecodeError> {
    decode_bytes(json.as_bytes(), DecodeOptions::default())
}
