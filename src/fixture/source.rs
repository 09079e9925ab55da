use super::{Fixture, FixtureError, FixtureName};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of scanning a source.
#[derive(Debug, Default, Clone)]
pub struct Listing {
    /// Conforming fixtures, sorted by id.
    pub fixtures: Vec<Fixture>,
    /// Entries that were seen but do not follow the naming convention.
    pub skipped: Vec<String>,
}

impl Listing {
    fn push(&mut self, id: String, file_name: &str) {
        match FixtureName::parse(file_name) {
            Some(name) => self.fixtures.push(Fixture { id, name }),
            None => {
                debug!("Skipping non-fixture entry {}", id);
                self.skipped.push(id);
            }
        }
    }

    fn sort(&mut self) {
        self.fixtures.sort_by(|a, b| a.id.cmp(&b.id));
        self.skipped.sort();
    }
}

#[async_trait]
pub trait FixtureSource: Send + Sync {
    async fn list(&self) -> Result<Listing, FixtureError>;

    async fn read(&self, fixture: &Fixture) -> Result<Vec<u8>, FixtureError>;

    /// Human-readable origin, used in logs and reports.
    fn describe(&self) -> String;
}

/// Fixtures stored as files in a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    recursive: bool,
    include: Vec<String>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: false,
            include: vec!["*.json".to_string()],
        }
    }

    /// Also descend into subdirectories.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Glob patterns a file name must match to be considered at all.
    pub fn include(mut self, patterns: Vec<String>) -> Self {
        self.include = patterns;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn walk(
        root: &Path,
        recursive: bool,
        patterns: &[glob::Pattern],
    ) -> Result<Listing, FixtureError> {
        if !root.is_dir() {
            return Err(FixtureError::MissingDirectory {
                path: root.to_path_buf(),
            });
        }

        let walker = ignore::WalkBuilder::new(root)
            .hidden(true)
            .ignore(false)
            .parents(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .max_depth(if recursive { None } else { Some(1) })
            .build();

        let mut listing = Listing::default();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to read fixture directory entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let id = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");

            if !patterns.iter().any(|p| p.matches(file_name)) {
                debug!("Skipping {} (no include pattern matches)", id);
                listing.skipped.push(id);
                continue;
            }
            listing.push(id, file_name);
        }

        listing.sort();
        Ok(listing)
    }
}

#[async_trait]
impl FixtureSource for DirectorySource {
    async fn list(&self) -> Result<Listing, FixtureError> {
        let patterns = self
            .include
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| FixtureError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let root = self.root.clone();
        let recursive = self.recursive;

        tokio::task::spawn_blocking(move || Self::walk(&root, recursive, &patterns))
            .await
            .map_err(|e| FixtureError::Walk(e.to_string()))?
    }

    async fn read(&self, fixture: &Fixture) -> Result<Vec<u8>, FixtureError> {
        let path = self.root.join(&fixture.id);
        tokio::fs::read(&path)
            .await
            .map_err(|source| FixtureError::Io { path, source })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Fixtures held in memory, keyed by file name.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(file_name, content);
        self
    }

    pub fn insert(&mut self, file_name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.insert(file_name.into(), content.into());
    }
}

#[async_trait]
impl FixtureSource for MemorySource {
    async fn list(&self) -> Result<Listing, FixtureError> {
        let mut listing = Listing::default();
        for file_name in self.files.keys() {
            listing.push(file_name.clone(), file_name);
        }
        listing.sort();
        Ok(listing)
    }

    async fn read(&self, fixture: &Fixture) -> Result<Vec<u8>, FixtureError> {
        self.files
            .get(&fixture.id)
            .cloned()
            .ok_or_else(|| FixtureError::NotFound {
                id: fixture.id.clone(),
            })
    }

    fn describe(&self) -> String {
        format!("<memory: {} files>", self.files.len())
    }
}
