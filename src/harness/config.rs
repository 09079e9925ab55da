use crate::constants::{DEFAULT_CONFIG_FILE, DEFAULT_FIXTURE_DIR, MAX_PARALLELISM};
use crate::decode::DecodeOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub fixtures: FixturesConfig,
    pub decode: DecodeConfig,
    pub harness: RunConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FixturesConfig {
    pub dir: PathBuf,
    pub recursive: bool,
    pub include: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub reject_unknown_fields: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Concurrent fixture evaluations. Derived from the CPU count when unset.
    pub parallelism: Option<usize>,
    pub round_trip: bool,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_FIXTURE_DIR),
            recursive: false,
            include: vec!["*.json".to_string()],
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            reject_unknown_fields: DecodeOptions::default().reject_unknown_fields,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            parallelism: None,
            round_trip: true,
        }
    }
}

impl HarnessConfig {
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            reject_unknown_fields: self.decode.reject_unknown_fields,
        }
    }

    /// Fixture directory, with relative paths resolved against `root`.
    pub fn fixture_dir(&self, root: &Path) -> PathBuf {
        if self.fixtures.dir.is_absolute() {
            self.fixtures.dir.clone()
        } else {
            root.join(&self.fixtures.dir)
        }
    }
}

impl RunConfig {
    pub fn effective_parallelism(&self) -> usize {
        self.parallelism
            .unwrap_or_else(num_cpus::get)
            .clamp(1, MAX_PARALLELISM)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid merged config: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Layers defaults, the config file and command-line overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    overrides: Option<serde_json::Value>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values that win over the config file, in the same shape as the file.
    pub fn with_overrides(mut self, overrides: serde_json::Value) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub async fn load_from_dir(&self, root: &Path) -> Result<HarnessConfig, ConfigError> {
        let mut layers = vec![serde_json::to_value(HarnessConfig::default())?];

        let config_path = root.join(DEFAULT_CONFIG_FILE);
        if config_path.exists() {
            let content = tokio::fs::read_to_string(&config_path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            let table: toml::Table =
                toml::from_str(&content).map_err(|source| ConfigError::Parse {
                    path: config_path.clone(),
                    source,
                })?;
            layers.push(serde_json::to_value(table)?);
        }
        layers.extend(self.overrides.clone());

        let merged = layers.into_iter().reduce(stack).unwrap_or_default();
        Ok(serde_json::from_value(merged)?)
    }
}

/// Puts `upper` on top of `lower`. Tables are stacked key by key; a `null`
/// in `upper` keeps whatever `lower` had.
fn stack(lower: Value, upper: Value) -> Value {
    match (lower, upper) {
        (lower, Value::Null) => lower,
        (Value::Object(mut below), Value::Object(above)) => {
            for (key, value) in above {
                let merged = match below.remove(&key) {
                    Some(existing) => stack(existing, value),
                    None => value,
                };
                if !merged.is_null() {
                    below.insert(key, merged);
                }
            }
            Value::Object(below)
        }
        (_, upper) => upper,
    }
}
