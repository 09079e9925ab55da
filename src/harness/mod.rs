//! Fixture-driven conformance runner.

pub mod config;
mod report;

pub use config::{ConfigError, ConfigLoader, HarnessConfig};
pub use report::{Defect, Report, Verdict};

use crate::decode::{DecodeError, DecodeOptions};
use crate::fixture::{ExpectedOutcome, Fixture, FixtureSource};
use crate::registry::{ProtocolValue, TypeDecoder, TypeRegistry};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

pub struct ConformanceHarness {
    registry: Arc<TypeRegistry>,
    config: HarnessConfig,
}

impl ConformanceHarness {
    pub fn new(registry: Arc<TypeRegistry>, config: HarnessConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Evaluates every fixture of `source`. Per-fixture problems end up in
    /// the report; only a failure to list the source is returned as an error.
    pub async fn run(&self, source: Arc<dyn FixtureSource>) -> Result<Report> {
        info!("Running conformance fixtures from {}", source.describe());

        let listing = source
            .list()
            .await
            .with_context(|| format!("Failed to list fixtures in {}", source.describe()))?;
        let fixture_count = listing.fixtures.len();
        info!(
            "Discovered {} fixtures ({} skipped)",
            fixture_count,
            listing.skipped.len()
        );

        let options = self.config.decode_options();
        let round_trip = self.config.harness.round_trip;
        let semaphore = Arc::new(Semaphore::new(self.config.harness.effective_parallelism()));
        let mut handles = Vec::with_capacity(fixture_count);

        for fixture in listing.fixtures {
            let permit = semaphore.clone().acquire_owned().await?;
            let registry = self.registry.clone();
            let source = source.clone();
            let task_fixture = fixture.clone();

            let handle = tokio::spawn(async move {
                let verdict = match source.read(&task_fixture).await {
                    Ok(bytes) => evaluate(&registry, &task_fixture, &bytes, options, round_trip),
                    Err(e) => Verdict::Fail(Defect::Unreadable {
                        fixture: task_fixture.id.clone(),
                        error: e.to_string(),
                    }),
                };
                drop(permit);
                verdict
            });
            handles.push((fixture, handle));
        }

        let mut verdicts = Vec::with_capacity(fixture_count);
        for (fixture, handle) in handles {
            let verdict = match handle.await {
                Ok(verdict) => verdict,
                Err(e) => {
                    warn!("Task panicked: {}", e);
                    Verdict::Fail(Defect::Panicked {
                        fixture: fixture.id.clone(),
                        error: e.to_string(),
                    })
                }
            };
            verdicts.push((fixture, verdict));
        }

        let report = Report::from_verdicts(source.describe(), listing.skipped.len(), verdicts);
        for defect in &report.defects {
            warn!("{}", defect);
        }
        info!(
            "Conformance run complete: {} passed, {} defects",
            report.passed,
            report.defects.len()
        );

        Ok(report)
    }
}

/// Decodes one fixture payload and compares the outcome with its name.
pub fn evaluate(
    registry: &TypeRegistry,
    fixture: &Fixture,
    bytes: &[u8],
    options: DecodeOptions,
    round_trip: bool,
) -> Verdict {
    let type_name = &fixture.name.type_name;
    let Some(decoder) = registry.lookup(type_name) else {
        return Verdict::UnknownType;
    };

    match (decoder.decode_bytes(bytes, options), fixture.name.expected) {
        (Ok(value), ExpectedOutcome::Accept) => {
            if !round_trip {
                return Verdict::Pass;
            }
            match check_round_trip(decoder, &*value, options) {
                Ok(()) => Verdict::Pass,
                Err(detail) => Verdict::Fail(Defect::RoundTripMismatch {
                    type_name: type_name.clone(),
                    fixture: fixture.id.clone(),
                    detail,
                }),
            }
        }
        (Ok(_), ExpectedOutcome::Reject) => Verdict::Fail(Defect::UnexpectedSuccess {
            type_name: type_name.clone(),
            fixture: fixture.id.clone(),
        }),
        (Err(error), ExpectedOutcome::Accept) => Verdict::Fail(Defect::UnexpectedFailure {
            type_name: type_name.clone(),
            fixture: fixture.id.clone(),
            error,
        }),
        (Err(error), ExpectedOutcome::Reject) => {
            debug!("{} rejected as expected ({})", fixture.id, error.kind());
            Verdict::Pass
        }
    }
}

/// `decode(encode(x))` must encode to the same JSON as `x`.
fn check_round_trip(
    decoder: TypeDecoder,
    value: &dyn ProtocolValue,
    options: DecodeOptions,
) -> std::result::Result<(), String> {
    let encoded = value
        .encode()
        .map_err(|e| format!("encoding failed: {}", e))?;
    let decoded = decoder
        .decode_value(&encoded, options)
        .map_err(|e: DecodeError| format!("re-decoding {} failed: {}", encoded, e))?;
    let re_encoded = decoded
        .encode()
        .map_err(|e| format!("re-encoding failed: {}", e))?;
    if re_encoded == encoded {
        Ok(())
    } else {
        Err(format!("{} re-encoded as {}", encoded, re_encoded))
    }
}
