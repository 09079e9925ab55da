use lsp_conformance::fixture::DirectorySource;
use lsp_conformance::harness::{ConfigLoader, ConformanceHarness};
use lsp_conformance::registry::TypeRegistry;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Conformance run failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let root = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));

    let mut loader = ConfigLoader::new();
    if let Some(dir) = std::env::args().nth(1) {
        loader = loader.with_overrides(serde_json::json!({ "fixtures": { "dir": dir } }));
    }
    let config = loader.load_from_dir(&root).await?;

    let source = DirectorySource::new(config.fixture_dir(&root))
        .recursive(config.fixtures.recursive)
        .include(config.fixtures.include.clone());

    let registry = Arc::new(TypeRegistry::protocol());
    tracing::debug!("Registered {} protocol types", registry.len());

    let harness = ConformanceHarness::new(registry, config);
    let report = harness.run(Arc::new(source)).await?;

    println!("{}", report);
    Ok(report.exit_code())
}
