use csv_tokenizer::{AppConfig, BlobStore, FsBlobStore, Pipeline, PipelineOutcome};
use std::env;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// One-shot invocation driver: processes a single object key, standing in
/// for the blob-trigger runtime that invokes this pipeline in production.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("csv_tokenizer=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let object_key = args
        .get(1)
        .ok_or_else(|| anyhow::anyhow!("usage: csv-tokenizer <object-key>"))?;

    let config = AppConfig::load_or_default(Some("config.toml"));
    tracing::info!(container = %config.storage.container, "Loaded configuration");

    let store: Arc<dyn BlobStore> = Arc::new(FsBlobStore::new(&config.storage));
    let payload = store.read(object_key).await?;

    let pipeline = Pipeline::new(config, store);
    match pipeline.process(object_key, &payload).await? {
        PipelineOutcome::Written { key, rows } => {
            tracing::info!(key = %key, rows = rows, "Invocation complete");
        }
        PipelineOutcome::SkippedMissingColumn => {
            tracing::info!(key = %object_key, "Invocation complete, no output produced");
        }
    }

    Ok(())
}
