//! The fetch batch job: fixed concurrency window, periodic checkpoints,
//! per-product error collection.

use std::path::PathBuf;
use std::time::Instant;

use kin_core::config::FetchConfig;
use kin_core::errors::PipelineResult;
use kin_core::events::{
    EventDispatcher, FetchCompletedEvent, FetchErrorEvent, FetchProgressEvent, FetchStartedEvent,
};
use kin_core::types::{Product, SpecRecord};
use rayon::prelude::*;

use crate::client::AttributeClient;

/// Receives partial results during the run so a crash loses at most one
/// window of work.
pub trait CheckpointSink: Sync {
    fn write(&self, records: &[SpecRecord]) -> std::io::Result<()>;
    /// Called once after a successful run to discard the checkpoint.
    fn clear(&self) -> std::io::Result<()>;
}

/// Checkpoint to a JSON file, removed when the run completes.
pub struct FileCheckpoint {
    path: PathBuf,
}

impl FileCheckpoint {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CheckpointSink for FileCheckpoint {
    fn write(&self, records: &[SpecRecord]) -> std::io::Result<()> {
        let json = serde_json::to_string(records)?;
        std::fs::write(&self.path, json)
    }

    fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Runs the attribute fetch over a product list.
///
/// Products are processed in windows of `concurrency`; each window's
/// requests run in parallel and the job moves to the next window only when
/// the whole window settled. A failed product proceeds with null
/// attributes and its error recorded — failures never abort the batch.
pub struct FetchJob<'a> {
    client: &'a dyn AttributeClient,
    config: &'a FetchConfig,
}

impl<'a> FetchJob<'a> {
    pub fn new(client: &'a dyn AttributeClient, config: &'a FetchConfig) -> Self {
        Self { client, config }
    }

    /// Fetch attributes for every product, in input order.
    pub fn run(
        &self,
        products: &[Product],
        checkpoint: Option<&dyn CheckpointSink>,
        events: &EventDispatcher,
    ) -> PipelineResult<Vec<SpecRecord>> {
        let started = Instant::now();
        let concurrency = self.config.effective_concurrency().max(1);
        let checkpoint_interval = self.config.effective_checkpoint_interval().max(1);

        events.emit_fetch_started(&FetchStartedEvent {
            total: products.len(),
        });
        tracing::info!(total = products.len(), concurrency, "fetch job started");

        let mut result: PipelineResult<Vec<SpecRecord>> =
            PipelineResult::new(Vec::with_capacity(products.len()));
        let mut last_checkpoint = 0usize;

        for window in products.chunks(concurrency) {
            let settled: Vec<(SpecRecord, Option<kin_core::errors::FetchError>)> = window
                .par_iter()
                .map(|product| self.fetch_one(product))
                .collect();

            for (record, error) in settled {
                if let Some(error) = error {
                    tracing::warn!(
                        product_code = error.product_code(),
                        %error,
                        "attribute fetch failed"
                    );
                    events.emit_fetch_error(&FetchErrorEvent {
                        product_code: error.product_code().to_string(),
                        message: error.to_string(),
                    });
                    result.add_error(error.into());
                }
                result.data.push(record);
            }

            events.emit_fetch_progress(&FetchProgressEvent {
                processed: result.data.len(),
                total: products.len(),
                error_count: result.error_count(),
            });

            if let Some(sink) = checkpoint {
                if result.data.len() - last_checkpoint >= checkpoint_interval {
                    if let Err(e) = sink.write(&result.data) {
                        tracing::warn!(error = %e, "checkpoint write failed");
                    } else {
                        last_checkpoint = result.data.len();
                    }
                }
            }
        }

        if let Some(sink) = checkpoint {
            if let Err(e) = sink.clear() {
                tracing::warn!(error = %e, "checkpoint cleanup failed");
            }
        }

        let duration_ms = started.elapsed().as_millis() as u64;
        tracing::info!(
            processed = result.data.len(),
            errors = result.error_count(),
            duration_ms,
            "fetch job complete"
        );
        events.emit_fetch_completed(&FetchCompletedEvent {
            processed: result.data.len(),
            error_count: result.error_count(),
            duration_ms,
        });

        result
    }

    fn fetch_one(
        &self,
        product: &Product,
    ) -> (SpecRecord, Option<kin_core::errors::FetchError>) {
        match self.client.fetch(&product.product_code) {
            Ok(attributes) => (
                SpecRecord {
                    product_code: product.product_code.clone(),
                    product_title: Some(product.product_title.clone()),
                    attributes: Some(attributes),
                    attribute_error: None,
                },
                None,
            ),
            Err(error) => (
                SpecRecord {
                    product_code: product.product_code.clone(),
                    product_title: Some(product.product_title.clone()),
                    attributes: None,
                    attribute_error: Some(error.to_string()),
                },
                Some(error),
            ),
        }
    }
}
