//! Console progress reporting, registered as an event handler instead of
//! the jobs printing directly.

use std::sync::Mutex;
use std::time::Instant;

use kin_core::events::{
    BuildCompletedEvent, BuildStartedEvent, FetchCompletedEvent, FetchProgressEvent,
    FetchStartedEvent, KinEventHandler,
};

/// Prints batch progress to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    fetch_started: Mutex<Option<Instant>>,
}

impl KinEventHandler for ConsoleProgress {
    fn on_build_started(&self, event: &BuildStartedEvent) {
        println!(
            "Building families from {} products across {} brands...",
            event.product_count, event.brand_count
        );
    }

    fn on_build_completed(&self, event: &BuildCompletedEvent) {
        println!(
            "Built {} families covering {} products ({} cluster merges).",
            event.family_count, event.products_in_families, event.merged_clusters
        );
    }

    fn on_fetch_started(&self, event: &FetchStartedEvent) {
        *self.fetch_started.lock().unwrap() = Some(Instant::now());
        println!("Fetching attributes for {} products...", event.total);
    }

    fn on_fetch_progress(&self, event: &FetchProgressEvent) {
        let elapsed = self
            .fetch_started
            .lock()
            .unwrap()
            .map(|s| s.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        let rate = if elapsed > 0.0 {
            event.processed as f64 / elapsed
        } else {
            0.0
        };
        let remaining = event.total.saturating_sub(event.processed);
        let eta_min = if rate > 0.0 {
            remaining as f64 / rate / 60.0
        } else {
            0.0
        };
        let percent = if event.total > 0 {
            event.processed as f64 / event.total as f64 * 100.0
        } else {
            100.0
        };
        println!(
            "Progress: {}/{} ({percent:.2}%) | {rate:.1} products/sec | ETA: {eta_min:.1} min | Errors: {}",
            event.processed, event.total, event.error_count
        );
    }

    fn on_fetch_completed(&self, event: &FetchCompletedEvent) {
        println!(
            "Fetched {} products in {:.2} min ({} errors).",
            event.processed,
            event.duration_ms as f64 / 60_000.0,
            event.error_count
        );
    }
}
