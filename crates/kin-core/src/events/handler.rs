//! The event handler trait. All methods default to no-ops so handlers
//! implement only what they care about.

use super::types::*;

/// Receiver for pipeline and fetch-job progress events.
pub trait KinEventHandler: Send + Sync {
    fn on_build_started(&self, _event: &BuildStartedEvent) {}
    fn on_brand_clustered(&self, _event: &BrandClusteredEvent) {}
    fn on_build_completed(&self, _event: &BuildCompletedEvent) {}

    fn on_fetch_started(&self, _event: &FetchStartedEvent) {}
    fn on_fetch_progress(&self, _event: &FetchProgressEvent) {}
    fn on_fetch_completed(&self, _event: &FetchCompletedEvent) {}
    fn on_fetch_error(&self, _event: &FetchErrorEvent) {}
}
