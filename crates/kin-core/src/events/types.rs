//! Event payload types.

/// Payload for `on_build_started`.
#[derive(Debug, Clone)]
pub struct BuildStartedEvent {
    pub brand_count: usize,
    pub product_count: usize,
}

/// Payload for `on_brand_clustered`.
#[derive(Debug, Clone)]
pub struct BrandClusteredEvent {
    pub brand: String,
    pub cluster_count: usize,
    pub family_count: usize,
}

/// Payload for `on_build_completed`.
#[derive(Debug, Clone)]
pub struct BuildCompletedEvent {
    pub family_count: usize,
    pub products_in_families: usize,
    pub merged_clusters: usize,
}

/// Payload for `on_fetch_started`.
#[derive(Debug, Clone)]
pub struct FetchStartedEvent {
    pub total: usize,
}

/// Payload for `on_fetch_progress`. Emitted after each batch window.
#[derive(Debug, Clone)]
pub struct FetchProgressEvent {
    pub processed: usize,
    pub total: usize,
    pub error_count: usize,
}

/// Payload for `on_fetch_completed`.
#[derive(Debug, Clone)]
pub struct FetchCompletedEvent {
    pub processed: usize,
    pub error_count: usize,
    pub duration_ms: u64,
}

/// Payload for `on_fetch_error`. One per failed product, after retries.
#[derive(Debug, Clone)]
pub struct FetchErrorEvent {
    pub product_code: String,
    pub message: String,
}
