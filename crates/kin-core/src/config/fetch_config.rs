//! Attribute-fetch job configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the attribute-fetch batch job.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FetchConfig {
    /// Base URL of the product attribute API
    /// (`GET {base_url}/{productCode}/attributes`).
    pub base_url: Option<String>,
    /// Number of requests in flight at once. Default: 10.
    pub concurrency: Option<usize>,
    /// Attempts per product before giving up. Default: 3.
    pub retry_attempts: Option<u32>,
    /// Base backoff in milliseconds; the wait grows linearly with the
    /// attempt number. Default: 1000.
    pub retry_delay_ms: Option<u64>,
    /// Products between partial-result checkpoints. Default: 100.
    pub checkpoint_interval: Option<usize>,
    /// Per-request timeout in seconds. Default: 30.
    pub timeout_secs: Option<u64>,
}

impl FetchConfig {
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.unwrap_or(10)
    }

    pub fn effective_retry_attempts(&self) -> u32 {
        self.retry_attempts.unwrap_or(3)
    }

    pub fn effective_retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms.unwrap_or(1000))
    }

    pub fn effective_checkpoint_interval(&self) -> usize {
        self.checkpoint_interval.unwrap_or(100)
    }

    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}
