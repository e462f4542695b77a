//! HTTP client for the product attribute API, with retry and linear
//! backoff.

use std::time::Duration;

use kin_core::config::FetchConfig;
use kin_core::errors::{ConfigError, FetchError};
use kin_core::types::SpecAttributes;

/// Fetches one product's attribute payload. Implemented over HTTP in
/// production; test doubles implement it directly.
pub trait AttributeClient: Send + Sync {
    fn fetch(&self, product_code: &str) -> Result<SpecAttributes, FetchError>;
}

/// Run `op` up to `attempts` times, sleeping `delay × attempt-number`
/// between tries (linearly increasing backoff). After the last failure
/// the error is folded into `RetriesExhausted`.
pub fn fetch_with_retry<F>(
    product_code: &str,
    attempts: u32,
    delay: Duration,
    mut op: F,
) -> Result<SpecAttributes, FetchError>
where
    F: FnMut() -> Result<SpecAttributes, FetchError>,
{
    let mut last_error = String::new();
    for attempt in 1..=attempts.max(1) {
        if attempt > 1 {
            let backoff = delay * (attempt - 1);
            tracing::debug!(product_code, attempt, ?backoff, "retrying fetch");
            std::thread::sleep(backoff);
        }
        match op() {
            Ok(attributes) => return Ok(attributes),
            Err(err) => last_error = err.to_string(),
        }
    }
    Err(FetchError::RetriesExhausted {
        product_code: product_code.to_string(),
        attempts: attempts.max(1),
        last_error,
    })
}

/// Blocking HTTP implementation over
/// `GET {base_url}/{productCode}/attributes`.
#[derive(Debug)]
pub struct HttpAttributeClient {
    http: reqwest::blocking::Client,
    base_url: String,
    retry_attempts: u32,
    retry_delay: Duration,
}

impl HttpAttributeClient {
    /// Build from the fetch configuration. `base_url` is required here —
    /// the job cannot run without an endpoint.
    pub fn new(config: &FetchConfig) -> Result<Self, ConfigError> {
        let base_url = config
            .base_url
            .clone()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::ValidationFailed {
                field: "fetch.base_url".to_string(),
                message: "required to run the fetch job".to_string(),
            })?;

        let http = reqwest::blocking::Client::builder()
            .timeout(config.effective_timeout())
            .build()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "fetch".to_string(),
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_attempts: config.effective_retry_attempts(),
            retry_delay: config.effective_retry_delay(),
        })
    }

    /// One request, no retries. Non-200 and parse failures are
    /// per-product errors, never pipeline-fatal.
    fn fetch_once(&self, product_code: &str) -> Result<SpecAttributes, FetchError> {
        let url = format!("{}/{}/attributes", self.base_url, product_code);

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| FetchError::Network {
                product_code: product_code.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                product_code: product_code.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<SpecAttributes>()
            .map_err(|e| FetchError::Parse {
                product_code: product_code.to_string(),
                message: e.to_string(),
            })
    }
}

impl AttributeClient for HttpAttributeClient {
    fn fetch(&self, product_code: &str) -> Result<SpecAttributes, FetchError> {
        fetch_with_retry(product_code, self.retry_attempts, self.retry_delay, || {
            self.fetch_once(product_code)
        })
    }
}
