//! Attribute-fetch errors.
//!
//! All variants carry the product code: a fetch failure is scoped to one
//! product and never aborts the batch.

/// Errors fetching specification attributes for a single product.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed for product {product_code}: {reason}")]
    Network { product_code: String, reason: String },

    #[error("HTTP {status} for product {product_code}")]
    Status { product_code: String, status: u16 },

    #[error("Failed to parse response for product {product_code}: {message}")]
    Parse {
        product_code: String,
        message: String,
    },

    #[error("All {attempts} attempts failed for product {product_code}: {last_error}")]
    RetriesExhausted {
        product_code: String,
        attempts: u32,
        last_error: String,
    },
}

impl FetchError {
    /// The product code the failure is scoped to.
    pub fn product_code(&self) -> &str {
        match self {
            Self::Network { product_code, .. }
            | Self::Status { product_code, .. }
            | Self::Parse { product_code, .. }
            | Self::RetriesExhausted { product_code, .. } => product_code,
        }
    }
}
